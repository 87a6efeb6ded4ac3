// ABOUTME: Application lifecycle glue between Tauri run events and the backend supervisor.
// ABOUTME: Starts the daemon after setup, interrupts it on exit, and handles macOS re-open.

use tauri::{AppHandle, Manager, RunEvent};

use crate::backend::{
    BackendHandle, ShellLauncher, StartOutcome, Supervisor, report_spawn_failure,
};
use crate::host::TauriHost;
use crate::platform::Platform;
use crate::state::AppState;
use crate::window;

/// What a run event asks of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunAction {
    KeepAlive,
    StopBackend,
    #[cfg_attr(not(target_os = "macos"), allow(dead_code))]
    Reactivate,
    Ignore,
}

/// Start the backend. Blocks while a spawn-failure dialog is shown, so call it off the main thread.
pub fn start_backend(app: &AppHandle) -> Option<StartOutcome> {
    let state = app.try_state::<AppState>()?;
    let launcher = ShellLauncher::new(app.clone());
    // The guard is dropped before the dialog so run events can still reach the supervisor.
    let outcome = state.supervisor().start(&launcher);
    if let StartOutcome::Failed(e) = &outcome {
        report_spawn_failure(&TauriHost::new(app.clone()), e);
    }
    Some(outcome)
}

pub fn handle_run_event(app: &AppHandle, event: RunEvent) {
    match run_action(&event, Platform::current()) {
        RunAction::KeepAlive => {
            if let RunEvent::ExitRequested { api, .. } = &event {
                api.prevent_exit();
            }
        }
        RunAction::StopBackend => {
            log::info!("[Unicoin] Exiting");
            if let Some(state) = app.try_state::<AppState>() {
                stop_backend(&mut *state.supervisor());
            }
        }
        RunAction::Reactivate => window::reactivate(app),
        RunAction::Ignore => {}
    }
}

/// Another launch of the app, or a `unicoin://` link.
pub fn handle_second_instance(app: &AppHandle, args: Vec<String>) {
    log::info!("[Unicoin] Second instance started with {:?}", args);
    window::reactivate(app);
}

fn run_action(event: &RunEvent, platform: Platform) -> RunAction {
    match event {
        RunEvent::ExitRequested { code, .. } if keeps_alive(*code, platform) => {
            RunAction::KeepAlive
        }
        RunEvent::Exit => RunAction::StopBackend,
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => RunAction::Reactivate,
        _ => RunAction::Ignore,
    }
}

/// The last window closing asks to exit without a code. macOS apps stay
/// alive until quit explicitly.
fn keeps_alive(code: Option<i32>, platform: Platform) -> bool {
    code.is_none() && platform == Platform::MacOs
}

fn stop_backend<H: BackendHandle>(supervisor: &mut Supervisor<H>) {
    supervisor.stop();
}
