// ABOUTME: Spawns the wallet daemon through tauri-plugin-shell and pumps its output events.
// ABOUTME: Each stdout/stderr line and the exit event are handed to the managed Supervisor.

use std::path::Path;
use tauri::async_runtime::Receiver;
use tauri::{AppHandle, Manager};
use tauri_plugin_shell::ShellExt;
use tauri_plugin_shell::process::{CommandChild, CommandEvent};

use super::supervisor::Supervisor;
use super::types::{BackendError, BackendHandle, BackendLauncher, Lifetime};
use crate::state::AppState;

/// Launches the backend as a child of the Tauri process.
pub struct ShellLauncher {
    app: AppHandle,
}

impl ShellLauncher {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl BackendLauncher for ShellLauncher {
    type Handle = ShellBackend;

    fn launch(
        &self,
        program: &Path,
        args: &[String],
        lifetime: Lifetime,
    ) -> Result<ShellBackend, BackendError> {
        let (rx, child) = self
            .app
            .shell()
            .command(program)
            .args(args)
            .spawn()
            .map_err(|e| BackendError::Spawn {
                path: program.to_path_buf(),
                reason: e.to_string(),
            })?;

        tauri::async_runtime::spawn(pump_events(self.app.clone(), lifetime, rx));

        Ok(ShellBackend {
            pid: child.pid(),
            child: Some(child),
        })
    }
}

/// A backend spawned by [`ShellLauncher`].
pub struct ShellBackend {
    pid: u32,
    // Unix signals by PID; the handle is only consumed by `kill` elsewhere.
    #[cfg_attr(unix, allow(dead_code))]
    child: Option<CommandChild>,
}

impl BackendHandle for ShellBackend {
    fn pid(&self) -> u32 {
        self.pid
    }

    #[cfg(unix)]
    fn interrupt(&mut self) -> Result<(), BackendError> {
        let rc = unsafe { libc::kill(self.pid as libc::pid_t, libc::SIGINT) };
        if rc != 0 {
            return Err(BackendError::Signal {
                pid: self.pid,
                reason: std::io::Error::last_os_error().to_string(),
            });
        }
        Ok(())
    }

    // No SIGINT on Windows; terminate the process instead.
    #[cfg(not(unix))]
    fn interrupt(&mut self) -> Result<(), BackendError> {
        let Some(child) = self.child.take() else {
            return Ok(());
        };
        child.kill().map_err(|e| BackendError::Signal {
            pid: self.pid,
            reason: e.to_string(),
        })
    }
}

/// Forward process events to the supervisor until the channel closes.
async fn pump_events(app: AppHandle, lifetime: Lifetime, mut rx: Receiver<CommandEvent>) {
    while let Some(event) = rx.recv().await {
        let Some(state) = app.try_state::<AppState>() else {
            log::warn!("[Backend] App state unavailable, dropping process event");
            continue;
        };
        let mut supervisor = state.supervisor();
        route(&mut *supervisor, lifetime, event);
    }
    log::debug!("[Backend {}] Event stream closed", lifetime);
}

/// Hand one process event to the supervisor.
fn route<H: BackendHandle>(
    supervisor: &mut Supervisor<H>,
    lifetime: Lifetime,
    event: CommandEvent,
) {
    match event {
        CommandEvent::Stdout(line) => {
            supervisor.handle_stdout(lifetime, &line);
        }
        CommandEvent::Stderr(line) => {
            supervisor.handle_stderr(lifetime, &line);
        }
        CommandEvent::Error(e) => {
            log::warn!("[Backend {}] Output error: {}", lifetime, e);
        }
        CommandEvent::Terminated(payload) => {
            supervisor.handle_terminated(lifetime, payload.code, payload.signal);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::{FakeLauncher, READY_LINE, drain, spawned, supervisor};
    use tauri_plugin_shell::process::TerminatedPayload;

    #[test]
    fn stdout_with_marker_publishes_readiness() {
        let (mut sup, mut rx) = supervisor();
        let launcher = FakeLauncher::default();
        let lifetime = spawned(&mut sup, &launcher);

        route(&mut sup, lifetime, CommandEvent::Stdout(READY_LINE.to_vec()));

        assert_eq!(drain(&mut rx).len(), 1);
        assert_eq!(
            sup.last_url().map(|u| u.as_str()),
            Some("http://127.0.0.1:8642/")
        );
    }

    #[test]
    fn stderr_with_marker_publishes_nothing() {
        let (mut sup, mut rx) = supervisor();
        let launcher = FakeLauncher::default();
        let lifetime = spawned(&mut sup, &launcher);

        route(&mut sup, lifetime, CommandEvent::Stderr(READY_LINE.to_vec()));

        assert!(drain(&mut rx).is_empty());
        assert!(sup.last_url().is_none());
    }

    #[test]
    fn output_error_leaves_state_unchanged() {
        let (mut sup, mut rx) = supervisor();
        let launcher = FakeLauncher::default();
        let lifetime = spawned(&mut sup, &launcher);

        route(
            &mut sup,
            lifetime,
            CommandEvent::Error("invalid utf-8".to_string()),
        );

        assert!(sup.is_running());
        assert_eq!(sup.current_lifetime(), Some(lifetime));
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn termination_clears_process_and_allows_restart() {
        let (mut sup, mut rx) = supervisor();
        let launcher = FakeLauncher::default();
        let first = spawned(&mut sup, &launcher);
        route(&mut sup, first, CommandEvent::Stdout(READY_LINE.to_vec()));

        route(
            &mut sup,
            first,
            CommandEvent::Terminated(TerminatedPayload {
                code: Some(0),
                signal: None,
            }),
        );
        assert!(!sup.is_running());

        let second = spawned(&mut sup, &launcher);
        assert_ne!(first, second);
        assert_eq!(launcher.launch_count(), 2);

        route(&mut sup, second, CommandEvent::Stdout(READY_LINE.to_vec()));
        assert_eq!(drain(&mut rx).len(), 2);
    }

    #[test]
    fn termination_of_old_process_is_ignored() {
        let (mut sup, _rx) = supervisor();
        let launcher = FakeLauncher::default();
        let first = spawned(&mut sup, &launcher);
        route(
            &mut sup,
            first,
            CommandEvent::Terminated(TerminatedPayload {
                code: None,
                signal: Some(9),
            }),
        );
        let second = spawned(&mut sup, &launcher);

        route(
            &mut sup,
            first,
            CommandEvent::Terminated(TerminatedPayload {
                code: Some(1),
                signal: None,
            }),
        );

        assert_eq!(sup.current_lifetime(), Some(second));
    }
}
