// ABOUTME: Lifecycle state machine for the single wallet daemon process.
// ABOUTME: Spawns once, detects readiness on stdout, resets on exit, interrupts on quit.

use std::path::{Path, PathBuf};
use tokio::sync::mpsc::UnboundedSender;
use url::Url;

use super::args::LaunchOptions;
use super::path::backend_executable;
use super::types::{
    BackendError, BackendHandle, BackendLauncher, BackendReady, DesktopHost, Lifetime,
};
use crate::config::{BACKEND_NAME, DEFAULT_ENDPOINT, READY_MARKER};
use crate::platform::Platform;

const SPAWN_FAILED_TITLE: &str = "Failed to start unicoin";

/// Result of a `start()` call.
#[derive(Debug)]
pub enum StartOutcome {
    /// A backend was already running; only a readiness notification was sent.
    AlreadyRunning,
    Spawned(Lifetime),
    /// Spawning failed. The caller reports it with [`report_spawn_failure`]
    /// once the supervisor lock is released.
    Failed(BackendError),
}

struct RunningBackend<H> {
    handle: H,
    lifetime: Lifetime,
    ready: bool,
}

/// Owns at most one backend process.
///
/// Readiness is published on `ready_tx`; the window controller holds the receiver.
pub struct Supervisor<H> {
    program: PathBuf,
    args: Vec<String>,
    running: Option<RunningBackend<H>>,
    next_lifetime: u64,
    last_url: Option<Url>,
    ready_tx: UnboundedSender<BackendReady>,
}

impl<H: BackendHandle> Supervisor<H> {
    pub fn new(
        program: PathBuf,
        options: &LaunchOptions,
        ready_tx: UnboundedSender<BackendReady>,
    ) -> Self {
        let args = options.to_args(&program);
        Self {
            program,
            args,
            running: None,
            next_lifetime: 0,
            last_url: None,
            ready_tx,
        }
    }

    /// Supervisor for the bundled daemon with the default desktop flags.
    pub fn for_platform(
        platform: Platform,
        exe_path: &Path,
        ready_tx: UnboundedSender<BackendReady>,
    ) -> Self {
        let program = backend_executable(platform, exe_path, BACKEND_NAME);
        Self::new(program, &LaunchOptions::default(), ready_tx)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Lifetime of the current process, if any.
    pub fn current_lifetime(&self) -> Option<Lifetime> {
        self.running.as_ref().map(|r| r.lifetime)
    }

    /// URL from the most recent readiness, kept across restarts.
    pub fn last_url(&self) -> Option<&Url> {
        self.last_url.as_ref()
    }

    /// Spawn the backend unless one is already running.
    pub fn start<L>(&mut self, launcher: &L) -> StartOutcome
    where
        L: BackendLauncher<Handle = H>,
    {
        log::info!("[Backend] Starting {}", self.program.display());

        if self.is_running() {
            log::info!("[Backend] Already running");
            let url = self
                .last_url()
                .cloned()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.clone());
            self.publish(BackendReady { url });
            return StartOutcome::AlreadyRunning;
        }

        let lifetime = Lifetime(self.next_lifetime);
        self.next_lifetime += 1;

        match launcher.launch(&self.program, &self.args, lifetime) {
            Ok(handle) => {
                log::info!(
                    "[Backend] Spawned {} (PID {})",
                    lifetime,
                    handle.pid()
                );
                self.running = Some(RunningBackend {
                    handle,
                    lifetime,
                    ready: false,
                });
                StartOutcome::Spawned(lifetime)
            }
            Err(e) => {
                log::error!("[Backend] {}", e);
                StartOutcome::Failed(e)
            }
        }
    }

    /// Log a stdout chunk and check it for the readiness marker.
    /// Returns true when this chunk made the backend ready.
    pub fn handle_stdout(&mut self, lifetime: Lifetime, chunk: &[u8]) -> bool {
        log_output(lifetime, chunk);

        let Some(running) = self.running.as_mut() else {
            return false;
        };
        if running.lifetime != lifetime || running.ready {
            return false;
        }
        if !contains_marker(chunk) {
            return false;
        }

        // The address printed after the marker is not parsed; the daemon is
        // configured to listen on the default endpoint.
        running.ready = true;
        let url = DEFAULT_ENDPOINT.clone();
        self.last_url = Some(url.clone());
        log::info!("[Backend] Web interface ready at {}", url);
        self.publish(BackendReady { url });
        true
    }

    /// Stderr is only logged.
    pub fn handle_stderr(&self, lifetime: Lifetime, chunk: &[u8]) {
        log_output(lifetime, chunk);
    }

    /// Forget the process so a later `start()` can spawn again.
    /// Returns false if the event belongs to a process that is no longer current.
    pub fn handle_terminated(
        &mut self,
        lifetime: Lifetime,
        code: Option<i32>,
        signal: Option<i32>,
    ) -> bool {
        if self.current_lifetime() != Some(lifetime) {
            log::debug!("[Backend] Ignoring exit of stale process {}", lifetime);
            return false;
        }

        log::info!(
            "[Backend] Process {} exited (code {:?}, signal {:?})",
            lifetime,
            code,
            signal
        );
        self.running = None;
        true
    }

    /// Send an interrupt to the backend without waiting for it to exit.
    pub fn stop(&mut self) {
        let Some(running) = self.running.as_mut() else {
            return;
        };

        log::info!(
            "[Backend] Interrupting {} (PID {})",
            running.lifetime,
            running.handle.pid()
        );
        if let Err(e) = running.handle.interrupt() {
            log::warn!("[Backend] {}", e);
        }
    }

    fn publish(&self, ready: BackendReady) {
        if self.ready_tx.send(ready).is_err() {
            log::warn!("[Backend] Readiness receiver is gone");
        }
    }
}

/// A spawn failure is fatal: one error dialog, then the application quits.
///
/// The dialog blocks until dismissed, so never call this while holding the
/// supervisor lock.
pub fn report_spawn_failure(host: &dyn DesktopHost, error: &BackendError) {
    host.show_error(SPAWN_FAILED_TITLE, &error.to_string());
    host.quit();
}

fn contains_marker(chunk: &[u8]) -> bool {
    chunk
        .windows(READY_MARKER.len())
        .any(|window| window == READY_MARKER)
}

fn log_output(lifetime: Lifetime, chunk: &[u8]) {
    let text = String::from_utf8_lossy(chunk);
    log::info!(target: "unicoin", "[Backend {}] {}", lifetime, text.trim_end());
}
