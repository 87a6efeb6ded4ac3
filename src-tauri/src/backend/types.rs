// ABOUTME: Backend supervisor types, errors, and the seams to the host runtime.
// ABOUTME: Defines BackendError, the per-spawn Lifetime id, and the launcher/handle/host traits.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Errors that can occur while driving the backend process
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Failed to spawn {}: {reason}", path.display())]
    Spawn { path: PathBuf, reason: String },

    #[error("Failed to signal backend (PID {pid}): {reason}")]
    Signal { pid: u32, reason: String },
}

/// Identifies one spawned backend process.
///
/// Output and exit events are tagged with the lifetime that produced them so a
/// late event from a dead process never touches the state of its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lifetime(pub(crate) u64);

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Published once per backend lifetime when its web interface is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReady {
    pub url: Url,
}

/// A running backend process owned by the supervisor.
pub trait BackendHandle: Send {
    fn pid(&self) -> u32;

    /// Ask the process to shut down. Does not wait for it to exit.
    fn interrupt(&mut self) -> Result<(), BackendError>;
}

/// Spawns backend processes and wires their output back to the supervisor.
pub trait BackendLauncher {
    type Handle: BackendHandle;

    fn launch(
        &self,
        program: &Path,
        args: &[String],
        lifetime: Lifetime,
    ) -> Result<Self::Handle, BackendError>;
}

/// User-facing side effects of a fatal backend failure.
pub trait DesktopHost {
    /// Show a blocking error dialog.
    fn show_error(&self, title: &str, message: &str);

    /// Terminate the application.
    fn quit(&self);
}
