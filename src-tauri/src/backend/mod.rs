// ABOUTME: Process supervisor for the bundled Unicoin wallet daemon.
// ABOUTME: Resolves the daemon path, launches it, and publishes readiness to the window layer.

mod args;
mod path;
mod process;
mod supervisor;
#[cfg(test)]
pub(crate) mod testing;
mod types;

pub use process::{ShellBackend, ShellLauncher};
pub use supervisor::{StartOutcome, Supervisor, report_spawn_failure};
pub use types::{BackendHandle, BackendReady, DesktopHost};
