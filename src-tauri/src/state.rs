// ABOUTME: Application state shared by the backend supervisor and the window controller.
// ABOUTME: Managed via tauri::Manager::manage() and read back with app.state::<AppState>().

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::backend::{ShellBackend, Supervisor};
use crate::window::WindowController;

pub struct AppState {
    supervisor: Mutex<Supervisor<ShellBackend>>,
    windows: Mutex<WindowController>,
}

impl AppState {
    pub fn new(supervisor: Supervisor<ShellBackend>) -> Self {
        Self {
            supervisor: Mutex::new(supervisor),
            windows: Mutex::new(WindowController::new()),
        }
    }

    // A panic while holding either lock leaves plain data behind, so poisoning is ignored.
    pub fn supervisor(&self) -> MutexGuard<'_, Supervisor<ShellBackend>> {
        self.supervisor
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn windows(&self) -> MutexGuard<'_, WindowController> {
        self.windows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
