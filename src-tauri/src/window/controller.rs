// ABOUTME: Decides whether a readiness or re-activation should create or focus the main window.
// ABOUTME: Tracks the single window slot and the last URL it was pointed at.

use url::Url;

use crate::backend::BackendReady;
use crate::config::DEFAULT_ENDPOINT;

/// What the caller should do with the main window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowAction {
    Create(Url),
    /// Restore from minimized if needed and focus.
    Focus,
}

/// Bookkeeping for the one application window.
///
/// Returning `Create` reserves the slot immediately so two events racing to the
/// main thread cannot both build a window.
#[derive(Debug, Default)]
pub struct WindowController {
    open: bool,
    current_url: Option<Url>,
}

impl WindowController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_url(&self) -> Option<&Url> {
        self.current_url.as_ref()
    }

    pub fn on_backend_ready(&mut self, ready: &BackendReady) -> WindowAction {
        self.current_url = Some(ready.url.clone());
        if self.open {
            return WindowAction::Focus;
        }
        self.open = true;
        WindowAction::Create(ready.url.clone())
    }

    /// Second instance launched, dock icon clicked, or deep link opened.
    pub fn on_reactivate(&mut self) -> WindowAction {
        if self.is_open() {
            return WindowAction::Focus;
        }
        let url = self
            .current_url()
            .cloned()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.clone());
        self.open = true;
        WindowAction::Create(url)
    }

    /// The window was destroyed.
    pub fn mark_closed(&mut self) {
        self.open = false;
    }

    /// Building the window failed; release the slot reserved by `Create`.
    pub fn on_create_failed(&mut self) {
        self.mark_closed();
    }
}
