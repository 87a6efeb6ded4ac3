// ABOUTME: Tauri-backed implementations of the shell's side-effect traits.
// ABOUTME: Error dialogs and quitting for the supervisor; the external browser for navigation.

use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};
use tauri_plugin_opener::OpenerExt;
use url::Url;

use crate::backend::DesktopHost;
use crate::window::ExternalBrowser;

/// Exit code used when the backend cannot be started.
const FATAL_EXIT_CODE: i32 = 1;

#[derive(Clone)]
pub struct TauriHost {
    app: AppHandle,
}

impl TauriHost {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl DesktopHost for TauriHost {
    // Must not be called from the main thread: the dialog blocks until dismissed.
    fn show_error(&self, title: &str, message: &str) {
        self.app
            .dialog()
            .message(message)
            .title(title)
            .kind(MessageDialogKind::Error)
            .blocking_show();
    }

    fn quit(&self) {
        log::info!("[Unicoin] Quitting");
        self.app.exit(FATAL_EXIT_CODE);
    }
}

impl ExternalBrowser for TauriHost {
    fn open(&self, url: &Url) {
        log::info!("[Navigation] Opening {} in the default browser", url);
        if let Err(e) = self.app.opener().open_url(url.as_str(), None::<&str>) {
            log::error!("[Navigation] Failed to open {}: {}", url, e);
        }
    }
}
