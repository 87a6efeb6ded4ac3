// ABOUTME: Builds the hardened main webview window pointed at the backend.
// ABOUTME: Injects the hardening script, installs the navigation guard, clears browsing data, then loads.

use std::path::{Path, PathBuf};
use tauri::image::Image;
use tauri::{AppHandle, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use url::Url;

use super::navigation::NavigationGuard;
use crate::config::{APP_NAME, BLANK_PAGE, LINUX_ICON, MAIN_WINDOW, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::host::TauriHost;
use crate::platform::Platform;

/// Runs in every frame before any page script: `eval` throws, WebGL and WebAudio are unavailable.
const HARDENING_SCRIPT: &str = include_str!("hardening.js");

/// Create the main window and navigate it to `url`.
///
/// The window opens on `about:blank` so cached responses and site data from a
/// previous run are gone before the wallet page loads.
pub fn create_main_window(app: &AppHandle, url: &Url) -> tauri::Result<WebviewWindow> {
    let guard = NavigationGuard::new(url, TauriHost::new(app.clone()));

    #[allow(unused_mut)]
    let mut builder = WebviewWindowBuilder::new(
        app,
        MAIN_WINDOW,
        WebviewUrl::External(BLANK_PAGE.clone()),
    )
    .title(APP_NAME)
    .inner_size(WINDOW_WIDTH, WINDOW_HEIGHT)
    .initialization_script_for_all_frames(HARDENING_SCRIPT)
    .on_navigation(move |target| guard.intercept(target));

    #[cfg(target_os = "windows")]
    {
        builder = builder.additional_browser_args(crate::config::WEBVIEW2_ARGS);
    }

    if let Some(icon) = window_icon() {
        builder = builder.icon(icon)?;
    }

    let window = builder.build()?;

    match window.clear_all_browsing_data() {
        Ok(()) => log::info!("[Window] Cleared cached responses and stored site data"),
        Err(e) => log::warn!("[Window] Failed to clear browsing data: {}", e),
    }

    log::info!("[Window] Loading {}", url);
    window.navigate(url.clone())?;
    Ok(window)
}

/// Window icon location; only Linux needs one set explicitly.
pub fn icon_path(platform: Platform, exe_path: &Path) -> Option<PathBuf> {
    match platform {
        Platform::Linux => Some(exe_path.parent()?.join(LINUX_ICON)),
        _ => None,
    }
}

fn window_icon() -> Option<Image<'static>> {
    let exe = std::env::current_exe().ok()?;
    let path = icon_path(Platform::current(), &exe)?;
    load_icon(&path)
}

fn load_icon(path: &Path) -> Option<Image<'static>> {
    if !path.exists() {
        log::warn!("[Window] Icon not found at {}", path.display());
        return None;
    }
    match Image::from_path(path) {
        Ok(icon) => Some(icon),
        Err(e) => {
            log::warn!("[Window] Failed to load icon {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_icon_sits_next_to_executable() {
        assert_eq!(
            icon_path(Platform::Linux, Path::new("/opt/Unicoin/unicoin-desktop")),
            Some(PathBuf::from("/opt/Unicoin/resources/icon512x512.png"))
        );
    }

    #[test]
    fn other_platforms_use_bundle_icon() {
        let exe = Path::new("/Applications/Unicoin.app/Contents/MacOS/Unicoin");
        assert_eq!(icon_path(Platform::MacOs, exe), None);
        assert_eq!(icon_path(Platform::Windows, exe), None);
        assert_eq!(icon_path(Platform::Other, exe), None);
    }

    #[test]
    fn missing_icon_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_icon(&dir.path().join("icon512x512.png")).is_none());
    }

    #[test]
    fn unreadable_icon_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon512x512.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(load_icon(&path).is_none());
    }

    #[test]
    fn hardening_script_disables_eval_and_webgl() {
        assert!(HARDENING_SCRIPT.contains("'eval'"));
        assert!(HARDENING_SCRIPT.contains("getContext"));
        assert!(HARDENING_SCRIPT.contains("AudioContext"));
    }

    #[test]
    fn hardening_script_only_touches_its_own_frame() {
        // Injected into iframes too, where cross-frame access may be denied.
        for other in ["window.top", "window.parent", "window.frames", "contentWindow"] {
            assert!(!HARDENING_SCRIPT.contains(other), "script references {}", other);
        }
    }
}
