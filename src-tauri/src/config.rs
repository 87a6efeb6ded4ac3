// ABOUTME: Fixed configuration for the Unicoin desktop shell.
// ABOUTME: Backend name, loopback endpoint, readiness marker, window geometry and webview switches.

use std::sync::LazyLock;
use url::Url;

/// Product name shown in the window title and menus.
pub const APP_NAME: &str = "Unicoin";

/// File name of the wallet daemon inside the bundled `resources/app` directory.
pub const BACKEND_NAME: &str = "unicoin";

/// Where the daemon serves its web interface.
pub const DEFAULT_URL: &str = "http://127.0.0.1:8642/";

/// Printed by the daemon once its web server is listening.
/// Only detectable while colored logging is off.
pub const READY_MARKER: &[u8] = b"Starting web interface on ";

/// Label of the single application window.
pub const MAIN_WINDOW: &str = "main";

pub const WINDOW_WIDTH: f64 = 1200.0;
pub const WINDOW_HEIGHT: f64 = 900.0;

/// Linux icon, relative to the directory holding the shell executable.
/// AppImage builds otherwise show no dock icon.
pub const LINUX_ICON: &str = "resources/icon512x512.png";

/// Chromium switches for the WebView2 runtime on Windows.
/// Every host resolves to loopback except the two price/update APIs the wallet GUI calls,
/// TLS below 1.2 is refused and system proxies are ignored. WebGL is unavailable to the page.
/// WebView2's own defaults are repeated because setting arguments replaces them.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
pub const WEBVIEW2_ARGS: &str = concat!(
    "--disable-features=msWebOOUI,msPdfOOUI,msSmartScreenProtection ",
    "--host-rules=\"MAP * 127.0.0.1, EXCLUDE api.coinmarketcap.com, EXCLUDE api.github.com\" ",
    "--ssl-version-min=tls1.2 ",
    "--no-proxy-server ",
    "--disable-webgl ",
    "--disable-3d-apis",
);

/// The default endpoint as a parsed URL.
pub static DEFAULT_ENDPOINT: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_URL).expect("DEFAULT_URL is a valid URL"));

/// Page the window is created on before its browsing data is cleared.
pub static BLANK_PAGE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("about:blank").expect("about:blank is a valid URL"));
