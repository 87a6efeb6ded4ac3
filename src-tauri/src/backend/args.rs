// ABOUTME: Command-line flags the wallet daemon is launched with.
// ABOUTME: LaunchOptions::default() is the fixed desktop configuration.

use std::path::Path;

use super::path::executable_dir;

/// Daemon switches controlled by the shell.
///
/// The GUI asset directory is not a field: it is always the directory holding
/// the daemon executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    /// The shell shows the interface itself.
    pub launch_browser: bool,
    /// Must stay off or the readiness marker is wrapped in escape codes.
    pub color_log: bool,
    pub log_to_file: bool,
    pub download_peerlist: bool,
    pub enable_seed_api: bool,
    pub enable_wallet_api: bool,
    /// Standalone RPC listener.
    pub rpc_interface: bool,
    pub disable_csrf: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            launch_browser: false,
            color_log: false,
            log_to_file: true,
            download_peerlist: true,
            enable_seed_api: true,
            enable_wallet_api: true,
            rpc_interface: false,
            disable_csrf: false,
        }
    }
}

impl LaunchOptions {
    /// Render the argument vector for the daemon at `executable`.
    pub fn to_args(&self, executable: &Path) -> Vec<String> {
        vec![
            format!("-launch-browser={}", self.launch_browser),
            format!("-gui-dir={}", executable_dir(executable).display()),
            format!("-color-log={}", self.color_log),
            format!("-logtofile={}", self.log_to_file),
            format!("-download-peerlist={}", self.download_peerlist),
            format!("-enable-seed-api={}", self.enable_seed_api),
            format!("-enable-wallet-api={}", self.enable_wallet_api),
            format!("-rpc-interface={}", self.rpc_interface),
            format!("-disable-csrf={}", self.disable_csrf),
        ]
    }
}
