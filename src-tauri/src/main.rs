// ABOUTME: Entry point for the Unicoin desktop application.
// ABOUTME: Launches the wallet daemon and shows its web interface in a native window.

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    unicoin_desktop_lib::run()
}
