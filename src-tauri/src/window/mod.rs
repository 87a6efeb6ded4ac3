// ABOUTME: Window controller for the single Unicoin webview window.
// ABOUTME: Reacts to backend readiness and re-activation; window work always runs on the main thread.

mod builder;
mod controller;
pub mod menu;
mod navigation;

pub use controller::{WindowAction, WindowController};
pub use navigation::ExternalBrowser;

use tauri::{AppHandle, Manager, WindowEvent};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::BackendReady;
use crate::config::MAIN_WINDOW;
use crate::state::AppState;

/// Consume readiness events from the supervisor for the life of the app.
pub async fn forward_readiness(app: AppHandle, mut rx: UnboundedReceiver<BackendReady>) {
    while let Some(ready) = rx.recv().await {
        let Some(state) = app.try_state::<AppState>() else {
            continue;
        };
        let action = state.windows().on_backend_ready(&ready);
        dispatch(&app, action);
    }
}

/// Bring the existing window forward, or recreate it at the last-known URL.
pub fn reactivate(app: &AppHandle) {
    let Some(state) = app.try_state::<AppState>() else {
        log::warn!("[Window] Re-activation before setup finished");
        return;
    };
    let action = state.windows().on_reactivate();
    dispatch(app, action);
}

/// Free the window slot when the main window goes away.
pub fn handle_window_event(window: &tauri::Window, event: &WindowEvent) {
    if let WindowEvent::Destroyed = event {
        if window.label() == MAIN_WINDOW {
            log::info!("[Window] Main window closed");
            if let Some(state) = window.try_state::<AppState>() {
                state.windows().mark_closed();
            }
        }
    }
}

fn dispatch(app: &AppHandle, action: WindowAction) {
    let handle = app.clone();
    if let Err(e) = app.run_on_main_thread(move || apply(&handle, action)) {
        log::error!("[Window] Failed to schedule window work: {}", e);
    }
}

fn apply(app: &AppHandle, action: WindowAction) {
    match action {
        WindowAction::Focus => focus_main_window(app),
        WindowAction::Create(url) => {
            if let Err(e) = builder::create_main_window(app, &url) {
                log::error!("[Window] Failed to create main window: {}", e);
                if let Some(state) = app.try_state::<AppState>() {
                    state.windows().on_create_failed();
                }
            }
        }
    }
}

fn focus_main_window(app: &AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW) else {
        return;
    };
    if window.is_minimized().unwrap_or(false) {
        if let Err(e) = window.unminimize() {
            log::warn!("[Window] Failed to restore main window: {}", e);
        }
    }
    if let Err(e) = window.set_focus() {
        log::warn!("[Window] Failed to focus main window: {}", e);
    }
}
