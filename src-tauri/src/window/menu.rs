// ABOUTME: Static application menu: About/Quit plus the standard Edit operations.
// ABOUTME: Quit goes through AppHandle::exit so the backend is interrupted on the way out.

use tauri::menu::{
    AboutMetadata, Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem, Submenu,
};
use tauri::{AppHandle, Manager, Runtime};

use crate::config::APP_NAME;

const QUIT_ID: &str = "quit";

pub fn install<R: Runtime, M: Manager<R>>(app: &M) -> tauri::Result<()> {
    let menu = build(app)?;
    app.app_handle().set_menu(menu)?;
    Ok(())
}

fn build<R: Runtime, M: Manager<R>>(app: &M) -> tauri::Result<Menu<R>> {
    let about = PredefinedMenuItem::about(
        app,
        Some(format!("About {}", APP_NAME).as_str()),
        Some(AboutMetadata {
            name: Some(APP_NAME.to_string()),
            version: Some(app.package_info().version.to_string()),
            ..Default::default()
        }),
    )?;
    let separator = PredefinedMenuItem::separator(app)?;
    let quit = MenuItem::with_id(app, QUIT_ID, "Quit", true, Some("CmdOrCtrl+Q"))?;
    let app_menu = Submenu::with_items(app, APP_NAME, true, &[&about, &separator, &quit])?;

    let edit_menu = {
        let undo = PredefinedMenuItem::undo(app, None)?;
        let redo = PredefinedMenuItem::redo(app, None)?;
        let cut = PredefinedMenuItem::cut(app, None)?;
        let copy = PredefinedMenuItem::copy(app, None)?;
        let paste = PredefinedMenuItem::paste(app, None)?;
        let select_all = PredefinedMenuItem::select_all(app, None)?;
        Submenu::with_items(
            app,
            "Edit",
            true,
            &[
                &undo,
                &redo,
                &separator,
                &cut,
                &copy,
                &paste,
                &select_all,
            ],
        )?
    };

    Menu::with_items(app, &[&app_menu, &edit_menu])
}

pub fn handle_menu_event<R: Runtime>(app: &AppHandle<R>, event: MenuEvent) {
    if is_quit(event.id()) {
        log::info!("[Menu] Quit requested");
        app.exit(0);
    }
}

fn is_quit(id: &MenuId) -> bool {
    id == QUIT_ID
}
