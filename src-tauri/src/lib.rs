// ABOUTME: Core library for the Unicoin desktop shell.
// ABOUTME: Registers plugins, supervises the wallet daemon, and opens its web interface in a window.

use tauri::Manager;
use tauri_plugin_log::{Target, TargetKind};

mod backend;
mod config;
mod host;
mod lifecycle;
mod platform;
mod state;
mod window;

use backend::Supervisor;
use platform::Platform;
use state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    #[allow(unused_mut)]
    let mut builder = tauri::Builder::default();

    // Must be registered first so a second launch never gets as far as spawning a daemon.
    #[cfg(desktop)]
    {
        builder = builder.plugin(tauri_plugin_single_instance::init(|app, args, _cwd| {
            lifecycle::handle_second_instance(app, args);
        }));
    }

    builder = builder
        .plugin(
            tauri_plugin_log::Builder::new()
                .targets([
                    Target::new(TargetKind::Stdout),
                    Target::new(TargetKind::LogDir { file_name: None }),
                ])
                .max_file_size(5_000_000) // 5 MB per log file
                .rotation_strategy(tauri_plugin_log::RotationStrategy::KeepOne)
                .level(if cfg!(debug_assertions) {
                    log::LevelFilter::Debug
                } else {
                    log::LevelFilter::Info
                })
                .build(),
        )
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_shell::init());

    // Note: deep-link plugin disabled on Windows due to WiX bundler ICE03 registry errors
    // See: https://github.com/tauri-apps/tauri/issues/10453
    #[cfg(not(target_os = "windows"))]
    {
        builder = builder.plugin(tauri_plugin_deep_link::init());
    }

    let app = builder
        .on_menu_event(window::menu::handle_menu_event)
        .on_window_event(window::handle_window_event)
        .setup(|app| {
            log::info!(
                "[Unicoin] Starting {} v{}",
                app.package_info().name,
                app.package_info().version
            );

            window::menu::install(app.handle())?;

            let (ready_tx, ready_rx) = tokio::sync::mpsc::unbounded_channel();
            let exe_path = std::env::current_exe()?;
            let supervisor = Supervisor::for_platform(Platform::current(), &exe_path, ready_tx);
            log::debug!(
                "[Unicoin] Backend command: {} {}",
                supervisor.program().display(),
                supervisor.args().join(" ")
            );
            app.manage(AppState::new(supervisor));

            // Register unicoin:// as the default protocol client
            #[cfg(all(desktop, not(target_os = "windows")))]
            {
                use tauri_plugin_deep_link::DeepLinkExt;

                // macOS registers schemes from the bundle's Info.plist at install time
                #[cfg(target_os = "linux")]
                {
                    if let Err(e) = app.deep_link().register_all() {
                        log::warn!("[Deep Link] Failed to register unicoin:// scheme: {}", e);
                    }
                }

                let handle = app.handle().clone();
                app.deep_link().on_open_url(move |event| {
                    log::info!("[Deep Link] Opened with {:?}", event.urls());
                    window::reactivate(&handle);
                });
            }

            let handle = app.handle().clone();
            tauri::async_runtime::spawn(window::forward_readiness(handle.clone(), ready_rx));

            // Off the main thread: a spawn failure shows a blocking dialog.
            tauri::async_runtime::spawn_blocking(move || {
                if let Some(outcome) = lifecycle::start_backend(&handle) {
                    log::debug!("[Unicoin] Backend start: {:?}", outcome);
                }
            });

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(lifecycle::handle_run_event);
}
