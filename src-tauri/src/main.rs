// Prevents additional console window on Windows (silent launch).
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod commands;
mod database;
mod models;
mod services;
mod utils;

use tauri::Manager;

fn main() {
    utils::config::load_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    tauri::Builder::default()
        .setup(|app| {
            let app_handle = app.handle();
            let data_dir = app_handle.path().app_data_dir().expect("Failed to get app data dir");

            // Create data directory if it doesn't exist
            std::fs::create_dir_all(&data_dir).expect("Failed to create data directory");

            // Initialize the synced analytics store
            let db_path = data_dir.join("usagelens.db");
            database::init_database(&db_path).expect("Failed to initialize database");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Usage commands
            commands::usage::get_snapshot_keys,
            commands::usage::get_snapshot,
            // Location commands
            commands::location::get_location_keys,
            commands::location::get_location,
            // Settings commands
            commands::settings::get_settings,
            commands::settings::update_settings,
            // App control commands
            commands::app_control::show_window,
            commands::app_control::quit_app,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
