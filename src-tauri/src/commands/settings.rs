use tauri::{AppHandle, Manager};
use crate::models::Settings;

#[tauri::command]
pub async fn get_settings(app_handle: AppHandle) -> Result<Settings, String> {
    let data_dir = app_handle.path().app_data_dir().map_err(|e| e.to_string())?;
    let config_path = data_dir.join("config").join("settings.json");

    let mut settings = if config_path.exists() {
        let content = std::fs::read_to_string(&config_path).map_err(|e| e.to_string())?;
        serde_json::from_str::<Settings>(&content).map_err(|e| e.to_string())?
    } else {
        Settings::default()
    };

    crate::utils::config::apply_env_overrides(&mut settings);
    Ok(settings)
}

#[tauri::command]
pub async fn update_settings(app_handle: AppHandle, settings: Settings) -> Result<(), String> {
    let data_dir = app_handle.path().app_data_dir().map_err(|e| e.to_string())?;
    let config_dir = data_dir.join("config");

    std::fs::create_dir_all(&config_dir).map_err(|e| e.to_string())?;

    let config_path = config_dir.join("settings.json");
    let content = serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?;

    std::fs::write(&config_path, content).map_err(|e| e.to_string())?;

    Ok(())
}
