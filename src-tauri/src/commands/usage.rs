use tauri::{AppHandle, Manager};

use crate::models::{DisplaySnapshot, Settings};
use crate::services::metadata::MetadataResolver;

pub(crate) fn open_store(app_handle: &AppHandle) -> Result<rusqlite::Connection, String> {
    let data_dir = app_handle.path().app_data_dir().map_err(|e| e.to_string())?;
    let db_path = data_dir.join("usagelens.db");

    rusqlite::Connection::open(&db_path).map_err(|e| e.to_string())
}

pub(crate) fn load_settings(app_handle: &AppHandle) -> Settings {
    let mut settings = app_handle
        .path()
        .app_data_dir()
        .ok()
        .map(|dir| dir.join("config").join("settings.json"))
        .and_then(|path| std::fs::read_to_string(path).ok())
        .and_then(|content| serde_json::from_str::<Settings>(&content).ok())
        .unwrap_or_default();

    crate::utils::config::apply_env_overrides(&mut settings);
    settings
}

/// Full read-transform pass over the store; rerun on every UI
/// interaction rather than cached, only the metadata lookups memoize.
async fn processed_snapshots(app_handle: &AppHandle) -> Result<Vec<DisplaySnapshot>, String> {
    let conn = open_store(app_handle)?;
    let documents =
        crate::database::queries::get_usage_documents(&conn).map_err(|e| e.to_string())?;

    let settings = load_settings(app_handle);
    let zone = crate::utils::config::display_zone(&settings);

    Ok(crate::services::processor::process_snapshots(
        &documents,
        MetadataResolver::shared(),
        &settings.lookup,
        &zone,
    )
    .await)
}

#[tauri::command]
pub async fn get_snapshot_keys(app_handle: AppHandle) -> Result<Vec<String>, String> {
    let snapshots = processed_snapshots(&app_handle).await?;

    Ok(snapshots.into_iter().map(|s| s.display_timestamp).collect())
}

#[tauri::command]
pub async fn get_snapshot(
    app_handle: AppHandle,
    key: String,
) -> Result<Option<DisplaySnapshot>, String> {
    let snapshots = processed_snapshots(&app_handle).await?;

    // Minute-level keys can collide; the first match wins
    Ok(snapshots.into_iter().find(|s| s.display_timestamp == key))
}
