use tauri::AppHandle;

use crate::models::DisplayLocationPoint;

async fn processed_locations(app_handle: &AppHandle) -> Result<Vec<DisplayLocationPoint>, String> {
    let conn = super::usage::open_store(app_handle)?;
    let points =
        crate::database::queries::get_location_points(&conn).map_err(|e| e.to_string())?;

    let settings = super::usage::load_settings(app_handle);
    let zone = crate::utils::config::display_zone(&settings);

    Ok(crate::services::processor::process_locations(&points, &zone))
}

#[tauri::command]
pub async fn get_location_keys(app_handle: AppHandle) -> Result<Vec<String>, String> {
    let locations = processed_locations(&app_handle).await?;

    Ok(locations.into_iter().map(|l| l.display_timestamp).collect())
}

#[tauri::command]
pub async fn get_location(
    app_handle: AppHandle,
    key: String,
) -> Result<Option<DisplayLocationPoint>, String> {
    let locations = processed_locations(&app_handle).await?;

    Ok(locations.into_iter().find(|l| l.display_timestamp == key))
}
