use anyhow::Result;
use rusqlite::Connection;
use crate::models::{LocationPoint, RawSnapshot};

/// All synced usage snapshot documents, newest capture first. A row
/// whose JSON does not parse is skipped so one bad sync cannot hide the
/// rest of the history.
pub fn get_usage_documents(conn: &Connection) -> Result<Vec<RawSnapshot>> {
    let mut stmt = conn.prepare(
        "SELECT id, document FROM usage_snapshots ORDER BY captured_at DESC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut snapshots = Vec::with_capacity(rows.len());
    for (id, document) in rows {
        match serde_json::from_str::<RawSnapshot>(&document) {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(e) => log::warn!("Skipping unreadable usage snapshot {}: {}", id, e),
        }
    }

    Ok(snapshots)
}

/// All location fixes, newest first.
pub fn get_location_points(conn: &Connection) -> Result<Vec<LocationPoint>> {
    let mut stmt = conn.prepare(
        "SELECT recorded_at, latitude, longitude
         FROM location_points
         ORDER BY recorded_at DESC",
    )?;

    let points = stmt
        .query_map([], |row| {
            Ok(LocationPoint {
                epoch_millis: row.get(0)?,
                latitude: row.get(1)?,
                longitude: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(points)
}
