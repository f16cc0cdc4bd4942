use anyhow::Result;
use rusqlite::Connection;

pub fn create_tables(conn: &Connection) -> Result<()> {
    // Usage snapshot documents, synced from the device as JSON
    conn.execute(
        "CREATE TABLE IF NOT EXISTS usage_snapshots (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            captured_at INTEGER NOT NULL,
            document TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_usage_snapshots_captured_at
         ON usage_snapshots(captured_at)",
        [],
    )?;

    // Location fixes
    conn.execute(
        "CREATE TABLE IF NOT EXISTS location_points (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            recorded_at INTEGER NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_location_points_recorded_at
         ON location_points(recorded_at)",
        [],
    )?;

    Ok(())
}
