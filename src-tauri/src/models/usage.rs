use serde::{Deserialize, Serialize};

/// One per-package usage entry inside a synced snapshot document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    pub package_name: String,
    pub total_time_in_foreground: i64,
    pub first_time_stamp: i64,
    pub last_time_stamp: i64,
}

/// A usage snapshot document as synced from the device. Usage entries
/// stay as raw JSON so a single malformed record can be skipped without
/// discarding the whole snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSnapshot {
    pub current_timestamp: i64,
    #[serde(default)]
    pub usage_stats: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayUsageRecord {
    pub display_name: String,
    pub icon_url: Option<String>,
    pub total_foreground_ms: i64,
    pub foreground_display: String,
    pub first_seen: String,
    pub last_seen: String,
}

/// A snapshot ready for the UI. `display_timestamp` doubles as the
/// sidebar selection key. Never constructed with an empty record list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySnapshot {
    pub display_timestamp: String,
    pub records: Vec<DisplayUsageRecord>,
}
