use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPoint {
    pub epoch_millis: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Location fix ready for the UI. The timestamp is formatted to
/// microsecond precision so closely spaced fixes keep distinct keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLocationPoint {
    pub display_timestamp: String,
    pub latitude: f64,
    pub longitude: f64,
}
