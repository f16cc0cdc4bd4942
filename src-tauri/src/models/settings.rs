use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub version: String,
    pub display: DisplaySettings,
    pub lookup: LookupSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            display: DisplaySettings::default(),
            lookup: LookupSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// IANA zone the synced timestamps are rendered in.
    pub timezone: String,
    pub theme: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            timezone: "Asia/Kolkata".to_string(),
            theme: "dark".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupSettings {
    #[serde(default = "default_lookup_enabled")]
    pub enabled: bool,
    pub language: String,
    pub country: String,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            language: "en".to_string(),
            country: "in".to_string(),
        }
    }
}

fn default_lookup_enabled() -> bool {
    true
}
