use crate::models::Settings;

const ENV_TIMEZONE: &str = "USAGELENS_TIMEZONE";
const ENV_LOOKUP_LANG: &str = "USAGELENS_LOOKUP_LANG";
const ENV_LOOKUP_COUNTRY: &str = "USAGELENS_LOOKUP_COUNTRY";

pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Environment values win over the settings file so a deployment can be
/// pointed at another zone or store locale without editing JSON.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Some(zone) = env_value(ENV_TIMEZONE) {
        settings.display.timezone = zone;
    }
    if let Some(lang) = env_value(ENV_LOOKUP_LANG) {
        settings.lookup.language = lang;
    }
    if let Some(country) = env_value(ENV_LOOKUP_COUNTRY) {
        settings.lookup.country = country;
    }
}

/// Parse the configured zone, falling back to the default when the
/// string is not a known IANA name.
pub fn display_zone(settings: &Settings) -> chrono_tz::Tz {
    settings.display.timezone.parse().unwrap_or_else(|_| {
        log::warn!(
            "Unrecognized timezone '{}', falling back to Asia/Kolkata",
            settings.display.timezone
        );
        chrono_tz::Asia::Kolkata
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_zone_parses() {
        let settings = Settings::default();
        assert_eq!(display_zone(&settings), chrono_tz::Asia::Kolkata);
    }

    #[test]
    fn garbage_zone_falls_back() {
        let mut settings = Settings::default();
        settings.display.timezone = "Mars/Olympus_Mons".to_string();
        assert_eq!(display_zone(&settings), chrono_tz::Asia::Kolkata);
    }
}
