use chrono::DateTime;
use chrono_tz::Tz;

const MINUTE_FORMAT: &str = "%d-%m-%Y %I:%M %p";
const MICRO_FORMAT: &str = "%d-%m-%Y %I:%M:%S%.6f %p";

/// Human-readable duration from milliseconds, largest two non-zero
/// units. Days are hours/24, months a fixed 30 days, years 12 months;
/// approximate display only, not calendar arithmetic. Callers pass
/// non-negative values.
pub fn format_duration(milliseconds: i64) -> String {
    let seconds = milliseconds / 1000;
    if seconds < 60 {
        return format!("{} sec", seconds);
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{} min", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return if minutes % 60 != 0 {
            format!("{}h {}min", hours, minutes % 60)
        } else {
            format!("{}h", hours)
        };
    }

    let days = hours / 24;
    if days < 30 {
        return if hours % 24 != 0 {
            format!("{}d {}h", days, hours % 24)
        } else {
            format!("{}d", days)
        };
    }

    let months = days / 30;
    if months < 12 {
        return if days % 30 != 0 {
            format!("{}mo {}d", months, days % 30)
        } else {
            format!("{}mo", months)
        };
    }

    let years = months / 12;
    if months % 12 != 0 {
        format!("{}y {}mo", years, months % 12)
    } else {
        format!("{}y", years)
    }
}

/// Minute-precision rendering in the configured zone (snapshot keys and
/// first/last-seen columns).
pub fn format_minute(epoch_millis: i64, zone: &Tz) -> String {
    format_in_zone(epoch_millis, zone, MINUTE_FORMAT)
}

/// Microsecond-precision rendering, used for location keys so fixes a
/// few millis apart do not collide in the selector.
pub fn format_micro(epoch_millis: i64, zone: &Tz) -> String {
    format_in_zone(epoch_millis, zone, MICRO_FORMAT)
}

fn format_in_zone(epoch_millis: i64, zone: &Tz, pattern: &str) -> String {
    match DateTime::from_timestamp_millis(epoch_millis) {
        Some(utc) => utc.with_timezone(zone).format(pattern).to_string(),
        None => {
            log::warn!("Timestamp {} out of range, rendering raw", epoch_millis);
            epoch_millis.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KOLKATA: Tz = chrono_tz::Asia::Kolkata;

    #[test]
    fn duration_seconds_range() {
        assert_eq!(format_duration(0), "0 sec");
        assert_eq!(format_duration(999), "0 sec");
        assert_eq!(format_duration(59_999), "59 sec");
    }

    #[test]
    fn duration_minutes_range() {
        assert_eq!(format_duration(60_000), "1 min");
        assert_eq!(format_duration(3_599_999), "59 min");
    }

    #[test]
    fn duration_hours_omit_zero_minutes() {
        assert_eq!(format_duration(3_600_000), "1h");
        assert_eq!(format_duration(3_660_000), "1h 1min");
        assert_eq!(format_duration(23 * 3_600_000 + 59 * 60_000), "23h 59min");
    }

    #[test]
    fn duration_days_months_years() {
        let day = 86_400_000i64;
        assert_eq!(format_duration(day), "1d");
        assert_eq!(format_duration(day + 3_600_000), "1d 1h");
        assert_eq!(format_duration(30 * day), "1mo");
        assert_eq!(format_duration(31 * day), "1mo 1d");
        // 12 thirty-day months roll over into years
        assert_eq!(format_duration(360 * day), "1y");
        assert_eq!(format_duration(390 * day), "1y 1mo");
    }

    #[test]
    fn minute_format_adjusts_for_zone() {
        // Epoch is 05:30 in Kolkata, not 00:00
        assert_eq!(format_minute(0, &KOLKATA), "01-01-1970 05:30 AM");
        // 2023-11-14 22:13:20 UTC
        assert_eq!(format_minute(1_700_000_000_000, &KOLKATA), "15-11-2023 03:43 AM");
    }

    #[test]
    fn micro_format_distinguishes_close_fixes() {
        assert_eq!(format_micro(0, &KOLKATA), "01-01-1970 05:30:00.000000 AM");
        let a = format_micro(1_000, &KOLKATA);
        let b = format_micro(1_001, &KOLKATA);
        assert_ne!(a, b);
        // Both collapse to the same minute key
        assert_eq!(format_minute(1_000, &KOLKATA), format_minute(1_001, &KOLKATA));
    }
}
