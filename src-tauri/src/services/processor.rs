use chrono_tz::Tz;

use crate::models::{
    DisplayLocationPoint, DisplaySnapshot, DisplayUsageRecord, LocationPoint, LookupSettings,
    RawSnapshot, UsageRecord,
};
use crate::services::metadata::{AppMeta, MetadataResolver};
use crate::utils::time;

/// Reshape one synced snapshot for display.
///
/// Zero-foreground entries are dropped (the package was registered but
/// never actually in front of the user), survivors are enriched with
/// resolved metadata and formatted timestamps, and the result is sorted
/// by foreground time descending. Returns None when nothing survives,
/// in which case the snapshot is omitted from the listing entirely.
pub async fn transform_snapshot(
    snapshot: &RawSnapshot,
    resolver: &MetadataResolver,
    lookup: &LookupSettings,
    zone: &Tz,
) -> Option<DisplaySnapshot> {
    let mut records = Vec::new();

    for raw in &snapshot.usage_stats {
        let record: UsageRecord = match serde_json::from_value(raw.clone()) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Skipping malformed usage record: {}", e);
                continue;
            }
        };

        if record.total_time_in_foreground <= 0 {
            continue;
        }

        let meta = if lookup.enabled {
            resolver.resolve(&record.package_name, lookup).await
        } else {
            AppMeta {
                display_name: record.package_name.clone(),
                icon_url: None,
            }
        };

        records.push(DisplayUsageRecord {
            display_name: meta.display_name,
            icon_url: meta.icon_url,
            total_foreground_ms: record.total_time_in_foreground,
            foreground_display: time::format_duration(record.total_time_in_foreground),
            first_seen: time::format_minute(record.first_time_stamp, zone),
            last_seen: time::format_minute(record.last_time_stamp, zone),
        });
    }

    // Stable sort: equal durations keep their document order
    records.sort_by(|a, b| b.total_foreground_ms.cmp(&a.total_foreground_ms));

    if records.is_empty() {
        return None;
    }

    Some(DisplaySnapshot {
        display_timestamp: time::format_minute(snapshot.current_timestamp, zone),
        records,
    })
}

/// Reshape the full store query result. Input order (newest capture
/// first, as queried) is preserved; snapshots with nothing to show are
/// skipped.
pub async fn process_snapshots(
    snapshots: &[RawSnapshot],
    resolver: &MetadataResolver,
    lookup: &LookupSettings,
    zone: &Tz,
) -> Vec<DisplaySnapshot> {
    let mut processed = Vec::new();

    for snapshot in snapshots {
        if let Some(display) = transform_snapshot(snapshot, resolver, lookup, zone).await {
            processed.push(display);
        }
    }

    processed
}

/// Location fixes map one-to-one: every stored point is shown, nothing
/// is filtered, coordinates pass through unchanged.
pub fn process_locations(points: &[LocationPoint], zone: &Tz) -> Vec<DisplayLocationPoint> {
    points
        .iter()
        .map(|point| DisplayLocationPoint {
            display_timestamp: time::format_micro(point.epoch_millis, zone),
            latitude: point.latitude,
            longitude: point.longitude,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const KOLKATA: Tz = chrono_tz::Asia::Kolkata;

    fn offline() -> (MetadataResolver, LookupSettings) {
        // Lookup disabled: records keep their package identifiers and
        // no network is touched.
        let lookup = LookupSettings {
            enabled: false,
            ..LookupSettings::default()
        };
        (MetadataResolver::with_endpoint("not a valid url"), lookup)
    }

    fn record(package: &str, foreground_ms: i64) -> serde_json::Value {
        json!({
            "packageName": package,
            "totalTimeInForeground": foreground_ms,
            "firstTimeStamp": 1_700_000_000_000i64,
            "lastTimeStamp": 1_700_000_600_000i64,
        })
    }

    fn snapshot(records: Vec<serde_json::Value>) -> RawSnapshot {
        RawSnapshot {
            current_timestamp: 1_700_000_000_000,
            usage_stats: records,
        }
    }

    #[tokio::test]
    async fn filters_zero_and_sorts_descending() {
        let (resolver, lookup) = offline();
        let snap = snapshot(vec![
            record("a", 0),
            record("b", 120_000),
            record("c", 600_000),
        ]);

        let display = transform_snapshot(&snap, &resolver, &lookup, &KOLKATA)
            .await
            .unwrap();

        assert_eq!(display.records.len(), 2);
        assert_eq!(display.records[0].display_name, "c");
        assert_eq!(display.records[0].total_foreground_ms, 600_000);
        assert_eq!(display.records[0].foreground_display, "10 min");
        assert_eq!(display.records[1].display_name, "b");
        assert_eq!(display.records[1].total_foreground_ms, 120_000);
        assert!(display.records.iter().all(|r| r.total_foreground_ms > 0));
    }

    #[tokio::test]
    async fn equal_durations_keep_document_order() {
        let (resolver, lookup) = offline();
        let snap = snapshot(vec![
            record("first", 60_000),
            record("second", 60_000),
            record("top", 120_000),
        ]);

        let display = transform_snapshot(&snap, &resolver, &lookup, &KOLKATA)
            .await
            .unwrap();

        let names: Vec<&str> = display.records.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["top", "first", "second"]);
    }

    #[tokio::test]
    async fn all_zero_snapshot_is_dropped() {
        let (resolver, lookup) = offline();
        let snap = snapshot(vec![record("a", 0), record("b", 0)]);

        assert!(transform_snapshot(&snap, &resolver, &lookup, &KOLKATA)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn malformed_record_is_skipped_not_fatal() {
        let (resolver, lookup) = offline();
        let snap = snapshot(vec![
            json!({"packageName": "broken"}),
            record("ok", 60_000),
        ]);

        let display = transform_snapshot(&snap, &resolver, &lookup, &KOLKATA)
            .await
            .unwrap();
        assert_eq!(display.records.len(), 1);
        assert_eq!(display.records[0].display_name, "ok");
    }

    #[tokio::test]
    async fn empty_snapshots_do_not_appear_in_listing() {
        let (resolver, lookup) = offline();
        let snapshots = vec![
            snapshot(vec![record("a", 60_000)]),
            snapshot(vec![record("b", 0)]),
            snapshot(vec![record("c", 30_000)]),
        ];

        let processed = process_snapshots(&snapshots, &resolver, &lookup, &KOLKATA).await;
        assert_eq!(processed.len(), 2);
        assert_eq!(processed[0].records[0].display_name, "a");
        assert_eq!(processed[1].records[0].display_name, "c");
    }

    #[tokio::test]
    async fn failing_lookup_still_yields_records() {
        let (resolver, _) = offline();
        let lookup = LookupSettings::default(); // enabled, but endpoint is dead
        let snap = snapshot(vec![record("com.example.app", 60_000)]);

        let display = transform_snapshot(&snap, &resolver, &lookup, &KOLKATA)
            .await
            .unwrap();
        assert_eq!(display.records[0].display_name, "com.example.app");
        assert_eq!(display.records[0].icon_url, None);
    }

    #[test]
    fn locations_pass_through_one_to_one() {
        let points = vec![
            LocationPoint { epoch_millis: 2_000, latitude: 13.08, longitude: 80.27 },
            LocationPoint { epoch_millis: 1_000, latitude: 12.97, longitude: 77.59 },
        ];

        let display = process_locations(&points, &KOLKATA);
        assert_eq!(display.len(), points.len());
        assert_eq!(display[0].latitude, 13.08);
        assert_eq!(display[1].longitude, 77.59);
        assert_ne!(display[0].display_timestamp, display[1].display_timestamp);
    }
}
