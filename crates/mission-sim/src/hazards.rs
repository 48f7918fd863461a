//! Hazard alert selection and route projection.
//!
//! Alerts are chosen by weighted nearest-hazard selection: distance to each
//! catalog entry in degree-space, converted to an edge margin against the
//! hazard radius, jittered per tick, then the top two survivors are kept.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::HAZARD_CATALOG;
use crate::seed::{round3, seeded_unit};
use crate::{AlertSeverity, GeoPoint};

/// How far outside a hazard's nominal radius a query point may sit and
/// still qualify, in degrees. Tuned for demo plausibility.
pub const EDGE_TOLERANCE: f64 = -0.25;
/// Span of the per-hazard, per-tick jitter added to the edge margin.
const EDGE_JITTER_SPAN: f64 = 0.4;
/// Span of the seeded drift applied to a hazard's active window, minutes.
const WINDOW_DRIFT_SPAN: f64 = 6.0;
/// Active windows never report shorter than this many minutes.
const MIN_WINDOW_MINUTES: f64 = 6.0;
/// At most this many alerts are surfaced per query.
const MAX_ALERTS: usize = 2;

/// An active space-weather alert near a queried coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAlert {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub severity: AlertSeverity,
    pub corridor: String,
    pub region: String,
    /// Formatted remaining active window, e.g. `"22 min"`.
    pub active_window: String,
}

fn format_window(minutes: f64) -> String {
    format!("{} min", minutes.round().max(MIN_WINDOW_MINUTES) as i64)
}

/// Rank the hazard catalog against `(lat, lng)` at `tick` and return the
/// zero to two most relevant alerts, strongest first.
pub fn weather_alerts(lat: f64, lng: f64, tick: i64) -> Vec<WeatherAlert> {
    let query = GeoPoint::new(lat, lng);
    let tick_f = tick as f64;

    let mut scored: Vec<(f64, usize)> = HAZARD_CATALOG
        .iter()
        .enumerate()
        .filter_map(|(index, hazard)| {
            let edge = hazard.radius_deg - query.distance_deg(&hazard.center);
            let jitter =
                (seeded_unit(tick_f * 0.31 + index as f64 * 5.7) - 0.5) * EDGE_JITTER_SPAN;
            let weight = edge + jitter;
            (weight > EDGE_TOLERANCE).then_some((weight, index))
        })
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.truncate(MAX_ALERTS);

    scored
        .into_iter()
        .map(|(_, index)| {
            let hazard = &HAZARD_CATALOG[index];
            let drift =
                (seeded_unit(tick_f * 0.9 + index as f64 * 13.0) - 0.5) * WINDOW_DRIFT_SPAN;
            WeatherAlert {
                alert_type: hazard.hazard_type.to_string(),
                severity: hazard.severity,
                corridor: hazard.corridor.to_string(),
                region: hazard.region.to_string(),
                active_window: format_window(hazard.base_minutes + drift),
            }
        })
        .collect()
}

/// Project a short route from `location`: the starting point itself plus
/// two forward-drifting waypoints of increasing offset. Always three
/// points, deterministic per (location, tick).
pub fn projected_route(location: GeoPoint, tick: i64) -> Vec<GeoPoint> {
    let tick_f = tick as f64;
    let drift_a = seeded_unit(tick_f * 0.23) - 0.5;
    let drift_b = seeded_unit(tick_f * 0.67) - 0.5;
    vec![
        GeoPoint::new(round3(location.lat), round3(location.lng)),
        GeoPoint::new(
            round3(location.lat + 0.24 + drift_a * 0.12),
            round3(location.lng + 0.31 - drift_b * 0.14),
        ),
        GeoPoint::new(
            round3(location.lat + 0.49 + drift_a * 0.18),
            round3(location.lng + 0.79 - drift_b * 0.2),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn window_minutes(alert: &WeatherAlert) -> i64 {
        alert
            .active_window
            .strip_suffix(" min")
            .and_then(|m| m.parse().ok())
            .unwrap_or_else(|| panic!("malformed window: {}", alert.active_window))
    }

    #[test]
    fn alerts_near_a_hazard_center_include_it() {
        // Query directly on the Solar Particle Burst center; with jitter
        // span 0.4 its weight is at least 1.15 - 0.2, far above tolerance.
        let alerts = weather_alerts(18.9, -42.9, 12);
        assert!(!alerts.is_empty());
        assert!(alerts.iter().any(|a| a.alert_type == "Solar Particle Burst"
            || a.alert_type == "Radiation Spike"));
    }

    #[test]
    fn far_away_query_yields_no_alerts() {
        let alerts = weather_alerts(-60.0, 120.0, 12);
        assert!(alerts.is_empty());
    }

    #[test]
    fn alerts_are_deterministic_per_tick() {
        assert_eq!(weather_alerts(18.9, -42.9, 12), weather_alerts(18.9, -42.9, 12));
    }

    proptest! {
        #[test]
        fn at_most_two_alerts_with_floored_windows(
            lat in -90.0_f64..90.0,
            lng in -180.0_f64..180.0,
            tick in -10_000_i64..10_000,
        ) {
            let alerts = weather_alerts(lat, lng, tick);
            prop_assert!(alerts.len() <= 2);
            for alert in &alerts {
                prop_assert!(window_minutes(alert) >= 6);
            }
        }

        #[test]
        fn route_starts_at_the_query_point(
            lat in -80.0_f64..80.0,
            lng in -170.0_f64..170.0,
            tick in -10_000_i64..10_000,
        ) {
            let route = projected_route(GeoPoint::new(lat, lng), tick);
            prop_assert_eq!(route.len(), 3);
            prop_assert!((route[0].lat - lat).abs() <= 0.0005);
            prop_assert!((route[0].lng - lng).abs() <= 0.0005);
        }

        #[test]
        fn route_drifts_outward(
            lat in -80.0_f64..80.0,
            lng in -170.0_f64..170.0,
            tick in -10_000_i64..10_000,
        ) {
            // Drift spans are small against the +0.24/+0.49 base offsets,
            // so the waypoints advance strictly at every tick.
            let route = projected_route(GeoPoint::new(lat, lng), tick);
            prop_assert!(route[1].lat > route[0].lat);
            prop_assert!(route[2].lat > route[1].lat);
            prop_assert!(route[1].lng > route[0].lng);
            prop_assert!(route[2].lng > route[1].lng);
        }
    }
}
