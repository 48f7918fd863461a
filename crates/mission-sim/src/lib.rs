//! Mission Simulation Library
//!
//! Deterministic telemetry, space-weather hazard, and route simulation for
//! the Nexus fleet. Every function here is a pure function of an entity
//! identifier and a discrete time tick, so the same inputs always produce
//! the same output: demos replay identically and tests never flake.
//!
//! Time enters only through tick quantization ([`simulation_tick`]); there
//! are no timers, no external randomness sources, and no I/O.

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod hazards;
pub mod overview;
pub mod telemetry;

mod seed;

pub use catalog::{asset_baseline, AssetBaseline, HazardDefinition, ASSET_BASELINES, HAZARD_CATALOG};
pub use hazards::{projected_route, weather_alerts, WeatherAlert, EDGE_TOLERANCE};
pub use overview::{mission_overview, MissionOverview};
pub use telemetry::{asset_telemetry, TelemetrySnapshot};

/// Width of one simulation window in milliseconds. All callers that want
/// live data quantize wall-clock time with this window, so rapid repeated
/// calls inside one window render identical values.
pub const SIM_WINDOW_MS: i64 = 45_000;

/// Quantize a millisecond timestamp into a discrete simulation tick.
///
/// Constant for all timestamps within one window, increases by exactly one
/// at each window boundary.
pub fn simulation_tick(now_ms: i64, window_ms: i64) -> i64 {
    now_ms.div_euclid(window_ms)
}

/// The live tick for the current wall-clock time and the default window.
pub fn current_tick() -> i64 {
    simulation_tick(Utc::now().timestamp_millis(), SIM_WINDOW_MS)
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Euclidean distance in degree-space. This is a stylized simulation,
    /// not a geodesy system; great-circle accuracy is not a goal.
    pub fn distance_deg(&self, other: &GeoPoint) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lng = self.lng - other.lng;
        (d_lat * d_lat + d_lng * d_lng).sqrt()
    }
}

/// Severity of a simulated space-weather hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

/// Risk trend classification attached to every telemetry snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TelemetryTrend {
    Stable,
    RisingRisk,
    Recovering,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tick_is_constant_within_a_window() {
        let k = 7_i64;
        let start = k * SIM_WINDOW_MS;
        assert_eq!(simulation_tick(start, SIM_WINDOW_MS), k);
        assert_eq!(simulation_tick(start + 1, SIM_WINDOW_MS), k);
        assert_eq!(simulation_tick(start + SIM_WINDOW_MS - 1, SIM_WINDOW_MS), k);
        assert_eq!(simulation_tick(start + SIM_WINDOW_MS, SIM_WINDOW_MS), k + 1);
    }

    proptest! {
        #[test]
        fn tick_increments_exactly_once_per_boundary(k in 0_i64..1_000_000, offset in 0_i64..SIM_WINDOW_MS) {
            let t = k * SIM_WINDOW_MS + offset;
            prop_assert_eq!(simulation_tick(t, SIM_WINDOW_MS), k);
        }
    }

    #[test]
    fn degree_space_distance() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert!((a.distance_deg(&b) - 5.0).abs() < 1e-12);
    }
}
