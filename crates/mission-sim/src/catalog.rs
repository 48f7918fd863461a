//! Static registries backing the simulation.
//!
//! Asset baselines and the hazard catalog are fixed at compile time and
//! never mutated; all runtime variation is derived from (identifier, tick)
//! on top of these reference values.

use crate::{AlertSeverity, GeoPoint};

/// Static reference values for one known orbital asset or ground relay.
#[derive(Debug, Clone, Copy)]
pub struct AssetBaseline {
    pub asset_id: &'static str,
    pub base_lat: f64,
    pub base_lng: f64,
    /// Baseline fuel level, 0-100.
    pub base_fuel: f64,
    /// Baseline signal strength, 0-100.
    pub base_signal: f64,
    /// Status labels cycled through as the tick advances.
    pub status_cycle: &'static [&'static str],
}

pub const ASSET_BASELINES: &[AssetBaseline] = &[
    AssetBaseline {
        asset_id: "SAT-07",
        base_lat: 18.742,
        base_lng: -43.128,
        base_fuel: 61.0,
        base_signal: 78.0,
        status_cycle: &[
            "tracking-storm-edge",
            "tracking-storm-edge",
            "nominal",
            "nominal",
        ],
    },
    AssetBaseline {
        asset_id: "SAT-12",
        base_lat: 12.103,
        base_lng: -31.209,
        base_fuel: 84.0,
        base_signal: 93.0,
        status_cycle: &["nominal", "nominal", "nominal", "monitoring-flux"],
    },
    AssetBaseline {
        asset_id: "RELAY-3",
        base_lat: 24.882,
        base_lng: -17.55,
        base_fuel: 49.0,
        base_signal: 52.0,
        status_cycle: &[
            "degraded-uplink",
            "degraded-uplink",
            "stabilizing",
            "stabilizing",
        ],
    },
];

/// Look up the baseline for a known asset identifier.
pub fn asset_baseline(asset_id: &str) -> Option<&'static AssetBaseline> {
    ASSET_BASELINES.iter().find(|b| b.asset_id == asset_id)
}

/// One entry in the static space-weather hazard catalog.
#[derive(Debug, Clone, Copy)]
pub struct HazardDefinition {
    pub hazard_type: &'static str,
    pub severity: AlertSeverity,
    pub corridor: &'static str,
    pub region: &'static str,
    pub center: GeoPoint,
    /// Nominal hazard radius in degrees.
    pub radius_deg: f64,
    /// Baseline active-window duration in minutes.
    pub base_minutes: f64,
}

pub const HAZARD_CATALOG: &[HazardDefinition] = &[
    HazardDefinition {
        hazard_type: "Solar Particle Burst",
        severity: AlertSeverity::High,
        corridor: "Atlantic Relay Corridor",
        region: "Orbital Band 4",
        center: GeoPoint::new(18.9, -42.9),
        radius_deg: 1.15,
        base_minutes: 22.0,
    },
    HazardDefinition {
        hazard_type: "Radiation Spike",
        severity: AlertSeverity::Medium,
        corridor: "Orbital Band 4",
        region: "South Atlantic Sector",
        center: GeoPoint::new(19.1, -42.5),
        radius_deg: 0.95,
        base_minutes: 31.0,
    },
    HazardDefinition {
        hazard_type: "Geomagnetic Shear",
        severity: AlertSeverity::Medium,
        corridor: "Relay Arc East",
        region: "Ground-Relay Layer",
        center: GeoPoint::new(24.9, -17.4),
        radius_deg: 1.25,
        base_minutes: 14.0,
    },
    HazardDefinition {
        hazard_type: "Ionospheric Drift",
        severity: AlertSeverity::Low,
        corridor: "Northern Sync Window",
        region: "Band 2",
        center: GeoPoint::new(12.2, -31.0),
        radius_deg: 1.1,
        base_minutes: 19.0,
    },
    HazardDefinition {
        hazard_type: "Uplink Jitter Band",
        severity: AlertSeverity::Medium,
        corridor: "Ground-Alpha Uplink",
        region: "Antenna Mesh",
        center: GeoPoint::new(24.2, -18.1),
        radius_deg: 0.8,
        base_minutes: 11.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baselines_are_within_gauge_bounds() {
        for base in ASSET_BASELINES {
            assert!((0.0..=100.0).contains(&base.base_fuel), "{}", base.asset_id);
            assert!((0.0..=100.0).contains(&base.base_signal), "{}", base.asset_id);
            assert!(!base.status_cycle.is_empty(), "{}", base.asset_id);
        }
    }

    #[test]
    fn lookup_is_exact_match_only() {
        assert!(asset_baseline("SAT-07").is_some());
        assert!(asset_baseline("sat-07").is_none());
        assert!(asset_baseline("SAT-99").is_none());
    }
}
