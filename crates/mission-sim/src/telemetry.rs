//! Per-asset telemetry derivation.
//!
//! A snapshot is recomputed from scratch on every call: baseline values
//! from the catalog plus seeded drift keyed on (asset id, tick). Nothing
//! is cached or persisted, so two calls with the same inputs are
//! byte-identical.

use serde::{Deserialize, Serialize};

use crate::catalog::{asset_baseline, AssetBaseline};
use crate::seed::{round3, seeded_unit, stable_hash};
use crate::{GeoPoint, TelemetryTrend};

/// Fuel never drains below this floor in the simulation.
const FUEL_FLOOR: f64 = 5.0;
/// Signal strength never degrades below this floor.
const SIGNAL_FLOOR: f64 = 10.0;
/// Signal below this, or fuel below 35, classifies as rising risk.
const RISK_SIGNAL_THRESHOLD: u8 = 60;
const RISK_FUEL_THRESHOLD: u8 = 35;

/// Derived operational telemetry for one asset at one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetrySnapshot {
    pub asset_id: String,
    pub status: String,
    pub location: GeoPoint,
    /// Remaining fuel, 0-100.
    pub fuel: u8,
    /// Link signal strength, 0-100.
    pub signal_strength: u8,
    /// Synthetic recency string, cosmetic only.
    pub last_check_in: String,
    pub trend: TelemetryTrend,
}

impl TelemetrySnapshot {
    /// Sentinel record for an unrecognized asset identifier. Callers can
    /// detect it via `status == "unknown"`.
    fn unknown(asset_id: &str) -> Self {
        Self {
            asset_id: asset_id.to_string(),
            status: "unknown".to_string(),
            location: GeoPoint::new(0.0, 0.0),
            fuel: 0,
            signal_strength: 0,
            last_check_in: "never".to_string(),
            trend: TelemetryTrend::Stable,
        }
    }
}

fn location_drift(base: &AssetBaseline, tick: i64) -> GeoPoint {
    let seed = f64::from(stable_hash(base.asset_id));
    let tick = tick as f64;
    let lat_offset = (seeded_unit(seed + tick * 0.71) - 0.5) * 0.6;
    let lng_offset = (seeded_unit(seed + tick * 1.13) - 0.5) * 0.9;
    GeoPoint::new(
        round3(base.base_lat + lat_offset),
        round3(base.base_lng + lng_offset),
    )
}

/// Simulate telemetry for `asset_id` at `tick`.
///
/// Total over its input domain: an unknown identifier yields the sentinel
/// "unknown" record rather than an error.
pub fn asset_telemetry(asset_id: &str, tick: i64) -> TelemetrySnapshot {
    let Some(base) = asset_baseline(asset_id) else {
        return TelemetrySnapshot::unknown(asset_id);
    };

    let seed = stable_hash(asset_id);
    let cycle_len = base.status_cycle.len() as i64;
    let cycle_index = (tick + i64::from(seed % 11)).rem_euclid(cycle_len) as usize;

    let seed_f = f64::from(seed);
    let tick_f = tick as f64;

    // Sawtooth decay keyed on (tick + seed) mod 18, plus small jitter.
    let decay = (tick + i64::from(seed)).rem_euclid(18) as f64 * 0.7;
    let fuel_jitter = (seeded_unit(seed_f + tick_f * 0.17) - 0.5) * 3.0;
    let fuel = (base.base_fuel - decay + fuel_jitter)
        .round()
        .clamp(FUEL_FLOOR, 100.0) as u8;

    let signal_jitter = (seeded_unit(seed_f + tick_f * 0.43) - 0.5) * 16.0;
    let signal_strength = (base.base_signal + signal_jitter)
        .round()
        .clamp(SIGNAL_FLOOR, 100.0) as u8;

    // Rising risk takes priority over recovery.
    let trend = if signal_strength < RISK_SIGNAL_THRESHOLD || fuel < RISK_FUEL_THRESHOLD {
        TelemetryTrend::RisingRisk
    } else if f64::from(signal_strength) > base.base_signal
        && f64::from(fuel) > base.base_fuel - 8.0
    {
        TelemetryTrend::Recovering
    } else {
        TelemetryTrend::Stable
    };

    let check_in_sec = 2 + (i64::from(seed) + tick * 7).rem_euclid(38);

    TelemetrySnapshot {
        asset_id: asset_id.to_string(),
        status: base.status_cycle[cycle_index].to_string(),
        location: location_drift(base, tick),
        fuel,
        signal_strength,
        last_check_in: format!("{check_in_sec} sec ago"),
        trend,
    }
}
