//! Fleet-level mission posture aggregation.

use serde::{Deserialize, Serialize};

use crate::catalog::ASSET_BASELINES;
use crate::hazards::weather_alerts;
use crate::telemetry::{asset_telemetry, TelemetrySnapshot};
use crate::AlertSeverity;

/// Aggregate posture of every known asset at a single tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionOverview {
    pub total_assets: usize,
    /// Assets whose status does not report "offline".
    pub active_assets: usize,
    /// Non-low-severity alerts summed over every asset's location.
    pub alert_count: usize,
    pub assets: Vec<TelemetrySnapshot>,
    pub tick: i64,
}

/// Compute telemetry for the whole registry at `tick` and aggregate it.
pub fn mission_overview(tick: i64) -> MissionOverview {
    let assets: Vec<TelemetrySnapshot> = ASSET_BASELINES
        .iter()
        .map(|base| asset_telemetry(base.asset_id, tick))
        .collect();

    let active_assets = assets
        .iter()
        .filter(|asset| !asset.status.contains("offline"))
        .count();

    let alert_count = assets
        .iter()
        .map(|asset| {
            weather_alerts(asset.location.lat, asset.location.lng, tick)
                .iter()
                .filter(|alert| alert.severity != AlertSeverity::Low)
                .count()
        })
        .sum();

    MissionOverview {
        total_assets: assets.len(),
        active_assets,
        alert_count,
        assets,
        tick,
    }
}
