//! Simulation API routes.
//!
//! Thin JSON surface over the mission simulator. Tick selection and
//! scenario overlays happen here, at the consumer boundary; the simulator
//! only ever sees (identifier, tick) pairs. Coordinate sanitization also
//! lives here: the simulator assumes finite numbers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use mission_sim::{
    asset_telemetry, mission_overview, projected_route, weather_alerts, GeoPoint,
    TelemetrySnapshot, WeatherAlert,
};

use crate::scenario::{
    apply_scenario_alerts, apply_scenario_telemetry, effective_tick, scenario_alert_bonus,
};
use crate::AppState;

/// Telemetry for one asset plus its projected route.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTelemetryResponse {
    #[serde(flatten)]
    pub telemetry: TelemetrySnapshot,
    pub route: Vec<GeoPoint>,
    pub tick: i64,
}

#[derive(Deserialize)]
pub struct AlertQuery {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsResponse {
    pub alerts: Vec<WeatherAlert>,
    pub tick: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsResponse {
    pub assets: Vec<TelemetrySnapshot>,
    pub tick: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub total_assets: usize,
    pub active_assets: usize,
    pub alert_count: usize,
    pub tick: i64,
    pub assets: Vec<TelemetrySnapshot>,
}

fn normalize_asset_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Telemetry + projected route for a single asset. Unknown assets are not
/// an error: the simulator's sentinel record comes back with
/// `status = "unknown"`.
pub async fn get_asset_telemetry(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
) -> Json<AssetTelemetryResponse> {
    let tick = effective_tick(&state.control);
    let scenario = state.control.get().scenario;

    let telemetry = apply_scenario_telemetry(
        scenario,
        asset_telemetry(&normalize_asset_id(&asset_id), tick),
    );
    let route = projected_route(telemetry.location, tick);

    Json(AssetTelemetryResponse {
        telemetry,
        route,
        tick,
    })
}

/// Active space-weather alerts near a coordinate, scenario-augmented.
pub async fn get_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> Result<Json<AlertsResponse>, (StatusCode, String)> {
    if !query.lat.is_finite() || !query.lng.is_finite() {
        return Err((
            StatusCode::BAD_REQUEST,
            "lat and lng must be finite".to_string(),
        ));
    }

    let tick = effective_tick(&state.control);
    let scenario = state.control.get().scenario;
    let alerts = apply_scenario_alerts(scenario, weather_alerts(query.lat, query.lng, tick));

    Ok(Json(AlertsResponse { alerts, tick }))
}

/// Scenario-adjusted telemetry for every registered asset.
pub async fn get_assets(State(state): State<AppState>) -> Json<AssetsResponse> {
    let tick = effective_tick(&state.control);
    let scenario = state.control.get().scenario;

    let assets = mission_overview(tick)
        .assets
        .into_iter()
        .map(|snapshot| apply_scenario_telemetry(scenario, snapshot))
        .collect();

    Json(AssetsResponse { assets, tick })
}

/// Fleet-level mission posture.
pub async fn get_overview(State(state): State<AppState>) -> Json<OverviewResponse> {
    let tick = effective_tick(&state.control);
    let scenario = state.control.get().scenario;

    let overview = mission_overview(tick);
    let assets = overview
        .assets
        .into_iter()
        .map(|snapshot| apply_scenario_telemetry(scenario, snapshot))
        .collect();

    Json(OverviewResponse {
        total_assets: overview.total_assets,
        active_assets: overview.active_assets,
        alert_count: overview.alert_count + scenario_alert_bonus(scenario),
        tick,
        assets,
    })
}

pub fn sim_routes(state: AppState) -> Router {
    Router::new()
        .route("/assets", get(get_assets))
        .route("/assets/:id/telemetry", get(get_asset_telemetry))
        .route("/alerts", get(get_alerts))
        .route("/overview", get(get_overview))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::REPLAY_TICK;
    use mission_control::{MissionControlStore, ScenarioId};
    use mission_sim::ASSET_BASELINES;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            control: Arc::new(MissionControlStore::new()),
        }
    }

    #[test]
    fn asset_ids_are_normalized() {
        assert_eq!(normalize_asset_id("  sat-07 "), "SAT-07");
        assert_eq!(normalize_asset_id("RELAY-3"), "RELAY-3");
    }

    #[tokio::test]
    async fn assets_endpoint_lists_the_whole_fleet() {
        let state = test_state();
        let Json(resp) = get_assets(State(state)).await;
        assert_eq!(resp.assets.len(), ASSET_BASELINES.len());
        assert_eq!(resp.tick, REPLAY_TICK);
        for base in ASSET_BASELINES {
            assert!(resp.assets.iter().any(|a| a.asset_id == base.asset_id));
        }
    }

    #[tokio::test]
    async fn assets_endpoint_applies_the_active_scenario() {
        let state = test_state();
        state.control.set_scenario(ScenarioId::FuelLeak);

        let Json(resp) = get_assets(State(state)).await;
        let sat = resp
            .assets
            .iter()
            .find(|a| a.asset_id == "SAT-07")
            .expect("SAT-07 present");
        assert_eq!(sat.status, "fuel-leak-containment");
    }
}
