//! Mission control state routes.
//!
//! GET/PUT surface over the feed-mode/scenario store. Enum values travel
//! as their wire spellings; unknown values are rejected here with 400,
//! keeping the store itself infallible.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use mission_control::MissionControlState;

use crate::AppState;

#[derive(Deserialize)]
pub struct SetFeedModeRequest {
    pub mode: String,
}

#[derive(Deserialize)]
pub struct SetScenarioRequest {
    pub scenario: String,
}

pub async fn get_control_state(State(state): State<AppState>) -> Json<MissionControlState> {
    Json(state.control.get())
}

pub async fn set_feed_mode(
    State(state): State<AppState>,
    Json(req): Json<SetFeedModeRequest>,
) -> Result<Json<MissionControlState>, (StatusCode, String)> {
    let mode = req
        .mode
        .parse()
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("{e}")))?;

    state.control.set_feed_mode(mode);
    tracing::info!(feed_mode = %mode, "feed mode updated");

    Ok(Json(state.control.get()))
}

pub async fn set_scenario(
    State(state): State<AppState>,
    Json(req): Json<SetScenarioRequest>,
) -> Result<Json<MissionControlState>, (StatusCode, String)> {
    let scenario = req
        .scenario
        .parse()
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("{e}")))?;

    state.control.set_scenario(scenario);
    tracing::info!(scenario = %scenario, "scenario updated");

    Ok(Json(state.control.get()))
}

pub fn control_routes(state: AppState) -> Router {
    Router::new()
        .route("/control", get(get_control_state))
        .route("/control/feed-mode", put(set_feed_mode))
        .route("/control/scenario", put(set_scenario))
        .with_state(state)
}
