use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mission_control::MissionControlStore;

mod control_routes;
mod routes;
mod scenario;

#[derive(Clone)]
pub struct AppState {
    pub control: Arc<MissionControlStore>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "nexus_gateway=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let control = Arc::new(MissionControlStore::new());

    // Log accepted control changes for the operator audit trail.
    control.subscribe(|state| {
        tracing::debug!(
            feed_mode = %state.feed_mode,
            scenario = %state.scenario,
            "mission control state changed"
        );
    });

    let state = AppState { control };

    let api_routes = Router::new()
        .merge(routes::sim_routes(state.clone()))
        .merge(control_routes::control_routes(state));

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_routes)
        .layer(CorsLayer::permissive());

    let port = std::env::var("NEXUS_GATEWAY_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "18610".to_string());
    let addr = format!("0.0.0.0:{}", port);

    tracing::info!("🛰️  Nexus Gateway starting on {}", addr);
    tracing::info!("   Fleet: {} registered assets", mission_sim::ASSET_BASELINES.len());
    tracing::info!("   Hazard catalog: {} anomalies", mission_sim::HAZARD_CATALOG.len());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "nexus-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
