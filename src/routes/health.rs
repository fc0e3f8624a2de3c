use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::types::workout::WorkoutKind;

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    workout_types: Vec<&'static str>,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        workout_types: WorkoutKind::ALL.iter().map(|kind| kind.code()).collect(),
    })
}
