use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::pipeline::dispatch;
use crate::samples::SAMPLE_PACKAGES;
use crate::types::summary::Summary;

pub fn router() -> Router {
    Router::new()
        .route("/api/workout", post(workout))
        .route("/api/workouts", post(workouts))
        .route("/api/samples", get(samples))
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WorkoutRequest {
    workout_type: String,
    data: Vec<f64>,
}

#[derive(Serialize)]
struct WorkoutResponse {
    summary: Summary,
    message: String,
}

async fn workout(Json(request): Json<WorkoutRequest>) -> Result<Json<WorkoutResponse>, AppError> {
    Ok(Json(summarize(&request.workout_type, &request.data)?))
}

async fn workouts(
    Json(requests): Json<Vec<WorkoutRequest>>,
) -> Result<Json<Vec<WorkoutResponse>>, AppError> {
    if requests.is_empty() {
        return Err(AppError::BadRequest("No workout packages provided".to_string()));
    }

    let responses = requests
        .iter()
        .map(|request| summarize(&request.workout_type, &request.data))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("Summarized {} workout packages", responses.len());

    Ok(Json(responses))
}

async fn samples() -> Result<Json<Vec<WorkoutResponse>>, AppError> {
    let responses = SAMPLE_PACKAGES
        .iter()
        .map(|(workout_type, data)| summarize(workout_type, data))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(responses))
}

fn summarize(workout_type: &str, data: &[f64]) -> Result<WorkoutResponse, AppError> {
    let summary = dispatch::read_package(workout_type, data)
        .and_then(|workout| workout.show_training_info())
        .map_err(|err| {
            tracing::warn!("Rejected {} package {:?}: {}", workout_type, data, err);
            err
        })?;

    Ok(WorkoutResponse {
        message: summary.message(),
        summary,
    })
}
