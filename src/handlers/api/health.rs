use axum::Json;

use crate::data::models::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
