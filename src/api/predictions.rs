use axum::{
    Json,
    extract::State,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use super::{ApiError, ApiResponse, AppState};
use crate::api::validation::{validate_prediction_value, validate_user_id};
use crate::entities::predictions;

#[derive(Debug, Deserialize)]
pub struct PredictionRequest {
    pub user_id: String,
    pub prediction_value: f64,
}

/// Appends a prediction and returns the stored record, including its
/// assigned id and timestamp.
pub async fn submit_prediction(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<ApiResponse<predictions::Model>>, ApiError> {
    let user_id = validate_user_id(&request.user_id)?;
    let value = validate_prediction_value(request.prediction_value)?;

    let stored = state.store.add_prediction(user_id, value).await?;
    info!(
        prediction_id = stored.index,
        user_id = %stored.user_id,
        "Stored prediction"
    );
    Ok(Json(ApiResponse::success(stored)))
}

pub async fn list_predictions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<predictions::Model>>>, ApiError> {
    let predictions = state.store.list_predictions().await?;
    Ok(Json(ApiResponse::success(predictions)))
}
