use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::types::default_limit;
use super::{ApiError, ApiResponse, AppState, ListQuery};
use crate::api::validation::{validate_limit, validate_release_year, validate_text, validate_title};
use crate::db::ShowGenreRow;
use crate::entities::shows;

#[derive(Deserialize)]
pub struct ShowSearchQuery {
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub age_certification: Option<String>,
    pub genre: Option<String>,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

pub async fn list_shows(
    State(state): State<Arc<AppState>>,
    Query(page): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<shows::Model>>>, ApiError> {
    let limit = validate_limit(page.limit)?;
    let shows = state.store.list_shows(page.skip, limit).await?;
    Ok(Json(ApiResponse::success(shows)))
}

/// Detailed show search. Results come through the genre join, so a show
/// with several genres appears once per genre.
pub async fn search_shows(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ShowSearchQuery>,
) -> Result<Json<ApiResponse<Vec<ShowGenreRow>>>, ApiError> {
    if let Some(ref title) = query.title {
        validate_title(title)?;
    }
    if let Some(year) = query.release_year {
        validate_release_year(year)?;
    }
    if let Some(ref cert) = query.age_certification {
        validate_text("age_certification", cert, 1, 10)?;
    }
    if let Some(ref genre) = query.genre {
        validate_text("genre", genre, 1, 20)?;
    }
    let limit = validate_limit(query.limit)?;

    let shows = state
        .store
        .search_shows(
            query.title.as_deref(),
            query.release_year,
            query.age_certification.as_deref(),
            query.genre.as_deref(),
            query.skip,
            limit,
        )
        .await?;
    Ok(Json(ApiResponse::success(shows)))
}
