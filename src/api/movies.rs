use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, ListQuery};
use crate::api::validation::{validate_limit, validate_release_year, validate_text};
use crate::db::{MovieActorRow, MovieRatingRow};
use crate::entities::movies;

/// Cap applied to the actor lookup, which has no pagination of its own.
const BY_ACTOR_LIMIT: u64 = 100;

#[derive(Deserialize)]
pub struct ByActorQuery {
    pub actor_name: String,
}

#[derive(Deserialize)]
pub struct TopRatedQuery {
    pub release_year: Option<i32>,
    pub genre: Option<String>,
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(page): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<movies::Model>>>, ApiError> {
    let limit = validate_limit(page.limit)?;
    let movies = state.store.list_movies(page.skip, limit).await?;
    Ok(Json(ApiResponse::success(movies)))
}

pub async fn movies_by_actor(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ByActorQuery>,
) -> Result<Json<ApiResponse<Vec<MovieActorRow>>>, ApiError> {
    let actor = validate_text("actor_name", &query.actor_name, 1, 50)?;
    let movies = state.store.movies_by_actor(actor, BY_ACTOR_LIMIT).await?;
    Ok(Json(ApiResponse::success(movies)))
}

/// Best-rated movie matching the optional filters. At most one row; an
/// empty list means nothing matched.
pub async fn top_rated_movie(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TopRatedQuery>,
) -> Result<Json<ApiResponse<Vec<MovieRatingRow>>>, ApiError> {
    if let Some(year) = query.release_year {
        validate_release_year(year)?;
    }
    if let Some(ref genre) = query.genre {
        validate_text("genre", genre, 1, 20)?;
    }

    let movies = state
        .store
        .top_rated_movie(query.release_year, query.genre.as_deref())
        .await?;
    Ok(Json(ApiResponse::success(movies)))
}
