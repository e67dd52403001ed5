use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::types::default_limit;
use super::{ApiError, ApiResponse, AppState};
use crate::api::validation::{validate_limit, validate_release_year, validate_text, validate_title};
use crate::db::{MediaFilter, MediaRow};

#[derive(Deserialize)]
pub struct MediaQuery {
    pub media_type: Option<String>,
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub age_certification: Option<String>,
    pub genre: Option<String>,
    pub country: Option<String>,
    pub director: Option<String>,
    pub actor: Option<String>,
    pub character: Option<String>,
    pub imdb_score: Option<f64>,
    pub imdb_votes: Option<i64>,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

/// Combined movie and show search over the denormalized view. Text
/// filters match substrings, score and votes filter strictly above the
/// given value.
pub async fn query_media(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MediaQuery>,
) -> Result<Json<ApiResponse<Vec<MediaRow>>>, ApiError> {
    if let Some(ref media_type) = query.media_type {
        validate_text("media_type", media_type, 1, 10)?;
    }
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
    if let Some(ref country) = query.country {
        validate_text("country", country, 1, 10)?;
    }
    if let Some(ref director) = query.director {
        validate_text("director", director, 1, 50)?;
    }
    if let Some(ref actor) = query.actor {
        validate_text("actor", actor, 1, 50)?;
    }
    if let Some(ref character) = query.character {
        validate_text("character", character, 1, 50)?;
    }
    let limit = validate_limit(query.limit)?;

    let filter = MediaFilter {
        media_type: query.media_type,
        title: query.title,
        release_year: query.release_year,
        age_certification: query.age_certification,
        genre: query.genre,
        country: query.country,
        director: query.director,
        actor: query.actor,
        character: query.character,
        imdb_score: query.imdb_score,
        imdb_votes: query.imdb_votes,
    };

    let rows = state.store.query_media(&filter, query.skip, limit).await?;
    Ok(Json(ApiResponse::success(rows)))
}
