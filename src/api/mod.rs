use axum::{
    Router,
    http::HeaderValue,
    response::Html,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;

mod error;
mod media;
mod movies;
mod predictions;
mod shows;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

pub struct AppState {
    pub store: Store,
}

impl AppState {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

const INDEX_HTML: &str = r#"<html>
    <head>
        <title>ReelBase</title>
    </head>
    <body>
        <h1>ReelBase catalog API</h1>
        <p>Available endpoints:</p>
        <ul>
            <li><a href="/movies">List movies</a></li>
            <li><a href="/movies/by_actor?actor_name=Nicolas%20Cage">Movies by actor (e.g. 'Nicolas Cage')</a></li>
            <li><a href="/movies/top_rated">Best rated movie</a></li>
            <li><a href="/shows">List shows</a></li>
            <li><a href="/shows/search">Search shows</a></li>
            <li><a href="/media">Combined media search</a></li>
            <li><a href="/predictions">Predictions (GET to list, POST to submit)</a></li>
        </ul>
    </body>
</html>
"#;

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn not_found() -> ApiError {
    ApiError::not_found("No such endpoint")
}

/// Builds the application router with CORS and request tracing applied.
pub fn router(state: Arc<AppState>, config: &Config) -> Router {
    let cors_origins = &config.server.cors_allowed_origins;
    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(index))
        .route("/movies", get(movies::list_movies))
        .route("/movies/by_actor", get(movies::movies_by_actor))
        .route("/movies/top_rated", get(movies::top_rated_movie))
        .route("/shows", get(shows::list_shows))
        .route("/shows/search", get(shows::search_shows))
        .route("/media", get(media::query_media))
        .route("/predictions", get(predictions::list_predictions))
        .route("/predictions", post(predictions::submit_prediction))
        .fallback(not_found)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
