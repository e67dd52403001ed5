//! HTTP-level tests for the catalog API. Each test spins up a router over a
//! freshly ingested temp database and drives it with `oneshot` requests.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use reelbase::Config;
use reelbase::api::{self, AppState};
use reelbase::db::Store;
use reelbase::ingest;

const TITLES_CSV: &str = r#"id,title,type,release_year,age_certification,runtime,genres,production_countries,seasons,imdb_id,imdb_score,imdb_votes
tm1,The Matrix,MOVIE,1999,R,136,"['action', 'scifi', 'thriller']","['US']",,tt0133093,8.7,1800000.0
tm2,Paper Lives,MOVIE,2021,,97,"['drama']","['TR']",,tt11827628,6.4,4700.0
ts1,Dark,SHOW,2017,TV-MA,60,"['scifi', 'drama']","['DE']",3.0,tt5753856,8.7,344000.0
ts2,Quiet Pilot,SHOW,2020,,30,[],[],1.0,,,
"#;

const CREDITS_CSV: &str = r#"person_id,id,name,character,role
101,tm1,Keanu Reeves,Neo,ACTOR
102,tm1,Carrie-Anne Moss,Trinity,ACTOR
201,tm1,Lana Wachowski,,DIRECTOR
103,ts1,Louis Hofmann,Jonas Kahnwald / Adult Jonas,ACTOR
101,tm2,Keanu Reeves,Cameo,ACTOR
"#;

async fn spawn_app() -> Router {
    let dir = std::env::temp_dir().join(format!("reelbase-api-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();

    let titles = dir.join("raw_titles.csv");
    let credits = dir.join("raw_credits.csv");
    std::fs::write(&titles, TITLES_CSV).unwrap();
    std::fs::write(&credits, CREDITS_CSV).unwrap();

    let db_path = dir.join("catalog.db");
    let store = Store::new(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("Failed to open store");
    ingest::run(&store, &titles, &credits)
        .await
        .expect("Failed to ingest fixture");

    let config = Config::default();
    api::router(Arc::new(AppState::new(store)), &config)
}

#[tokio::test]
async fn index_page_lists_endpoints() {
    let app = spawn_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("/movies/by_actor"));
    assert!(html.contains("/predictions"));
}

#[tokio::test]
async fn list_movies_returns_catalog_in_order() {
    let app = spawn_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/movies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body_json["success"], true);
    let data = body_json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["index"], 1);
    assert_eq!(data[0]["title"], "The Matrix");
    assert_eq!(data[1]["movie_id"], "tm2");
}

#[tokio::test]
async fn list_movies_paginates() {
    let app = spawn_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/movies?skip=1&limit=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let data = body_json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["movie_id"], "tm2");
}

#[tokio::test]
async fn rejects_out_of_range_limit() {
    let app = spawn_app().await;

    for uri in ["/movies?limit=0", "/movies?limit=1001"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body_json["success"], false);
        assert!(body_json["error"].as_str().unwrap().contains("limit"));
    }
}

#[tokio::test]
async fn movies_by_actor_requires_name() {
    let app = spawn_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/movies/by_actor")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn movies_by_actor_filters_by_name() {
    let app = spawn_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/movies/by_actor?actor_name=Keanu")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let data = body_json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    for row in data {
        assert_eq!(row["actor"], "Keanu Reeves");
    }
}

#[tokio::test]
async fn top_rated_movie_overall_and_by_genre() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/movies/top_rated")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["data"][0]["title"], "The Matrix");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/movies/top_rated?genre=drama")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["data"][0]["title"], "Paper Lives");

    // No movie from that year; an empty list, not an error.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/movies/top_rated?release_year=1950")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["success"], true);
    assert_eq!(body_json["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn top_rated_rejects_prehistoric_year() {
    let app = spawn_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/movies/top_rated?release_year=1700")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["success"], false);
    assert!(body_json["error"].as_str().unwrap().contains("release_year"));
}

#[tokio::test]
async fn list_shows_includes_seasons() {
    let app = spawn_app().await;

    let response = app
        .oneshot(Request::builder().uri("/shows").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let data = body_json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    let dark = data.iter().find(|r| r["show_id"] == "ts1").unwrap();
    assert_eq!(dark["seasons"], 3);
}

#[tokio::test]
async fn show_search_repeats_per_genre() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/shows/search")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let data = body_json["data"].as_array().unwrap();
    let dark_rows = data.iter().filter(|r| r["show_id"] == "ts1").count();
    assert_eq!(dark_rows, 2, "one row per genre");
    assert!(data.iter().all(|r| r["show_id"] != "ts2"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/shows/search?title=Dar&genre=scifi")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let data = body_json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Dark");
    assert_eq!(data[0]["genre"], "scifi");
}

#[tokio::test]
async fn show_search_rejects_short_title() {
    let app = spawn_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/shows/search?title=Da")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["success"], false);
    assert!(body_json["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn media_combines_filters_across_joins() {
    let app = spawn_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/media?actor=Keanu&genre=action")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let data = body_json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "The Matrix");
    assert_eq!(data[0]["genre"], "action");
    assert_eq!(data[0]["actor"], "Keanu Reeves");
    assert_eq!(data[0]["character"], "Neo");
}

#[tokio::test]
async fn media_score_filter_is_strictly_greater() {
    let app = spawn_app().await;

    // Nothing scores above the maximum in the fixture.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/media?imdb_score=8.7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["success"], true);
    assert_eq!(body_json["data"].as_array().unwrap().len(), 0);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/media?imdb_score=8")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let data = body_json["data"].as_array().unwrap();
    assert!(!data.is_empty());
    for row in data {
        assert!(row["imdb_score"].as_f64().unwrap() > 8.0);
    }
}

#[tokio::test]
async fn predictions_round_trip() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predictions")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"user_id": "analyst_7", "prediction_value": 7.5}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body_json["success"], true);
    assert_eq!(body_json["data"]["index"], 1);
    assert_eq!(body_json["data"]["user_id"], "analyst_7");
    assert_eq!(body_json["data"]["prediction_value"], 7.5);
    assert!(!body_json["data"]["timestamp"].as_str().unwrap().is_empty());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predictions")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"user_id": "analyst_7", "prediction_value": 6.1}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["data"]["index"], 2);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/predictions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let data = body_json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["index"], 1);
    assert_eq!(data[1]["prediction_value"], 6.1);
}

#[tokio::test]
async fn prediction_rejects_blank_user() {
    let app = spawn_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predictions")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"user_id": "   ", "prediction_value": 5.0}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["success"], false);
    assert!(body_json["error"].as_str().unwrap().contains("user_id"));
}

#[tokio::test]
async fn unknown_route_gets_enveloped_404() {
    let app = spawn_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nothing/here")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["success"], false);
    assert!(body_json["error"].is_string());
}
