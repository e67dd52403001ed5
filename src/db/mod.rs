use crate::entities::{movies, predictions, shows};
use crate::models::catalog::{
    ActorBridgeRow, ActorRow, CharacterBridgeRow, CharacterRow, CountryBridgeRow, CountryRow,
    DirectorBridgeRow, DirectorRow, GenreBridgeRow, GenreRow, MovieRow, RatingRow, ShowRow,
};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::media::{MediaFilter, MediaRow};
pub use repositories::movie::{MovieActorRow, MovieRatingRow};
pub use repositories::show::ShowGenreRow;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.starts_with(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn catalog_repo(&self) -> repositories::catalog::CatalogRepository {
        repositories::catalog::CatalogRepository::new(self.conn.clone())
    }

    fn movie_repo(&self) -> repositories::movie::MovieRepository {
        repositories::movie::MovieRepository::new(self.conn.clone())
    }

    fn show_repo(&self) -> repositories::show::ShowRepository {
        repositories::show::ShowRepository::new(self.conn.clone())
    }

    fn media_repo(&self) -> repositories::media::MediaRepository {
        repositories::media::MediaRepository::new(self.conn.clone())
    }

    fn prediction_repo(&self) -> repositories::prediction::PredictionRepository {
        repositories::prediction::PredictionRepository::new(self.conn.clone())
    }

    // ========== Catalog Load Methods ==========

    pub async fn insert_movies(&self, rows: &[MovieRow]) -> Result<()> {
        self.catalog_repo().insert_movies(rows).await
    }

    pub async fn insert_shows(&self, rows: &[ShowRow]) -> Result<()> {
        self.catalog_repo().insert_shows(rows).await
    }

    pub async fn insert_genres(&self, rows: &[GenreRow]) -> Result<()> {
        self.catalog_repo().insert_genres(rows).await
    }

    pub async fn insert_genres_bridge(&self, rows: &[GenreBridgeRow]) -> Result<()> {
        self.catalog_repo().insert_genres_bridge(rows).await
    }

    pub async fn insert_countries(&self, rows: &[CountryRow]) -> Result<()> {
        self.catalog_repo().insert_countries(rows).await
    }

    pub async fn insert_countries_bridge(&self, rows: &[CountryBridgeRow]) -> Result<()> {
        self.catalog_repo().insert_countries_bridge(rows).await
    }

    pub async fn insert_actors(&self, rows: &[ActorRow]) -> Result<()> {
        self.catalog_repo().insert_actors(rows).await
    }

    pub async fn insert_actors_bridge(&self, rows: &[ActorBridgeRow]) -> Result<()> {
        self.catalog_repo().insert_actors_bridge(rows).await
    }

    pub async fn insert_directors(&self, rows: &[DirectorRow]) -> Result<()> {
        self.catalog_repo().insert_directors(rows).await
    }

    pub async fn insert_directors_bridge(&self, rows: &[DirectorBridgeRow]) -> Result<()> {
        self.catalog_repo().insert_directors_bridge(rows).await
    }

    pub async fn insert_characters(&self, rows: &[CharacterRow]) -> Result<()> {
        self.catalog_repo().insert_characters(rows).await
    }

    pub async fn insert_characters_bridge(&self, rows: &[CharacterBridgeRow]) -> Result<()> {
        self.catalog_repo().insert_characters_bridge(rows).await
    }

    pub async fn insert_ratings(&self, rows: &[RatingRow]) -> Result<()> {
        self.catalog_repo().insert_ratings(rows).await
    }

    pub async fn table_counts(&self) -> Result<Vec<(&'static str, u64)>> {
        self.catalog_repo().table_counts().await
    }

    // ========== Serving Methods ==========

    pub async fn list_movies(&self, skip: u64, limit: u64) -> Result<Vec<movies::Model>> {
        self.movie_repo().list(skip, limit).await
    }

    pub async fn movies_by_actor(
        &self,
        actor_name: &str,
        limit: u64,
    ) -> Result<Vec<MovieActorRow>> {
        self.movie_repo().by_actor(actor_name, limit).await
    }

    pub async fn top_rated_movie(
        &self,
        release_year: Option<i32>,
        genre: Option<&str>,
    ) -> Result<Vec<MovieRatingRow>> {
        self.movie_repo().top_rated(release_year, genre).await
    }

    pub async fn list_shows(&self, skip: u64, limit: u64) -> Result<Vec<shows::Model>> {
        self.show_repo().list(skip, limit).await
    }

    pub async fn search_shows(
        &self,
        title: Option<&str>,
        release_year: Option<i32>,
        age_certification: Option<&str>,
        genre: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<ShowGenreRow>> {
        self.show_repo()
            .search(title, release_year, age_certification, genre, skip, limit)
            .await
    }

    pub async fn query_media(
        &self,
        filter: &MediaFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<MediaRow>> {
        self.media_repo().query(filter, skip, limit).await
    }

    pub async fn add_prediction(
        &self,
        user_id: &str,
        prediction_value: f64,
    ) -> Result<predictions::Model> {
        self.prediction_repo().add(user_id, prediction_value).await
    }

    pub async fn list_predictions(&self) -> Result<Vec<predictions::Model>> {
        self.prediction_repo().list().await
    }
}
