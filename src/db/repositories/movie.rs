use crate::entities::{actors, actors_bridge, genres, genres_bridge, imdb_info, movies, prelude::*};
use anyhow::Result;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect,
};
use serde::Serialize;

pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<movies::Model>> {
        let rows = Movies::find()
            .order_by_asc(movies::Column::Index)
            .offset(skip)
            .limit(limit)
            .all(&self.conn)
            .await?;
        Ok(rows)
    }

    /// Movies featuring an actor whose name contains the given fragment
    /// (case-insensitive). One row per matching credit.
    pub async fn by_actor(&self, actor_name: &str, limit: u64) -> Result<Vec<MovieActorRow>> {
        let rows = Movies::find()
            .select_only()
            .column(movies::Column::Index)
            .column(movies::Column::MovieId)
            .column(movies::Column::Title)
            .column(movies::Column::ReleaseYear)
            .column(movies::Column::AgeCertification)
            .column(movies::Column::Runtime)
            .column_as(actors::Column::Actor, "actor")
            .join(
                JoinType::InnerJoin,
                movies::Entity::belongs_to(actors_bridge::Entity)
                    .from(movies::Column::MovieId)
                    .to(actors_bridge::Column::MovieId)
                    .into(),
            )
            .join(
                JoinType::InnerJoin,
                actors_bridge::Entity::belongs_to(actors::Entity)
                    .from(actors_bridge::Column::ActorId)
                    .to(actors::Column::ActorId)
                    .into(),
            )
            .filter(actors::Column::Actor.contains(actor_name))
            .limit(limit)
            .into_model::<MovieActorRow>()
            .all(&self.conn)
            .await?;
        Ok(rows)
    }

    /// The best-rated movie, optionally restricted by release year and
    /// genre fragment. At most one row.
    pub async fn top_rated(
        &self,
        release_year: Option<i32>,
        genre: Option<&str>,
    ) -> Result<Vec<MovieRatingRow>> {
        let mut query = Movies::find()
            .select_only()
            .column(movies::Column::Index)
            .column(movies::Column::MovieId)
            .column(movies::Column::Title)
            .column(movies::Column::ReleaseYear)
            .column(movies::Column::AgeCertification)
            .column(movies::Column::Runtime)
            .column_as(genres::Column::Genre, "genre")
            .column_as(imdb_info::Column::ImdbScore, "imdb_score")
            .column_as(imdb_info::Column::ImdbVotes, "imdb_votes")
            .join(
                JoinType::InnerJoin,
                movies::Entity::belongs_to(genres_bridge::Entity)
                    .from(movies::Column::MovieId)
                    .to(genres_bridge::Column::MovieId)
                    .into(),
            )
            .join(
                JoinType::InnerJoin,
                genres_bridge::Entity::belongs_to(genres::Entity)
                    .from(genres_bridge::Column::GenreId)
                    .to(genres::Column::GenreId)
                    .into(),
            )
            .join(
                JoinType::InnerJoin,
                movies::Entity::belongs_to(imdb_info::Entity)
                    .from(movies::Column::MovieId)
                    .to(imdb_info::Column::MovieId)
                    .into(),
            );

        if let Some(year) = release_year {
            query = query.filter(movies::Column::ReleaseYear.eq(year));
        }
        if let Some(genre) = genre {
            query = query.filter(genres::Column::Genre.contains(genre));
        }

        let rows = query
            .order_by_desc(imdb_info::Column::ImdbScore)
            .limit(1)
            .into_model::<MovieRatingRow>()
            .all(&self.conn)
            .await?;
        Ok(rows)
    }
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct MovieActorRow {
    pub index: i32,
    pub movie_id: String,
    pub title: String,
    pub release_year: Option<i32>,
    pub age_certification: Option<String>,
    pub runtime: Option<i32>,
    pub actor: String,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct MovieRatingRow {
    pub index: i32,
    pub movie_id: String,
    pub title: String,
    pub release_year: Option<i32>,
    pub age_certification: Option<String>,
    pub runtime: Option<i32>,
    pub genre: Option<String>,
    pub imdb_score: Option<f64>,
    pub imdb_votes: Option<i64>,
}
