use crate::entities::{genres, genres_bridge, prelude::*, shows};
use anyhow::Result;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect,
};
use serde::Serialize;

pub struct ShowRepository {
    conn: DatabaseConnection,
}

impl ShowRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<shows::Model>> {
        let rows = Shows::find()
            .order_by_asc(shows::Column::Index)
            .offset(skip)
            .limit(limit)
            .all(&self.conn)
            .await?;
        Ok(rows)
    }

    /// Shows matching the given criteria, joined through their genres.
    /// One row per (show, genre) pair, so multi-genre shows repeat.
    pub async fn search(
        &self,
        title: Option<&str>,
        release_year: Option<i32>,
        age_certification: Option<&str>,
        genre: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<ShowGenreRow>> {
        let mut query = Shows::find()
            .select_only()
            .column(shows::Column::Index)
            .column(shows::Column::ShowId)
            .column(shows::Column::Title)
            .column(shows::Column::ReleaseYear)
            .column(shows::Column::AgeCertification)
            .column(shows::Column::Runtime)
            .column(shows::Column::Seasons)
            .column_as(genres::Column::Genre, "genre")
            .join(
                JoinType::InnerJoin,
                shows::Entity::belongs_to(genres_bridge::Entity)
                    .from(shows::Column::ShowId)
                    .to(genres_bridge::Column::ShowId)
                    .into(),
            )
            .join(
                JoinType::InnerJoin,
                genres_bridge::Entity::belongs_to(genres::Entity)
                    .from(genres_bridge::Column::GenreId)
                    .to(genres::Column::GenreId)
                    .into(),
            );

        if let Some(title) = title {
            query = query.filter(shows::Column::Title.contains(title));
        }
        if let Some(year) = release_year {
            query = query.filter(shows::Column::ReleaseYear.eq(year));
        }
        if let Some(cert) = age_certification {
            query = query.filter(shows::Column::AgeCertification.eq(cert));
        }
        if let Some(genre) = genre {
            query = query.filter(genres::Column::Genre.contains(genre));
        }

        let rows = query
            .order_by_asc(shows::Column::Index)
            .offset(skip)
            .limit(limit)
            .into_model::<ShowGenreRow>()
            .all(&self.conn)
            .await?;
        Ok(rows)
    }
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct ShowGenreRow {
    pub index: i32,
    pub show_id: String,
    pub title: String,
    pub release_year: Option<i32>,
    pub age_certification: Option<String>,
    pub runtime: Option<i32>,
    pub seasons: Option<i32>,
    pub genre: Option<String>,
}
