use anyhow::Result;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{ConnectionTrait, DatabaseConnection, DeriveIden, FromQueryResult};
use serde::Serialize;

/// Filter set for the denormalized view. Text fields match substrings
/// (case-insensitive), numeric score/votes are strictly greater-than.
#[derive(Debug, Clone, Default)]
pub struct MediaFilter {
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
}

/// One denormalized view row. A title appears once per combination of its
/// linked genre, country, director, actor and character values.
#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct MediaRow {
    pub media_type: String,
    pub movie_id: Option<String>,
    pub show_id: Option<String>,
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub age_certification: Option<String>,
    pub runtime: Option<i32>,
    pub genre: Option<String>,
    pub country: Option<String>,
    pub director: Option<String>,
    pub actor: Option<String>,
    pub character: Option<String>,
    pub imdb_score: Option<f64>,
    pub imdb_votes: Option<i64>,
}

/// Read side of `movies_and_shows_view`. The view has no entity, so queries
/// are built with `sea_query` directly.
pub struct MediaRepository {
    conn: DatabaseConnection,
}

impl MediaRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn query(&self, filter: &MediaFilter, skip: u64, limit: u64) -> Result<Vec<MediaRow>> {
        let mut select = Query::select();
        select
            .columns([
                MediaView::MediaType,
                MediaView::MovieId,
                MediaView::ShowId,
                MediaView::Title,
                MediaView::ReleaseYear,
                MediaView::AgeCertification,
                MediaView::Runtime,
                MediaView::Genre,
                MediaView::Country,
                MediaView::Director,
                MediaView::Actor,
                MediaView::Character,
                MediaView::ImdbScore,
                MediaView::ImdbVotes,
            ])
            .from(MediaView::Table);

        if let Some(v) = &filter.media_type {
            select.and_where(Expr::col(MediaView::MediaType).like(format!("%{v}%")));
        }
        if let Some(v) = &filter.title {
            select.and_where(Expr::col(MediaView::Title).like(format!("%{v}%")));
        }
        if let Some(v) = filter.release_year {
            select.and_where(Expr::col(MediaView::ReleaseYear).eq(v));
        }
        if let Some(v) = &filter.age_certification {
            select.and_where(Expr::col(MediaView::AgeCertification).eq(v.clone()));
        }
        if let Some(v) = &filter.genre {
            select.and_where(Expr::col(MediaView::Genre).like(format!("%{v}%")));
        }
        if let Some(v) = &filter.country {
            select.and_where(Expr::col(MediaView::Country).like(format!("%{v}%")));
        }
        if let Some(v) = &filter.director {
            select.and_where(Expr::col(MediaView::Director).like(format!("%{v}%")));
        }
        if let Some(v) = &filter.actor {
            select.and_where(Expr::col(MediaView::Actor).like(format!("%{v}%")));
        }
        if let Some(v) = &filter.character {
            select.and_where(Expr::col(MediaView::Character).like(format!("%{v}%")));
        }
        if let Some(v) = filter.imdb_score {
            select.and_where(Expr::col(MediaView::ImdbScore).gt(v));
        }
        if let Some(v) = filter.imdb_votes {
            select.and_where(Expr::col(MediaView::ImdbVotes).gt(v));
        }

        select.offset(skip).limit(limit);

        let stmt = self.conn.get_database_backend().build(&select);
        let rows = MediaRow::find_by_statement(stmt).all(&self.conn).await?;
        Ok(rows)
    }
}

#[derive(DeriveIden)]
enum MediaView {
    #[sea_orm(iden = "movies_and_shows_view")]
    Table,
    MediaType,
    MovieId,
    ShowId,
    Title,
    ReleaseYear,
    AgeCertification,
    Runtime,
    Genre,
    Country,
    Director,
    Actor,
    Character,
    ImdbScore,
    ImdbVotes,
}
