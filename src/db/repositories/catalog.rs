use crate::entities::prelude::*;
use crate::entities::{
    actors, actors_bridge, characters, characters_bridge, directors, directors_bridge, genres,
    genres_bridge, imdb_info, movies, production_countries, production_countries_bridge, shows,
};
use crate::models::catalog::{
    ActorBridgeRow, ActorRow, CharacterBridgeRow, CharacterRow, CountryBridgeRow, CountryRow,
    DirectorBridgeRow, DirectorRow, GenreBridgeRow, GenreRow, MovieRow, RatingRow, ShowRow,
};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait, Set,
};

// SQLite has a limit on variables per query (usually 999 or 32766).
// The widest table has 6 columns, so 100 rows per batch stays safe.
const INSERT_CHUNK: usize = 100;

/// Write side of the pipeline: bulk appends into the catalog tables.
pub struct CatalogRepository {
    conn: DatabaseConnection,
}

impl CatalogRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    async fn insert_chunked<A>(&self, rows: Vec<A>) -> Result<()>
    where
        A: ActiveModelTrait + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        for chunk in rows.chunks(INSERT_CHUNK) {
            <A::Entity as EntityTrait>::insert_many(chunk.iter().cloned())
                .exec_without_returning(&self.conn)
                .await?;
        }
        Ok(())
    }

    pub async fn insert_movies(&self, rows: &[MovieRow]) -> Result<()> {
        self.insert_chunked(rows.iter().map(movies::ActiveModel::from).collect())
            .await
    }

    pub async fn insert_shows(&self, rows: &[ShowRow]) -> Result<()> {
        self.insert_chunked(rows.iter().map(shows::ActiveModel::from).collect())
            .await
    }

    pub async fn insert_genres(&self, rows: &[GenreRow]) -> Result<()> {
        self.insert_chunked(rows.iter().map(genres::ActiveModel::from).collect())
            .await
    }

    pub async fn insert_genres_bridge(&self, rows: &[GenreBridgeRow]) -> Result<()> {
        self.insert_chunked(rows.iter().map(genres_bridge::ActiveModel::from).collect())
            .await
    }

    pub async fn insert_countries(&self, rows: &[CountryRow]) -> Result<()> {
        self.insert_chunked(
            rows.iter()
                .map(production_countries::ActiveModel::from)
                .collect(),
        )
        .await
    }

    pub async fn insert_countries_bridge(&self, rows: &[CountryBridgeRow]) -> Result<()> {
        self.insert_chunked(
            rows.iter()
                .map(production_countries_bridge::ActiveModel::from)
                .collect(),
        )
        .await
    }

    pub async fn insert_actors(&self, rows: &[ActorRow]) -> Result<()> {
        self.insert_chunked(rows.iter().map(actors::ActiveModel::from).collect())
            .await
    }

    pub async fn insert_actors_bridge(&self, rows: &[ActorBridgeRow]) -> Result<()> {
        self.insert_chunked(rows.iter().map(actors_bridge::ActiveModel::from).collect())
            .await
    }

    pub async fn insert_directors(&self, rows: &[DirectorRow]) -> Result<()> {
        self.insert_chunked(rows.iter().map(directors::ActiveModel::from).collect())
            .await
    }

    pub async fn insert_directors_bridge(&self, rows: &[DirectorBridgeRow]) -> Result<()> {
        self.insert_chunked(
            rows.iter()
                .map(directors_bridge::ActiveModel::from)
                .collect(),
        )
        .await
    }

    pub async fn insert_characters(&self, rows: &[CharacterRow]) -> Result<()> {
        self.insert_chunked(rows.iter().map(characters::ActiveModel::from).collect())
            .await
    }

    pub async fn insert_characters_bridge(&self, rows: &[CharacterBridgeRow]) -> Result<()> {
        self.insert_chunked(
            rows.iter()
                .map(characters_bridge::ActiveModel::from)
                .collect(),
        )
        .await
    }

    pub async fn insert_ratings(&self, rows: &[RatingRow]) -> Result<()> {
        self.insert_chunked(rows.iter().map(imdb_info::ActiveModel::from).collect())
            .await
    }

    /// Row counts for every persisted table, in schema order.
    pub async fn table_counts(&self) -> Result<Vec<(&'static str, u64)>> {
        Ok(vec![
            ("movies", Movies::find().count(&self.conn).await?),
            ("shows", Shows::find().count(&self.conn).await?),
            ("genres", Genres::find().count(&self.conn).await?),
            (
                "genres_bridge",
                GenresBridge::find().count(&self.conn).await?,
            ),
            (
                "production_countries",
                ProductionCountries::find().count(&self.conn).await?,
            ),
            (
                "production_countries_bridge",
                ProductionCountriesBridge::find().count(&self.conn).await?,
            ),
            ("actors", Actors::find().count(&self.conn).await?),
            (
                "actors_bridge",
                ActorsBridge::find().count(&self.conn).await?,
            ),
            ("directors", Directors::find().count(&self.conn).await?),
            (
                "directors_bridge",
                DirectorsBridge::find().count(&self.conn).await?,
            ),
            ("characters", Characters::find().count(&self.conn).await?),
            (
                "characters_bridge",
                CharactersBridge::find().count(&self.conn).await?,
            ),
            ("imdb_info", ImdbInfo::find().count(&self.conn).await?),
            ("predictions", Predictions::find().count(&self.conn).await?),
        ])
    }
}

impl From<&MovieRow> for movies::ActiveModel {
    fn from(row: &MovieRow) -> Self {
        Self {
            index: Set(row.index),
            movie_id: Set(row.movie_id.clone()),
            title: Set(row.title.clone()),
            release_year: Set(row.release_year),
            age_certification: Set(row.age_certification.clone()),
            runtime: Set(row.runtime),
        }
    }
}

impl From<&ShowRow> for shows::ActiveModel {
    fn from(row: &ShowRow) -> Self {
        Self {
            index: Set(row.index),
            show_id: Set(row.show_id.clone()),
            title: Set(row.title.clone()),
            release_year: Set(row.release_year),
            age_certification: Set(row.age_certification.clone()),
            runtime: Set(row.runtime),
            seasons: Set(row.seasons),
        }
    }
}

impl From<&GenreRow> for genres::ActiveModel {
    fn from(row: &GenreRow) -> Self {
        Self {
            genre_id: Set(row.genre_id),
            genre: Set(row.genre.clone()),
        }
    }
}

impl From<&GenreBridgeRow> for genres_bridge::ActiveModel {
    fn from(row: &GenreBridgeRow) -> Self {
        Self {
            index: Set(row.index),
            movie_id: Set(row.movie_id.clone()),
            show_id: Set(row.show_id.clone()),
            genre_id: Set(row.genre_id),
        }
    }
}

impl From<&CountryRow> for production_countries::ActiveModel {
    fn from(row: &CountryRow) -> Self {
        Self {
            country_id: Set(row.country_id),
            country: Set(row.country.clone()),
        }
    }
}

impl From<&CountryBridgeRow> for production_countries_bridge::ActiveModel {
    fn from(row: &CountryBridgeRow) -> Self {
        Self {
            index: Set(row.index),
            movie_id: Set(row.movie_id.clone()),
            show_id: Set(row.show_id.clone()),
            country_id: Set(row.country_id),
        }
    }
}

impl From<&ActorRow> for actors::ActiveModel {
    fn from(row: &ActorRow) -> Self {
        Self {
            index: Set(row.index),
            actor_id: Set(row.actor_id),
            actor: Set(row.actor.clone()),
        }
    }
}

impl From<&ActorBridgeRow> for actors_bridge::ActiveModel {
    fn from(row: &ActorBridgeRow) -> Self {
        Self {
            index: Set(row.index),
            movie_id: Set(row.movie_id.clone()),
            show_id: Set(row.show_id.clone()),
            actor_id: Set(row.actor_id),
        }
    }
}

impl From<&DirectorRow> for directors::ActiveModel {
    fn from(row: &DirectorRow) -> Self {
        Self {
            index: Set(row.index),
            director_id: Set(row.director_id),
            director: Set(row.director.clone()),
        }
    }
}

impl From<&DirectorBridgeRow> for directors_bridge::ActiveModel {
    fn from(row: &DirectorBridgeRow) -> Self {
        Self {
            index: Set(row.index),
            movie_id: Set(row.movie_id.clone()),
            show_id: Set(row.show_id.clone()),
            director_id: Set(row.director_id),
        }
    }
}

impl From<&CharacterRow> for characters::ActiveModel {
    fn from(row: &CharacterRow) -> Self {
        Self {
            character_id: Set(row.character_id),
            character: Set(row.character.clone()),
        }
    }
}

impl From<&CharacterBridgeRow> for characters_bridge::ActiveModel {
    fn from(row: &CharacterBridgeRow) -> Self {
        Self {
            index: Set(row.index),
            movie_id: Set(row.movie_id.clone()),
            show_id: Set(row.show_id.clone()),
            actor_id: Set(row.actor_id),
            character_id: Set(row.character_id),
        }
    }
}

impl From<&RatingRow> for imdb_info::ActiveModel {
    fn from(row: &RatingRow) -> Self {
        Self {
            index: Set(row.index),
            movie_id: Set(row.movie_id.clone()),
            show_id: Set(row.show_id.clone()),
            imdb_id: Set(row.imdb_id.clone()),
            imdb_score: Set(row.imdb_score),
            imdb_votes: Set(row.imdb_votes),
        }
    }
}
