//! Typed rows produced by the transform stage, one struct per persisted
//! table. These stay free of ORM coupling so the transforms can be tested
//! without a database.

#[derive(Debug, Clone, PartialEq)]
pub struct MovieRow {
    pub index: i32,
    pub movie_id: String,
    pub title: String,
    pub release_year: Option<i32>,
    pub age_certification: Option<String>,
    pub runtime: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowRow {
    pub index: i32,
    pub show_id: String,
    pub title: String,
    pub release_year: Option<i32>,
    pub age_certification: Option<String>,
    pub runtime: Option<i32>,
    pub seasons: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenreRow {
    pub genre_id: i32,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenreBridgeRow {
    pub index: i32,
    pub movie_id: Option<String>,
    pub show_id: Option<String>,
    pub genre_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryRow {
    pub country_id: i32,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryBridgeRow {
    pub index: i32,
    pub movie_id: Option<String>,
    pub show_id: Option<String>,
    pub country_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActorRow {
    pub index: i32,
    pub actor_id: i64,
    pub actor: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActorBridgeRow {
    pub index: i32,
    pub movie_id: Option<String>,
    pub show_id: Option<String>,
    pub actor_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectorRow {
    pub index: i32,
    pub director_id: i64,
    pub director: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectorBridgeRow {
    pub index: i32,
    pub movie_id: Option<String>,
    pub show_id: Option<String>,
    pub director_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRow {
    pub character_id: i32,
    pub character: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterBridgeRow {
    pub index: i32,
    pub movie_id: Option<String>,
    pub show_id: Option<String>,
    pub actor_id: i64,
    pub character_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingRow {
    pub index: i32,
    pub movie_id: Option<String>,
    pub show_id: Option<String>,
    pub imdb_id: Option<String>,
    pub imdb_score: Option<f64>,
    pub imdb_votes: Option<i64>,
}

/// Everything one pipeline run produces, grouped by destination table.
#[derive(Debug, Clone, Default)]
pub struct CatalogBatch {
    pub movies: Vec<MovieRow>,
    pub shows: Vec<ShowRow>,
    pub genres: Vec<GenreRow>,
    pub genres_bridge: Vec<GenreBridgeRow>,
    pub countries: Vec<CountryRow>,
    pub countries_bridge: Vec<CountryBridgeRow>,
    pub actors: Vec<ActorRow>,
    pub actors_bridge: Vec<ActorBridgeRow>,
    pub directors: Vec<DirectorRow>,
    pub directors_bridge: Vec<DirectorBridgeRow>,
    pub characters: Vec<CharacterRow>,
    pub characters_bridge: Vec<CharacterBridgeRow>,
    pub ratings: Vec<RatingRow>,
}

impl CatalogBatch {
    /// Row counts per destination table, in load order.
    #[must_use]
    pub fn table_counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("movies", self.movies.len()),
            ("shows", self.shows.len()),
            ("genres", self.genres.len()),
            ("genres_bridge", self.genres_bridge.len()),
            ("production_countries", self.countries.len()),
            ("production_countries_bridge", self.countries_bridge.len()),
            ("actors", self.actors.len()),
            ("actors_bridge", self.actors_bridge.len()),
            ("directors", self.directors.len()),
            ("directors_bridge", self.directors_bridge.len()),
            ("characters", self.characters.len()),
            ("characters_bridge", self.characters_bridge.len()),
            ("imdb_info", self.ratings.len()),
        ]
    }

    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.table_counts().iter().map(|(_, n)| n).sum()
    }
}
