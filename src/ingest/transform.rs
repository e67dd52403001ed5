//! Pure transforms from source records to typed table rows.
//!
//! Every source row is keyed exactly once, up front: the id prefix and the
//! type column must agree or the run aborts. Downstream stages branch on
//! the resulting [`TitleKey`] and never re-inspect raw ids.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::source::{CreditRecord, TitleRecord};
use super::IngestError;
use crate::models::catalog::{
    ActorBridgeRow, ActorRow, CatalogBatch, CharacterBridgeRow, CharacterRow, CountryBridgeRow,
    CountryRow, DirectorBridgeRow, DirectorRow, GenreBridgeRow, GenreRow, MovieRow, RatingRow,
    ShowRow,
};
use crate::models::title::TitleKey;
use crate::parser::{parse_character_field, parse_list_field};

const ACTOR_ROLE: &str = "ACTOR";
const DIRECTOR_ROLE: &str = "DIRECTOR";

/// A title record with its identity resolved.
#[derive(Debug, Clone)]
pub struct KeyedTitle {
    pub key: TitleKey,
    pub record: TitleRecord,
}

/// A credit record with the title it belongs to resolved.
#[derive(Debug, Clone)]
pub struct KeyedCredit {
    pub key: TitleKey,
    pub record: CreditRecord,
}

/// Resolves the key for every title, cross-checking the type column
/// against the id prefix. Any disagreement means the export format has
/// changed under us, so the whole run is rejected.
pub fn key_titles(records: Vec<TitleRecord>) -> Result<Vec<KeyedTitle>, IngestError> {
    let mut keyed = Vec::with_capacity(records.len());
    for record in records {
        let Some(key) = TitleKey::parse(&record.id) else {
            return Err(IngestError::SchemaDrift {
                context: "titles",
                detail: format!("unrecognized id prefix: {}", record.id),
            });
        };
        let consistent = match record.title_type.as_str() {
            "MOVIE" => key.is_movie(),
            "SHOW" => !key.is_movie(),
            other => {
                return Err(IngestError::SchemaDrift {
                    context: "titles",
                    detail: format!("unexpected type {other:?} on {}", record.id),
                });
            }
        };
        if !consistent {
            return Err(IngestError::SchemaDrift {
                context: "titles",
                detail: format!(
                    "type {:?} contradicts id prefix of {}",
                    record.title_type, record.id
                ),
            });
        }
        keyed.push(KeyedTitle { key, record });
    }
    Ok(keyed)
}

/// Resolves the key of the title each credit belongs to.
pub fn key_credits(records: Vec<CreditRecord>) -> Result<Vec<KeyedCredit>, IngestError> {
    let mut keyed = Vec::with_capacity(records.len());
    for record in records {
        let Some(key) = TitleKey::parse(&record.id) else {
            return Err(IngestError::SchemaDrift {
                context: "credits",
                detail: format!("unrecognized id prefix: {}", record.id),
            });
        };
        keyed.push(KeyedCredit { key, record });
    }
    Ok(keyed)
}

/// Partitions titles into movie and show rows. Each side gets its own
/// fresh 1-based index, and `seasons` only survives on the show side.
pub fn split_titles(titles: &[KeyedTitle]) -> (Vec<MovieRow>, Vec<ShowRow>) {
    let mut movies = Vec::new();
    let mut shows = Vec::new();
    let mut next_movie = 0_i32;
    let mut next_show = 0_i32;

    for keyed in titles {
        let r = &keyed.record;
        if keyed.key.is_movie() {
            next_movie += 1;
            movies.push(MovieRow {
                index: next_movie,
                movie_id: keyed.key.id().to_string(),
                title: r.title.clone(),
                release_year: r.release_year,
                age_certification: r.age_certification.clone(),
                runtime: r.runtime,
            });
        } else {
            next_show += 1;
            // The export stores seasons as a float column.
            #[allow(clippy::cast_possible_truncation)]
            let seasons = r.seasons.map(|s| s as i32);
            shows.push(ShowRow {
                index: next_show,
                show_id: keyed.key.id().to_string(),
                title: r.title.clone(),
                release_year: r.release_year,
                age_certification: r.age_certification.clone(),
                runtime: r.runtime,
                seasons,
            });
        }
    }

    (movies, shows)
}

/// Builds the genre dimension and its bridge. Genre ids are dense and
/// assigned in first-seen order across the whole title set.
pub fn extract_genres(titles: &[KeyedTitle]) -> (Vec<GenreRow>, Vec<GenreBridgeRow>) {
    let mut ids: HashMap<String, i32> = HashMap::new();
    let mut genres = Vec::new();
    let mut bridges = Vec::new();
    let mut next_genre = 0_i32;
    let mut next_bridge = 0_i32;

    for keyed in titles {
        let raw = keyed.record.genres.as_deref().unwrap_or("");
        for token in parse_list_field(raw) {
            let genre_id = match ids.entry(token) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    next_genre += 1;
                    genres.push(GenreRow {
                        genre_id: next_genre,
                        genre: entry.key().clone(),
                    });
                    entry.insert(next_genre);
                    next_genre
                }
            };
            next_bridge += 1;
            let (movie_id, show_id) = keyed.key.fk_pair();
            bridges.push(GenreBridgeRow {
                index: next_bridge,
                movie_id,
                show_id,
                genre_id,
            });
        }
    }

    (genres, bridges)
}

/// Builds the production country dimension and its bridge, mirroring
/// [`extract_genres`].
pub fn extract_countries(titles: &[KeyedTitle]) -> (Vec<CountryRow>, Vec<CountryBridgeRow>) {
    let mut ids: HashMap<String, i32> = HashMap::new();
    let mut countries = Vec::new();
    let mut bridges = Vec::new();
    let mut next_country = 0_i32;
    let mut next_bridge = 0_i32;

    for keyed in titles {
        let raw = keyed.record.production_countries.as_deref().unwrap_or("");
        for token in parse_list_field(raw) {
            let country_id = match ids.entry(token) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    next_country += 1;
                    countries.push(CountryRow {
                        country_id: next_country,
                        country: entry.key().clone(),
                    });
                    entry.insert(next_country);
                    next_country
                }
            };
            next_bridge += 1;
            let (movie_id, show_id) = keyed.key.fk_pair();
            bridges.push(CountryBridgeRow {
                index: next_bridge,
                movie_id,
                show_id,
                country_id,
            });
        }
    }

    (countries, bridges)
}

/// Builds the actor dimension and its bridge from credits with the ACTOR
/// role. Actors keep their source person id; the same person credited
/// under two spellings of their name yields two dimension rows, so
/// `actor_id` alone is deliberately not unique.
pub fn extract_actors(credits: &[KeyedCredit]) -> (Vec<ActorRow>, Vec<ActorBridgeRow>) {
    let mut seen: HashSet<(i64, String)> = HashSet::new();
    let mut actors = Vec::new();
    let mut bridges = Vec::new();
    let mut next_actor = 0_i32;
    let mut next_bridge = 0_i32;

    for keyed in credits.iter().filter(|c| c.record.role == ACTOR_ROLE) {
        let r = &keyed.record;
        if seen.insert((r.person_id, r.name.clone())) {
            next_actor += 1;
            actors.push(ActorRow {
                index: next_actor,
                actor_id: r.person_id,
                actor: r.name.clone(),
            });
        }
        next_bridge += 1;
        let (movie_id, show_id) = keyed.key.fk_pair();
        bridges.push(ActorBridgeRow {
            index: next_bridge,
            movie_id,
            show_id,
            actor_id: r.person_id,
        });
    }

    (actors, bridges)
}

/// Builds the director dimension and its bridge from credits with the
/// DIRECTOR role.
pub fn extract_directors(credits: &[KeyedCredit]) -> (Vec<DirectorRow>, Vec<DirectorBridgeRow>) {
    let mut seen: HashSet<(i64, String)> = HashSet::new();
    let mut directors = Vec::new();
    let mut bridges = Vec::new();
    let mut next_director = 0_i32;
    let mut next_bridge = 0_i32;

    for keyed in credits.iter().filter(|c| c.record.role == DIRECTOR_ROLE) {
        let r = &keyed.record;
        if seen.insert((r.person_id, r.name.clone())) {
            next_director += 1;
            directors.push(DirectorRow {
                index: next_director,
                director_id: r.person_id,
                director: r.name.clone(),
            });
        }
        next_bridge += 1;
        let (movie_id, show_id) = keyed.key.fk_pair();
        bridges.push(DirectorBridgeRow {
            index: next_bridge,
            movie_id,
            show_id,
            director_id: r.person_id,
        });
    }

    (directors, bridges)
}

/// Builds the character dimension and its bridge. An actor credited as
/// "A / B" played two characters in that title, so one credit can fan
/// out into several bridge rows. Character names are deduplicated
/// globally with dense first-seen ids.
pub fn extract_characters(credits: &[KeyedCredit]) -> (Vec<CharacterRow>, Vec<CharacterBridgeRow>) {
    let mut ids: HashMap<String, i32> = HashMap::new();
    let mut characters = Vec::new();
    let mut bridges = Vec::new();
    let mut next_character = 0_i32;
    let mut next_bridge = 0_i32;

    for keyed in credits.iter().filter(|c| c.record.role == ACTOR_ROLE) {
        let Some(raw) = keyed.record.character.as_deref() else {
            continue;
        };
        for name in parse_character_field(raw) {
            let character_id = match ids.entry(name) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    next_character += 1;
                    characters.push(CharacterRow {
                        character_id: next_character,
                        character: entry.key().clone(),
                    });
                    entry.insert(next_character);
                    next_character
                }
            };
            next_bridge += 1;
            let (movie_id, show_id) = keyed.key.fk_pair();
            bridges.push(CharacterBridgeRow {
                index: next_bridge,
                movie_id,
                show_id,
                actor_id: keyed.record.person_id,
                character_id,
            });
        }
    }

    (characters, bridges)
}

/// Builds rating rows for titles that carry any rating data at all.
/// Titles with no id, score, or votes contribute nothing.
pub fn extract_ratings(titles: &[KeyedTitle]) -> Vec<RatingRow> {
    let mut rows = Vec::new();
    let mut next_index = 0_i32;

    for keyed in titles {
        let r = &keyed.record;
        if r.imdb_id.is_none() && r.imdb_score.is_none() && r.imdb_votes.is_none() {
            continue;
        }
        next_index += 1;
        let (movie_id, show_id) = keyed.key.fk_pair();
        // Votes arrive as a float column in the export.
        #[allow(clippy::cast_possible_truncation)]
        let imdb_votes = r.imdb_votes.map(|v| v as i64);
        rows.push(RatingRow {
            index: next_index,
            movie_id,
            show_id,
            imdb_id: r.imdb_id.clone(),
            imdb_score: r.imdb_score,
            imdb_votes,
        });
    }

    rows
}

/// Runs every transform over the keyed records and assembles the batch.
pub fn transform(
    titles: Vec<TitleRecord>,
    credits: Vec<CreditRecord>,
) -> Result<CatalogBatch, IngestError> {
    let titles = key_titles(titles)?;
    let credits = key_credits(credits)?;

    let (movies, shows) = split_titles(&titles);
    debug!(movies = movies.len(), shows = shows.len(), "Split titles");

    let (genres, genres_bridge) = extract_genres(&titles);
    let (countries, countries_bridge) = extract_countries(&titles);
    let (actors, actors_bridge) = extract_actors(&credits);
    let (directors, directors_bridge) = extract_directors(&credits);
    let (characters, characters_bridge) = extract_characters(&credits);
    let ratings = extract_ratings(&titles);
    debug!(
        genres = genres.len(),
        countries = countries.len(),
        actors = actors.len(),
        directors = directors.len(),
        characters = characters.len(),
        ratings = ratings.len(),
        "Extracted dimensions"
    );

    Ok(CatalogBatch {
        movies,
        shows,
        genres,
        genres_bridge,
        countries,
        countries_bridge,
        actors,
        actors_bridge,
        directors,
        directors_bridge,
        characters,
        characters_bridge,
        ratings,
    })
}
