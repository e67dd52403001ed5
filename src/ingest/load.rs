//! Loads a transformed batch into the store, one table at a time.
//!
//! A table that fails to insert is recorded and skipped; the remaining
//! tables still load so a single bad table does not cost the whole run.
//! Callers decide what a partial load is worth by checking the summary.

use anyhow::Result;
use tracing::{error, info};

use crate::db::Store;
use crate::models::catalog::CatalogBatch;

#[derive(Debug, Default)]
pub struct LoadSummary {
    /// Tables that loaded, with their row counts, in load order.
    pub loaded: Vec<(&'static str, usize)>,
    /// Tables that failed, with the error text.
    pub failed: Vec<(&'static str, String)>,
}

impl LoadSummary {
    fn record(&mut self, table: &'static str, rows: usize, result: Result<()>) {
        match result {
            Ok(()) => {
                info!(table, rows, "Loaded table");
                self.loaded.push((table, rows));
            }
            Err(e) => {
                error!(table, error = %e, "Failed to load table, continuing with the rest");
                self.failed.push((table, e.to_string()));
            }
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    #[must_use]
    pub fn rows_loaded(&self) -> usize {
        self.loaded.iter().map(|(_, n)| n).sum()
    }
}

/// Inserts every table of the batch, entities before their bridges.
pub async fn load_catalog(store: &Store, batch: &CatalogBatch) -> LoadSummary {
    let mut summary = LoadSummary::default();

    summary.record(
        "movies",
        batch.movies.len(),
        store.insert_movies(&batch.movies).await,
    );
    summary.record(
        "shows",
        batch.shows.len(),
        store.insert_shows(&batch.shows).await,
    );
    summary.record(
        "genres",
        batch.genres.len(),
        store.insert_genres(&batch.genres).await,
    );
    summary.record(
        "genres_bridge",
        batch.genres_bridge.len(),
        store.insert_genres_bridge(&batch.genres_bridge).await,
    );
    summary.record(
        "production_countries",
        batch.countries.len(),
        store.insert_countries(&batch.countries).await,
    );
    summary.record(
        "production_countries_bridge",
        batch.countries_bridge.len(),
        store.insert_countries_bridge(&batch.countries_bridge).await,
    );
    summary.record(
        "actors",
        batch.actors.len(),
        store.insert_actors(&batch.actors).await,
    );
    summary.record(
        "actors_bridge",
        batch.actors_bridge.len(),
        store.insert_actors_bridge(&batch.actors_bridge).await,
    );
    summary.record(
        "directors",
        batch.directors.len(),
        store.insert_directors(&batch.directors).await,
    );
    summary.record(
        "directors_bridge",
        batch.directors_bridge.len(),
        store.insert_directors_bridge(&batch.directors_bridge).await,
    );
    summary.record(
        "characters",
        batch.characters.len(),
        store.insert_characters(&batch.characters).await,
    );
    summary.record(
        "characters_bridge",
        batch.characters_bridge.len(),
        store.insert_characters_bridge(&batch.characters_bridge).await,
    );
    summary.record(
        "imdb_info",
        batch.ratings.len(),
        store.insert_ratings(&batch.ratings).await,
    );

    summary
}
