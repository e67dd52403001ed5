//! One-shot pipeline from the raw CSV exports to a queryable catalog.
//!
//! Read, key, transform, load, then rebuild the view. Reads and
//! transforms are all-or-nothing; loading is per-table fail-soft.

pub mod load;
pub mod source;
pub mod transform;
pub mod view;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use thiserror::Error;
use tracing::info;

pub use load::LoadSummary;

use crate::db::Store;

/// Structural problems in the source exports. Any of these means the
/// export no longer matches the format this pipeline was built for, so
/// the run stops before anything is written.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("Schema drift in {context}: {detail}")]
    SchemaDrift {
        context: &'static str,
        detail: String,
    },
}

#[derive(Debug)]
pub struct PipelineReport {
    pub titles_read: usize,
    pub credits_read: usize,
    pub summary: LoadSummary,
    pub duration_ms: u64,
}

/// Runs the full pipeline against an already-migrated store.
pub async fn run(store: &Store, titles_path: &Path, credits_path: &Path) -> Result<PipelineReport> {
    let start = Instant::now();
    info!(
        titles = %titles_path.display(),
        credits = %credits_path.display(),
        "Starting catalog ingestion"
    );

    let titles = source::read_titles(titles_path)?;
    let credits = source::read_credits(credits_path)?;
    let titles_read = titles.len();
    let credits_read = credits.len();

    let batch = transform::transform(titles, credits)?;
    let summary = load::load_catalog(store, &batch).await;
    view::rebuild_view(&store.conn).await?;

    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(
        event = "ingest_finished",
        tables_loaded = summary.loaded.len(),
        tables_failed = summary.failed.len(),
        rows = summary.rows_loaded(),
        duration_ms,
        "Catalog ingestion finished"
    );

    Ok(PipelineReport {
        titles_read,
        credits_read,
        summary,
        duration_ms,
    })
}
