//! Catalog ingestion command handler

use std::path::Path;

use crate::config::Config;
use crate::db::Store;
use crate::ingest;

pub async fn cmd_ingest(
    config: &Config,
    titles: Option<&str>,
    credits: Option<&str>,
) -> anyhow::Result<()> {
    let titles_path = titles.unwrap_or(&config.datasets.titles_path);
    let credits_path = credits.unwrap_or(&config.datasets.credits_path);

    let store = Store::new(&config.general.database_path).await?;
    let report = ingest::run(&store, Path::new(titles_path), Path::new(credits_path)).await?;

    println!(
        "Read {} titles and {} credits in {} ms",
        report.titles_read, report.credits_read, report.duration_ms
    );
    println!("{:-<70}", "");

    for (table, rows) in &report.summary.loaded {
        println!("  ✓ {:<28} {:>8} rows", table, rows);
    }
    for (table, error) in &report.summary.failed {
        println!("  ✗ {:<28} {}", table, error);
    }
    println!("{:-<70}", "");

    if report.summary.is_complete() {
        println!(
            "✓ Loaded {} rows. Query them with: reelbase serve",
            report.summary.rows_loaded()
        );
        Ok(())
    } else {
        // Partial catalogs are queryable but incomplete; make the run
        // visibly fail so nobody mistakes one for a clean load.
        anyhow::bail!(
            "{} of {} tables failed to load, see the log for details",
            report.summary.failed.len(),
            report.summary.failed.len() + report.summary.loaded.len()
        );
    }
}
