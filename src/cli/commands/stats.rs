//! Table statistics command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_stats(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let counts = store.table_counts().await?;

    println!("Catalog tables");
    println!("{:-<70}", "");

    let mut total = 0_u64;
    for (table, rows) in &counts {
        println!("  {:<28} {:>9}", table, rows);
        total += rows;
    }

    println!("{:-<70}", "");
    println!("  {:<28} {:>9}", "total", total);

    Ok(())
}
