mod config;
mod ingest;
mod serve;
mod stats;

pub use config::{cmd_config_init, cmd_config_show};
pub use ingest::cmd_ingest;
pub use serve::cmd_serve;
pub use stats::cmd_stats;
