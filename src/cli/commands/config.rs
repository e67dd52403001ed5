//! Config command handlers

use crate::config::Config;

pub fn cmd_config_init() -> anyhow::Result<()> {
    let created = Config::create_default_if_missing()?;
    if created {
        println!("✓ Config file created. Edit reelbase.toml and run again.");
    } else {
        println!("Config file already exists, leaving it untouched.");
    }
    Ok(())
}

pub fn cmd_config_show(config: &Config) -> anyhow::Result<()> {
    let rendered = toml::to_string_pretty(config)?;
    print!("{rendered}");
    Ok(())
}
