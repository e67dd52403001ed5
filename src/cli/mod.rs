//! CLI module - Command-line interface for ReelBase
//!
//! This module provides a structured CLI using clap for argument parsing.

pub mod commands;

use clap::{Parser, Subcommand};

/// ReelBase - Movies and shows catalog service
/// One-shot CSV ingestion into a relational catalog plus a small read API
#[derive(Parser)]
#[command(name = "reelbase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the one-shot pipeline from the CSV exports into the database
    #[command(alias = "etl")]
    Ingest {
        /// Titles CSV path, overriding the configured one
        #[arg(long)]
        titles: Option<String>,

        /// Credits CSV path, overriding the configured one
        #[arg(long)]
        credits: Option<String>,
    },

    /// Serve the read API over the ingested catalog
    Serve {
        /// Port to bind, overriding the configured one
        #[arg(long)]
        port: Option<u16>,
    },

    /// Show row counts for every catalog table
    Stats,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Print the resolved configuration
    Config,
}

pub fn print_help() {
    println!("ReelBase - Movies and shows catalog service");
    println!("One-shot CSV ingestion plus a small read API");
    println!();
    println!("USAGE:");
    println!("  reelbase <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("  ingest            Run the pipeline from the CSV exports into the database");
    println!("  serve             Serve the read API over the ingested catalog");
    println!("  stats             Show row counts for every catalog table");
    println!("  init              Create default config file");
    println!("  config            Print the resolved configuration");
    println!("  help              Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("  reelbase init                              # Write reelbase.toml");
    println!("  reelbase ingest                            # Load the configured CSV files");
    println!("  reelbase ingest --titles data/titles.csv   # Load a different titles file");
    println!("  reelbase stats                             # Check what got loaded");
    println!("  reelbase serve                             # Start the API");
    println!("  reelbase serve --port 9000                 # Start it somewhere else");
    println!();
    println!("CONFIG:");
    println!("  Edit reelbase.toml to configure dataset paths, database and server.");
}
