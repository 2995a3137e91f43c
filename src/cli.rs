// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_catalog_path;

/// Command-line arguments for `questmap`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "questmap",
    version,
    about = "Track progress through a curriculum of prerequisite-linked quests.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the catalog file (TOML).
    ///
    /// Default: `Questmap.toml` in the current working directory.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Complete a quest. Repeat to complete several, in order.
    ///
    /// Locked quests are reported and skipped; unknown quests abort the run.
    #[arg(long = "complete", value_name = "QUEST")]
    pub complete: Vec<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `QUESTMAP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the quest graph, but don't start a session.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl CliArgs {
    /// The `--catalog` path, or [`default_catalog_path`] when it was omitted.
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog.clone().unwrap_or_else(default_catalog_path)
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
