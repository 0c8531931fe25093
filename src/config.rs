// src/config.rs
use clap::Parser;

use crate::render::RenderStyle;

pub const DEFAULT_STATS_FILENAME: &str = "checkers_stats.json";

/// Two-player checkers in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Draw the board in plain ASCII without colors.
    #[arg(long, default_value = "false")]
    pub no_color: bool,

    /// Where to write game statistics when the session ends.
    #[arg(long, default_value = DEFAULT_STATS_FILENAME)]
    pub stats_file: String,

    /// Do not write game statistics.
    #[arg(long, default_value = "false", conflicts_with = "stats_file")]
    pub no_stats: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub style: RenderStyle,
    pub stats_file: Option<String>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            style: RenderStyle { color: !cli.no_color },
            stats_file: if cli.no_stats { None } else { Some(cli.stats_file) },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            style: RenderStyle::default(),
            stats_file: Some(DEFAULT_STATS_FILENAME.to_string()),
        }
    }
}
