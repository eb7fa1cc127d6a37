use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::RawConfig;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "skill-gist")]
#[command(author, version, about = "Publish a LeetCode skill chart to a GitHub gist")]
#[command(long_about = "Fetches per-tag solved-problem counts for a LeetCode user, \
    ranks the top five skills and writes them as a bar chart into a GitHub gist.\n\n\
    Settings come from command-line flags, then environment variables \
    (LEETCODE_USERNAME, IGNORED_SKILLS, HIDE_DIFFICULTY, GH_TOKEN, GIST_ID, CHART_WIDTH), \
    then the config file.\n\n\
    Exit codes:\n  \
    0 - Chart published\n  \
    1 - Fetching or publishing failed\n  \
    2 - Configuration error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Print progress notes
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Path to a configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// LeetCode username whose stats are charted
    #[arg(short, long)]
    pub username: Option<String>,

    /// Comma-separated categories or tags to leave out (e.g. "Advanced, Array")
    #[arg(short, long)]
    pub ignore: Option<String>,

    /// Leave the difficulty column of the chart empty
    #[arg(long)]
    pub hide_category: bool,

    /// Id of the gist to overwrite
    #[arg(long)]
    pub gist_id: Option<String>,

    /// Total chart width budget in characters
    #[arg(long)]
    pub width: Option<usize>,

    /// Read stats from a saved response file instead of the network
    #[arg(long)]
    pub stats_file: Option<PathBuf>,

    /// Print the chart to stdout instead of publishing it
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// The command-line configuration layer. Unset flags leave lower layers alone.
    #[must_use]
    pub fn overrides(&self) -> RawConfig {
        RawConfig {
            leetcode_username: self.username.clone(),
            ignored_skills: self.ignore.clone(),
            hide_difficulty: self.hide_category.then(|| "true".to_string()),
            gh_token: None,
            gist_id: self.gist_id.clone(),
            width: self.width,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
