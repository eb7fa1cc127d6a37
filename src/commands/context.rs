use crate::cli::{Cli, ColorChoice};
use crate::config::{ConfigLoader, Environment, FileSystem, Settings};
use crate::output::ColorMode;
use crate::Result;

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Layers file, environment and command-line settings and validates the result.
///
/// # Errors
/// Returns an error if a config layer cannot be loaded or a required value is
/// missing.
pub(crate) fn load_settings<F: FileSystem, E: Environment>(
    loader: &ConfigLoader<F, E>,
    cli: &Cli,
) -> Result<Settings> {
    loader
        .load(cli.config.as_deref(), cli.no_config)?
        .merge(cli.overrides())
        .resolve(cli.dry_run)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
