use crate::cli::Cli;
use crate::config::{ConfigLoader, Settings};
use crate::output::{ColorMode, print_error_full, print_info, print_warning};
use crate::pipeline::{self, RunReport};
use crate::remote::{
    FileStatsProvider, GistSink, LeetCodeProvider, ReqwestClient, StatsProvider, StdoutSink,
};
use crate::{EXIT_CONFIG_ERROR, EXIT_RUN_FAILURE, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, load_settings};

#[must_use]
pub fn run_publish(cli: &Cli) -> i32 {
    let mode = color_choice_to_mode(cli.color);
    match run_publish_impl(cli, mode) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error_full(
                mode,
                e.error_type(),
                &e.message(),
                e.detail().as_deref(),
                e.suggestion(),
            );
            if e.is_config_error() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_RUN_FAILURE
            }
        }
    }
}

/// Resolves settings, then fetches, renders and publishes the chart.
///
/// # Errors
/// Returns an error if configuration is incomplete, the stats cannot be
/// fetched, or the chart cannot be published.
pub(crate) fn run_publish_impl(cli: &Cli, mode: ColorMode) -> Result<()> {
    let settings = load_settings(&ConfigLoader::new(), cli)?;
    let verbose = cli.verbose > 0 && !cli.quiet;

    let report = if let Some(path) = &cli.stats_file {
        if verbose {
            print_info(mode, &format!("Reading stats from {}", path.display()));
        }
        publish_with(&FileStatsProvider::new(path), &settings)?
    } else {
        if verbose {
            print_info(mode, &format!("Fetching stats for {}", settings.username));
        }
        publish_with(&LeetCodeProvider::new(ReqwestClient), &settings)?
    };

    if verbose {
        print_info(
            mode,
            &format!(
                "{} tags fetched, {} after filtering, {} charted",
                report.fetched, report.kept, report.rendered
            ),
        );
    }
    if report.rendered == 0 && !cli.quiet {
        print_warning(mode, "No skills left to chart; publishing an empty chart");
    }
    if !cli.dry_run && !cli.quiet {
        print!("{}", report.chart);
        println!("Updated gist {}", settings.target());
    }
    Ok(())
}

fn publish_with(provider: &impl StatsProvider, settings: &Settings) -> Result<RunReport> {
    match &settings.publish {
        Some(target) => pipeline::run(
            provider,
            settings,
            &GistSink::new(ReqwestClient, target.token.as_str()),
        ),
        None => pipeline::run(provider, settings, &StdoutSink),
    }
}

#[cfg(test)]
#[path = "publish_tests.rs"]
mod tests;
