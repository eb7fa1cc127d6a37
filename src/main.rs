use clap::Parser;

use skill_gist::cli::Cli;
use skill_gist::commands::run_publish;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_publish(&cli));
}
