use std::{io, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kinship::cli::{self, Cli};
use kinship::config::Config;
use kinship::session::ResolvedSession;

fn main() {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    init_tracing(&config, cli.verbose);

    let session = ResolvedSession::resolve(cli.user.as_deref(), config.user.as_deref());

    if let Err(e) = cli::run(cli, &config, &session) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays clean on stdout.
fn init_tracing(config: &Config, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
