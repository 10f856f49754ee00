//! Binary entry point: parse the CLI, set up tracing, dispatch.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use user_api::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env();
    tracing::debug!(?config, "configuration loaded");

    let outcome = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
    };

    if let Err(e) = outcome {
        tracing::error!("command failed: {e}");
        std::process::exit(1);
    }
}

/// `--verbose` forces debug; otherwise RUST_LOG decides, defaulting
/// to info.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
