//! Bikeshare CLI - rental dashboard in the terminal and the browser.

mod cli;
mod commands;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(verbose: bool) {
    let default = if verbose { "bikeshare=debug,bikeshare_cli=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.dashboard_config();

    let result = match cli.command {
        Commands::Summary {
            start,
            end,
            json,
            top,
        } => commands::summary::run(config.with_top_n(top), start, end, json),

        Commands::Export {
            view,
            format,
            output,
            start,
            end,
        } => commands::export::run(config, view, format, output, start, end).map_err(Into::into),

        Commands::Coverage { json } => commands::coverage::run(config, json),

        Commands::Serve { port, no_open } => commands::serve::run(config, port, no_open),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
