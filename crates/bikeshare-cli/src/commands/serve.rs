//! Serve command - JSON API plus the embedded dashboard page.

use bikeshare::{Dashboard, DashboardConfig};
use colored::Colorize;
use tracing::info;

use crate::server::{app, state::AppState};

pub fn run(
    config: DashboardConfig,
    port: u16,
    no_open: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data_path = config.source.daily.clone();
    let dashboard = Dashboard::load(config)?;

    let coverage = dashboard
        .coverage()
        .map(|range| range.to_string())
        .unwrap_or_else(|| "no daily rows".to_string());
    info!(coverage = %coverage, "Dashboard loaded");

    let state = AppState::new(dashboard);

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting dashboard server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Data: {}", data_path.display());
    println!("  Coverage: {}", coverage);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        app::run_server(state, port).await
    })?;

    Ok(())
}
