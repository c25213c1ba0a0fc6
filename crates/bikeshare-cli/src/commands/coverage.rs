//! Coverage command - show the dataset date span and source files.

use bikeshare::{Dashboard, DashboardConfig, SourceMetadata};
use colored::Colorize;

pub fn run(config: DashboardConfig, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = Dashboard::load(config)?;
    let store = dashboard.store();
    let coverage = dashboard.coverage();

    if json_output {
        let status = serde_json::json!({
            "coverage": coverage,
            "daily_rows": store.daily().len(),
            "hourly_rows": store.hourly().len(),
            "sources": {
                "daily": store.daily_source(),
                "hourly": store.hourly_source(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    match coverage {
        Some(range) => println!(
            "{} {} ({} days)",
            "Data covers".cyan().bold(),
            range.to_string().white().bold(),
            range.days()
        ),
        None => println!("{} The daily dataset is empty.", "Warning:".yellow().bold()),
    }
    println!();

    println!("{}", "Sources:".yellow().bold());
    for (kind, source) in [("Daily", store.daily_source()), ("Hourly", store.hourly_source())] {
        if let Some(source) = source {
            print_source(kind, source);
        }
    }
    println!();

    println!(
        "Run {} to see every view.",
        "bikeshare summary".cyan().bold()
    );

    Ok(())
}

fn print_source(kind: &str, source: &SourceMetadata) {
    println!(
        "  {:<7} {} ({} rows, {} columns, {})",
        kind,
        source.path.display().to_string().white(),
        source.row_count,
        source.column_count,
        source.format
    );
    println!("          sha256 {}", source.hash.dimmed());
}
