//! Example: Print every dashboard view for a data directory.
//!
//! Usage:
//!   cargo run --example summary -- <data_dir> [start] [end]
//!
//! Example:
//!   cargo run --example summary -- data 2011-01-01 2011-03-31

use std::env;

use bikeshare::{Correlation, Dashboard, DashboardConfig, Segment};

fn main() -> bikeshare::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example summary -- <data_dir> [start] [end]");
        std::process::exit(1);
    }

    let dashboard = Dashboard::load(DashboardConfig::from_dir(&args[1]))?;
    let range = dashboard.resolve_range(
        args.get(2).map(String::as_str),
        args.get(3).map(String::as_str),
    )?;
    let views = dashboard.views(&range);

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Bike rentals: {}", range);
    println!("{}", separator);
    println!();

    for insight in &views.insights {
        println!("- {}", insight.text);
    }
    println!();

    match views.correlation {
        Correlation::Computed { coefficient, points } => {
            println!("Temperature correlation: {:.3} ({} days)", coefficient, points)
        }
        Correlation::NotComputable { reason } => println!("Temperature correlation: {}", reason),
    }

    println!("\nTemperature buckets:");
    for bucket in &views.temperature_buckets.buckets {
        println!("  {:<10} {}", bucket.label, bucket.count);
    }

    println!("\nSeasons:");
    for season in &views.seasonal_totals.seasons {
        println!("  {:<7} {}", season.label, season.total_count);
    }

    for segment in Segment::ALL {
        println!("\nTop {} days by rentals:", segment);
        for row in &views.rfm(segment).by_monetary {
            println!("  {}  {}", row.date, row.monetary);
        }
    }

    if !views.notices.is_empty() {
        println!("\nNotices:");
        for notice in &views.notices {
            println!("  {}: {}", notice.view, notice.reason);
        }
    }

    Ok(())
}
