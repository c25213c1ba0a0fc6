//! Summary command - print every view for a date range.

use bikeshare::aggregate::RfmRow;
use bikeshare::{Correlation, Dashboard, DashboardConfig, DashboardViews, Segment};
use colored::Colorize;

use super::bar;

const BAR_WIDTH: usize = 30;

pub fn run(
    config: DashboardConfig,
    start: Option<String>,
    end: Option<String>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = Dashboard::load(config)?;
    let range = dashboard.resolve_range(start.as_deref(), end.as_deref())?;
    let views = dashboard.views(&range);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    print_report(&views);
    Ok(())
}

fn print_report(views: &DashboardViews) {
    println!(
        "{} {}",
        "Bike rentals for".cyan().bold(),
        views.range.to_string().white()
    );
    println!();

    println!("{}", "Insights:".yellow().bold());
    for insight in &views.insights {
        println!("  • {}", insight.text);
    }
    println!();

    println!("{}", "Daily rentals:".yellow().bold());
    if views.daily_summary.is_empty() {
        println!("  {}", "No daily rows in range".dimmed());
    }
    for row in &views.daily_summary.rows {
        println!(
            "  {}  {:>6}  temp {:.3}  hum {:.3}",
            row.date,
            row.total_count.to_string().white().bold(),
            row.mean_temperature,
            row.mean_humidity
        );
    }
    println!();

    println!("{}", "Temperature vs rentals:".yellow().bold());
    match views.correlation {
        Correlation::Computed { coefficient, points } => {
            let value = format!("{:.3}", coefficient);
            let colored = if coefficient.abs() >= 0.7 {
                value.green()
            } else if coefficient.abs() >= 0.3 {
                value.yellow()
            } else {
                value.red()
            };
            println!("  Pearson r = {} over {} days", colored, points);
        }
        Correlation::NotComputable { reason } => {
            println!("  {} {}", "Not computable:".red(), reason);
        }
    }
    println!();

    println!("{}", "Hourly rows by temperature:".yellow().bold());
    let max_bucket = views
        .temperature_buckets
        .buckets
        .iter()
        .map(|b| b.count as u64)
        .max()
        .unwrap_or(0);
    for bucket in &views.temperature_buckets.buckets {
        println!(
            "  {:<10} {} {}",
            bucket.label,
            bar(bucket.count as u64, max_bucket, BAR_WIDTH).cyan(),
            bucket.count
        );
    }
    if views.temperature_buckets.outside_nominal > 0 {
        println!(
            "  {} {} rows outside the nominal temperature span",
            "Note:".yellow(),
            views.temperature_buckets.outside_nominal
        );
    }
    println!();

    println!("{}", "Rentals by hour:".yellow().bold());
    let peak = views.hourly_totals.peak().map(|p| p.hour);
    let max_hour = views
        .hourly_totals
        .hours
        .iter()
        .map(|h| h.total_count)
        .max()
        .unwrap_or(0);
    for hour in &views.hourly_totals.hours {
        let line = format!(
            "  {:02}:00 {} {}",
            hour.hour,
            bar(hour.total_count, max_hour, BAR_WIDTH),
            hour.total_count
        );
        if Some(hour.hour) == peak {
            println!("{}", line.green().bold());
        } else {
            println!("{}", line);
        }
    }
    println!();

    println!("{}", "Rentals by season:".yellow().bold());
    let max_season = views
        .seasonal_totals
        .seasons
        .iter()
        .map(|s| s.total_count)
        .max()
        .unwrap_or(0);
    if views.seasonal_totals.seasons.is_empty() {
        println!("  {}", "No seasons in range".dimmed());
    }
    for season in &views.seasonal_totals.seasons {
        println!(
            "  {:<7} {} {}",
            season.label,
            bar(season.total_count, max_season, BAR_WIDTH).magenta(),
            season.total_count
        );
    }
    println!();

    for segment in Segment::ALL {
        let report = views.rfm(segment);
        println!(
            "{} {}",
            "RFM for".yellow().bold(),
            segment.label().yellow().bold()
        );
        if report.is_empty() {
            println!("  {}", "No days in range".dimmed());
            println!();
            continue;
        }
        print_ranking("Most recent", &report.by_recency);
        print_ranking("Most frequent", &report.by_frequency);
        print_ranking("Highest value", &report.by_monetary);
        println!();
    }
}

fn print_ranking(title: &str, rows: &[RfmRow]) {
    println!("  {}:", title.white().bold());
    for row in rows {
        println!(
            "    {}  recency {:>3}  rentals {}",
            row.date, row.recency, row.monetary
        );
    }
}
