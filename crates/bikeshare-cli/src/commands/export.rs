//! Export command - write one view as CSV or JSON.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use bikeshare::{Correlation, Dashboard, DashboardConfig, DateRange};
use colored::Colorize;

use crate::cli::{OutputFormat, ViewChoice};

pub fn run(
    config: DashboardConfig,
    view: ViewChoice,
    format: OutputFormat,
    output: Option<PathBuf>,
    start: Option<String>,
    end: Option<String>,
) -> bikeshare::Result<()> {
    let dashboard = Dashboard::load(config)?;
    let range = dashboard.resolve_range(start.as_deref(), end.as_deref())?;

    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };

    match format {
        OutputFormat::Json => write_json(&dashboard, view, &range, writer)?,
        OutputFormat::Csv => write_csv(&dashboard, view, &range, writer)?,
    }

    if let Some(path) = output {
        eprintln!(
            "{} {} view for {} to {}",
            "Exported".green().bold(),
            view.to_string().white().bold(),
            range,
            path.display().to_string().cyan()
        );
    }

    Ok(())
}

fn write_json<W: Write>(
    dashboard: &Dashboard,
    view: ViewChoice,
    range: &DateRange,
    mut writer: W,
) -> bikeshare::Result<()> {
    let value = match view {
        ViewChoice::Daily => serde_json::to_value(dashboard.daily_summary(range))?,
        ViewChoice::Correlation => serde_json::to_value(dashboard.correlation(range))?,
        ViewChoice::Temperature => serde_json::to_value(dashboard.temperature_buckets(range))?,
        ViewChoice::Hourly => serde_json::to_value(dashboard.hourly_totals(range))?,
        ViewChoice::Seasons => serde_json::to_value(dashboard.seasonal_totals(range))?,
        ViewChoice::Rfm(segment) => serde_json::to_value(dashboard.rfm(range, segment))?,
    };
    serde_json::to_writer_pretty(&mut writer, &value)?;
    writeln!(writer)?;
    Ok(())
}

fn write_csv<W: Write>(
    dashboard: &Dashboard,
    view: ViewChoice,
    range: &DateRange,
    writer: W,
) -> bikeshare::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    match view {
        ViewChoice::Daily => {
            csv.write_record(["date", "total_count", "mean_temperature", "mean_humidity"])?;
            for row in dashboard.daily_summary(range).rows {
                csv.write_record([
                    row.date.to_string(),
                    row.total_count.to_string(),
                    row.mean_temperature.to_string(),
                    row.mean_humidity.to_string(),
                ])?;
            }
        }
        ViewChoice::Correlation => {
            csv.write_record(["status", "coefficient", "points", "reason"])?;
            match dashboard.correlation(range) {
                Correlation::Computed { coefficient, points } => {
                    csv.write_record([
                        "computed".to_string(),
                        coefficient.to_string(),
                        points.to_string(),
                        String::new(),
                    ])?;
                }
                Correlation::NotComputable { reason } => {
                    csv.write_record([
                        "not_computable".to_string(),
                        String::new(),
                        String::new(),
                        reason.to_string(),
                    ])?;
                }
            }
        }
        ViewChoice::Temperature => {
            csv.write_record(["bucket", "count"])?;
            for bucket in dashboard.temperature_buckets(range).buckets {
                csv.write_record([bucket.label.to_string(), bucket.count.to_string()])?;
            }
        }
        ViewChoice::Hourly => {
            csv.write_record(["hour", "total_count"])?;
            for hour in dashboard.hourly_totals(range).hours {
                csv.write_record([hour.hour.to_string(), hour.total_count.to_string()])?;
            }
        }
        ViewChoice::Seasons => {
            csv.write_record(["season", "total_count"])?;
            for season in dashboard.seasonal_totals(range).seasons {
                csv.write_record([season.label.to_string(), season.total_count.to_string()])?;
            }
        }
        ViewChoice::Rfm(segment) => {
            csv.write_record(["date", "recency", "frequency", "monetary"])?;
            for row in dashboard.rfm(range, segment).rows {
                csv.write_record([
                    row.date.to_string(),
                    row.recency.to_string(),
                    row.frequency.to_string(),
                    row.monetary.to_string(),
                ])?;
            }
        }
    }

    csv.flush()?;
    Ok(())
}
