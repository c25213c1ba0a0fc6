//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bikeshare::{DashboardConfig, Segment};

/// Bikeshare: rental dashboard over daily and hourly datasets
#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing day.csv and hour.csv
    #[arg(
        short,
        long,
        global = true,
        env = "BIKESHARE_DATA_DIR",
        default_value = "data"
    )]
    pub data_dir: PathBuf,
}

impl Cli {
    /// Dashboard configuration for the selected data directory.
    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig::from_dir(&self.data_dir)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every view for a date range
    Summary {
        /// First date of the range (default: dataset start)
        #[arg(short, long, value_name = "DATE")]
        start: Option<String>,

        /// Last date of the range (default: dataset end, or --start alone)
        #[arg(short, long, value_name = "DATE")]
        end: Option<String>,

        /// Output the full view bundle as JSON
        #[arg(long)]
        json: bool,

        /// Days per RFM ranking
        #[arg(long, default_value = "5")]
        top: usize,
    },

    /// Write a single view to a file or stdout
    Export {
        /// View to export
        #[arg(long)]
        view: ViewChoice,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// First date of the range (default: dataset start)
        #[arg(short, long, value_name = "DATE")]
        start: Option<String>,

        /// Last date of the range (default: dataset end, or --start alone)
        #[arg(short, long, value_name = "DATE")]
        end: Option<String>,
    },

    /// Show the dataset date span and source files
    Coverage {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the JSON API and the web dashboard
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,
    },
}

/// A single exportable view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewChoice {
    Daily,
    Correlation,
    Temperature,
    Hourly,
    Seasons,
    Rfm(Segment),
}

impl std::str::FromStr for ViewChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(ViewChoice::Daily),
            "correlation" => Ok(ViewChoice::Correlation),
            "temperature" => Ok(ViewChoice::Temperature),
            "hourly" => Ok(ViewChoice::Hourly),
            "seasons" | "seasonal" => Ok(ViewChoice::Seasons),
            "rfm-casual" => Ok(ViewChoice::Rfm(Segment::Casual)),
            "rfm-registered" => Ok(ViewChoice::Rfm(Segment::Registered)),
            _ => Err(format!(
                "Unknown view: {}. Use: daily, correlation, temperature, hourly, seasons, rfm-casual, or rfm-registered.",
                s
            )),
        }
    }
}

impl std::fmt::Display for ViewChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewChoice::Daily => write!(f, "daily"),
            ViewChoice::Correlation => write!(f, "correlation"),
            ViewChoice::Temperature => write!(f, "temperature"),
            ViewChoice::Hourly => write!(f, "hourly"),
            ViewChoice::Seasons => write!(f, "seasons"),
            ViewChoice::Rfm(segment) => write!(f, "rfm-{}", segment),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use csv or json.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
