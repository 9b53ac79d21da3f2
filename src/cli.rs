#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_LATITUDE: f64 = 25.058_517_8;
pub const DEFAULT_LONGITUDE: f64 = 121.653_253_9;
pub const DEFAULT_TIMEZONE: &str = "Asia/Taipei";
pub const DEFAULT_REFRESH_SECS: u64 = 3600;
pub const DEFAULT_HOURS: u8 = 12;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "hourly-ticker",
    version,
    about = "Terminal clock with an hourly-refreshed weather forecast"
)]
pub struct Cli {
    /// Latitude (requires --lon)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// IANA timezone requested from the forecast API
    #[arg(long)]
    pub timezone: Option<String>,

    /// Override the forecast API base URL
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Refresh interval in seconds
    #[arg(long, default_value_t = DEFAULT_REFRESH_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_interval: u64,

    /// Number of forecast hours to show (1..48)
    #[arg(long, default_value_t = DEFAULT_HOURS, value_parser = clap::value_parser!(u8).range(1..=48))]
    pub hours: u8,

    /// JSON settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the forecast once and exit
    #[arg(long)]
    pub once: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "hourly_ticker=debug"
        } else {
            "hourly_ticker=info"
        }
    }
}
