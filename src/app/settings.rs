use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

use crate::{
    cli::{
        Cli, DEFAULT_HOURS, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_REFRESH_SECS,
        DEFAULT_TIMEZONE,
    },
    data::forecast::FORECAST_URL,
    domain::weather::Location,
};

/// Effective runtime configuration after merging CLI flags and the settings file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub forecast_url: String,
    pub refresh_interval_secs: u64,
    pub forecast_hours: usize,
}

/// On-disk shape. Every field is optional; absent fields keep the CLI value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub forecast_url: Option<String>,
    pub refresh_interval_secs: Option<u64>,
    pub forecast_hours: Option<usize>,
}

impl Settings {
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        Self {
            latitude: cli.lat.unwrap_or(DEFAULT_LATITUDE),
            longitude: cli.lon.unwrap_or(DEFAULT_LONGITUDE),
            timezone: cli
                .timezone
                .clone()
                .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            forecast_url: cli
                .forecast_url
                .clone()
                .unwrap_or_else(|| FORECAST_URL.to_string()),
            refresh_interval_secs: cli.refresh_interval,
            forecast_hours: usize::from(cli.hours),
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude, self.timezone.clone())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            anyhow::bail!("latitude {} is outside -90..=90", self.latitude);
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            anyhow::bail!("longitude {} is outside -180..=180", self.longitude);
        }
        if self.refresh_interval_secs == 0 {
            anyhow::bail!("refresh interval must be at least one second");
        }
        if self.forecast_hours == 0 {
            anyhow::bail!("forecast window must contain at least one hour");
        }
        Ok(())
    }

    /// Fills in values the CLI left unset (or at their defaults) from `file`.
    fn merge_file(&mut self, cli: &Cli, file: SettingsFile) {
        if cli.lat.is_none()
            && let (Some(latitude), Some(longitude)) = (file.latitude, file.longitude)
        {
            self.latitude = latitude;
            self.longitude = longitude;
        }
        if cli.timezone.is_none()
            && let Some(timezone) = file.timezone
        {
            self.timezone = timezone;
        }
        if cli.forecast_url.is_none()
            && let Some(url) = file.forecast_url
        {
            self.forecast_url = url;
        }
        if cli.refresh_interval == DEFAULT_REFRESH_SECS
            && let Some(secs) = file.refresh_interval_secs
        {
            self.refresh_interval_secs = secs;
        }
        if cli.hours == DEFAULT_HOURS
            && let Some(hours) = file.forecast_hours
        {
            self.forecast_hours = hours;
        }
    }
}

/// Builds the effective settings.
///
/// Without `--config` only the CLI values and built-in defaults apply. An
/// explicit `--config` path must exist and parse.
pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    cli.validate()?;
    let mut settings = Settings::from_cli_defaults(cli);

    if let Some(path) = &cli.config {
        let file = read_settings_file(path)?;
        settings.merge_file(cli, file);
    }

    settings.validate()?;
    Ok(settings)
}

pub fn read_settings_file(path: &Path) -> anyhow::Result<SettingsFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading settings file {} failed", path.display()))?;
    let file: SettingsFile = serde_json::from_str(&content)
        .with_context(|| format!("parsing settings file {} failed", path.display()))?;
    if file.latitude.is_some() != file.longitude.is_some() {
        anyhow::bail!(
            "settings file {} must set latitude and longitude together",
            path.display()
        );
    }
    Ok(file)
}
