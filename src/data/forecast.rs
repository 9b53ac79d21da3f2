use anyhow::Context;
use chrono::FixedOffset;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::weather::{ForecastSeries, HourlyForecast, Location, parse_datetime};

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const HOURLY_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,precipitation_probability,weathercode";

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("forecast request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("forecast request returned non-success status: {0}")]
    Status(#[source] reqwest::Error),
    #[error("failed to parse forecast payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("hourly field `{field}` has {found} values, expected {expected}")]
    MisalignedSeries {
        field: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Anything that can produce one fresh hourly series per call.
#[allow(async_fn_in_trait)]
pub trait ForecastSource {
    async fn fetch(&self) -> Result<ForecastSeries, ForecastError>;
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
    location: Location,
}

impl ForecastClient {
    pub fn with_base_url(base_url: impl Into<String>, location: Location) -> anyhow::Result<Self> {
        let client = Client::builder()
            .build()
            .context("building HTTP client failed")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            location,
        })
    }
}

impl ForecastSource for ForecastClient {
    async fn fetch(&self) -> Result<ForecastSeries, ForecastError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", self.location.latitude.to_string()),
                ("longitude", self.location.longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("timezone", self.location.timezone.clone()),
            ])
            .send()
            .await
            .map_err(ForecastError::Request)?
            .error_for_status()
            .map_err(ForecastError::Status)?;

        let body = response.text().await.map_err(ForecastError::Request)?;
        parse_forecast(&body)
    }
}

/// Decodes and validates a forecast payload.
///
/// Every hourly value array must match the length of `hourly.time`. Records
/// whose timestamp does not parse are dropped rather than failing the series.
pub fn parse_forecast(body: &str) -> Result<ForecastSeries, ForecastError> {
    let payload: ForecastResponse = serde_json::from_str(body)?;
    let hourly = parse_hourly(&payload.hourly)?;
    Ok(ForecastSeries {
        timezone: payload.timezone,
        utc_offset: payload.utc_offset_seconds.and_then(FixedOffset::east_opt),
        hourly,
    })
}

fn parse_hourly(hourly: &HourlyBlock) -> Result<Vec<HourlyForecast>, ForecastError> {
    let expected = hourly.time.len();
    check_len("temperature_2m", expected, hourly.temperature_2m.len())?;
    check_len(
        "relative_humidity_2m",
        expected,
        hourly.relative_humidity_2m.len(),
    )?;
    check_len(
        "precipitation_probability",
        expected,
        hourly.precipitation_probability.len(),
    )?;
    check_len("weathercode", expected, hourly.weathercode.len())?;

    let mut out = Vec::with_capacity(expected);
    for idx in 0..expected {
        let Some(time) = parse_datetime(&hourly.time[idx]) else {
            tracing::debug!(value = %hourly.time[idx], "skipping record with malformed timestamp");
            continue;
        };

        out.push(HourlyForecast {
            time,
            temperature_2m_c: hourly.temperature_2m[idx],
            relative_humidity_2m: hourly.relative_humidity_2m[idx],
            precipitation_probability: hourly.precipitation_probability[idx],
            weather_code: hourly.weathercode[idx],
        });
    }
    Ok(out)
}

fn check_len(field: &'static str, expected: usize, found: usize) -> Result<(), ForecastError> {
    if expected == found {
        Ok(())
    } else {
        Err(ForecastError::MisalignedSeries {
            field,
            expected,
            found,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    utc_offset_seconds: Option<i32>,
    hourly: HourlyBlock,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
    relative_humidity_2m: Vec<Option<u8>>,
    precipitation_probability: Vec<Option<u8>>,
    weathercode: Vec<Option<i64>>,
}
