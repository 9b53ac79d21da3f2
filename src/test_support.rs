use std::{
    collections::VecDeque,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone};

use crate::{
    app::events::ShutdownSignal,
    cli::{Cli, DEFAULT_HOURS, DEFAULT_REFRESH_SECS},
    data::forecast::{ForecastError, ForecastSource},
    domain::weather::{ForecastSeries, HourlyForecast},
};

fn parse_time(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").expect("valid time fixture")
}

pub(crate) fn test_cli() -> Cli {
    Cli {
        lat: None,
        lon: None,
        timezone: None,
        forecast_url: None,
        refresh_interval: DEFAULT_REFRESH_SECS,
        hours: DEFAULT_HOURS,
        config: None,
        once: false,
        verbose: false,
    }
}

pub(crate) fn taipei() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("valid offset fixture")
}

/// `hh:mm` on 2026-02-12 in Taipei wall time.
pub(crate) fn taipei_at(hour: u32, minute: u32) -> DateTime<FixedOffset> {
    taipei()
        .with_ymd_and_hms(2026, 2, 12, hour, minute, 0)
        .single()
        .expect("valid instant fixture")
}

pub(crate) fn sample_series(start: &str, hours: i64) -> ForecastSeries {
    let base = parse_time(start);
    let hourly = (0..hours)
        .map(|idx| HourlyForecast {
            time: base + Duration::hours(idx),
            temperature_2m_c: Some(18.0 + idx as f64 * 0.5),
            relative_humidity_2m: Some(70),
            precipitation_probability: Some(20),
            weather_code: Some(if idx % 2 == 0 { 3 } else { 61 }),
        })
        .collect();
    ForecastSeries {
        timezone: Some("Asia/Taipei".to_string()),
        utc_offset: Some(taipei()),
        hourly,
    }
}

pub(crate) fn decode_error() -> ForecastError {
    ForecastError::Decode(
        serde_json::from_str::<serde_json::Value>("not json").expect_err("invalid json fixture"),
    )
}

/// Returns queued responses in order; once the queue is empty every call fails.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    responses: Mutex<VecDeque<Result<ForecastSeries, ForecastError>>>,
    calls: AtomicUsize,
    raise_on_fetch: Option<ShutdownSignal>,
}

impl ScriptedSource {
    pub(crate) fn new(responses: Vec<Result<ForecastSeries, ForecastError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    /// Raises `shutdown` while a fetch is in flight.
    pub(crate) fn raising(mut self, shutdown: ShutdownSignal) -> Self {
        self.raise_on_fetch = Some(shutdown);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ForecastSource for ScriptedSource {
    async fn fetch(&self) -> Result<ForecastSeries, ForecastError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(shutdown) = &self.raise_on_fetch {
            shutdown.request();
        }
        tokio::task::yield_now().await;
        self.responses
            .lock()
            .expect("scripted source lock")
            .pop_front()
            .unwrap_or_else(|| Err(decode_error()))
    }
}

impl ForecastSource for &ScriptedSource {
    async fn fetch(&self) -> Result<ForecastSeries, ForecastError> {
        (**self).fetch().await
    }
}
