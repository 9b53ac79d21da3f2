use chrono::{DateTime, FixedOffset, NaiveDateTime};

pub mod conditions;
pub mod window;

pub use conditions::{WeatherCategory, weather_code_to_category, weather_label};
pub use window::select_window;

/// Layout of the upstream `hourly.time` strings.
pub const FORECAST_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, timezone: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            timezone: timezone.into(),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{:.4}, {:.4} ({})", self.latitude, self.longitude, self.timezone)
    }
}

/// One hour of forecast data. `time` is wall time in the series' timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyForecast {
    pub time: NaiveDateTime,
    pub temperature_2m_c: Option<f64>,
    pub relative_humidity_2m: Option<u8>,
    pub precipitation_probability: Option<u8>,
    pub weather_code: Option<i64>,
}

/// A complete hourly series as returned by one successful fetch.
///
/// Series are never edited after construction; a refresh replaces the whole
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    pub timezone: Option<String>,
    pub utc_offset: Option<FixedOffset>,
    pub hourly: Vec<HourlyForecast>,
}

impl ForecastSeries {
    pub fn new(hourly: Vec<HourlyForecast>) -> Self {
        Self {
            timezone: None,
            utc_offset: None,
            hourly,
        }
    }

    pub fn len(&self) -> usize {
        self.hourly.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hourly.is_empty()
    }

    /// Wall time in this series' timezone corresponding to `now`.
    ///
    /// Without an offset from upstream the caller's own wall time is used.
    pub fn local_reference(&self, now: DateTime<FixedOffset>) -> NaiveDateTime {
        match self.utc_offset {
            Some(offset) => now.with_timezone(&offset).naive_local(),
            None => now.naive_local(),
        }
    }

    /// Up to `count` records starting at the first one not earlier than `now`.
    pub fn window_at(&self, now: DateTime<FixedOffset>, count: usize) -> &[HourlyForecast] {
        select_window(&self.hourly, self.local_reference(now), count)
    }
}

pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, FORECAST_TIME_FORMAT).ok()
}

pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format(FORECAST_TIME_FORMAT).to_string()
}
