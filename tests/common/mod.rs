#![allow(dead_code)]

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone};
use hourly_ticker::{
    app::settings::Settings,
    cli::{Cli, DEFAULT_HOURS, DEFAULT_REFRESH_SECS},
    data::forecast::ForecastClient,
    domain::weather::{ForecastSeries, HourlyForecast, Location},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const FORECAST_PATH: &str = "/v1/forecast";
pub const TAIPEI_OFFSET_SECS: i32 = 8 * 3600;

pub fn taipei_at(hour: u32, minute: u32, second: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(TAIPEI_OFFSET_SECS)
        .expect("valid offset")
        .with_ymd_and_hms(2026, 2, 12, hour, minute, second)
        .single()
        .expect("valid fixed instant")
}

pub fn parse_time(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").expect("valid fixed time")
}

pub fn base_cli() -> Cli {
    Cli {
        lat: Some(25.058_517_8),
        lon: Some(121.653_253_9),
        timezone: Some("Asia/Taipei".to_string()),
        forecast_url: None,
        refresh_interval: DEFAULT_REFRESH_SECS,
        hours: DEFAULT_HOURS,
        config: None,
        once: false,
        verbose: false,
    }
}

pub fn taipei_location() -> Location {
    Location::new(25.058_517_8, 121.653_253_9, "Asia/Taipei")
}

pub fn settings_for(server: &MockServer) -> Settings {
    let mut cli = base_cli();
    cli.forecast_url = Some(forecast_url(server));
    Settings::from_cli_defaults(&cli)
}

pub fn forecast_url(server: &MockServer) -> String {
    format!("{}{FORECAST_PATH}", server.uri())
}

pub fn client_for(server: &MockServer) -> ForecastClient {
    ForecastClient::with_base_url(forecast_url(server), taipei_location()).expect("client")
}

pub fn hour_times(start: &str, hours: i64) -> Vec<String> {
    let base = parse_time(start);
    (0..hours)
        .map(|idx| {
            (base + Duration::hours(idx))
                .format("%Y-%m-%dT%H:%M")
                .to_string()
        })
        .collect()
}

pub fn hourly_payload(start: &str, hours: i64) -> serde_json::Value {
    let times = hour_times(start, hours);
    let temperatures = (0..hours)
        .map(|idx| 18.0 + idx as f64 * 0.5)
        .collect::<Vec<_>>();
    let codes = (0..hours)
        .map(|idx| if idx % 3 == 0 { 61 } else { 2 })
        .collect::<Vec<_>>();
    serde_json::json!({
        "latitude": 25.0625,
        "longitude": 121.625,
        "timezone": "Asia/Taipei",
        "timezone_abbreviation": "GMT+8",
        "utc_offset_seconds": TAIPEI_OFFSET_SECS,
        "hourly_units": {
            "time": "iso8601",
            "temperature_2m": "°C",
            "relative_humidity_2m": "%",
            "precipitation_probability": "%",
            "weathercode": "wmo code"
        },
        "hourly": {
            "time": times,
            "temperature_2m": temperatures,
            "relative_humidity_2m": vec![75; hours as usize],
            "precipitation_probability": vec![30; hours as usize],
            "weathercode": codes,
        }
    })
}

pub async fn mount_json(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub fn fixture_series(start: &str, hours: i64) -> ForecastSeries {
    let base = parse_time(start);
    let hourly = (0..hours)
        .map(|idx| HourlyForecast {
            time: base + Duration::hours(idx),
            temperature_2m_c: Some(18.0 + idx as f64 * 0.5),
            relative_humidity_2m: Some(75),
            precipitation_probability: Some(30),
            weather_code: Some(if idx % 3 == 0 { 61 } else { 2 }),
        })
        .collect();
    ForecastSeries::new(hourly)
}

pub fn forecast_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| line.starts_with("  ")).collect()
}
