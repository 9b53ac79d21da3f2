use std::io::Write;

use crate::domain::weather::{HourlyForecast, conditions::weather_label_opt, format_datetime};

const MISSING: &str = "--";

fn value_or_missing<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

#[must_use]
pub fn forecast_header(hours: usize) -> String {
    format!("[Next {hours} Hours Forecast]:")
}

#[must_use]
pub fn forecast_line(hour: &HourlyForecast) -> String {
    let temperature = hour
        .temperature_2m_c
        .map_or_else(|| MISSING.to_string(), |t| format!("{t:.1}"));
    format!(
        "  {}: {}°C, Humidity: {}%, Precipitation: {}%, Condition: {}",
        format_datetime(hour.time),
        temperature,
        value_or_missing(hour.relative_humidity_2m),
        value_or_missing(hour.precipitation_probability),
        weather_label_opt(hour.weather_code),
    )
}

/// Writes the header followed by one line per record.
pub fn render_forecast_block<W: Write>(
    out: &mut W,
    hours: usize,
    window: &[HourlyForecast],
) -> std::io::Result<()> {
    writeln!(out, "{}", forecast_header(hours))?;
    for hour in window {
        writeln!(out, "{}", forecast_line(hour))?;
    }
    out.flush()
}
