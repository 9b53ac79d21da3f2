#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    Clear,
    PartlyCloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    RainShowers,
    Thunderstorm,
    Unknown,
}

impl WeatherCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear sky",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::RainShowers => "Rain showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }
}

/// Only the codes listed here are recognised; intensities the upstream API
/// defines but we do not (56, 57, 66, 77, 85, ...) fall through to `Unknown`.
#[must_use]
pub fn weather_code_to_category(code: i64) -> WeatherCategory {
    match code {
        0 => WeatherCategory::Clear,
        1..=3 => WeatherCategory::PartlyCloudy,
        45 | 48 => WeatherCategory::Fog,
        51 | 53 | 55 => WeatherCategory::Drizzle,
        61 | 63 | 65 => WeatherCategory::Rain,
        71 | 73 | 75 => WeatherCategory::Snow,
        80..=82 => WeatherCategory::RainShowers,
        95 | 96 | 99 => WeatherCategory::Thunderstorm,
        _ => WeatherCategory::Unknown,
    }
}

#[must_use]
pub fn weather_label(code: i64) -> &'static str {
    weather_code_to_category(code).label()
}

/// Label for a record whose code may be `null` upstream.
#[must_use]
pub fn weather_label_opt(code: Option<i64>) -> &'static str {
    code.map_or(WeatherCategory::Unknown.label(), weather_label)
}
