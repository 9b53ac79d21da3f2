use std::fmt::Display;

use chrono::{DateTime, TimeZone};

pub const CLOCK_FORMAT: &str = "%Y/%b/%d %H:%M:%S";

#[must_use]
pub fn format_clock<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(CLOCK_FORMAT).to_string()
}

/// The live clock line. Starts with a carriage return so each tick overwrites
/// the previous one.
#[must_use]
pub fn clock_line<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("\r[Current Time] {}", format_clock(time))
}
