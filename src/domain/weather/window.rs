use chrono::NaiveDateTime;

use super::HourlyForecast;

/// Returns up to `count` consecutive records beginning at the first record
/// whose time is at or after `reference`.
///
/// The input is assumed to be in upstream order (non-decreasing time). The
/// window never wraps and never reorders; an empty series or a reference past
/// the last record yields an empty slice.
#[must_use]
pub fn select_window(
    hourly: &[HourlyForecast],
    reference: NaiveDateTime,
    count: usize,
) -> &[HourlyForecast] {
    let Some(start) = hourly.iter().position(|hour| hour.time >= reference) else {
        return &[];
    };
    let end = start.saturating_add(count).min(hourly.len());
    tracing::debug!(start, end, total = hourly.len(), "selected forecast window");
    &hourly[start..end]
}
