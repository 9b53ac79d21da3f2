use chrono::{DateTime, Duration, Utc};

use crate::cli::DEFAULT_REFRESH_SECS;

/// Tracks when the next remote refresh is due.
///
/// A fresh scheduler is already due. Every attempt, successful or not, pushes
/// the due time a full interval past the attempt; there is no catch-up and no
/// alignment to the wall-clock hour.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    next_due: Option<DateTime<Utc>>,
    interval: Duration,
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_SECS)
    }
}

impl RefreshScheduler {
    #[must_use]
    pub fn new(interval_secs: u64) -> Self {
        let secs = i64::try_from(interval_secs.max(1)).unwrap_or(i64::MAX);
        Self {
            next_due: None,
            interval: Duration::try_seconds(secs).unwrap_or(Duration::MAX),
        }
    }

    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_due.is_none_or(|due| now >= due)
    }

    pub fn mark_refreshed(&mut self, now: DateTime<Utc>) {
        self.next_due = Some(
            now.checked_add_signed(self.interval)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        );
    }

    #[must_use]
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.next_due
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
