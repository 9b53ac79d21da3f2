use std::{io::Write, time::Duration};

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use tokio::time::sleep;

use crate::{
    app::{events::ShutdownSignal, settings::Settings},
    data::forecast::ForecastSource,
    domain::weather::ForecastSeries,
    resilience::schedule::RefreshScheduler,
    ui::{self, clock_line, render_forecast_block},
};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Clock redrawn, no refresh due.
    Idle,
    /// Refresh succeeded; `shown` records were rendered.
    Refreshed { shown: usize },
    /// Refresh attempted and failed; no forecast this cycle.
    RefreshFailed,
}

/// The single control loop: clock redraw, due check, fetch, render, sleep.
#[derive(Debug)]
pub struct Ticker<S, W> {
    source: S,
    scheduler: RefreshScheduler,
    series: Option<ForecastSeries>,
    forecast_hours: usize,
    tick_interval: Duration,
    out: W,
}

impl<S, W> Ticker<S, W> {
    pub fn new(source: S, settings: &Settings, out: W) -> Self {
        Self::with_scheduler(
            source,
            RefreshScheduler::new(settings.refresh_interval_secs),
            settings.forecast_hours,
            out,
        )
    }

    pub fn with_scheduler(
        source: S,
        scheduler: RefreshScheduler,
        forecast_hours: usize,
        out: W,
    ) -> Self {
        Self {
            source,
            scheduler,
            series: None,
            forecast_hours,
            tick_interval: TICK_INTERVAL,
            out,
        }
    }

    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn scheduler(&self) -> &RefreshScheduler {
        &self.scheduler
    }

    pub fn series(&self) -> Option<&ForecastSeries> {
        self.series.as_ref()
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<S: ForecastSource, W: Write> Ticker<S, W> {
    /// Runs one tick at `now` without sleeping.
    pub async fn tick(&mut self, now: DateTime<FixedOffset>) -> Result<TickOutcome> {
        write!(self.out, "{}", clock_line(&now)).context("writing clock line failed")?;
        self.out.flush().context("flushing clock line failed")?;

        let now_utc = now.with_timezone(&Utc);
        if !self.scheduler.is_due(now_utc) {
            return Ok(TickOutcome::Idle);
        }

        writeln!(self.out).context("writing output failed")?;
        tracing::info!("updating weather data");
        let fetched = self.source.fetch().await;
        self.scheduler.mark_refreshed(now_utc);

        self.series = match fetched {
            Ok(series) => {
                tracing::info!(records = series.len(), "weather data updated");
                Some(series)
            }
            Err(err) => {
                tracing::warn!("weather refresh failed: {err}");
                None
            }
        };

        let Some(series) = &self.series else {
            return Ok(TickOutcome::RefreshFailed);
        };
        let window = series.window_at(now, self.forecast_hours);
        render_forecast_block(&mut self.out, self.forecast_hours, window)
            .context("writing forecast failed")?;
        Ok(TickOutcome::Refreshed {
            shown: window.len(),
        })
    }

    /// Fetches once and prints the forecast block; fetch errors are returned.
    pub async fn print_once(&mut self, now: DateTime<FixedOffset>) -> Result<usize> {
        let series = self
            .source
            .fetch()
            .await
            .context("weather refresh failed")?;
        self.scheduler.mark_refreshed(now.with_timezone(&Utc));

        let series = self.series.insert(series);
        let window = series.window_at(now, self.forecast_hours);
        render_forecast_block(&mut self.out, self.forecast_hours, window)
            .context("writing forecast failed")?;
        Ok(window.len())
    }

    /// Ticks until `shutdown` is observed at the top of a tick, then prints
    /// the farewell line.
    pub async fn run<C>(&mut self, shutdown: &ShutdownSignal, mut clock: C) -> Result<()>
    where
        C: FnMut() -> DateTime<FixedOffset>,
    {
        while !shutdown.is_requested() {
            self.tick(clock()).await?;
            sleep(self.tick_interval).await;
        }

        writeln!(self.out, "\n{}", ui::FAREWELL).context("writing farewell failed")?;
        self.out.flush().context("flushing output failed")?;
        tracing::info!("shutdown complete");
        Ok(())
    }
}
