pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod resilience;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

use std::io;

use anyhow::Result;
use app::{
    events::{ShutdownSignal, spawn_signal_listener},
    settings::load_settings,
    state::Ticker,
};
use chrono::{DateTime, FixedOffset, Local};
use cli::Cli;
use data::forecast::ForecastClient;

pub async fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(&cli)?;
    let location = settings.location();
    tracing::info!(
        location = %location.display_name(),
        refresh_secs = settings.refresh_interval_secs,
        hours = settings.forecast_hours,
        "starting forecast ticker"
    );

    let client = ForecastClient::with_base_url(settings.forecast_url.clone(), location)?;
    let mut ticker = Ticker::new(client, &settings, io::stdout());

    if cli.once {
        ticker.print_once(local_now()).await?;
        return Ok(());
    }

    let shutdown = ShutdownSignal::new();
    spawn_signal_listener(shutdown.clone())?;
    ticker.run(&shutdown, local_now).await
}

pub fn local_now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}
