use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use anyhow::Context;
use tokio::signal::unix::{SignalKind, signal};

/// Cooperative shutdown flag shared between the signal listener and the loop.
///
/// Raising it never interrupts work in progress; the loop polls it between
/// ticks. Once raised it stays raised.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    requested: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

/// Registers SIGINT and SIGTERM and raises `shutdown` on the first delivery.
///
/// Registration happens before this returns so a signal sent right after is
/// never lost. Other signals keep their default disposition.
pub fn spawn_signal_listener(shutdown: ShutdownSignal) -> anyhow::Result<()> {
    let mut interrupt =
        signal(SignalKind::interrupt()).context("registering SIGINT handler failed")?;
    let mut terminate =
        signal(SignalKind::terminate()).context("registering SIGTERM handler failed")?;

    tokio::spawn(async move {
        loop {
            let name = tokio::select! {
                received = interrupt.recv() => received.map(|()| "SIGINT"),
                received = terminate.recv() => received.map(|()| "SIGTERM"),
            };
            let Some(name) = name else {
                break;
            };
            tracing::info!(signal = name, "termination requested");
            shutdown.request();
        }
    });
    Ok(())
}
