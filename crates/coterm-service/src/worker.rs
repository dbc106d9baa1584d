//! Background worker that reloads the store on a schedule

use crate::{ReloadMetrics, ServiceError};
use coterm_loader::{CoTermLoader, LoadReport};
use coterm_store::SharedCoTermStore;
use tokio::time::{interval_at, Duration, Instant, Interval};

/// Reloads both sources at a fixed interval and swaps the result in
///
/// A failed reload is logged and the store keeps serving what it had.
/// The first reload happens one interval after start, since the service
/// already loaded at startup.
///
/// # Examples
///
/// ```no_run
/// use coterm_service::{CoTermService, ServiceConfig};
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let service = CoTermService::start(ServiceConfig::default())?;
///     let mut worker = service.reload_worker(Duration::from_secs(3600));
///
///     // Run until Ctrl+C
///     worker.run().await?;
///     Ok(())
/// }
/// ```
pub struct ReloadWorker {
    loader: CoTermLoader,
    store: SharedCoTermStore,
    interval: Duration,
    metrics: ReloadMetrics,
}

impl ReloadWorker {
    /// Create a worker reloading `store` from `loader` every `interval`
    pub fn new(loader: CoTermLoader, store: SharedCoTermStore, interval: Duration) -> Self {
        Self {
            loader,
            store,
            interval,
            metrics: ReloadMetrics::new(),
        }
    }

    /// Metrics collected so far
    pub fn metrics(&self) -> &ReloadMetrics {
        &self.metrics
    }

    /// Load both sources once and replace the store on success
    pub async fn reload_once(&mut self) -> Result<LoadReport, ServiceError> {
        let loader = self.loader.clone();
        let outcome = tokio::task::spawn_blocking(move || loader.load())
            .await
            .map_err(|e| ServiceError::Worker(e.to_string()))?;

        match outcome {
            Ok(loaded) => {
                self.store.replace(loaded.store);
                self.metrics.record_success(loaded.report.clone());
                Ok(loaded.report)
            }
            Err(e) => {
                self.metrics.record_failure();
                Err(e.into())
            }
        }
    }

    /// Run the worker until a shutdown signal (Ctrl+C) is received
    pub async fn run(&mut self) -> Result<(), ServiceError> {
        let mut ticker = self.ticker();

        tracing::info!("Reload worker started (interval: {:?})", self.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.cycle().await;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Shutdown signal received, stopping reload worker");
                    break;
                }
            }
        }

        tracing::info!("Reload worker stopped. Final metrics:\n{}", self.metrics.summary());
        Ok(())
    }

    /// Run for a specific number of cycles
    pub async fn run_cycles(&mut self, cycles: usize) -> Result<(), ServiceError> {
        let mut ticker = self.ticker();

        tracing::info!(
            "Reload worker started for {} cycles (interval: {:?})",
            cycles,
            self.interval
        );

        for cycle in 0..cycles {
            ticker.tick().await;
            tracing::debug!("Starting reload {}/{}", cycle + 1, cycles);
            self.cycle().await;
        }

        tracing::info!("Reload worker finished. Final metrics:\n{}", self.metrics.summary());
        Ok(())
    }

    fn ticker(&self) -> Interval {
        interval_at(Instant::now() + self.interval, self.interval)
    }

    async fn cycle(&mut self) {
        match self.reload_once().await {
            Ok(report) => tracing::info!("Reload completed: {}", report.summary()),
            Err(e) => tracing::error!("Reload failed, keeping the current store: {}", e),
        }
    }
}
