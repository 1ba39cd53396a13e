//! The poll-and-report loop.
//!
//! Each iteration walks the configured URLs strictly in order. For every URL
//! the [`Poller`] runs first; only a successful measurement is handed to the
//! [`Reporter`]. A failure in either step is logged with the URL and cause
//! and never stops the rest of the list. Once the list is done the loop
//! sleeps for the poll interval and starts over, forever.

use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::ServiceConfig;
use crate::metrics::Reporter;
use crate::monitor::Poller;

/// Outcome counters of a single pass over the URL list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IterationReport {
  /// Poll attempts made.
  pub polled: usize,

  /// Data points accepted by the reporter.
  pub reported: usize,

  pub poll_failures: usize,

  pub report_failures: usize,
}

/// The probe service: a config, a poller and a reporter.
pub struct Service<P, R> {
  config: ServiceConfig,
  poller: P,
  reporter: R,
}

impl<P: Poller, R: Reporter> Service<P, R> {
  pub fn new(config: ServiceConfig, poller: P, reporter: R) -> Self {
    Self {
      config,
      poller,
      reporter,
    }
  }

  pub fn config(&self) -> &ServiceConfig {
    &self.config
  }

  /// Polls and reports every configured URL once, in configuration order.
  pub async fn run_once(&self) -> IterationReport {
    let mut report = IterationReport::default();

    for url in &self.config.urls {
      report.polled += 1;

      let measurement = match self.poller.poll(url).await {
        Ok(measurement) => measurement,
        Err(error) => {
          report.poll_failures += 1;
          warn!(url = %url, %error, "failed to poll");
          continue;
        }
      };

      if let Err(error) = self.reporter.report(&measurement).await {
        report.report_failures += 1;
        warn!(url = %url, %error, "failed to push metrics");
        continue;
      }

      report.reported += 1;
      info!(
        url = %url,
        rtt_ms = measurement.rtt_milliseconds,
        status = measurement.status,
        "pushed metrics"
      );
    }

    report
  }

  /// Runs iterations separated by the poll interval. Never returns.
  pub async fn run(&self) {
    let interval = self.config.poll_interval();
    let mut iteration: u64 = 0;

    loop {
      iteration = iteration.wrapping_add(1);

      let report = self.run_once().await;
      debug!(
        iteration,
        polled = report.polled,
        reported = report.reported,
        poll_failures = report.poll_failures,
        report_failures = report.report_failures,
        "iteration finished"
      );

      sleep(interval).await;
    }
  }
}
