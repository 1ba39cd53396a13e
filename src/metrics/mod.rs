//! A module for publishing RTT measurements as metric data points.
//!
//! Every measurement becomes exactly one [`MetricDataPoint`] in the
//! `url_rtt` namespace, tagged with the `url` dimension. Points are never
//! batched, cached or retried.

mod cloudwatch;
mod datapoint;

pub use cloudwatch::CloudWatchReporter;
pub use datapoint::{METRIC_NAME, MetricDataPoint, NAMESPACE, URL_DIMENSION, Unit};

use crate::errors::ReportError;
use crate::monitor::models::Measurement;

/// A trait for metrics backends accepting RTT measurements.
pub trait Reporter {
  /// Submits `measurement` as a single data point.
  fn report(
    &self,
    measurement: &Measurement,
  ) -> impl Future<Output = Result<(), ReportError>> + Send;
}
