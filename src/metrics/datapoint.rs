use std::collections::BTreeMap;

use time::OffsetDateTime;

use crate::monitor::models::Measurement;

/// Namespace all RTT data points are published under.
pub const NAMESPACE: &str = "url_rtt";

/// Name of the RTT metric.
pub const METRIC_NAME: &str = "rtt";

/// Dimension carrying the polled URL.
pub const URL_DIMENSION: &str = "url";

/// Unit of a [`MetricDataPoint`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
  Milliseconds,
}

/// A single data point submitted to the metrics backend.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDataPoint {
  /// Top-level grouping of the metric.
  pub namespace: String,

  /// Metric name within the namespace.
  pub metric_name: String,

  /// Key/value tags attached to the point.
  pub dimensions: BTreeMap<String, String>,

  pub unit: Unit,

  pub value: f64,

  /// Time the measured event happened.
  pub timestamp: OffsetDateTime,
}

impl MetricDataPoint {
  /// Builds an RTT data point with an explicit value and timestamp.
  pub fn rtt_at(url: &str, value: f64, timestamp: OffsetDateTime) -> Self {
    Self {
      namespace: String::from(NAMESPACE),
      metric_name: String::from(METRIC_NAME),
      dimensions: BTreeMap::from([(String::from(URL_DIMENSION), url.to_owned())]),
      unit: Unit::Milliseconds,
      value,
      timestamp,
    }
  }
}

impl From<&Measurement> for MetricDataPoint {
  fn from(measurement: &Measurement) -> Self {
    Self::rtt_at(
      &measurement.url,
      measurement.rtt_milliseconds as f64,
      measurement.timestamp,
    )
  }
}
