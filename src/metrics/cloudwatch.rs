use aws_config::SdkConfig;
use aws_sdk_cloudwatch::Client;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::operation::put_metric_data::PutMetricDataOutput;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{Dimension, MetricDatum, StandardUnit};

use crate::errors::ReportError;
use crate::metrics::Reporter;
use crate::metrics::datapoint::{MetricDataPoint, Unit};
use crate::monitor::models::Measurement;

impl From<Unit> for StandardUnit {
  fn from(unit: Unit) -> Self {
    match unit {
      Unit::Milliseconds => StandardUnit::Milliseconds,
    }
  }
}

/// A [`Reporter`] publishing each measurement with one `PutMetricData` call.
#[derive(Debug, Clone)]
pub struct CloudWatchReporter {
  client: Client,
}

impl CloudWatchReporter {
  pub fn new(client: Client) -> Self {
    Self { client }
  }

  /// Creates a reporter with a client built from the shared AWS config.
  pub fn from_conf(sdk_config: &SdkConfig) -> Self {
    Self::new(Client::new(sdk_config))
  }

  /// Submits a single data point. Never retried here.
  pub async fn put(&self, point: &MetricDataPoint) -> Result<PutMetricDataOutput, ReportError> {
    self
      .client
      .put_metric_data()
      .namespace(&point.namespace)
      .metric_data(datum(point))
      .send()
      .await
      .map_err(|error| ReportError::Backend(DisplayErrorContext(&error).to_string()))
  }
}

impl Reporter for CloudWatchReporter {
  async fn report(&self, measurement: &Measurement) -> Result<(), ReportError> {
    self.put(&MetricDataPoint::from(measurement)).await?;

    Ok(())
  }
}

fn datum(point: &MetricDataPoint) -> MetricDatum {
  let dimensions = point
    .dimensions
    .iter()
    .map(|(name, value)| Dimension::builder().name(name).value(value).build())
    .collect::<Vec<_>>();

  MetricDatum::builder()
    .metric_name(&point.metric_name)
    .set_dimensions(Some(dimensions))
    .unit(point.unit.into())
    .value(point.value)
    .timestamp(DateTime::from_secs_and_nanos(
      point.timestamp.unix_timestamp(),
      point.timestamp.nanosecond(),
    ))
    .build()
}

#[cfg(test)]
mod tests {
  use aws_sdk_cloudwatch::config::{BehaviorVersion, Credentials, Region};
  use httpmock::prelude::*;
  use time::OffsetDateTime;

  use super::*;

  const ACCEPTED: &str = r#"<PutMetricDataResponse xmlns="http://monitoring.amazonaws.com/doc/2010-08-01/">
  <ResponseMetadata><RequestId>0b6c2f1e-request</RequestId></ResponseMetadata>
</PutMetricDataResponse>"#;

  const REJECTED: &str = r#"<ErrorResponse xmlns="http://monitoring.amazonaws.com/doc/2010-08-01/">
  <Error><Type>Sender</Type><Code>InvalidParameterValue</Code><Message>bad value</Message></Error>
  <RequestId>0b6c2f1e-request</RequestId>
</ErrorResponse>"#;

  fn reporter(server: &MockServer) -> CloudWatchReporter {
    let config = aws_sdk_cloudwatch::Config::builder()
      .behavior_version(BehaviorVersion::latest())
      .region(Region::new("us-east-1"))
      .credentials_provider(Credentials::new(
        "access-key",
        "secret-key",
        None,
        None,
        "tests",
      ))
      .endpoint_url(server.base_url())
      .build();

    CloudWatchReporter::new(Client::from_conf(config))
  }

  fn measurement() -> Measurement {
    Measurement {
      timestamp: OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap(),
      url: String::from("https://example.com"),
      rtt_milliseconds: 42,
      status: 200,
      body_bytes: 0,
    }
  }

  #[test]
  fn unit_conversion() {
    assert_eq!(StandardUnit::from(Unit::Milliseconds), StandardUnit::Milliseconds);
  }

  #[test]
  fn rtt_datum() {
    let datum = datum(&MetricDataPoint::from(&measurement()));

    assert_eq!(datum.value(), Some(42.0), "value is correct");
    assert_eq!(
      datum.unit(),
      Some(&StandardUnit::Milliseconds),
      "unit is correct"
    );
    assert_eq!(datum.dimensions().len(), 1, "url is the only dimension");
    assert_eq!(
      datum.timestamp(),
      Some(&DateTime::from_secs(1_700_000_000)),
      "timestamp is carried over"
    );
  }

  #[tokio::test]
  async fn report_single_data_point() {
    let server = MockServer::start_async().await;

    let mock = server
      .mock_async(|when, then| {
        when
          .method(POST)
          .body_includes("Action=PutMetricData")
          .body_includes("Namespace=url_rtt")
          .body_includes("MetricName=rtt")
          .body_includes("Unit=Milliseconds")
          .body_includes("Dimensions.member.1.Name=url")
          .body_includes("Dimensions.member.1.Value=https%3A%2F%2Fexample.com");
        then
          .status(200)
          .header("Content-Type", "text/xml")
          .body(ACCEPTED);
      })
      .await;

    let result = reporter(&server).report(&measurement()).await;

    mock.assert();

    assert!(result.is_ok(), "data point is accepted");
  }

  #[tokio::test]
  async fn backend_rejection() {
    let server = MockServer::start_async().await;

    let mock = server
      .mock_async(|when, then| {
        when.method(POST);
        then
          .status(400)
          .header("Content-Type", "text/xml")
          .body(REJECTED);
      })
      .await;

    let result = reporter(&server).report(&measurement()).await;

    mock.assert();

    assert!(
      matches!(result, Err(ReportError::Backend(_))),
      "rejection is a backend error"
    );
  }
}
