use std::process::ExitCode;

use aws_sdk_cloudwatch::operation::RequestId;
use time::OffsetDateTime;
use tracing::error;

use urlrtt::backend::load_sdk_config;
use urlrtt::logging;
use urlrtt::metrics::{CloudWatchReporter, MetricDataPoint};

const SAMPLE_URL: &str = "https://www.example.com";

/// Pushes one random RTT data point for a fixed URL.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
  logging::init(false);

  let sdk_config = match load_sdk_config().await {
    Ok(sdk_config) => sdk_config,
    Err(error) => {
      error!(%error, "failed to load AWS config");
      return ExitCode::FAILURE;
    }
  };

  let reporter = CloudWatchReporter::from_conf(&sdk_config);
  let point = MetricDataPoint::rtt_at(SAMPLE_URL, rand::random(), OffsetDateTime::now_utc());

  match reporter.put(&point).await {
    Ok(output) => {
      println!("request id: {}", output.request_id().unwrap_or("unknown"));
      ExitCode::SUCCESS
    }
    Err(error) => {
      error!(%error, "failed to put metric data");
      ExitCode::FAILURE
    }
  }
}
