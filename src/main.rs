use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use urlrtt::backend::load_sdk_config;
use urlrtt::config::ServiceConfig;
use urlrtt::logging;
use urlrtt::metrics::CloudWatchReporter;
use urlrtt::monitor::HttpPoller;
use urlrtt::monitor::models::HttpConfig;
use urlrtt::service::Service;

/// Periodically measures HTTP round-trip time and reports it to CloudWatch.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
  /// Path to the YAML service config.
  config: PathBuf,

  /// Write logs as JSON objects.
  #[arg(long)]
  json_logs: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
  let args = Args::parse();
  logging::init(args.json_logs);

  let config = match ServiceConfig::load(&args.config) {
    Ok(config) => config,
    Err(error) => {
      error!(%error, "failed to load service config");
      return ExitCode::FAILURE;
    }
  };

  let sdk_config = match load_sdk_config().await {
    Ok(sdk_config) => sdk_config,
    Err(error) => {
      error!(%error, "failed to load AWS config");
      return ExitCode::FAILURE;
    }
  };

  let poller = HttpPoller::new(HttpConfig::from(&config));
  let reporter = CloudWatchReporter::from_conf(&sdk_config);
  let service = Service::new(config, poller, reporter);

  info!(
    urls = service.config().urls.len(),
    poll_interval_second = service.config().poll_interval_second,
    request_timeout_second = service.config().request_timeout_second,
    "starting probe"
  );

  service.run().await;

  ExitCode::SUCCESS
}
