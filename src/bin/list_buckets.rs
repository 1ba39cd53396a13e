use std::process::ExitCode;

use tracing::error;

use urlrtt::backend::load_sdk_config;
use urlrtt::logging;
use urlrtt::storage::list_bucket_names;

/// Prints the caller's S3 bucket names, one per line.
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

  let client = aws_sdk_s3::Client::new(&sdk_config);

  match list_bucket_names(&client).await {
    Ok(names) => {
      for name in names {
        println!("bucket: {name}");
      }
      ExitCode::SUCCESS
    }
    Err(error) => {
      error!(%error, "failed to list buckets");
      ExitCode::FAILURE
    }
  }
}
