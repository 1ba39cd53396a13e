//! Shared AWS configuration, resolved once at startup.

use aws_config::{BehaviorVersion, SdkConfig};

use crate::errors::BackendError;

/// Loads the AWS config from the default provider chain.
///
/// Region and credentials are resolved from the environment, shared
/// profiles or instance metadata. Fails when either one is missing, so the
/// process stops before any polling.
pub async fn load_sdk_config() -> Result<SdkConfig, BackendError> {
  let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

  check_sdk_config(&sdk_config)?;

  Ok(sdk_config)
}

fn check_sdk_config(sdk_config: &SdkConfig) -> Result<(), BackendError> {
  if sdk_config.region().is_none() {
    return Err(BackendError::MissingRegion);
  }

  if sdk_config.credentials_provider().is_none() {
    return Err(BackendError::MissingCredentials);
  }

  Ok(())
}
