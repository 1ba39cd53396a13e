use std::time::Duration;

use crate::config::ServiceConfig;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_REDIRECTS: u32 = 10;

/// Configuration for an `HTTP` poll.
#[derive(Debug, Clone)]
pub struct HttpConfig {
  /// Maximum time to wait for the whole transfer, body included.
  pub timeout: Duration,

  /// Whether to follow `HTTP` redirects.
  pub follow_redirects: bool,

  /// Maximum number of redirects followed before giving up.
  pub max_redirects: u32,
}

impl Default for HttpConfig {
  fn default() -> Self {
    Self {
      timeout: DEFAULT_TIMEOUT,
      follow_redirects: true,
      max_redirects: DEFAULT_MAX_REDIRECTS,
    }
  }
}

impl From<&ServiceConfig> for HttpConfig {
  fn from(config: &ServiceConfig) -> Self {
    Self {
      timeout: config.request_timeout(),
      ..Default::default()
    }
  }
}
