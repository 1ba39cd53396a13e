//! A module for loading the service config file.
//!
//! # Example
//!
//! ```rust
//! use std::str::FromStr;
//!
//! use urlrtt::config::ServiceConfig;
//!
//! let config = ServiceConfig::from_str(
//!   "poll_interval_second: 5\nurls:\n  - https://a.test\n",
//! )
//! .unwrap();
//!
//! assert_eq!(config.poll_interval_second, 5);
//! assert_eq!(config.urls, vec![String::from("https://a.test")]);
//! ```

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::errors::ConfigError;

const DEFAULT_REQUEST_TIMEOUT_SECOND: u64 = 30;

fn default_request_timeout_second() -> u64 {
  DEFAULT_REQUEST_TIMEOUT_SECOND
}

fn nullable_urls<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
  Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Configuration of the probe service.
///
/// Absent `poll_interval_second` and `urls` fall back to their zero values,
/// which are passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
  /// Pause between two iterations over the URL list, in seconds.
  #[serde(default)]
  pub poll_interval_second: i64,

  /// Target URLs, polled in this order. `urls: ~` reads as no URLs.
  #[serde(default, deserialize_with = "nullable_urls")]
  pub urls: Vec<String>,

  /// Maximum time, in seconds, a single request may take.
  #[serde(default = "default_request_timeout_second")]
  pub request_timeout_second: u64,
}

impl ServiceConfig {
  /// Reads and decodes the config file at `path`.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;

    let config = Self::from_str(&contents).map_err(|source| ConfigError::Decode {
      path: path.to_path_buf(),
      source,
    })?;

    if config.request_timeout_second == 0 {
      return Err(ConfigError::Invalid {
        path: path.to_path_buf(),
        reason: String::from("request_timeout_second must be greater than zero"),
      });
    }

    if config.poll_interval_second <= 0 {
      warn!(
        poll_interval_second = config.poll_interval_second,
        "poll interval is not positive, iterations will run back to back"
      );
    }

    Ok(config)
  }

  /// Pause between iterations. Non-positive intervals become zero.
  pub fn poll_interval(&self) -> Duration {
    Duration::from_secs(self.poll_interval_second.max(0) as u64)
  }

  /// Upper bound on a single request.
  pub fn request_timeout(&self) -> Duration {
    Duration::from_secs(self.request_timeout_second)
  }
}

impl FromStr for ServiceConfig {
  type Err = serde_yaml::Error;

  /// Decodes a YAML document. A document without content is an error.
  fn from_str(contents: &str) -> Result<Self, Self::Err> {
    let document: serde_yaml::Value = serde_yaml::from_str(contents)?;

    if document.is_null() {
      return Err(serde::de::Error::custom("config document is empty"));
    }

    serde_yaml::from_value(document)
  }
}
