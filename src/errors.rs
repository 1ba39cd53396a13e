//! A module describing probe errors.
//!
//! Startup errors ([`ConfigError`], [`BackendError`]) are fatal. Per-URL
//! errors ([`FetchError`], [`ReportError`]) are logged and skipped.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the service config file.
#[derive(Error, Debug)]
pub enum ConfigError {
  /// The config file could not be opened or read.
  #[error("failed to open config file {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The config file is not a valid YAML document of the expected shape.
  #[error("failed to decode config file {}: {source}", path.display())]
  Decode {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },

  /// The config file decoded but holds an unusable value.
  #[error("invalid config file {}: {reason}", path.display())]
  Invalid { path: PathBuf, reason: String },
}

/// Errors that can occur while resolving the shared AWS configuration.
#[derive(Error, Debug)]
pub enum BackendError {
  /// No region was found in the environment, profile or instance metadata.
  #[error("no AWS region configured")]
  MissingRegion,

  /// No credentials provider could be resolved.
  #[error("no AWS credentials provider configured")]
  MissingCredentials,
}

/// Errors that can occur while polling a URL.
///
/// HTTP error statuses are not represented here: a 4xx or 5xx response
/// still produces a measurement.
#[derive(Error, Debug)]
pub enum FetchError {
  /// The request could not be issued or its body could not be read.
  #[error("failed to get {url}: {source}")]
  Request {
    url: String,
    #[source]
    source: curl::Error,
  },

  /// The blocking transfer task panicked or was cancelled.
  #[error("transfer task failed: {0}")]
  Task(#[from] tokio::task::JoinError),
}

/// Errors that can occur while submitting a metric data point.
#[derive(Error, Debug)]
pub enum ReportError {
  /// The backend rejected the call or could not be reached.
  #[error("failed to push metric data: {0}")]
  Backend(String),
}

/// Errors that can occur while listing storage buckets.
#[derive(Error, Debug)]
pub enum StorageError {
  /// The backend rejected the call or could not be reached.
  #[error("failed to list buckets: {0}")]
  Backend(String),
}
