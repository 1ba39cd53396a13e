//! A module for measuring the round-trip time of `HTTP` targets.
//!
//! # Example
//!
//! ```rust, no_run
//! use urlrtt::monitor::{HttpPoller, Poller};
//!
//! async fn measure_example() {
//!   let poller = HttpPoller::default();
//!
//!   let measurement = poller.poll("https://www.example.com").await;
//!
//!   assert!(measurement.is_ok());
//! }
//!
//! # tokio_test::block_on(async {
//! measure_example().await;
//! # })
//! ```

mod collectors;
mod measure;

pub mod models;

pub use measure::HttpPoller;

use crate::errors::FetchError;
use crate::monitor::models::Measurement;

/// A trait for anything able to measure a URL once.
pub trait Poller {
  /// Issues a single request to `url` and returns its measurement.
  ///
  /// Status codes are not interpreted: a failure means no response was
  /// received or its body could not be read.
  fn poll(&self, url: &str) -> impl Future<Output = Result<Measurement, FetchError>> + Send;
}
