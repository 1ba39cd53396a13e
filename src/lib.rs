#![forbid(unsafe_code)]

//! URL round-trip time probe.
//!
//! ## Features
//!
//! - **config** – The [ServiceConfig](config::ServiceConfig) loaded from a
//!   YAML file: poll interval, target URLs and request timeout.
//! - **monitor** – The [Poller](monitor::Poller) trait and
//!   [HttpPoller](monitor::HttpPoller), which times one `GET` per URL
//!   including the full body read.
//! - **metrics** – The [Reporter](metrics::Reporter) trait and
//!   [CloudWatchReporter](metrics::CloudWatchReporter), which publishes one
//!   `rtt` data point per measurement.
//! - **service** – The [Service](service::Service) loop that polls and
//!   reports every URL in order, then sleeps, forever.
//! - **backend** – Shared AWS configuration resolved at startup.
//! - **storage** – Bucket listing.

pub mod backend;
pub mod config;
pub mod errors;
pub mod logging;
pub mod metrics;
pub mod monitor;
pub mod service;
pub mod storage;
