//! A module containing a set of models for URL polling.

mod http;
mod measurement;

pub use http::HttpConfig;
pub use measurement::Measurement;
