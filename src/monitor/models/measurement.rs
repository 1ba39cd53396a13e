use time::OffsetDateTime;

/// Represents a single round-trip measurement of a URL.
///
/// Produced by a [`Poller`](crate::monitor::Poller) and consumed right away
/// by a [`Reporter`](crate::metrics::Reporter); never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
  /// Time the request was started.
  pub timestamp: OffsetDateTime,

  /// The polled URL, exactly as configured.
  pub url: String,

  /// Time in milliseconds from request start until the body was fully read.
  pub rtt_milliseconds: u64,

  /// `HTTP` status code of the final response.
  pub status: u32,

  /// Number of body bytes drained.
  pub body_bytes: u64,
}
