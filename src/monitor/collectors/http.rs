use curl::easy::{Easy2, Handler, HttpVersion, WriteError};
use time::OffsetDateTime;
use tokio::task;

use crate::errors::FetchError;
use crate::measure;
use crate::monitor::models::{HttpConfig, Measurement};

/// Response sink that keeps only the number of bytes received.
#[derive(Default)]
struct DrainedBody(u64);

impl Handler for DrainedBody {
  fn write(&mut self, data: &[u8]) -> Result<usize, WriteError> {
    self.0 += data.len() as u64;

    Ok(data.len())
  }
}

pub struct Http;

impl Http {
  /// Performs one `GET` on `url` and drains the response body.
  ///
  /// Any response, whatever its status, yields a [`Measurement`].
  pub async fn measure(url: &str, config: &HttpConfig) -> Result<Measurement, FetchError> {
    let request_error = |source| FetchError::Request {
      url: url.to_owned(),
      source,
    };

    let request = Self::request(url, config).map_err(request_error)?;

    let (transfer, timestamp, elapsed) = task::spawn_blocking(move || {
      let timestamp = OffsetDateTime::now_utc();
      let (result, elapsed) = measure!({ request.perform() });

      (result.map(|()| request), timestamp, elapsed)
    })
    .await?;

    let response = transfer.map_err(request_error)?;
    let status = response.response_code().map_err(request_error)?;

    Ok(Measurement {
      timestamp,
      url: url.to_owned(),
      rtt_milliseconds: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
      status,
      body_bytes: response.get_ref().0,
    })
  }

  fn request(url: &str, config: &HttpConfig) -> Result<Easy2<DrainedBody>, curl::Error> {
    let mut request = Easy2::new(DrainedBody::default());
    request.url(url)?;
    request.get(true)?;
    request.timeout(config.timeout)?;
    request.follow_location(config.follow_redirects)?;
    request.max_redirections(config.max_redirects)?;
    request.forbid_reuse(true)?;
    request.http_version(HttpVersion::V2TLS)?;

    Ok(request)
  }
}
