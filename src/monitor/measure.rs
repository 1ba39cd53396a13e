use crate::errors::FetchError;
use crate::monitor::Poller;
use crate::monitor::collectors::Http;
use crate::monitor::models::{HttpConfig, Measurement};

#[doc(hidden)]
#[macro_export]
macro_rules! measure {
  ($block:block) => {{
    let start = std::time::Instant::now();
    let result = { $block };

    (result, start.elapsed())
  }};
}

/// A [`Poller`] that measures URLs with a blocking `HTTP` `GET`.
#[derive(Debug, Clone, Default)]
pub struct HttpPoller {
  config: HttpConfig,
}

impl HttpPoller {
  /// Creates a poller applying `config` to every request.
  pub fn new(config: HttpConfig) -> Self {
    Self { config }
  }
}

impl Poller for HttpPoller {
  async fn poll(&self, url: &str) -> Result<Measurement, FetchError> {
    Http::measure(url, &self.config).await
  }
}
