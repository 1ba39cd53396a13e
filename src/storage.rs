//! Object storage bucket listing.

use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;

use crate::errors::StorageError;

/// Lists the names of all buckets owned by the caller, in backend order.
///
/// Buckets returned without a name are skipped.
pub async fn list_bucket_names(client: &Client) -> Result<Vec<String>, StorageError> {
  let output = client
    .list_buckets()
    .send()
    .await
    .map_err(|error| StorageError::Backend(DisplayErrorContext(&error).to_string()))?;

  Ok(
    output
      .buckets()
      .iter()
      .filter_map(|bucket| bucket.name())
      .map(String::from)
      .collect(),
  )
}

#[cfg(test)]
mod tests {
  use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
  use httpmock::prelude::*;

  use super::*;

  const BUCKETS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Owner><ID>owner</ID></Owner>
  <Buckets>
    <Bucket><Name>logs</Name><CreationDate>2024-01-01T00:00:00.000Z</CreationDate></Bucket>
    <Bucket><Name>backups</Name><CreationDate>2024-02-01T00:00:00.000Z</CreationDate></Bucket>
  </Buckets>
</ListAllMyBucketsResult>"#;

  fn client(server: &MockServer) -> Client {
    let config = aws_sdk_s3::Config::builder()
      .behavior_version(BehaviorVersion::latest())
      .region(Region::new("us-east-1"))
      .credentials_provider(Credentials::new(
        "access-key",
        "secret-key",
        None,
        None,
        "tests",
      ))
      .endpoint_url(server.base_url())
      .force_path_style(true)
      .build();

    Client::from_conf(config)
  }

  #[tokio::test]
  async fn bucket_names() {
    let server = MockServer::start_async().await;

    let mock = server
      .mock_async(|when, then| {
        when.method(GET);
        then
          .status(200)
          .header("Content-Type", "application/xml")
          .body(BUCKETS);
      })
      .await;

    let result = list_bucket_names(&client(&server)).await;

    mock.assert();

    assert_eq!(
      result.ok(),
      Some(vec![String::from("logs"), String::from("backups")]),
      "bucket names are listed in order"
    );
  }

  #[tokio::test]
  async fn access_denied() {
    let server = MockServer::start_async().await;

    server
      .mock_async(|when, then| {
        when.method(GET);
        then
          .status(403)
          .header("Content-Type", "application/xml")
          .body("<Error><Code>AccessDenied</Code><Message>Access Denied</Message></Error>");
      })
      .await;

    let result = list_bucket_names(&client(&server)).await;

    assert!(
      matches!(result, Err(StorageError::Backend(_))),
      "backend failure is reported"
    );
  }
}
