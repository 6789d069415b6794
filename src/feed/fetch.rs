use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use url::Url;

use super::error::FeedError;

/// Where the raw feed document comes from.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self) -> Result<Bytes, FeedError>;

    /// For logs only.
    fn describe(&self) -> String;
}

/// One GET per call, no retry.
#[derive(Clone)]
pub struct HttpFeedSource {
    http: Client,
    url: Url,
}

impl HttpFeedSource {
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self, FeedError> {
        let mut builder = Client::builder();
        if let Some(t) = timeout { builder = builder.timeout(t); }
        let http = builder.build().map_err(FeedError::from_reqwest)?;
        Ok(Self { http, url })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<Bytes, FeedError> {
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(FeedError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }
        response.bytes().await.map_err(FeedError::from_reqwest)
    }

    fn describe(&self) -> String { self.url.to_string() }
}
