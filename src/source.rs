use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::mapping::normalize_feed;
use crate::types::{Feed, Job};

/// Read-only upstream listing of job postings.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Raw response body of the listing endpoint.
    async fn fetch_raw(&self) -> Result<Value>;

    /// Fetch and normalize. An unsupported body shape is an error.
    async fn fetch_jobs(&self) -> Result<Vec<Job>> {
        let body = self.fetch_raw().await?;
        let feed = Feed::from_value(body)?;
        Ok(normalize_feed(feed))
    }
}

/// Listing endpoint over HTTP(S). Timeouts are reqwest's defaults.
pub struct HttpJobSource {
    client: reqwest::Client,
    endpoint: url::Url,
}

impl HttpJobSource {
    pub fn new(endpoint: url::Url, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .context("building http client")?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &url::Url { &self.endpoint }
}

#[async_trait]
impl JobSource for HttpJobSource {
    async fn fetch_raw(&self) -> Result<Value> {
        tracing::debug!(endpoint = %self.endpoint, "fetching jobs");
        let resp = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .with_context(|| format!("requesting {}", self.endpoint))?
            .error_for_status()
            .with_context(|| format!("listing endpoint {} returned an error status", self.endpoint))?;
        resp.json::<Value>()
            .await
            .with_context(|| format!("decoding response from {}", self.endpoint))
    }
}

/// Fixed in-memory body, for tests and offline demos.
pub struct StaticJobSource {
    body: Value,
}

impl StaticJobSource {
    pub fn new(body: Value) -> Self { Self { body } }
}

#[async_trait]
impl JobSource for StaticJobSource {
    async fn fetch_raw(&self) -> Result<Value> { Ok(self.body.clone()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeedError;
    use serde_json::json;

    #[tokio::test]
    async fn static_source_normalizes() {
        let src = StaticJobSource::new(json!({ "jobs": [{ "id": "1", "title": "Rust dev" }] }));
        let jobs = src.fetch_jobs().await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Rust dev");
    }

    #[tokio::test]
    async fn bad_shape_propagates_feed_error() {
        let src = StaticJobSource::new(json!({ "data": [] }));
        let err = src.fetch_jobs().await.unwrap_err();
        assert!(matches!(err.downcast_ref::<FeedError>(), Some(FeedError::UnsupportedShape { .. })));
    }

    #[test]
    fn http_source_keeps_endpoint() {
        let url = url::Url::parse("https://empllo.com/api/v1").unwrap();
        let src = HttpJobSource::new(url.clone(), "hireizon-test").unwrap();
        assert_eq!(src.endpoint(), &url);
    }
}
