//! Calls to the dealer/review inventory service and the sentiment analyzer.
//!
//! Nothing here returns an error: every failure (connect, timeout, non-2xx
//! status, undecodable body) is logged and collapsed into `None`, and the
//! caller decides what "unavailable" means for its request.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::config::Config;
use crate::constants::API_NAME;

#[async_trait]
pub trait Upstream: Send + Sync {
    /// `GET {backend_url}{endpoint}` with `params` as the query string.
    async fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Option<Value>;

    /// `POST {backend_url}{endpoint}` with `body` as JSON.
    async fn post(&self, endpoint: &str, body: &Value) -> Option<Value>;

    /// `GET {sentiment_analyzer_url}analyze/{text}`.
    async fn analyze_sentiment(&self, text: &str) -> Option<Value>;

    async fn post_review(&self, review: &Value) -> Option<Value> {
        self.post("/insert_review", review).await
    }
}

#[derive(Clone)]
pub struct HttpUpstream {
    client: Client,
    backend_url: String,
    sentiment_analyzer_url: String,
}

impl HttpUpstream {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.upstream_timeout).build()?;
        Ok(Self {
            client,
            backend_url: config.backend_url.trim_end_matches('/').to_string(),
            sentiment_analyzer_url: with_trailing_slash(&config.sentiment_analyzer_url),
        })
    }

    fn backend(&self, endpoint: &str) -> String {
        format!("{}{}", self.backend_url, endpoint)
    }

    fn sentiment(&self, text: &str) -> String {
        format!("{}analyze/{}", self.sentiment_analyzer_url, urlencoding::encode(text))
    }

    async fn fetch_json(request: RequestBuilder) -> Result<Value, reqwest::Error> {
        request.send().await?.error_for_status()?.json::<Value>().await
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Option<Value> {
        let url = self.backend(endpoint);
        tracing::info!("{} GET from {} with params {:?}", API_NAME, url, params);

        match Self::fetch_json(self.client.get(&url).query(params)).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("{} Network exception occurred on GET {}: {}", API_NAME, url, e);
                None
            }
        }
    }

    async fn post(&self, endpoint: &str, body: &Value) -> Option<Value> {
        let url = self.backend(endpoint);
        tracing::info!("{} POST to {}", API_NAME, url);

        match Self::fetch_json(self.client.post(&url).json(body)).await {
            Ok(value) => {
                tracing::info!("{} POST to {} returned {}", API_NAME, url, value);
                Some(value)
            }
            Err(e) => {
                tracing::warn!("{} Network exception occurred on POST {}: {}", API_NAME, url, e);
                None
            }
        }
    }

    async fn analyze_sentiment(&self, text: &str) -> Option<Value> {
        let url = self.sentiment(text);
        tracing::info!("{} GET sentiment from {}", API_NAME, url);

        match Self::fetch_json(self.client.get(&url)).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("{} Sentiment analyzer network exception occurred: {}", API_NAME, e);
                None
            }
        }
    }
}
