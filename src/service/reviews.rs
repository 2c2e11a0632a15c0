use serde_json::Value;
use std::sync::Arc;

use crate::constants::{API_NAME, DEFAULT_SENTIMENT};
use crate::error::AppError;
use crate::models::DealerId;
use crate::upstream::Upstream;

#[derive(Clone)]
pub struct ReviewService {
    upstream: Arc<dyn Upstream>,
}

impl ReviewService {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }

    /// Fetches a dealer's reviews and labels each with a sentiment.
    ///
    /// The sentiment service is called once per review, in order. A review
    /// whose analysis fails or comes back without a `sentiment` string is
    /// labelled `"neutral"`. A missing review list fails the whole request
    /// before any analysis starts.
    pub async fn dealer_reviews(&self, dealer_id: DealerId) -> Result<Vec<Value>, AppError> {
        let endpoint = format!("/fetchReviews/dealer/{}", dealer_id);

        let mut reviews = match self.upstream.get(&endpoint, &[]).await {
            Some(Value::Array(reviews)) => reviews,
            Some(other) => {
                tracing::warn!(
                    "{} Expected a review list for dealer {}, got {}",
                    API_NAME,
                    dealer_id,
                    other
                );
                return Err(reviews_unavailable());
            }
            None => return Err(reviews_unavailable()),
        };

        tracing::info!(
            "{} Analyzing sentiment for {} reviews of dealer {}",
            API_NAME,
            reviews.len(),
            dealer_id
        );

        for review in reviews.iter_mut() {
            let Some(fields) = review.as_object_mut() else {
                continue;
            };

            let text = fields
                .get("review")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let response = self.upstream.analyze_sentiment(&text).await;
            fields.insert(
                "sentiment".to_string(),
                Value::String(sentiment_label(response.as_ref())),
            );
        }

        Ok(reviews)
    }

    /// Forwards a review to the inventory service.
    pub async fn add_review(&self, review: &Value) -> Result<Value, AppError> {
        match self.upstream.post_review(review).await {
            Some(saved) => Ok(saved),
            None => {
                tracing::error!("{} Error posting review: upstream unavailable", API_NAME);
                Err(AppError::ReviewPost)
            }
        }
    }
}

fn reviews_unavailable() -> AppError {
    AppError::Upstream("Failed to fetch reviews from external service.".to_string())
}

/// The `sentiment` string of an analyzer response, or the neutral default.
pub fn sentiment_label(response: Option<&Value>) -> String {
    response
        .and_then(|r| r.get("sentiment"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_SENTIMENT)
        .to_string()
}
