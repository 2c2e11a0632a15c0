use serde_json::Value;
use std::sync::Arc;

use crate::constants::{ALL_STATES, API_NAME};
use crate::error::AppError;
use crate::models::DealerId;
use crate::upstream::Upstream;

#[derive(Clone)]
pub struct DealerService {
    upstream: Arc<dyn Upstream>,
}

impl DealerService {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }

    /// All dealers, or only those in `state` unless it is `"All"`.
    pub async fn dealers(&self, state: Option<&str>) -> Result<Value, AppError> {
        let endpoint = match state {
            None => "/fetchDealers".to_string(),
            Some(s) if s == ALL_STATES => "/fetchDealers".to_string(),
            Some(s) => format!("/fetchDealers/{}", urlencoding::encode(s)),
        };

        tracing::info!("{} Fetching dealers for state {}", API_NAME, state.unwrap_or(ALL_STATES));

        self.upstream
            .get(&endpoint, &[])
            .await
            .ok_or_else(|| AppError::Upstream("Failed to fetch dealers from external service.".to_string()))
    }

    pub async fn dealer(&self, dealer_id: DealerId) -> Result<Value, AppError> {
        let endpoint = format!("/fetchDealer/{}", dealer_id);

        self.upstream
            .get(&endpoint, &[])
            .await
            .ok_or_else(|| AppError::Upstream("Failed to fetch dealer from external service.".to_string()))
    }
}
