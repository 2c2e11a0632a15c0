use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use validator::Validate;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{CarListing, NewMakeWithModels};
use crate::repository::CarRepository;
use crate::seed;

#[derive(Clone)]
pub struct CarCatalogService {
    repo: Arc<dyn CarRepository>,
    seed_lock: Arc<Mutex<()>>,
    seeded: Arc<AtomicBool>,
}

impl CarCatalogService {
    pub fn new(repo: Arc<dyn CarRepository>) -> Self {
        Self {
            repo,
            seed_lock: Arc::new(Mutex::new(())),
            seeded: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Seeds the reference catalog if no make exists yet. Returns whether a
    /// seed actually ran.
    pub async fn ensure_seeded(&self) -> Result<bool, AppError> {
        if self.seeded.load(Ordering::Acquire) {
            return Ok(false);
        }

        // Held across count and insert so concurrent first requests seed once.
        let _guard = self.seed_lock.lock().await;

        if self.repo.count_makes().await? > 0 {
            self.seeded.store(true, Ordering::Release);
            return Ok(false);
        }

        let catalog = seed::catalog();
        validate_catalog(&catalog)?;

        let inserted = self.repo.seed(&catalog).await?;
        tracing::info!(
            "{} Seeded car catalog with {} makes and {} models",
            API_NAME,
            catalog.len(),
            inserted
        );
        self.seeded.store(true, Ordering::Release);
        Ok(true)
    }

    pub async fn listings(&self) -> Result<Vec<CarListing>, AppError> {
        self.ensure_seeded().await?;
        Ok(self.repo.list_listings().await?)
    }
}

fn validate_catalog(catalog: &[NewMakeWithModels]) -> Result<(), AppError> {
    for entry in catalog {
        entry.make.validate()?;
        for model in &entry.models {
            model.validate()?;
        }
    }
    Ok(())
}
