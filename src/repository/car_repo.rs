use async_trait::async_trait;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::{CarListing, NewMakeWithModels};

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn count_makes(&self) -> Result<i64, RepositoryError>;

    /// Inserts every make and its models atomically. Returns the number of
    /// models inserted.
    async fn seed(&self, catalog: &[NewMakeWithModels]) -> Result<usize, RepositoryError>;

    /// Every model joined to its make, in insertion order.
    async fn list_listings(&self) -> Result<Vec<CarListing>, RepositoryError>;
}

#[derive(Clone)]
pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn count_makes(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM car_makes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn seed(&self, catalog: &[NewMakeWithModels]) -> Result<usize, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for entry in catalog {
            let make_id: i64 = sqlx::query_scalar(
                "INSERT INTO car_makes (name, description, country, founded_year) VALUES ($1, $2, $3, $4) RETURNING id",
            )
            .bind(&entry.make.name)
            .bind(&entry.make.description)
            .bind(&entry.make.country)
            .bind(entry.make.founded_year)
            .fetch_one(&mut *tx)
            .await?;

            for model in &entry.models {
                sqlx::query(
                    "INSERT INTO car_models (car_make_id, name, car_type, year, dealer_id) VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(make_id)
                .bind(&model.name)
                .bind(model.car_type.as_str())
                .bind(model.year)
                .bind(model.dealer_id)
                .execute(&mut *tx)
                .await?;
                inserted += 1;
            }
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn list_listings(&self) -> Result<Vec<CarListing>, RepositoryError> {
        let listings = sqlx::query_as::<_, CarListing>(
            "SELECT cm.name AS model, mk.name AS make FROM car_models cm JOIN car_makes mk ON mk.id = cm.car_make_id ORDER BY cm.id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(listings)
    }
}
