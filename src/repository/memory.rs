//! In-process repositories with the same contracts as the PostgreSQL ones.
//! They back the test suites and local runs without a database.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{CarRepository, RepositoryError, UserRepository};
use crate::models::{CarListing, CarMake, CarModel, NewMakeWithModels, NewUser, User};

#[derive(Default)]
struct CarTables {
    makes: Vec<CarMake>,
    models: Vec<CarModel>,
}

#[derive(Default)]
pub struct InMemoryCarRepository {
    tables: RwLock<CarTables>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn model_count(&self) -> usize {
        self.tables.read().await.models.len()
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn count_makes(&self) -> Result<i64, RepositoryError> {
        Ok(self.tables.read().await.makes.len() as i64)
    }

    async fn seed(&self, catalog: &[NewMakeWithModels]) -> Result<usize, RepositoryError> {
        let mut tables = self.tables.write().await;
        let mut inserted = 0;

        for entry in catalog {
            let make_id = tables.makes.len() as i64 + 1;
            tables.makes.push(CarMake {
                id: make_id,
                name: entry.make.name.clone(),
                description: entry.make.description.clone(),
                country: entry.make.country.clone(),
                founded_year: entry.make.founded_year,
            });

            for model in &entry.models {
                let model_id = tables.models.len() as i64 + 1;
                tables.models.push(CarModel {
                    id: model_id,
                    car_make_id: make_id,
                    name: model.name.clone(),
                    car_type: model.car_type,
                    year: model.year,
                    dealer_id: model.dealer_id,
                });
                inserted += 1;
            }
        }

        Ok(inserted)
    }

    async fn list_listings(&self) -> Result<Vec<CarListing>, RepositoryError> {
        let tables = self.tables.read().await;
        let listings = tables
            .models
            .iter()
            .filter_map(|model| {
                tables
                    .makes
                    .iter()
                    .find(|make| make.id == model.car_make_id)
                    .map(|make| CarListing {
                        model: model.name.clone(),
                        make: make.name.clone(),
                    })
            })
            .collect();
        Ok(listings)
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.username == username))
    }

    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(RepositoryError::duplicate_user(&user.username));
        }

        let created = User {
            id: users.len() as i64 + 1,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            password_hash: user.password_hash.clone(),
            created_at: Utc::now(),
        };
        users.push(created.clone());
        Ok(created)
    }
}
