use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use std::sync::Arc;
use validator::Validate;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{NewUser, RegistrationRequest, User};
use crate::repository::{RepositoryError, UserRepository};

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Checks `password` against the stored hash for `username`.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Err(AppError::Unauthenticated(username.to_string()));
        };

        if !verify_password_blocking(password, &user.password_hash).await? {
            return Err(AppError::Unauthenticated(username.to_string()));
        }

        tracing::info!("{} User '{}' logged in successfully", API_NAME, username);
        Ok(user)
    }

    pub async fn register(&self, request: &RegistrationRequest) -> Result<User, AppError> {
        let (username, password) = request
            .credentials()
            .ok_or_else(|| AppError::Validation("Username and password are required".to_string()))?;
        request.validate()?;

        if self.users.exists_by_username(username).await? {
            return Err(username_taken());
        }

        let new_user = NewUser {
            username: username.to_string(),
            email: request.email.clone().unwrap_or_default(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            password_hash: hash_password_blocking(password).await?,
        };

        let user = self.users.create(&new_user).await.map_err(|e| match e {
            RepositoryError::DuplicateUser { .. } => username_taken(),
            other => AppError::Repository(other),
        })?;

        tracing::info!("{} New user registered: {}", API_NAME, user.username);
        Ok(user)
    }
}

fn username_taken() -> AppError {
    AppError::Validation("Username already exists".to_string())
}

// Argon2 is CPU-bound, so both directions run on the blocking pool.
async fn hash_password_blocking(password: &str) -> Result<String, AppError> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing task failed: {}", e)))?
}

async fn verify_password_blocking(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password verification task failed: {}", e)))
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))
}

fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::error!("{} Stored password hash is unreadable: {}", API_NAME, e);
            false
        }
    }
}
