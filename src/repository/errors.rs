use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("User '{username}' already exists")]
    DuplicateUser { username: String },
}

impl RepositoryError {
    pub fn duplicate_user(username: impl Into<String>) -> Self {
        Self::DuplicateUser {
            username: username.into(),
        }
    }
}

/// Returns the database message for a PostgreSQL unique violation (`23505`).
pub fn check_duplicate_error(err: &sqlx::Error) -> Option<String> {
    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            return Some(db_err.message().to_string());
        }
    }
    None
}
