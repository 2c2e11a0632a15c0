use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Argon2 PHC string, never the plain password.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: String,
}

/// The web client sends `userName`, other callers `username`. Both keys may
/// appear in one body, the lowercase one wins unless it is blank.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Both credentials, or `None` when either is missing or blank.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        credentials(
            self.username.as_deref(),
            self.user_name.as_deref(),
            self.password.as_deref(),
        )
    }
}

#[derive(Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(length(max = 150))]
    pub username: Option<String>,
    #[serde(rename = "userName")]
    #[validate(length(max = 150))]
    pub user_name: Option<String>,
    pub password: Option<String>,
    #[validate(length(max = 254))]
    pub email: Option<String>,
    #[serde(rename = "firstName", alias = "first_name")]
    #[validate(length(max = 150))]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", alias = "last_name")]
    #[validate(length(max = 150))]
    pub last_name: Option<String>,
}

impl RegistrationRequest {
    pub fn credentials(&self) -> Option<(&str, &str)> {
        credentials(
            self.username.as_deref(),
            self.user_name.as_deref(),
            self.password.as_deref(),
        )
    }
}

fn credentials<'a>(
    username: Option<&'a str>,
    user_name: Option<&'a str>,
    password: Option<&'a str>,
) -> Option<(&'a str, &'a str)> {
    let username = non_blank(username).or_else(|| non_blank(user_name))?;
    let password = non_blank(password)?;
    Some((username, password))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
