use axum::http::{header, HeaderMap};
use cookie::{Cookie, SameSite};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::constants::{API_NAME, SESSION_COOKIE};
use crate::models::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub expires_at: Instant,
}

impl Session {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Login sessions, keyed by the id in the `sessionid` cookie. Each session
/// lives for a fixed time from login.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            ttl,
        }
    }

    pub async fn create(&self, user: &User) -> Uuid {
        let id = Uuid::new_v4();
        let now = Instant::now();
        let session = Session {
            user_id: user.id,
            username: user.username.clone(),
            expires_at: now + self.ttl,
        };

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, existing| !existing.is_expired(now));
        sessions.insert(id, session);
        id
    }

    /// A live session. An expired one is dropped on the way.
    pub async fn get(&self, id: &Uuid) -> Option<Session> {
        let now = Instant::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(id) {
                Some(session) if !session.is_expired(now) => return Some(session.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        if let Some(session) = self.sessions.write().await.remove(id) {
            tracing::info!("{} Session for '{}' expired", API_NAME, session.username);
        }
        None
    }

    pub async fn remove(&self, id: &Uuid) -> Option<Session> {
        self.sessions.write().await.remove(id)
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// The session referenced by the request's cookie, if it is still live.
    pub async fn current(&self, headers: &HeaderMap) -> Option<(Uuid, Session)> {
        let id = session_id(headers)?;
        let session = self.get(&id).await?;
        Some((id, session))
    }
}

/// Reads the session id from every `Cookie` header on the request.
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

pub fn session_cookie(id: Uuid) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

pub fn expired_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, "")).path("/").http_only(true).build();
    cookie.make_removal();
    cookie
}
