pub mod auth;
pub mod cars;
pub mod dealers;
pub mod reviews;
pub mod session;

#[cfg(test)]
mod reviews_test;

pub use auth::AuthService;
pub use cars::CarCatalogService;
pub use dealers::DealerService;
pub use reviews::ReviewService;
pub use session::{Session, SessionStore};

use std::sync::Arc;
use std::time::Duration;

use crate::repository::{CarRepository, UserRepository};
use crate::upstream::Upstream;

/// Everything a handler can reach. Cheap to clone, every field is shared.
#[derive(Clone)]
pub struct AppState {
    pub cars: CarCatalogService,
    pub dealers: DealerService,
    pub reviews: ReviewService,
    pub auth: AuthService,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(
        car_repo: Arc<dyn CarRepository>,
        user_repo: Arc<dyn UserRepository>,
        upstream: Arc<dyn Upstream>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            cars: CarCatalogService::new(car_repo),
            dealers: DealerService::new(upstream.clone()),
            reviews: ReviewService::new(upstream),
            auth: AuthService::new(user_repo),
            sessions: SessionStore::new(session_ttl),
        }
    }
}
