pub mod car_repo;
pub mod errors;
pub mod memory;
pub mod user_repo;

pub use car_repo::{CarRepository, PgCarRepository};
pub use errors::RepositoryError;
pub use memory::{InMemoryCarRepository, InMemoryUserRepository};
pub use user_repo::{PgUserRepository, UserRepository};
