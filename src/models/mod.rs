pub mod car;
pub mod dealer;
pub mod user;

pub use car::{CarListing, CarMake, CarModel, CarType, NewCarMake, NewCarModel, NewMakeWithModels};
pub use dealer::DealerId;
pub use user::{LoginRequest, NewUser, RegistrationRequest, User};
