use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use validator::Validate;

pub const MIN_MODEL_YEAR: i32 = 2015;
pub const MAX_MODEL_YEAR: i32 = 2023;

/// Stored as the uppercase name, which the table's CHECK constraint enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarType {
    Sedan,
    #[default]
    Suv,
    Wagon,
    Coupe,
    Truck,
}

impl CarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarType::Sedan => "SEDAN",
            CarType::Suv => "SUV",
            CarType::Wagon => "WAGON",
            CarType::Coupe => "COUPE",
            CarType::Truck => "TRUCK",
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct CarMake {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub country: Option<String>,
    pub founded_year: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CarModel {
    pub id: i64,
    pub car_make_id: i64,
    pub name: String,
    pub car_type: CarType,
    pub year: i32,
    /// Refers to a dealer in the external inventory service, not checked locally.
    pub dealer_id: i32,
}

#[derive(Debug, Clone, Validate)]
pub struct NewCarMake {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: String,
    #[validate(length(max = 100))]
    pub country: Option<String>,
    pub founded_year: Option<i32>,
}

#[derive(Debug, Clone, Validate)]
pub struct NewCarModel {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub car_type: CarType,
    #[validate(range(min = 2015, max = 2023))]
    pub year: i32,
    pub dealer_id: i32,
}

/// A make together with the models to insert under it.
#[derive(Debug, Clone)]
pub struct NewMakeWithModels {
    pub make: NewCarMake,
    pub models: Vec<NewCarModel>,
}

/// One row of the flattened make/model catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CarListing {
    #[serde(rename = "CarModel")]
    pub model: String,
    #[serde(rename = "CarMake")]
    pub make: String,
}
