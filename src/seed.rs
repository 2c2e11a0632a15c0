//! Reference catalog loaded into an empty car_makes table.

use crate::models::{CarType, NewCarMake, NewCarModel, NewMakeWithModels};

struct CatalogMake {
    name: &'static str,
    description: &'static str,
    country: &'static str,
    founded_year: i32,
    models: &'static [(&'static str, CarType, i32, i32)],
}

const CATALOG: &[CatalogMake] = &[
    CatalogMake {
        name: "NISSAN",
        description: "Great cars. Japanese technology",
        country: "Japan",
        founded_year: 1933,
        models: &[
            ("Pathfinder", CarType::Suv, 2023, 1),
            ("Qashqai", CarType::Suv, 2023, 2),
            ("XTRAIL", CarType::Suv, 2020, 3),
        ],
    },
    CatalogMake {
        name: "Mercedes",
        description: "Great cars. German technology",
        country: "Germany",
        founded_year: 1926,
        models: &[
            ("A-Class", CarType::Sedan, 2023, 4),
            ("C-Class", CarType::Sedan, 2022, 5),
            ("E-Class", CarType::Wagon, 2021, 6),
        ],
    },
    CatalogMake {
        name: "Audi",
        description: "Great cars. German technology",
        country: "Germany",
        founded_year: 1909,
        models: &[
            ("A4", CarType::Sedan, 2023, 7),
            ("A5", CarType::Coupe, 2019, 8),
            ("A6", CarType::Wagon, 2018, 9),
        ],
    },
    CatalogMake {
        name: "Kia",
        description: "Great cars. Korean technology",
        country: "South Korea",
        founded_year: 1944,
        models: &[
            ("Sorrento", CarType::Suv, 2023, 10),
            ("Carnival", CarType::Suv, 2017, 11),
            ("Cerato", CarType::Sedan, 2015, 12),
        ],
    },
    CatalogMake {
        name: "Toyota",
        description: "Great cars. Japanese technology",
        country: "Japan",
        founded_year: 1937,
        models: &[
            ("Corolla", CarType::Sedan, 2023, 13),
            ("Camry", CarType::Sedan, 2016, 14),
            ("Hilux", CarType::Truck, 2022, 15),
        ],
    },
];

pub fn catalog() -> Vec<NewMakeWithModels> {
    CATALOG
        .iter()
        .map(|entry| NewMakeWithModels {
            make: NewCarMake {
                name: entry.name.to_string(),
                description: entry.description.to_string(),
                country: Some(entry.country.to_string()),
                founded_year: Some(entry.founded_year),
            },
            models: entry
                .models
                .iter()
                .map(|&(name, car_type, year, dealer_id)| NewCarModel {
                    name: name.to_string(),
                    car_type,
                    year,
                    dealer_id,
                })
                .collect(),
        })
        .collect()
}
