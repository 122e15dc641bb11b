pub mod beer;
pub mod dtos;

pub use beer::*;
pub use dtos::*;

/// Canned values shared by the test modules.
#[cfg(test)]
pub mod fixtures {
    use super::{Beer, BeerDto, BeerType};

    /// A stored Brahma with 10 of 50 units on hand.
    pub fn brahma_dto() -> BeerDto {
        BeerDto {
            id: Some(1),
            name: "Brahma".to_string(),
            brand: "Ambev".to_string(),
            max: 50,
            quantity: 10,
            beer_type: BeerType::Lager,
        }
    }

    pub fn brahma() -> Beer {
        Beer {
            id: Some(1),
            name: "Brahma".to_string(),
            brand: "Ambev".to_string(),
            max: 50,
            quantity: 10,
            beer_type: BeerType::Lager,
        }
    }

    /// A not-yet-stored Skol, as a create request carries it.
    pub fn skol_dto() -> BeerDto {
        BeerDto {
            id: None,
            name: "Skol".to_string(),
            brand: "Ambev".to_string(),
            max: 60,
            quantity: 20,
            beer_type: BeerType::Lager,
        }
    }
}
