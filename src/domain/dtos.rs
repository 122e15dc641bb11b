use super::{BeerId, BeerType};
use crate::error::BeerError;
use serde::{Deserialize, Serialize};

pub const MAX_TEXT_LENGTH: usize = 200;
pub const MAX_STOCK_CAPACITY: u32 = 500;
pub const MAX_INITIAL_QUANTITY: u32 = 100;

/// Boundary-facing form of a [`Beer`](super::Beer), as callers of the service see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BeerId>,
    pub name: String,
    pub brand: String,
    pub max: u32,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

impl BeerDto {
    /// Checks the field constraints a new beer must meet.
    ///
    /// # Errors
    /// Returns [`BeerError::InvalidBeer`] naming the first violated constraint.
    pub fn validate(&self) -> Result<(), BeerError> {
        check_text("name", &self.name)?;
        check_text("brand", &self.brand)?;
        if self.max > MAX_STOCK_CAPACITY {
            return Err(BeerError::InvalidBeer(format!(
                "max must be at most {}, got {}",
                MAX_STOCK_CAPACITY, self.max
            )));
        }
        if self.quantity > MAX_INITIAL_QUANTITY {
            return Err(BeerError::InvalidBeer(format!(
                "quantity must be at most {}, got {}",
                MAX_INITIAL_QUANTITY, self.quantity
            )));
        }
        if self.quantity > self.max {
            return Err(BeerError::InvalidBeer(format!(
                "quantity {} exceeds max {}",
                self.quantity, self.max
            )));
        }
        Ok(())
    }
}

fn check_text(field: &str, value: &str) -> Result<(), BeerError> {
    let length = value.chars().count();
    if length == 0 || length > MAX_TEXT_LENGTH {
        return Err(BeerError::InvalidBeer(format!(
            "{} must be between 1 and {} characters",
            field, MAX_TEXT_LENGTH
        )));
    }
    Ok(())
}

/// Request body for stock increments and decrements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityDto {
    pub quantity: u32,
}
