//! Conversion between the boundary form ([`BeerDto`]) and the stored form ([`Beer`]).

use crate::domain::{Beer, BeerDto};

/// Lossless, field-preserving transform in both directions.
pub trait BeerMapper: Send + Sync {
    fn to_record(&self, dto: BeerDto) -> Beer;
    fn to_dto(&self, beer: Beer) -> BeerDto;
}

/// Copies every field across unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMapper;

impl BeerMapper for FieldMapper {
    fn to_record(&self, dto: BeerDto) -> Beer {
        Beer::from(dto)
    }

    fn to_dto(&self, beer: Beer) -> BeerDto {
        BeerDto::from(beer)
    }
}

impl From<BeerDto> for Beer {
    fn from(dto: BeerDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            brand: dto.brand,
            max: dto.max,
            quantity: dto.quantity,
            beer_type: dto.beer_type,
        }
    }
}

impl From<Beer> for BeerDto {
    fn from(beer: Beer) -> Self {
        Self {
            id: beer.id,
            name: beer.name,
            brand: beer.brand,
            max: beer.max,
            quantity: beer.quantity,
            beer_type: beer.beer_type,
        }
    }
}
