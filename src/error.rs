use crate::domain::BeerId;
use crate::repository::RepositoryError;
use std::fmt;
use thiserror::Error;

/// The lookup key a failed query was made with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeerLookup {
    Name(String),
    Id(BeerId),
}

impl fmt::Display for BeerLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeerLookup::Name(name) => write!(f, "name {}", name),
            BeerLookup::Id(id) => write!(f, "ID {}", id),
        }
    }
}

/// Errors surfaced by [`BeerService`](crate::service::BeerService).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BeerError {
    #[error("Beer with name {0} already registered in the system.")]
    AlreadyRegistered(String),
    #[error("Beer not found with {0}.")]
    NotFound(BeerLookup),
    #[error("Beer with ID {id} cannot hold {requested} units: stock must stay within 0..={max}")]
    StockExceeded { id: BeerId, requested: i64, max: u32 },
    #[error("Invalid beer: {0}")]
    InvalidBeer(String),
    /// The request could not be read: malformed body or path segment.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl BeerError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            BeerError::AlreadyRegistered(_) => "already_registered",
            BeerError::NotFound(_) => "not_found",
            BeerError::StockExceeded { .. } => "stock_exceeded",
            BeerError::InvalidBeer(_) => "invalid_beer",
            BeerError::InvalidRequest(_) => "invalid_request",
            BeerError::Repository(_) => "repository",
        }
    }
}
