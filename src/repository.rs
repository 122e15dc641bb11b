//! Data-access abstraction consumed by the service.

use crate::actor_framework::FrameworkError;
use crate::beer_actor::{StockBoundsError, StockChange};
use crate::domain::{Beer, BeerId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<FrameworkError> for RepositoryError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => RepositoryError::NotFound(id),
            FrameworkError::DuplicateKey(key) => RepositoryError::DuplicateKey(key),
            other @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                RepositoryError::Unavailable(other.to_string())
            }
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository trait for Beer persistence
///
/// Implementations must be `Send + Sync` so the service can be shared across
/// request handlers.
#[async_trait]
pub trait BeerRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Beer>>;

    async fn find_by_id(&self, id: BeerId) -> RepositoryResult<Option<Beer>>;

    /// Inserts or replaces a beer, assigning an id when it has none.
    ///
    /// Fails with [`RepositoryError::DuplicateKey`] when another beer already has the name.
    async fn save(&self, beer: Beer) -> RepositoryResult<Beer>;

    /// Fails with [`RepositoryError::NotFound`] when the id is absent.
    async fn delete_by_id(&self, id: BeerId) -> RepositoryResult<()>;

    async fn find_all(&self) -> RepositoryResult<Vec<Beer>>;

    /// Checks the bounds and writes the new quantity as a single atomic step.
    ///
    /// The inner `Err` is a bounds rejection, in which case nothing was written.
    async fn adjust_stock(
        &self,
        id: BeerId,
        change: StockChange,
    ) -> RepositoryResult<Result<Beer, StockBoundsError>>;
}
