use crate::actor_framework::ResourceClient;
use crate::beer_actor::{StockBoundsError, StockChange};
use crate::domain::{Beer, BeerId};
use crate::repository::{BeerRepository, RepositoryResult};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Beer actor; the actor-backed [`BeerRepository`].
#[derive(Clone)]
pub struct BeerClient {
    inner: ResourceClient<Beer>,
}

impl BeerClient {
    pub fn new(inner: ResourceClient<Beer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl BeerRepository for BeerClient {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Beer>> {
        debug!("Sending request");
        Ok(self.inner.find_by_key(name.to_string()).await?)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: BeerId) -> RepositoryResult<Option<Beer>> {
        debug!("Sending request");
        Ok(self.inner.get(id).await?)
    }

    #[instrument(skip(self, beer), fields(beer_name = %beer.name))]
    async fn save(&self, beer: Beer) -> RepositoryResult<Beer> {
        debug!("Sending request");
        Ok(self.inner.save(beer).await?)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: BeerId) -> RepositoryResult<()> {
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepositoryResult<Vec<Beer>> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    #[instrument(skip(self))]
    async fn adjust_stock(
        &self,
        id: BeerId,
        change: StockChange,
    ) -> RepositoryResult<Result<Beer, StockBoundsError>> {
        debug!("Sending request");
        Ok(self.inner.perform_action(id, change).await?)
    }
}
