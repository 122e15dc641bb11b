use super::AppConfig;
use crate::api;
use crate::beer_actor;
use crate::clients::BeerClient;
use crate::mapper::FieldMapper;
use crate::service::BeerService;
use axum::Router;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, instrument};

/// The service as the running system wires it: actor-backed repository, field mapper.
pub type AppService = BeerService<BeerClient, FieldMapper>;

/// The main application system.
///
/// Responsible for starting the storage actor, wiring its client into the
/// service, and handling shutdown.
pub struct BeerSystem {
    pub service: Arc<AppService>,
    handles: Vec<JoinHandle<()>>,
}

impl BeerSystem {
    /// Starts the storage actor. Must be called within a tokio runtime.
    #[instrument(name = "beer_system", skip(config), fields(buffer_size = config.buffer_size))]
    pub fn new(config: &AppConfig) -> Self {
        info!("Starting beer system");

        let (beer_actor, beer_client) = beer_actor::new(config.buffer_size);
        let beer_handle = tokio::spawn(beer_actor.run());

        let service = Arc::new(BeerService::new(beer_client, FieldMapper));

        info!("Beer system started successfully");
        Self {
            service,
            handles: vec![beer_handle],
        }
    }

    /// HTTP routes backed by this system's service.
    pub fn router(&self) -> Router {
        api::router(Arc::clone(&self.service))
    }

    /// Drops this system's service handle and waits for the actor to stop.
    ///
    /// The actor only stops once every clone of the service (e.g. held by a
    /// router) is gone too.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down beer system");
        drop(self.service);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Beer system shutdown complete");
        Ok(())
    }
}
