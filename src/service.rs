//! Business rules for the beer catalog.
//!
//! [`BeerService`] is the only component that makes decisions: it checks name
//! uniqueness, existence and stock bounds, then delegates to the repository.
//!
//! Create and delete are two repository calls each (a guard lookup, then the
//! write). A concurrent writer slipping in between is still caught, because the
//! store itself rejects duplicate names and deletes of missing ids. Stock changes
//! are checked and written by the store in one step.

use crate::beer_actor::{StockBoundsError, StockChange};
use crate::domain::{Beer, BeerDto, BeerId};
use crate::error::{BeerError, BeerLookup};
use crate::mapper::BeerMapper;
use crate::repository::{BeerRepository, RepositoryError};
use tracing::{debug, info, instrument, warn};

pub struct BeerService<R, M> {
    repository: R,
    mapper: M,
}

impl<R: BeerRepository, M: BeerMapper> BeerService<R, M> {
    pub fn new(repository: R, mapper: M) -> Self {
        Self { repository, mapper }
    }

    /// Stores a new beer and returns it with its assigned id.
    ///
    /// # Errors
    /// - [`BeerError::AlreadyRegistered`] if a beer with the same name exists
    /// - [`BeerError::InvalidBeer`] if the DTO breaks a field constraint
    #[instrument(skip(self, dto), fields(beer_name = %dto.name))]
    pub async fn create_beer(&self, dto: BeerDto) -> Result<BeerDto, BeerError> {
        debug!("Processing create_beer request");

        let existing = self.repository.find_by_name(&dto.name).await?;
        if let Some(existing) = existing {
            warn!(beer_id = ?existing.id, "Beer already registered");
            return Err(BeerError::AlreadyRegistered(dto.name));
        }
        dto.validate()?;

        let name = dto.name.clone();
        let mut record = self.mapper.to_record(dto);
        // The store assigns ids; a client-supplied one would replace another beer.
        record.id = None;
        let saved = match self.repository.save(record).await {
            Ok(saved) => saved,
            Err(RepositoryError::DuplicateKey(_)) => {
                warn!("Beer registered concurrently");
                return Err(BeerError::AlreadyRegistered(name));
            }
            Err(e) => return Err(e.into()),
        };

        info!(beer_id = ?saved.id, "Beer created successfully");
        Ok(self.mapper.to_dto(saved))
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<BeerDto, BeerError> {
        debug!("Processing find_by_name request");

        match self.repository.find_by_name(name).await? {
            Some(beer) => {
                info!(beer_id = ?beer.id, "Beer found");
                Ok(self.mapper.to_dto(beer))
            }
            None => {
                debug!("Beer not found");
                Err(BeerError::NotFound(BeerLookup::Name(name.to_string())))
            }
        }
    }

    /// Lists every beer in store order; an empty catalog is not an error.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<BeerDto>, BeerError> {
        debug!("Processing list_all request");

        let beers = self.repository.find_all().await?;
        info!(beer_count = beers.len(), "Listed beers");
        Ok(beers.into_iter().map(|beer| self.mapper.to_dto(beer)).collect())
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: BeerId) -> Result<(), BeerError> {
        debug!("Processing delete_by_id request");

        self.verify_exists(id).await?;
        match self.repository.delete_by_id(id).await {
            Ok(()) => {
                info!("Beer deleted");
                Ok(())
            }
            Err(RepositoryError::NotFound(_)) => {
                warn!("Beer deleted concurrently");
                Err(BeerError::NotFound(BeerLookup::Id(id)))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Adds `amount` units to the stock.
    ///
    /// # Errors
    /// - [`BeerError::NotFound`] if the id is unknown
    /// - [`BeerError::StockExceeded`] if the result would exceed `max`; the stock is untouched
    #[instrument(skip(self))]
    pub async fn increment(&self, id: BeerId, amount: u32) -> Result<BeerDto, BeerError> {
        debug!("Processing increment request");
        self.adjust_stock(id, StockChange::Increment(amount)).await
    }

    /// Removes `amount` units from the stock. Taking it down to exactly zero is allowed.
    ///
    /// # Errors
    /// - [`BeerError::NotFound`] if the id is unknown
    /// - [`BeerError::StockExceeded`] if the result would fall below zero; the stock is untouched
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: BeerId, amount: u32) -> Result<BeerDto, BeerError> {
        debug!("Processing decrement request");
        self.adjust_stock(id, StockChange::Decrement(amount)).await
    }

    async fn adjust_stock(&self, id: BeerId, change: StockChange) -> Result<BeerDto, BeerError> {
        self.verify_exists(id).await?;

        match self.repository.adjust_stock(id, change).await {
            Ok(Ok(beer)) => {
                info!(quantity = beer.quantity, max = beer.max, "Stock updated");
                Ok(self.mapper.to_dto(beer))
            }
            Ok(Err(StockBoundsError { requested, max })) => {
                warn!(requested, max, "Stock change rejected");
                Err(BeerError::StockExceeded { id, requested, max })
            }
            Err(RepositoryError::NotFound(_)) => {
                warn!("Beer deleted concurrently");
                Err(BeerError::NotFound(BeerLookup::Id(id)))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn verify_exists(&self, id: BeerId) -> Result<Beer, BeerError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            debug!("Beer not found");
            BeerError::NotFound(BeerLookup::Id(id))
        })
    }
}
