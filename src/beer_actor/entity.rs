//! Entity trait implementation for the Beer record.
//!
//! Lets [`Beer`] be managed by the generic [`crate::actor_framework::ResourceActor`],
//! keyed by id, unique by name, and mutated only through [`StockChange`].

use super::actions::{StockBoundsError, StockChange};
use crate::actor_framework::Entity;
use crate::domain::{Beer, BeerId};

impl Entity for Beer {
    type Id = BeerId;
    type Key = String;
    type Action = StockChange;
    type ActionResult = Beer;
    type ActionError = StockBoundsError;

    fn id(&self) -> Option<&BeerId> { self.id.as_ref() }

    fn assign_id(&mut self, id: BeerId) { self.id = Some(id); }

    fn key(&self) -> &String { &self.name }

    /// Applies a stock change and returns the updated beer.
    ///
    /// # Errors
    /// Returns [`StockBoundsError`] when the change would leave the quantity
    /// outside `0..=max`; the beer is left as it was.
    fn handle_action(&mut self, change: StockChange) -> Result<Beer, StockBoundsError> {
        self.quantity = change.apply(self.quantity, self.max)?;
        Ok(self.clone())
    }
}
