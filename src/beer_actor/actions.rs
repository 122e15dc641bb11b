use thiserror::Error;

/// Custom actions for Beer entities.
///
/// Each variant is checked and applied inside the actor in one step, so
/// concurrent callers cannot push stock outside `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockChange {
    /// Adds units to the stock.
    Increment(u32),
    /// Removes units from the stock. Emptying it completely is allowed.
    Decrement(u32),
}

/// Rejection of a [`StockChange`] that would leave the quantity out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("requested quantity {requested} is outside 0..={max}")]
pub struct StockBoundsError {
    pub requested: i64,
    pub max: u32,
}

impl StockChange {
    /// The quantity this change would produce, without overflow or underflow.
    pub fn candidate(self, quantity: u32) -> i64 {
        match self {
            StockChange::Increment(amount) => i64::from(quantity) + i64::from(amount),
            StockChange::Decrement(amount) => i64::from(quantity) - i64::from(amount),
        }
    }

    /// Applies the change to `quantity`, keeping the result within `0..=max`.
    ///
    /// # Errors
    /// Returns [`StockBoundsError`] carrying the rejected candidate and the bound.
    pub fn apply(self, quantity: u32, max: u32) -> Result<u32, StockBoundsError> {
        let requested = self.candidate(quantity);
        match u32::try_from(requested) {
            Ok(next) if next <= max => Ok(next),
            _ => Err(StockBoundsError { requested, max }),
        }
    }
}
