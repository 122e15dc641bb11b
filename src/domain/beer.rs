use serde::{Deserialize, Serialize};

pub type BeerId = u64;

/// Style of a beer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BeerType {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

/// Represents a beer as the store keeps it.
///
/// # Actor Framework
/// This struct implements the [`Entity`](crate::actor_framework::Entity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::actor_framework::ResourceActor).
/// The name is the natural key and the only mutation is a
/// [`StockChange`](crate::beer_actor::StockChange).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beer {
    /// `None` until the store assigns an id on first save.
    pub id: Option<BeerId>,
    pub name: String,
    pub brand: String,
    /// Stock capacity; `quantity` never exceeds it.
    pub max: u32,
    pub quantity: u32,
    pub beer_type: BeerType,
}
