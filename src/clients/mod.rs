//! Typed clients wrapping the generic resource clients.

pub mod beer_client;

pub use beer_client::BeerClient;
