//! Beer-specific resource logic, including stock adjustment actions.

mod actions;
pub mod entity;

pub use actions::*;

use crate::actor_framework::ResourceActor;
use crate::clients::BeerClient;
use crate::domain::Beer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Beer actor and its client. Ids start at 1.
pub fn new(buffer_size: usize) -> (ResourceActor<Beer>, BeerClient) {
    let beer_id_counter = Arc::new(AtomicU64::new(1));
    let next_beer_id = move || beer_id_counter.fetch_add(1, Ordering::SeqCst);

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_beer_id);
    let client = BeerClient::new(generic_client);

    (actor, client)
}
