//! HTTP surface of the service.
//!
//! | Method | Path                          | Success      |
//! |--------|-------------------------------|--------------|
//! | POST   | `/api/v1/beers`               | 201 + beer   |
//! | GET    | `/api/v1/beers`               | 200 + beers  |
//! | GET    | `/api/v1/beers/{name}`        | 200 + beer   |
//! | DELETE | `/api/v1/beers/{id}`          | 204          |
//! | PATCH  | `/api/v1/beers/{id}/increment`| 200 + beer   |
//! | PATCH  | `/api/v1/beers/{id}/decrement`| 200 + beer   |

mod error;

use crate::app_system::AppService;
use crate::domain::{BeerDto, BeerId, QuantityDto};
use crate::error::BeerError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use std::sync::Arc;

pub const BEERS_PATH: &str = "/api/v1/beers";

type SharedService = State<Arc<AppService>>;

pub fn router(service: Arc<AppService>) -> Router {
    // One parameter name for the whole subtree: GET reads the segment as a
    // name, DELETE and PATCH as an id.
    Router::new()
        .route(BEERS_PATH, post(create_beer).get(list_beers))
        .route("/api/v1/beers/{key}", get(find_by_name).delete(delete_by_id))
        .route("/api/v1/beers/{key}/increment", patch(increment))
        .route("/api/v1/beers/{key}/decrement", patch(decrement))
        .route("/health", get(health))
        .with_state(service)
}

async fn health() -> &'static str {
    "OK"
}

async fn create_beer(
    State(service): SharedService,
    body: Result<Json<BeerDto>, JsonRejection>,
) -> Result<(StatusCode, Json<BeerDto>), BeerError> {
    let Json(dto) = body?;
    let created = service.create_beer(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_beers(State(service): SharedService) -> Result<Json<Vec<BeerDto>>, BeerError> {
    Ok(Json(service.list_all().await?))
}

async fn find_by_name(
    State(service): SharedService,
    Path(name): Path<String>,
) -> Result<Json<BeerDto>, BeerError> {
    Ok(Json(service.find_by_name(&name).await?))
}

async fn delete_by_id(
    State(service): SharedService,
    id: Result<Path<BeerId>, PathRejection>,
) -> Result<StatusCode, BeerError> {
    let Path(id) = id?;
    service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn increment(
    State(service): SharedService,
    id: Result<Path<BeerId>, PathRejection>,
    body: Result<Json<QuantityDto>, JsonRejection>,
) -> Result<Json<BeerDto>, BeerError> {
    let (Path(id), Json(body)) = (id?, body?);
    Ok(Json(service.increment(id, body.quantity).await?))
}

async fn decrement(
    State(service): SharedService,
    id: Result<Path<BeerId>, PathRejection>,
    body: Result<Json<QuantityDto>, JsonRejection>,
) -> Result<Json<BeerDto>, BeerError> {
    let (Path(id), Json(body)) = (id?, body?);
    Ok(Json(service.decrement(id, body.quantity).await?))
}
