use axum::{extract::State, http::StatusCode, Json};

use crate::api::errors::ApiError;
use crate::api::extract::{DataResponse, RequestBody};
use crate::api::middleware::ExistingRestaurant;
use crate::api::state::AppState;
use crate::api::validation::{self, CREATE_CHECKS, UPDATE_CHECKS};
use crate::domain::restaurant::Restaurant;

/// List all restaurants
///
/// GET /restaurants
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Restaurant>>>, ApiError> {
    let restaurants = state.restaurants.list().await?;
    Ok(Json(DataResponse::new(restaurants)))
}

/// Create a restaurant
///
/// POST /restaurants
pub async fn create(
    State(state): State<AppState>,
    body: RequestBody,
) -> Result<(StatusCode, Json<DataResponse<Restaurant>>), ApiError> {
    validation::run(CREATE_CHECKS, &body.data)?;
    let fields = validation::into_fields(body.data)?;

    let restaurant = state.restaurants.create(fields).await?;
    tracing::info!(restaurant_id = restaurant.restaurant_id, "Restaurant created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(restaurant))))
}

/// Update a restaurant
///
/// PUT /restaurants/:restaurant_id
///
/// Fields in the payload replace the stored ones. A `restaurant_id` in the
/// payload is ignored; the stored identifier always wins.
pub async fn update(
    State(state): State<AppState>,
    ExistingRestaurant(existing): ExistingRestaurant,
    body: RequestBody,
) -> Result<Json<DataResponse<Restaurant>>, ApiError> {
    validation::run(UPDATE_CHECKS, &body.data)?;
    let changes = validation::into_changes(body.data)?;

    let restaurant = state.restaurants.update(&existing.merge(changes)).await?;
    tracing::info!(restaurant_id = restaurant.restaurant_id, "Restaurant updated");

    Ok(Json(DataResponse::new(restaurant)))
}

/// Delete a restaurant
///
/// DELETE /restaurants/:restaurant_id
pub async fn destroy(
    State(state): State<AppState>,
    ExistingRestaurant(existing): ExistingRestaurant,
) -> Result<StatusCode, ApiError> {
    state.restaurants.delete(existing.restaurant_id).await?;
    tracing::info!(restaurant_id = existing.restaurant_id, "Restaurant deleted");

    Ok(StatusCode::NO_CONTENT)
}
