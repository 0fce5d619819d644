use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::restaurant::{Restaurant, RestaurantId};

/// Existence guard for routes carrying a `:restaurant_id` segment
///
/// Loads the restaurant before the handler runs and hands it over as the
/// extractor's value. Unknown or unparsable identifiers are rejected with
/// a 404 so the handler never runs.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     ExistingRestaurant(restaurant): ExistingRestaurant,
/// ) -> Result<String, ApiError> {
///     Ok(restaurant.restaurant_name)
/// }
/// ```
#[derive(Debug)]
pub struct ExistingRestaurant(pub Restaurant);

#[async_trait]
impl FromRequestParts<AppState> for ExistingRestaurant {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::restaurant_not_found())?;

        let id: RestaurantId = raw_id.parse().map_err(|_| {
            tracing::debug!(restaurant_id = %raw_id, "Unparsable restaurant id");
            ApiError::restaurant_not_found()
        })?;

        let restaurant = state
            .restaurants
            .read(id)
            .await?
            .ok_or_else(ApiError::restaurant_not_found)?;

        Ok(ExistingRestaurant(restaurant))
    }
}
