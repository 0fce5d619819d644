use async_trait::async_trait;
use thiserror::Error;

use crate::domain::restaurant::{Restaurant, RestaurantFields, RestaurantId};

/// Errors raised by the data-access layer
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Restaurant not found: {0}")]
    NotFound(RestaurantId),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository trait for the Restaurant entity
///
/// Defines the contract for persisting and retrieving restaurants.
/// Implementations should handle storage-specific details.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// List every stored restaurant
    async fn list(&self) -> Result<Vec<Restaurant>, RepositoryError>;

    /// Find a restaurant by its ID
    async fn read(&self, id: RestaurantId) -> Result<Option<Restaurant>, RepositoryError>;

    /// Insert a restaurant; the store assigns its ID
    async fn create(&self, fields: RestaurantFields) -> Result<Restaurant, RepositoryError>;

    /// Replace the stored fields of an existing restaurant
    async fn update(&self, restaurant: &Restaurant) -> Result<Restaurant, RepositoryError>;

    /// Delete a restaurant by ID
    async fn delete(&self, id: RestaurantId) -> Result<(), RepositoryError>;
}
