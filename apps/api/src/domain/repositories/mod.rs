// Repository ports (data access contracts)
// Implemented by adapters in the infrastructure layer

pub mod restaurant_repository;

pub use restaurant_repository::{RepositoryError, RestaurantRepository};
