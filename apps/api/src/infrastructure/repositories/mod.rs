// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_restaurant_repository;
pub mod postgres_restaurant_repository;

pub use in_memory_restaurant_repository::InMemoryRestaurantRepository;
pub use postgres_restaurant_repository::PostgresRestaurantRepository;
