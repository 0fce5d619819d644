// Restaurant domain module
// Contains the restaurant entity and its writable field sets

#![allow(clippy::module_inception)]

pub mod restaurant;

// Re-export main types for convenience
pub use restaurant::{Restaurant, RestaurantChanges, RestaurantFields, RestaurantId};
