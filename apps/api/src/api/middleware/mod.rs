pub mod restaurant_exists;

pub use restaurant_exists::ExistingRestaurant;
