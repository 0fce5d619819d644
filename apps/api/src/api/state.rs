use std::sync::Arc;

use crate::domain::repositories::RestaurantRepository;

/// Shared state handed to every handler and extractor
#[derive(Clone)]
pub struct AppState {
    pub restaurants: Arc<dyn RestaurantRepository>,
}

impl AppState {
    pub fn new(restaurants: Arc<dyn RestaurantRepository>) -> Self {
        Self { restaurants }
    }
}
