//! In-memory restaurant repository
//! Thread-safe implementation of the RestaurantRepository port

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::repositories::{RepositoryError, RestaurantRepository};
use crate::domain::restaurant::{Restaurant, RestaurantFields, RestaurantId};

#[derive(Debug, Default)]
struct Store {
    next_id: RestaurantId,
    rows: BTreeMap<RestaurantId, Restaurant>,
}

/// Thread-safe in-memory restaurant repository
///
/// Identifiers start at 1 and are never reused, mirroring a `SERIAL`
/// column. Listing returns rows in identifier order.
#[derive(Clone, Default)]
pub struct InMemoryRestaurantRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRestaurantRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn list(&self) -> Result<Vec<Restaurant>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn read(&self, id: RestaurantId) -> Result<Option<Restaurant>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn create(&self, fields: RestaurantFields) -> Result<Restaurant, RepositoryError> {
        let mut store = self.store.write().await;
        store.next_id += 1;

        let restaurant = Restaurant::from_fields(store.next_id, fields);
        store.rows.insert(restaurant.restaurant_id, restaurant.clone());

        debug!(
            restaurant_id = restaurant.restaurant_id,
            total_restaurants = store.rows.len(),
            "Restaurant stored"
        );

        Ok(restaurant)
    }

    async fn update(&self, restaurant: &Restaurant) -> Result<Restaurant, RepositoryError> {
        let mut store = self.store.write().await;
        let slot = store
            .rows
            .get_mut(&restaurant.restaurant_id)
            .ok_or(RepositoryError::NotFound(restaurant.restaurant_id))?;

        *slot = restaurant.clone();
        Ok(restaurant.clone())
    }

    async fn delete(&self, id: RestaurantId) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store
            .rows
            .remove(&id)
            .ok_or(RepositoryError::NotFound(id))?;

        debug!(
            restaurant_id = id,
            remaining_restaurants = store.rows.len(),
            "Restaurant removed"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> RestaurantFields {
        RestaurantFields {
            restaurant_name: name.to_string(),
            cuisine: "Italian".to_string(),
            address: "1 Pier Rd".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryRestaurantRepository::new();

        let first = repo.create(fields("First")).await.unwrap();
        let second = repo.create(fields("Second")).await.unwrap();

        assert_eq!(first.restaurant_id, 1);
        assert_eq!(second.restaurant_id, 2);
        assert_eq!(second.restaurant_name, "Second");
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let repo = InMemoryRestaurantRepository::new();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_in_id_order() {
        let repo = InMemoryRestaurantRepository::new();
        repo.create(fields("A")).await.unwrap();
        repo.create(fields("B")).await.unwrap();
        repo.create(fields("C")).await.unwrap();

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.restaurant_name)
            .collect();

        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_read_missing_returns_none() {
        let repo = InMemoryRestaurantRepository::new();
        assert!(repo.read(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryRestaurantRepository::new();
        let mut restaurant = repo.create(fields("Before")).await.unwrap();
        restaurant.restaurant_name = "After".to_string();

        let updated = repo.update(&restaurant).await.unwrap();
        let stored = repo.read(restaurant.restaurant_id).await.unwrap().unwrap();

        assert_eq!(updated, restaurant);
        assert_eq!(stored.restaurant_name, "After");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryRestaurantRepository::new();
        let ghost = Restaurant::from_fields(9, fields("Ghost"));

        let result = repo.update(&ghost).await;

        assert!(matches!(result, Err(RepositoryError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_delete_then_read() {
        let repo = InMemoryRestaurantRepository::new();
        let restaurant = repo.create(fields("Gone")).await.unwrap();

        repo.delete(restaurant.restaurant_id).await.unwrap();

        assert!(repo.read(restaurant.restaurant_id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(restaurant.restaurant_id).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryRestaurantRepository::new();
        let first = repo.create(fields("One")).await.unwrap();
        repo.delete(first.restaurant_id).await.unwrap();

        let second = repo.create(fields("Two")).await.unwrap();

        assert_eq!(second.restaurant_id, 2);
    }
}
