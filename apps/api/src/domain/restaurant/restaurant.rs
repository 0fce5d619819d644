use serde::{Deserialize, Serialize};

/// Identifier assigned by the data store on creation
pub type RestaurantId = i32;

/// Restaurant entity
///
/// # Invariants
/// - `restaurant_id` is assigned by the store and never changes
/// - Only the three business fields are client-writable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Restaurant {
    pub restaurant_id: RestaurantId,
    pub restaurant_name: String,
    pub cuisine: String,
    pub address: String,
}

/// Client-writable fields of a restaurant, all required
///
/// This is what the store receives on creation; the identifier is not
/// part of it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RestaurantFields {
    pub restaurant_name: String,
    pub cuisine: String,
    pub address: String,
}

/// Partial set of fields sent with an update
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RestaurantChanges {
    pub restaurant_name: Option<String>,
    pub cuisine: Option<String>,
    pub address: Option<String>,
}

impl Restaurant {
    /// Builds a restaurant from stored fields and its assigned identifier
    pub fn from_fields(restaurant_id: RestaurantId, fields: RestaurantFields) -> Self {
        Self {
            restaurant_id,
            restaurant_name: fields.restaurant_name,
            cuisine: fields.cuisine,
            address: fields.address,
        }
    }

    /// Returns a copy with `changes` applied over the current values
    ///
    /// The identifier is always carried over from `self`.
    ///
    /// # Example
    /// ```
    /// use restaurants_api::domain::restaurant::{Restaurant, RestaurantChanges};
    ///
    /// let current = Restaurant {
    ///     restaurant_id: 7,
    ///     restaurant_name: "Old".to_string(),
    ///     cuisine: "Thai".to_string(),
    ///     address: "1 Main St".to_string(),
    /// };
    /// let changes = RestaurantChanges {
    ///     restaurant_name: Some("New".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// let updated = current.merge(changes);
    /// assert_eq!(updated.restaurant_id, 7);
    /// assert_eq!(updated.restaurant_name, "New");
    /// assert_eq!(updated.cuisine, "Thai");
    /// ```
    pub fn merge(&self, changes: RestaurantChanges) -> Self {
        Self {
            restaurant_id: self.restaurant_id,
            restaurant_name: changes
                .restaurant_name
                .unwrap_or_else(|| self.restaurant_name.clone()),
            cuisine: changes.cuisine.unwrap_or_else(|| self.cuisine.clone()),
            address: changes.address.unwrap_or_else(|| self.address.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Restaurant {
        Restaurant {
            restaurant_id: 3,
            restaurant_name: "Noodle Bar".to_string(),
            cuisine: "Japanese".to_string(),
            address: "12 Elm St".to_string(),
        }
    }

    #[test]
    fn from_fields_keeps_values() {
        let fields = RestaurantFields {
            restaurant_name: "A".to_string(),
            cuisine: "B".to_string(),
            address: "C".to_string(),
        };

        let restaurant = Restaurant::from_fields(11, fields);

        assert_eq!(restaurant.restaurant_id, 11);
        assert_eq!(restaurant.restaurant_name, "A");
        assert_eq!(restaurant.cuisine, "B");
        assert_eq!(restaurant.address, "C");
    }

    #[test]
    fn merge_with_no_changes_is_identity() {
        let current = sample();
        assert_eq!(current.merge(RestaurantChanges::default()), current);
    }

    #[test]
    fn merge_overrides_only_present_fields() {
        let changes = RestaurantChanges {
            cuisine: Some("Ramen".to_string()),
            address: Some("14 Elm St".to_string()),
            ..Default::default()
        };

        let updated = sample().merge(changes);

        assert_eq!(updated.restaurant_id, 3);
        assert_eq!(updated.restaurant_name, "Noodle Bar");
        assert_eq!(updated.cuisine, "Ramen");
        assert_eq!(updated.address, "14 Elm St");
    }

    #[test]
    fn serializes_with_snake_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["restaurant_id"], 3);
        assert_eq!(json["restaurant_name"], "Noodle Bar");
        assert_eq!(json["cuisine"], "Japanese");
        assert_eq!(json["address"], "12 Elm St");
    }
}
