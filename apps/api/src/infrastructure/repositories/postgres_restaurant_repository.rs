use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::repositories::{RepositoryError, RestaurantRepository};
use crate::domain::restaurant::{Restaurant, RestaurantFields, RestaurantId};

/// PostgreSQL implementation of RestaurantRepository
///
/// Rows live in the `restaurants` table created by the bundled migrations;
/// `restaurant_id` is a `SERIAL` column so the database assigns identifiers.
#[derive(Clone)]
pub struct PostgresRestaurantRepository {
    pool: PgPool,
}

impl PostgresRestaurantRepository {
    /// Creates a new PostgresRestaurantRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for PostgresRestaurantRepository {
    async fn list(&self) -> Result<Vec<Restaurant>, RepositoryError> {
        let rows = sqlx::query_as::<_, Restaurant>(
            r#"
            SELECT restaurant_id, restaurant_name, cuisine, address
            FROM restaurants
            ORDER BY restaurant_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn read(&self, id: RestaurantId) -> Result<Option<Restaurant>, RepositoryError> {
        let row = sqlx::query_as::<_, Restaurant>(
            r#"
            SELECT restaurant_id, restaurant_name, cuisine, address
            FROM restaurants
            WHERE restaurant_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create(&self, fields: RestaurantFields) -> Result<Restaurant, RepositoryError> {
        let row = sqlx::query_as::<_, Restaurant>(
            r#"
            INSERT INTO restaurants (restaurant_name, cuisine, address)
            VALUES ($1, $2, $3)
            RETURNING restaurant_id, restaurant_name, cuisine, address
            "#,
        )
        .bind(&fields.restaurant_name)
        .bind(&fields.cuisine)
        .bind(&fields.address)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(restaurant_id = row.restaurant_id, "Inserted restaurant row");
        Ok(row)
    }

    async fn update(&self, restaurant: &Restaurant) -> Result<Restaurant, RepositoryError> {
        let row = sqlx::query_as::<_, Restaurant>(
            r#"
            UPDATE restaurants
            SET restaurant_name = $2, cuisine = $3, address = $4
            WHERE restaurant_id = $1
            RETURNING restaurant_id, restaurant_name, cuisine, address
            "#,
        )
        .bind(restaurant.restaurant_id)
        .bind(&restaurant.restaurant_name)
        .bind(&restaurant.cuisine)
        .bind(&restaurant.address)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound(restaurant.restaurant_id))
    }

    async fn delete(&self, id: RestaurantId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM restaurants WHERE restaurant_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }
}
