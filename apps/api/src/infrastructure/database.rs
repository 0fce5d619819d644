use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Opens a PostgreSQL pool and applies the bundled migrations
///
/// # Arguments
/// * `database_url` - Connection string for the target database
/// * `max_connections` - Upper bound on pooled connections
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    tracing::info!(max_connections, "Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!("Database connected and migrated");
    Ok(pool)
}
