//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::domain::entities::{Registration, ShortLink};
use crate::domain::repositories::LinkStore;
use crate::error::StoreError;

/// PostgreSQL store for short links.
///
/// Code uniqueness is backed by the `short_links_code_key` constraint created
/// by the embedded migrations.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a store on top of an existing connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Opens a connection pool using the pool settings from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the database cannot be reached.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .idle_timeout(Duration::from_secs(config.db_idle_timeout))
            .max_lifetime(Duration::from_secs(config.db_max_lifetime))
            .connect(&config.database_url)
            .await?;

        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(self.pool()).await?;
        debug!("short_links schema is up to date");
        Ok(())
    }

    async fn register(&self, link: ShortLink) -> Result<Registration, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO short_links (code, destination)
            VALUES ($1, $2)
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .bind(&link.code)
        .bind(&link.destination)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 1 {
            Ok(Registration::Created)
        } else {
            Ok(Registration::Conflict)
        }
    }

    async fn lookup(&self, code: &str) -> Result<Option<String>, StoreError> {
        let destination =
            sqlx::query_scalar::<_, String>("SELECT destination FROM short_links WHERE code = $1")
                .bind(code)
                .fetch_optional(self.pool())
                .await?;

        Ok(destination)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool()).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
