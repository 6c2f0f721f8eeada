//! Database access layer: connection provider, row models, repositories.
//!
//! All SQL lives in this crate. Repository methods take `&mut PgConnection`
//! so every statement runs on the single connection its request checked out.

pub mod models;
pub mod repositories;

use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgPoolOptions, Postgres};
use sqlx::PgPool;

/// A connection checked out for the duration of one request.
///
/// Returned to the provider when dropped, which covers every handler exit
/// path (success, validation failure, driver error).
pub type DbConnection = PoolConnection<Postgres>;

/// Connection provider built once at startup from the configured
/// connection string.
///
/// Handlers call [`Db::acquire`] to check out a connection scoped to their
/// request; the underlying driver-level reuse is invisible to them.
#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    /// Connect using the given connection string.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool (used by the test harness).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check out a connection for one request.
    pub async fn acquire(&self) -> Result<DbConnection, sqlx::Error> {
        self.pool.acquire().await
    }

    /// Cheap liveness probe.
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Apply pending migrations from `db/migrations`.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../db/migrations").run(&self.pool).await
    }
}
