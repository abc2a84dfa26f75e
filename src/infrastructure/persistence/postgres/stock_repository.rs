//! # PostgreSQL Stock Repository
//!
//! PostgreSQL implementation of [`StockRepository`] using sqlx.
//!
//! The `stocks` table carries a unique constraint on `ticker`; that
//! constraint, not the use case's pre-check, is the authoritative
//! uniqueness decision. `add` surfaces the constraint conflict as
//! [`RepositoryError::AlreadyExists`].
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE stocks (
//!     id UUID PRIMARY KEY,
//!     ticker VARCHAR(5) NOT NULL UNIQUE,
//!     name VARCHAR(255),
//!     sic_code CHAR(4),
//!     grade CHAR(1),
//!     created_at TIMESTAMPTZ NOT NULL,
//!     updated_at TIMESTAMPTZ NOT NULL
//! );
//! ```

use crate::application::use_cases::add_stock::{
    RepositoryError, RepositoryResult, StockRepository,
};
use crate::config::DatabaseConfig;
use crate::domain::entities::Stock;
use crate::domain::value_objects::{
    CompanyName, Grade, SicCode, StockId, TickerSymbol, Timestamp,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// PostgreSQL error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL implementation of [`StockRepository`].
///
/// Uses connection pooling via `sqlx::PgPool`.
///
/// # Examples
///
/// ```ignore
/// use stock_registry::config::DatabaseConfig;
/// use stock_registry::infrastructure::persistence::postgres::PostgresStockRepository;
///
/// let repo = PostgresStockRepository::connect(&DatabaseConfig::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PostgresStockRepository {
    pool: PgPool,
}

impl PostgresStockRepository {
    /// Creates a repository over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a new pool from database configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::StorageFailure`] if the pool cannot be
    /// established.
    pub async fn connect(config: &DatabaseConfig) -> RepositoryResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(Self::new(pool))
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub(super) fn map_row(row: &sqlx::postgres::PgRow) -> RepositoryResult<Stock> {
        let id: Uuid = row
            .try_get("id")
            .map_err(|e| RepositoryError::storage(e.to_string()))?;
        let ticker: String = row
            .try_get("ticker")
            .map_err(|e| RepositoryError::storage(e.to_string()))?;
        let name: Option<String> = row
            .try_get("name")
            .map_err(|e| RepositoryError::storage(e.to_string()))?;
        let sic_code: Option<String> = row
            .try_get("sic_code")
            .map_err(|e| RepositoryError::storage(e.to_string()))?;
        let grade: Option<String> = row
            .try_get("grade")
            .map_err(|e| RepositoryError::storage(e.to_string()))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| RepositoryError::storage(e.to_string()))?;
        let updated_at: DateTime<Utc> = row
            .try_get("updated_at")
            .map_err(|e| RepositoryError::storage(e.to_string()))?;

        // Rows re-enter the domain through the validating constructors,
        // so corrupt data surfaces as a storage failure rather than an
        // invalid aggregate.
        let ticker = TickerSymbol::new(&ticker)
            .map_err(|e| RepositoryError::storage(format!("stored ticker invalid: {e}")))?;
        let name = name
            .map(CompanyName::new)
            .transpose()
            .map_err(|e| RepositoryError::storage(format!("stored name invalid: {e}")))?;
        let sic_code = sic_code
            .map(SicCode::new)
            .transpose()
            .map_err(|e| RepositoryError::storage(format!("stored sic code invalid: {e}")))?;
        let grade = grade
            .map(Grade::new)
            .transpose()
            .map_err(|e| RepositoryError::storage(format!("stored grade invalid: {e}")))?;

        Stock::from_parts(
            StockId::new(id),
            ticker,
            name,
            sic_code,
            grade,
            Timestamp::new(created_at),
            Timestamp::new(updated_at),
        )
        .map_err(|e| RepositoryError::storage(format!("stored row inconsistent: {e}")))
    }
}

#[async_trait]
impl StockRepository for PostgresStockRepository {
    async fn exists_by_ticker(&self, ticker: &TickerSymbol) -> RepositoryResult<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM stocks WHERE ticker = $1)")
                .bind(ticker.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| RepositoryError::storage(e.to_string()))?;

        Ok(exists.0)
    }

    async fn add(&self, stock: &Stock) -> RepositoryResult<Stock> {
        debug!(ticker = %stock.ticker(), id = %stock.id(), "inserting stock");

        let result = sqlx::query(
            r#"
            INSERT INTO stocks (id, ticker, name, sic_code, grade, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, ticker, name, sic_code, grade, created_at, updated_at
            "#,
        )
        .bind(stock.id().get())
        .bind(stock.ticker().as_str())
        .bind(stock.name().map(CompanyName::as_str))
        .bind(stock.sic_code().map(SicCode::as_str))
        .bind(stock.grade().map(|g| g.as_str()))
        .bind(stock.created_at().get())
        .bind(stock.updated_at().get())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Self::map_row(&row),
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                // The constraint is the authoritative uniqueness decision.
                Err(RepositoryError::AlreadyExists(
                    stock.ticker().as_str().to_string(),
                ))
            }
            Err(e) => Err(RepositoryError::storage(e.to_string())),
        }
    }
}
