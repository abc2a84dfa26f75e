//! # PostgreSQL Repository Integration Tests
//!
//! Integration tests for [`PostgresStockRepository`].
//!
//! # Test Categories
//!
//! - **Insert and existence check**: round-trip through the `stocks` table
//! - **Duplicate insert**: unique-constraint conflict maps to `AlreadyExists`
//! - **Row mapping**: stored rows re-enter the domain through the
//!   validating constructors; corrupt rows surface as storage failures
//!
//! # Note
//!
//! These tests require a running PostgreSQL instance reachable through
//! `TEST_DATABASE_URL`. They are marked with `#[ignore]` by default and
//! can be run with:
//! ```bash
//! cargo test --lib postgres::tests -- --ignored
//! ```

#![allow(clippy::unwrap_used)]

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::application::use_cases::add_stock::{RepositoryError, StockRepository};
use crate::domain::entities::Stock;
use crate::domain::value_objects::{CompanyName, Grade, SicCode, TickerSymbol};
use crate::infrastructure::persistence::postgres::PostgresStockRepository;

// ============================================================================
// Test Helpers
// ============================================================================

/// Creates a test database pool.
///
/// Connects to the database named by `TEST_DATABASE_URL`. Tests skip
/// themselves when the variable is not set.
async fn create_test_pool() -> Option<PgPool> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    PgPool::connect(&database_url).await.ok()
}

/// Creates the `stocks` table for testing.
async fn setup_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stocks (
            id UUID PRIMARY KEY,
            ticker VARCHAR(5) NOT NULL UNIQUE,
            name VARCHAR(255),
            sic_code CHAR(4),
            grade CHAR(1),
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Cleans up test data between tests.
async fn cleanup_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM stocks").execute(pool).await?;
    Ok(())
}

/// Creates a fully populated test stock.
fn create_test_stock(ticker: &str) -> Stock {
    Stock::create(
        TickerSymbol::new(ticker).unwrap(),
        Some(CompanyName::new("Test Holdings Inc.").unwrap()),
        Some(SicCode::new("7372").unwrap()),
        Some(Grade::B),
    )
    .unwrap()
}

/// Fetches one raw row by ticker, bypassing the repository.
async fn fetch_raw_row(pool: &PgPool, ticker: &str) -> sqlx::postgres::PgRow {
    sqlx::query(
        "SELECT id, ticker, name, sic_code, grade, created_at, updated_at \
         FROM stocks WHERE ticker = $1",
    )
    .bind(ticker)
    .fetch_one(pool)
    .await
    .unwrap()
}

// ============================================================================
// Insert and Existence Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires PostgreSQL database"]
async fn add_and_exists_by_ticker() {
    let pool = match create_test_pool().await {
        Some(p) => p,
        None => {
            eprintln!("Skipping test: TEST_DATABASE_URL not set");
            return;
        }
    };

    setup_table(&pool).await.unwrap();
    cleanup_table(&pool).await.unwrap();

    let repo = PostgresStockRepository::new(pool.clone());
    let stock = create_test_stock("AAPL");

    let persisted = repo.add(&stock).await.unwrap();
    assert_eq!(persisted.id(), stock.id());
    assert_eq!(persisted.ticker().as_str(), "AAPL");
    assert_eq!(persisted.name(), stock.name());
    assert_eq!(persisted.sic_code(), stock.sic_code());
    assert_eq!(persisted.grade(), stock.grade());

    let exists = repo
        .exists_by_ticker(&TickerSymbol::new("AAPL").unwrap())
        .await
        .unwrap();
    assert!(exists);

    let missing = repo
        .exists_by_ticker(&TickerSymbol::new("MSFT").unwrap())
        .await
        .unwrap();
    assert!(!missing);

    cleanup_table(&pool).await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL database"]
async fn duplicate_insert_maps_to_already_exists() {
    let pool = match create_test_pool().await {
        Some(p) => p,
        None => return,
    };

    setup_table(&pool).await.unwrap();
    cleanup_table(&pool).await.unwrap();

    let repo = PostgresStockRepository::new(pool.clone());

    // Two distinct aggregates, same ticker: the unique constraint,
    // not the pre-check, decides the conflict.
    let first = create_test_stock("GOOG");
    let second = create_test_stock("GOOG");
    assert_ne!(first.id(), second.id());

    repo.add(&first).await.unwrap();
    let result = repo.add(&second).await;

    assert!(matches!(
        result,
        Err(RepositoryError::AlreadyExists(ticker)) if ticker == "GOOG"
    ));

    cleanup_table(&pool).await.unwrap();
}

// ============================================================================
// Row Mapping Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires PostgreSQL database"]
async fn corrupt_ticker_row_is_a_storage_failure() {
    let pool = match create_test_pool().await {
        Some(p) => p,
        None => return,
    };

    setup_table(&pool).await.unwrap();
    cleanup_table(&pool).await.unwrap();

    // A row the repository would never write: lowercase ticker with a
    // digit fails the value-object format check on the way back out.
    let now = Utc::now();
    sqlx::query(
        "INSERT INTO stocks (id, ticker, name, sic_code, grade, created_at, updated_at) \
         VALUES ($1, $2, NULL, NULL, NULL, $3, $4)",
    )
    .bind(Uuid::new_v4())
    .bind("abc1")
    .bind(now)
    .bind(now)
    .execute(&pool)
    .await
    .unwrap();

    let row = fetch_raw_row(&pool, "abc1").await;
    let result = PostgresStockRepository::map_row(&row);

    assert!(matches!(
        result,
        Err(RepositoryError::StorageFailure(Some(ref cause))) if cause.contains("stored ticker invalid")
    ));

    cleanup_table(&pool).await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL database"]
async fn inconsistent_timestamp_row_is_a_storage_failure() {
    let pool = match create_test_pool().await {
        Some(p) => p,
        None => return,
    };

    setup_table(&pool).await.unwrap();
    cleanup_table(&pool).await.unwrap();

    // created_at after updated_at: valid columns, inconsistent aggregate.
    let updated_at = Utc::now();
    let created_at = updated_at + Duration::hours(1);
    sqlx::query(
        "INSERT INTO stocks (id, ticker, name, sic_code, grade, created_at, updated_at) \
         VALUES ($1, $2, NULL, NULL, NULL, $3, $4)",
    )
    .bind(Uuid::new_v4())
    .bind("IBM")
    .bind(created_at)
    .bind(updated_at)
    .execute(&pool)
    .await
    .unwrap();

    let row = fetch_raw_row(&pool, "IBM").await;
    let result = PostgresStockRepository::map_row(&row);

    assert!(matches!(
        result,
        Err(RepositoryError::StorageFailure(Some(ref cause))) if cause.contains("inconsistent")
    ));

    cleanup_table(&pool).await.unwrap();
}

// ============================================================================
// Helper Tests (run without database)
// ============================================================================

#[test]
fn test_stock_creation() {
    let stock = create_test_stock("AAPL");
    assert_eq!(stock.ticker().as_str(), "AAPL");
    assert_eq!(stock.name().unwrap().as_str(), "Test Holdings Inc.");
    assert_eq!(stock.sic_code().unwrap().as_str(), "7372");
    assert_eq!(stock.grade(), Some(Grade::B));
    assert!(!stock.id().is_nil());
}
