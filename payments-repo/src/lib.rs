//! # Payments Repository
//!
//! Concrete store implementation (adapter) for the payment charge service.
//! This crate provides the SQLite adapter that implements the `PaymentStore` port.

pub mod sqlite;

mod types;


pub use sqlite::SqliteRepo;

/// Build and initialize a repository from a database URL.
///
/// This function:
/// 1. Connects to the database (creating the file if missing)
/// 2. Creates the `payments` table
/// 3. Returns a ready-to-use `SqliteRepo`
///
/// # Examples
///
/// ```ignore
/// let repo = build_repo("sqlite://payment.db").await?;
/// ```
pub async fn build_repo(database_url: &str) -> anyhow::Result<SqliteRepo> {
    let repo = SqliteRepo::new(database_url).await?;
    tracing::debug!("payments table ready");
    Ok(repo)
}
