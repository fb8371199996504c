//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use payments_types::{PaymentRecord, PaymentStore, RepoError};

use crate::types::DbPayment;

const PAYMENTS_DDL: &str = include_str!("../migrations/0001_create_payments.sql");

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::query(PAYMENTS_DDL).execute(&pool).await?;

        Ok(Self { pool })
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn insert_error(err: sqlx::Error, charge_id: &str) -> RepoError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepoError::Conflict(format!("payment for charge {} already exists", charge_id))
        }
        _ => RepoError::Database(err.to_string()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentStore for SqliteRepo {
    async fn insert_payment(&self, record: &PaymentRecord) -> Result<(), RepoError> {
        sqlx::query(
            r#"INSERT INTO payments (charge_id, source_id, txn_id, status) VALUES (?, ?, ?, ?)"#,
        )
        .bind(&record.charge_id)
        .bind(&record.source_id)
        .bind(&record.txn_id)
        .bind(&record.status)
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error(e, &record.charge_id))?;

        Ok(())
    }

    async fn update_payment(
        &self,
        charge_id: &str,
        txn_id: Option<&str>,
        status: &str,
    ) -> Result<u64, RepoError> {
        let result = sqlx::query(r#"UPDATE payments SET txn_id = ?, status = ? WHERE charge_id = ?"#)
            .bind(txn_id)
            .bind(status)
            .bind(charge_id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn find_payment(&self, charge_id: &str) -> Result<Option<PaymentRecord>, RepoError> {
        let row: Option<DbPayment> = sqlx::query_as(
            r#"SELECT charge_id, source_id, txn_id, status FROM payments WHERE charge_id = ?"#,
        )
        .bind(charge_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(DbPayment::into_domain))
    }
}
