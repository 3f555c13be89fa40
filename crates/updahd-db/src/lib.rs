//! # updahd-db
//!
//! libSQL store for UpDAHD: the class ladder, employees, and the append-only
//! progress log, plus the class-progression engine and the roster kept by
//! the listing screen.
//!
//! Runs against a local database file (or `:memory:` in tests) or a Turso
//! embedded replica that syncs on demand.

pub mod error;
pub mod helpers;
mod migrations;
pub mod progression;
pub mod repos;
pub mod retry;
pub mod roster;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use libsql::params::IntoParams;
use retry::{RetryConfig, is_transient_turso_error};

pub use progression::{ProgressError, ProgressOutcome, ProgressionEngine};
pub use roster::EmployeeRoster;
pub use service::UpService;

/// Central database handle.
///
/// Wraps a libSQL database and a single connection. Foreign keys are
/// enabled per connection on open.
pub struct UpDb {
    db: libsql::Database,
    conn: libsql::Connection,
    synced: bool,
    retry: RetryConfig,
}

impl UpDb {
    /// Open a local-only database at the given path (no cloud sync).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        Self::init(db, false).await
    }

    /// Open a Turso embedded replica at `local_path`, pulling remote state first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the replica cannot be built, the initial
    /// sync fails, or migrations fail.
    pub async fn open_synced(
        local_path: &str,
        remote_url: &str,
        auth_token: &str,
    ) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote_replica(
            local_path,
            remote_url.to_string(),
            auth_token.to_string(),
        )
        .read_your_writes(true)
        .build()
        .await?;
        db.sync()
            .await
            .map_err(|e| DatabaseError::Query(format!("initial sync: {e}")))?;
        Self::init(db, true).await
    }

    async fn init(db: libsql::Database, synced: bool) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        // Must be per-connection in SQLite
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let up_db = Self {
            db,
            conn,
            synced,
            retry: RetryConfig::default(),
        };
        up_db.run_migrations().await?;
        Ok(up_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn is_synced_replica(&self) -> bool {
        self.synced
    }

    /// Push local writes and pull remote changes. No-op for local databases.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Query` if the sync round-trip fails.
    pub async fn sync(&self) -> Result<(), DatabaseError> {
        if !self.synced {
            return Ok(());
        }
        self.db
            .sync()
            .await
            .map(|_| ())
            .map_err(|e| DatabaseError::Query(format!("sync: {e}")))
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"emp-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .query_with(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                || (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Execute a statement, retrying transient Turso errors on synced replicas.
    ///
    /// `params` is called once per attempt.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` with the last error once retries run out.
    pub async fn execute_with<F, P>(&self, sql: &str, params: F) -> Result<u64, DatabaseError>
    where
        F: Fn() -> P,
        P: IntoParams,
    {
        let mut attempt = 1;
        loop {
            match self.conn.execute(sql, params()).await {
                Ok(changed) => return Ok(changed),
                Err(e) if self.should_retry(&e, attempt) => {
                    self.back_off(&e, attempt).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Run a query, retrying transient Turso errors on synced replicas.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` with the last error once retries run out.
    pub async fn query_with<F, P>(&self, sql: &str, params: F) -> Result<libsql::Rows, DatabaseError>
    where
        F: Fn() -> P,
        P: IntoParams,
    {
        let mut attempt = 1;
        loop {
            match self.conn.query(sql, params()).await {
                Ok(rows) => return Ok(rows),
                Err(e) if self.should_retry(&e, attempt) => {
                    self.back_off(&e, attempt).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn should_retry(&self, e: &libsql::Error, attempt: u32) -> bool {
        self.synced && attempt < self.retry.max_attempts && is_transient_turso_error(e)
    }

    async fn back_off(&self, e: &libsql::Error, attempt: u32) {
        let delay = self.retry.delay_for(attempt);
        tracing::debug!(attempt, ?delay, error = %e, "transient Turso error, retrying");
        tokio::time::sleep(delay).await;
    }
}
