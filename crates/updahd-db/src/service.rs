//! Service layer that hosts every repository method.
//!
//! `UpService` wraps `UpDb` and carries the identity of the signed-in
//! caller, which is stamped on progress log entries as `recorded_by`.
//! All repo methods are implemented as `impl UpService` blocks.

use updahd_config::TursoConfig;
use updahd_core::identity::AuthIdentity;

use crate::UpDb;
use crate::error::DatabaseError;

pub struct UpService {
    db: UpDb,
    identity: Option<AuthIdentity>,
}

impl UpService {
    /// Create a service over a local database file (or `":memory:"`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(
        db_path: &str,
        identity: Option<AuthIdentity>,
    ) -> Result<Self, DatabaseError> {
        let db = UpDb::open_local(db_path).await?;
        Ok(Self { db, identity })
    }

    /// Create a service backed by a synced Turso embedded replica.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the replica cannot be opened.
    pub async fn new_synced(
        local_replica_path: &str,
        remote_url: &str,
        auth_token: &str,
        identity: Option<AuthIdentity>,
    ) -> Result<Self, DatabaseError> {
        let db = UpDb::open_synced(local_replica_path, remote_url, auth_token).await?;
        Ok(Self { db, identity })
    }

    /// Open the store described by `turso`: an embedded replica when Turso
    /// is configured, otherwise the local file at `local_path`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(
        turso: &TursoConfig,
        local_path: &str,
        identity: Option<AuthIdentity>,
    ) -> Result<Self, DatabaseError> {
        if turso.is_configured() {
            let replica = if turso.has_local_replica() {
                turso.local_replica_path.as_str()
            } else {
                local_path
            };
            tracing::debug!(url = %turso.url, replica, "opening Turso embedded replica");
            Self::new_synced(replica, &turso.url, &turso.auth_token, identity).await
        } else {
            tracing::debug!(path = local_path, "opening local database");
            Self::new_local(local_path, identity).await
        }
    }

    /// Create from an existing `UpDb` (for testing).
    #[must_use]
    pub const fn from_db(db: UpDb, identity: Option<AuthIdentity>) -> Self {
        Self { db, identity }
    }

    #[must_use]
    pub const fn db(&self) -> &UpDb {
        &self.db
    }

    /// The signed-in caller, if any.
    #[must_use]
    pub const fn identity(&self) -> Option<&AuthIdentity> {
        self.identity.as_ref()
    }

    /// Sync the underlying database with remote state.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the sync fails.
    pub async fn sync(&self) -> Result<(), DatabaseError> {
        self.db.sync().await
    }

    #[must_use]
    pub const fn is_synced_replica(&self) -> bool {
        self.db.is_synced_replica()
    }
}
