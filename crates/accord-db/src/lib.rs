//! # accord-db
//!
//! libSQL storage for the contract-records schema.
//!
//! Handles all relational state: vendors, statuses, MSAs, SOWs, invoices,
//! milestones and deliverables. The schema is embedded and applied on open;
//! foreign keys are enforced per connection so cascading deletes work.
//!
//! CRUD is generic: each table implements [`resource::Resource`] in
//! [`repos`], and [`service::AccordService`] provides list/get/create/update/
//! delete for any resource.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod resource;
pub mod service;

#[cfg(test)]
mod test_support;

use accord_config::DatabaseConfig;
use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
pub struct AccordDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl AccordDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        Self::init(db).await
    }

    /// Open a remote libSQL database over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection or migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        Self::init(db).await
    }

    /// Open whichever database the configuration describes.
    ///
    /// # Errors
    ///
    /// Same as [`Self::open_local`] / [`Self::open_remote`].
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            tracing::info!(url = %config.url, "opening remote database");
            Self::open_remote(&config.url, &config.auth_token).await
        } else {
            tracing::info!(path = %config.path, "opening local database");
            Self::open_local(&config.path).await
        }
    }

    async fn init(db: libsql::Database) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        // Foreign keys are per-connection in SQLite; cascades depend on this.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let accord_db = Self { db, conn };
        accord_db.run_migrations().await?;
        Ok(accord_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
