//! # Connection Pool
//!
//! Opens the gallery database and hands out repositories.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DbConfig::new(path)  or  DbConfig::in_memory()                         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Database::new(config)                                                  │
//! │        │  file:   WAL journal, NORMAL sync, busy timeout                │
//! │        │  memory: one shared connection (each connection would         │
//! │        │          otherwise see its own empty database)                │
//! │        ▼                                                                │
//! │  SqlitePool ──► migrations ──► db.artworks() / db.preferences()        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The gallery mostly reads; writes are the seeder and preference changes.
//! A handful of connections is plenty.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::artwork::ArtworkRepository;
use crate::repository::preference::PreferenceRepository;

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    File(PathBuf),
    Memory,
}

/// Database settings.
///
/// ## Example
/// ```rust
/// use atelier_db::DbConfig;
///
/// let config = DbConfig::new("gallery.db").max_connections(2);
/// assert_eq!(config.max_connections, 2);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub location: DbLocation,

    /// Upper bound on pooled connections. Always 1 in memory.
    pub max_connections: u32,

    /// How long to wait for a free connection.
    pub acquire_timeout: Duration,

    /// How long SQLite retries a locked database before failing.
    pub busy_timeout: Duration,

    /// Apply pending migrations when opening.
    pub run_migrations: bool,
}

impl DbConfig {
    /// A file-backed database, created if missing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            location: DbLocation::File(path.into()),
            max_connections: 4,
            acquire_timeout: Duration::from_secs(10),
            busy_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }

    /// A private in-memory database, gone when the pool closes.
    pub fn in_memory() -> Self {
        DbConfig {
            location: DbLocation::Memory,
            max_connections: 1,
            ..DbConfig::new(PathBuf::new())
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max.max(1);
        self
    }

    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    fn connect_options(&self) -> SqliteConnectOptions {
        let options = SqliteConnectOptions::new().busy_timeout(self.busy_timeout);

        match &self.location {
            DbLocation::File(path) => options
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal),
            DbLocation::Memory => options.in_memory(true),
        }
    }

    fn pool_size(&self) -> u32 {
        match self.location {
            DbLocation::File(_) => self.max_connections,
            DbLocation::Memory => 1,
        }
    }
}

/// Handle to the gallery database.
///
/// Cloning is cheap; clones share the pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the pool and, unless disabled, migrates the schema.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(location = ?config.location, "Opening gallery database");

        // In memory the single connection must never be reaped, or the
        // database vanishes with it.
        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size())
            .min_connections(1)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(config.connect_options())
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        debug!(connections = config.pool_size(), "Pool ready");

        let db = Database { pool };
        if config.run_migrations {
            migrations::run_migrations(&db.pool).await?;
        }
        Ok(db)
    }

    /// Opens a file database with default settings.
    pub async fn open(path: &Path) -> DbResult<Self> {
        Self::new(DbConfig::new(path)).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// The artwork catalog table.
    pub fn artworks(&self) -> ArtworkRepository {
        ArtworkRepository::new(self.pool.clone())
    }

    /// Stored visitor preferences.
    pub fn preferences(&self) -> PreferenceRepository {
        PreferenceRepository::new(self.pool.clone())
    }

    /// Closes every connection; later queries fail.
    pub async fn close(&self) {
        debug!("Closing gallery database");
        self.pool.close().await;
    }

    /// Whether a trivial query succeeds.
    pub async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }
}
