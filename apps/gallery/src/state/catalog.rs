//! # Catalog State
//!
//! Where the artworks come from, and the latest loaded catalog.
//!
//! ## Retrieval
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FallbackSource<S>                                                      │
//! │                                                                         │
//! │   S::fetch_all() ──── Ok(items) ──────────► snapshot (Primary)         │
//! │        │                                                                │
//! │        └────────── Err(e) ── warn! ───────► fallback_catalog()         │
//! │                                             snapshot (Fallback)        │
//! │                                                                         │
//! │  CatalogState::publish(snapshot)                                        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   watch<Option<Arc<CatalogSnapshot>>>  ──►  FilterEngine subscribers   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The channel starts at `None`: until a catalog is published there is no
//! filtered view.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use atelier_core::catalog::fallback_catalog;
use atelier_core::Artwork;
use atelier_db::{Database, DbError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

// =============================================================================
// Errors
// =============================================================================

/// Failure to retrieve the catalog from a source.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog database error: {0}")]
    Database(#[from] DbError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Sources
// =============================================================================

/// Anything that can produce the full catalog, in catalog order.
pub trait CatalogSource: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = CatalogResult<Vec<Artwork>>> + Send;
}

/// A JSON file holding an array of artworks.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    async fn fetch_all(&self) -> CatalogResult<Vec<Artwork>> {
        debug!(path = ?self.path, "Reading catalog file");

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// The `artworks` table.
#[derive(Debug, Clone)]
pub struct DbCatalogSource {
    db: Database,
}

impl DbCatalogSource {
    pub fn new(db: Database) -> Self {
        DbCatalogSource { db }
    }
}

impl CatalogSource for DbCatalogSource {
    async fn fetch_all(&self) -> CatalogResult<Vec<Artwork>> {
        Ok(self.db.artworks().list().await?)
    }
}

/// Where a published catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogOrigin {
    Primary,
    Fallback,
}

/// Wraps a source and substitutes the built-in catalog when it fails.
///
/// The failure is logged and otherwise swallowed.
#[derive(Debug, Clone)]
pub struct FallbackSource<S> {
    inner: S,
}

impl<S: CatalogSource> FallbackSource<S> {
    pub fn new(inner: S) -> Self {
        FallbackSource { inner }
    }

    /// Fetches from the wrapped source, falling back on error.
    pub async fn load(&self) -> CatalogSnapshot {
        match self.inner.fetch_all().await {
            Ok(artworks) => {
                info!(count = artworks.len(), "Catalog loaded");
                CatalogSnapshot::new(artworks, CatalogOrigin::Primary)
            }
            Err(e) => {
                warn!(error = %e, "Catalog unavailable, using built-in catalog");
                CatalogSnapshot::new(fallback_catalog(), CatalogOrigin::Fallback)
            }
        }
    }
}

impl<S: CatalogSource> CatalogSource for FallbackSource<S> {
    async fn fetch_all(&self) -> CatalogResult<Vec<Artwork>> {
        Ok(self.load().await.artworks)
    }
}

// =============================================================================
// Snapshot & State
// =============================================================================

/// One loaded catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub artworks: Vec<Artwork>,
    pub origin: CatalogOrigin,
    pub loaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(artworks: Vec<Artwork>, origin: CatalogOrigin) -> Self {
        CatalogSnapshot {
            artworks,
            origin,
            loaded_at: Utc::now(),
        }
    }
}

/// Holder of the current catalog.
///
/// Cloning is cheap; clones share the channel.
#[derive(Debug, Clone)]
pub struct CatalogState {
    tx: Arc<watch::Sender<Option<Arc<CatalogSnapshot>>>>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        CatalogState { tx: Arc::new(tx) }
    }

    /// Loads through `source` and publishes the result.
    pub async fn load<S: CatalogSource>(&self, source: &FallbackSource<S>) -> Arc<CatalogSnapshot> {
        let snapshot = Arc::new(source.load().await);
        self.publish_snapshot(snapshot.clone());
        snapshot
    }

    /// Publishes a catalog from the primary source.
    pub fn publish(&self, artworks: Vec<Artwork>) {
        self.publish_snapshot(Arc::new(CatalogSnapshot::new(artworks, CatalogOrigin::Primary)));
    }

    fn publish_snapshot(&self, snapshot: Arc<CatalogSnapshot>) {
        debug!(
            count = snapshot.artworks.len(),
            origin = ?snapshot.origin,
            "Publishing catalog"
        );
        self.tx.send_replace(Some(snapshot));
    }

    /// The latest catalog, if one has been published.
    pub fn current(&self) -> Option<Arc<CatalogSnapshot>> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<CatalogSnapshot>>> {
        self.tx.subscribe()
    }
}
