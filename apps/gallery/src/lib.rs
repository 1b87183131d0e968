//! # Atelier Gallery Library
//!
//! App layer of the Atelier gallery: reactive state, commands, and the
//! startup sequence shared by the `atelier` binary and the tests.
//!
//! ## Module Organization
//! ```text
//! atelier_gallery/
//! ├── lib.rs          ◄─── You are here (Gallery context & startup)
//! ├── state/
//! │   ├── config.rs   ◄─── GalleryConfig (TOML + ATELIER_* env)
//! │   ├── catalog.rs  ◄─── Catalog sources, fallback, CatalogState
//! │   ├── criteria.rs ◄─── CriteriaStore (filter criteria)
//! │   ├── view.rs     ◄─── FilterEngine / ViewSubscription
//! │   ├── i18n.rs     ◄─── TranslationState
//! │   └── preferences.rs ◄─ PreferenceState (language, theme)
//! ├── commands/
//! │   ├── catalog.rs  ◄─── Grid, detail, facets
//! │   ├── filter.rs   ◄─── Filter panel
//! │   ├── preferences.rs ◄─ Language, theme
//! │   └── inquiry.rs  ◄─── Purchase inquiry link
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Explicit Context
//! There are no global singletons. [`Gallery::start`] builds every state
//! object once and hands out references; commands take only what they use.

pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;

use atelier_db::{Database, DbConfig, DbError};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{
    CatalogSnapshot, CatalogSourceKind, CatalogState, ConfigError, CriteriaStore, DbCatalogSource,
    FallbackSource, FilterEngine, GalleryConfig, JsonFileSource, PreferenceState, TranslationState,
};

/// Failure during startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Database(#[from] DbError),
}

/// Every piece of gallery state, built once at startup.
#[derive(Debug, Clone)]
pub struct Gallery {
    pub config: GalleryConfig,
    pub db: Database,
    pub catalog: CatalogState,
    pub criteria: CriteriaStore,
    pub engine: FilterEngine,
    pub translations: TranslationState,
    pub preferences: PreferenceState,
}

impl Gallery {
    /// Opens the configured database and starts the gallery.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  1. Resolve database path ──► ATELIER_DB_PATH or platform data dir      │
    /// │  2. Connect + migrate      ──► SQLite, WAL                              │
    /// │  3. Language               ──► stored preference, else config default   │
    /// │  4. Translations           ──► <i18n_dir>/<lang>.json                   │
    /// │  5. Catalog                ──► primary source, built-in on failure      │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub async fn start(config: GalleryConfig) -> Result<Self, StartupError> {
        let db_path = config.resolve_database_path()?;
        info!(?db_path, "Database path determined");

        let db = Database::new(DbConfig::new(db_path)).await?;
        Self::open(config, db).await
    }

    /// Starts the gallery on an already opened database.
    pub async fn open(config: GalleryConfig, db: Database) -> Result<Self, StartupError> {
        let preferences = PreferenceState::new(db.clone());
        let language = preferences
            .language()
            .await?
            .unwrap_or(config.default_language);

        let translations = TranslationState::load(&config.i18n_dir, language).await;

        let catalog = CatalogState::new();
        let criteria = CriteriaStore::new();
        let engine = FilterEngine::new(catalog.clone(), criteria.clone());

        let gallery = Gallery {
            config,
            db,
            catalog,
            criteria,
            engine,
            translations,
            preferences,
        };
        gallery.reload_catalog().await;

        info!(
            gallery = %gallery.config.gallery_name,
            %language,
            "Gallery ready"
        );
        Ok(gallery)
    }

    /// Fetches the catalog from the configured source and publishes it.
    pub async fn reload_catalog(&self) -> Arc<CatalogSnapshot> {
        match self.config.catalog_source {
            CatalogSourceKind::File => {
                let source = FallbackSource::new(JsonFileSource::new(&self.config.catalog_path));
                self.catalog.load(&source).await
            }
            CatalogSourceKind::Database => {
                let source = FallbackSource::new(DbCatalogSource::new(self.db.clone()));
                self.catalog.load(&source).await
            }
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=atelier=trace` - Show trace for atelier crates only
/// - Default: `info,atelier=debug,sqlx=warn`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,atelier=debug,sqlx=warn"));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
