//! # Application State
//!
//! Focused state types, each owned by the [`Gallery`](crate::Gallery)
//! context and handed to the commands that need them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GalleryConfig      read-only settings (TOML + ATELIER_* env)           │
//! │  CatalogState       latest catalog snapshot (watch)                     │
//! │  CriteriaStore      current filter criteria (watch)                     │
//! │  FilterEngine       catalog × criteria ──► FilteredView                 │
//! │  TranslationState   active language + table (watch)                     │
//! │  PreferenceState    language / theme persisted in SQLite                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod criteria;
mod i18n;
mod preferences;
mod view;

pub use catalog::{
    CatalogError, CatalogOrigin, CatalogResult, CatalogSnapshot, CatalogSource, CatalogState,
    DbCatalogSource, FallbackSource, JsonFileSource,
};
pub use config::{CatalogSourceKind, ConfigError, ConfigResult, GalleryConfig};
pub use criteria::{CriteriaSnapshot, CriteriaStore, DimensionWatch};
pub use i18n::{LoadedTranslations, TranslationState};
pub use preferences::PreferenceState;
pub use view::{FilterEngine, ViewFrame, ViewSubscription};
