//! # Gallery Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ATELIER_CATALOG_PATH=./artworks.json                               │
//! │     ATELIER_LANGUAGE=nl                                                │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/atelier-gallery/gallery.toml (Linux)                     │
//! │     ~/Library/Application Support/nl.atelier.gallery/gallery.toml      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # gallery.toml
//! gallery_name = "Scheve Schilder"
//! catalog_source = "file"
//! catalog_path = "assets/data/artworks.json"
//! i18n_dir = "assets/i18n"
//! whatsapp_number = "31612345678"
//! default_language = "nl"
//! ```
//!
//! Read-only after startup, so no lock.

use std::path::{Path, PathBuf};

use atelier_core::Language;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

// =============================================================================
// Errors
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },

    #[error("Could not determine a data directory for the database")]
    NoDataDir,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Gallery Config
// =============================================================================

/// Backing store of the primary catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSourceKind {
    /// JSON file at `catalog_path`.
    #[default]
    File,
    /// The `artworks` table, filled by the `seed` binary.
    Database,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Shown in page titles and the CLI header.
    pub gallery_name: String,

    /// Prefix of every price label.
    pub currency_symbol: String,

    /// Digits after the decimal point in price labels.
    pub currency_decimals: u8,

    /// Where the primary catalog is read from.
    pub catalog_source: CatalogSourceKind,

    /// Primary catalog file, used when `catalog_source` is `file`.
    pub catalog_path: PathBuf,

    /// Directory holding `<language>.json` translation tables.
    pub i18n_dir: PathBuf,

    /// SQLite file for the catalog and preferences.
    /// `None` means the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Contact number for purchase inquiries, international format
    /// without `+` (e.g. `31612345678`).
    pub whatsapp_number: Option<String>,

    /// Language used until the visitor picks one.
    pub default_language: Language,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            gallery_name: "Atelier".to_string(),
            currency_symbol: "€".to_string(),
            currency_decimals: 2,
            catalog_source: CatalogSourceKind::File,
            catalog_path: PathBuf::from("assets/data/artworks.json"),
            i18n_dir: PathBuf::from("assets/i18n"),
            database_path: None,
            whatsapp_number: None,
            default_language: Language::En,
        }
    }
}

impl GalleryConfig {
    /// Loads the config file (if present) and applies `ATELIER_*` overrides.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading gallery config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies overrides from a variable lookup (the process environment
    /// in production).
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<()> {
        if let Some(name) = lookup("ATELIER_GALLERY_NAME") {
            self.gallery_name = name;
        }

        if let Some(kind) = lookup("ATELIER_CATALOG_SOURCE") {
            self.catalog_source = match kind.trim() {
                "file" => CatalogSourceKind::File,
                "database" => CatalogSourceKind::Database,
                other => {
                    return Err(ConfigError::Invalid {
                        key: "ATELIER_CATALOG_SOURCE".to_string(),
                        reason: format!("expected 'file' or 'database', got '{}'", other),
                    })
                }
            };
        }

        if let Some(path) = lookup("ATELIER_CATALOG_PATH") {
            debug!(%path, "Overriding catalog path from environment");
            self.catalog_path = PathBuf::from(path);
        }

        if let Some(dir) = lookup("ATELIER_I18N_DIR") {
            self.i18n_dir = PathBuf::from(dir);
        }

        if let Some(path) = lookup("ATELIER_DB_PATH") {
            self.database_path = Some(PathBuf::from(path));
        }

        if let Some(number) = lookup("ATELIER_WHATSAPP_NUMBER") {
            self.whatsapp_number = Some(number);
        }

        if let Some(code) = lookup("ATELIER_LANGUAGE") {
            self.default_language = code.parse().map_err(|_| ConfigError::Invalid {
                key: "ATELIER_LANGUAGE".to_string(),
                reason: format!("unsupported language '{}'", code),
            })?;
        }

        Ok(())
    }

    /// `gallery.toml` in the platform config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("nl", "atelier", "gallery").map(|dirs| dirs.config_dir().join("gallery.toml"))
    }

    /// The configured database file, or `atelier.db` in the platform data
    /// directory (created if missing).
    pub fn resolve_database_path(&self) -> ConfigResult<PathBuf> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let dirs = ProjectDirs::from("nl", "atelier", "gallery").ok_or(ConfigError::NoDataDir)?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join("atelier.db"))
    }

    /// Price label for an amount in cents.
    ///
    /// `currency_decimals` of 0 or 1 rounds half away from zero; more than 2
    /// pads with zeros.
    ///
    /// ```rust
    /// use atelier_gallery::state::GalleryConfig;
    ///
    /// let config = GalleryConfig::default();
    /// assert_eq!(config.format_currency(15000), "€150.00");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.unsigned_abs();
        let amount = match self.currency_decimals {
            0 => ((abs + 50) / 100).to_string(),
            1 => {
                let tenths = (abs + 5) / 10;
                format!("{}.{}", tenths / 10, tenths % 10)
            }
            n => format!("{}.{:02}{}", abs / 100, abs % 100, "0".repeat(usize::from(n) - 2)),
        };
        format!("{}{}{}", sign, self.currency_symbol, amount)
    }
}
