//! # Preference State
//!
//! Visitor preferences persisted in the `preferences` table.
//!
//! | Key            | Value                                   |
//! |----------------|-----------------------------------------|
//! | `language`     | language code (`en`, `nl`)              |
//! | `colorScheme`  | scheme name (`default`, `ocean`, ...)   |
//! | `customColors` | JSON object, token name → CSS colour    |
//!
//! Unreadable stored values are logged and treated as unset.

use std::collections::BTreeMap;

use atelier_core::theme::{ColorToken, SchemeName, ThemePreference, CUSTOM_COLORS_KEY, SCHEME_KEY};
use atelier_core::{Language, LANGUAGE_KEY};
use atelier_db::{Database, DbError, DbResult};
use tracing::warn;

/// Typed access to stored preferences.
#[derive(Debug, Clone)]
pub struct PreferenceState {
    db: Database,
}

impl PreferenceState {
    pub fn new(db: Database) -> Self {
        PreferenceState { db }
    }

    /// The stored language, if any.
    pub async fn language(&self) -> DbResult<Option<Language>> {
        let Some(code) = self.db.preferences().get(LANGUAGE_KEY).await? else {
            return Ok(None);
        };

        match code.parse() {
            Ok(language) => Ok(Some(language)),
            Err(_) => {
                warn!(%code, "Ignoring unsupported stored language");
                Ok(None)
            }
        }
    }

    pub async fn set_language(&self, language: Language) -> DbResult<()> {
        self.db.preferences().set(LANGUAGE_KEY, language.code()).await
    }

    /// The stored theme, or the default scheme when nothing is stored.
    pub async fn theme(&self) -> DbResult<ThemePreference> {
        let prefs = self.db.preferences();

        let scheme = match prefs.get(SCHEME_KEY).await? {
            Some(name) => name.parse().unwrap_or_else(|_| {
                warn!(%name, "Ignoring unknown stored colour scheme");
                SchemeName::default()
            }),
            None => SchemeName::default(),
        };

        let overrides = match prefs.get(CUSTOM_COLORS_KEY).await? {
            Some(json) => serde_json::from_str::<BTreeMap<ColorToken, String>>(&json)
                .unwrap_or_else(|e| {
                    warn!(error = %e, "Ignoring unreadable stored custom colours");
                    BTreeMap::new()
                }),
            None => BTreeMap::new(),
        };

        Ok(ThemePreference { scheme, overrides })
    }

    /// Stores the scheme name and, if any, the overrides, in one
    /// transaction.
    pub async fn save_theme(&self, theme: &ThemePreference) -> DbResult<()> {
        let custom = if theme.overrides.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&theme.overrides).map_err(|e| DbError::Internal(e.to_string()))?)
        };

        self.db
            .preferences()
            .apply(&[
                (SCHEME_KEY, Some(theme.scheme.as_str())),
                (CUSTOM_COLORS_KEY, custom.as_deref()),
            ])
            .await
    }

    /// Clears both stored theme keys.
    pub async fn reset_theme(&self) -> DbResult<()> {
        self.db
            .preferences()
            .apply(&[(SCHEME_KEY, None), (CUSTOM_COLORS_KEY, None)])
            .await
    }
}
