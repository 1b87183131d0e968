//! # Translation State
//!
//! The active language and its loaded translation table.
//!
//! Tables live in `<i18n_dir>/<code>.json`. A table that cannot be read or
//! parsed is logged and replaced by an empty one, so every lookup echoes its
//! key until the next successful load.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use atelier_core::i18n::Translations;
use atelier_core::Language;
use tokio::sync::watch;
use tracing::{debug, error};

/// A language together with its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTranslations {
    pub language: Language,
    pub table: Translations,
}

/// Shared handle to the active translations.
#[derive(Debug, Clone)]
pub struct TranslationState {
    dir: PathBuf,
    tx: Arc<watch::Sender<Arc<LoadedTranslations>>>,
}

impl TranslationState {
    /// Loads the table for `language` from `dir`.
    pub async fn load(dir: impl Into<PathBuf>, language: Language) -> Self {
        let dir = dir.into();
        let table = read_table(&dir, language).await;
        let (tx, _rx) = watch::channel(Arc::new(LoadedTranslations { language, table }));
        TranslationState {
            dir,
            tx: Arc::new(tx),
        }
    }

    /// Switches language, reloading the table from disk.
    pub async fn set_language(&self, language: Language) {
        let table = read_table(&self.dir, language).await;
        self.tx
            .send_replace(Arc::new(LoadedTranslations { language, table }));
    }

    pub fn language(&self) -> Language {
        self.tx.borrow().language
    }

    pub fn current(&self) -> Arc<LoadedTranslations> {
        self.tx.borrow().clone()
    }

    /// Looks up `key` in the active table, echoing it when missing.
    pub fn translate(&self, key: &str) -> String {
        self.tx.borrow().table.translate(key)
    }

    /// Notified on every language switch.
    pub fn subscribe(&self) -> watch::Receiver<Arc<LoadedTranslations>> {
        self.tx.subscribe()
    }
}

async fn read_table(dir: &Path, language: Language) -> Translations {
    let path = dir.join(format!("{}.json", language.code()));

    let contents = match tokio::fs::read_to_string(&path).await {
        Ok(contents) => contents,
        Err(e) => {
            error!(?path, error = %e, "Failed to read translation file");
            return Translations::default();
        }
    };

    match Translations::from_json_str(&contents) {
        Ok(table) => {
            debug!(%language, entries = table.len(), "Translations loaded");
            table
        }
        Err(e) => {
            error!(?path, error = %e, "Failed to parse translation file");
            Translations::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn write_tables(dir: &Path) {
        tokio::fs::write(dir.join("en.json"), r#"{"artwork": {"sold": "Sold"}}"#)
            .await
            .unwrap();
        tokio::fs::write(dir.join("nl.json"), r#"{"artwork.sold": "Verkocht"}"#)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_switching_language_reloads() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path()).await;

        let state = TranslationState::load(dir.path(), Language::En).await;
        assert_eq!(state.translate("artwork.sold"), "Sold");

        let mut rx = state.subscribe();
        state.set_language(Language::Nl).await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(state.language(), Language::Nl);
        assert_eq!(state.translate("artwork.sold"), "Verkocht");
    }

    #[tokio::test]
    async fn test_missing_file_echoes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let state = TranslationState::load(dir.path(), Language::Nl).await;
        assert!(state.current().table.is_empty());
        assert_eq!(state.translate("artwork.sold"), "artwork.sold");
    }

    #[tokio::test]
    async fn test_malformed_file_echoes_keys() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("en.json"), "{ oops").await.unwrap();

        let state = TranslationState::load(dir.path(), Language::En).await;
        assert_eq!(state.translate("modal.title"), "modal.title");
    }
}
