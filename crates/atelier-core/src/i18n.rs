//! # Translations
//!
//! Dotted-key lookup of localized UI strings.
//!
//! Translation files may be flat (`{"artwork.sold": "Sold"}`) or nested
//! (`{"artwork": {"sold": "Sold"}}`); both load into the same flat table.
//! A lookup that finds nothing returns the key itself, so a missing entry
//! shows up on screen as `artwork.sold` instead of failing.

use std::collections::HashMap;

use serde_json::Value;

/// A loaded translation table for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    /// Parses a translation file.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Flattens a JSON document into dotted keys. Non-string leaves are
    /// ignored.
    pub fn from_value(value: &Value) -> Self {
        let mut entries = HashMap::new();
        flatten(value, String::new(), &mut entries);
        Translations { entries }
    }

    /// The translation for `key`, or `key` itself when there is none.
    ///
    /// ## Example
    /// ```rust
    /// use atelier_core::i18n::Translations;
    ///
    /// let t = Translations::from_json_str(r#"{"artwork": {"sold": "Verkocht"}}"#).unwrap();
    /// assert_eq!(t.translate("artwork.sold"), "Verkocht");
    /// assert_eq!(t.translate("artwork.price"), "artwork.price");
    /// ```
    pub fn translate(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }

    /// Empty strings count as missing.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(value: &Value, prefix: String, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(child, path, out);
            }
        }
        Value::String(s) if !prefix.is_empty() => {
            out.insert(prefix, s.clone());
        }
        _ => {}
    }
}
