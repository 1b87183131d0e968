//! # Theme
//!
//! Colour schemes for the gallery pages.
//!
//! ## Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ThemePreference                                                        │
//! │                                                                         │
//! │  scheme: warm          ──► 10 colours from the named scheme            │
//! │  overrides: {primary}  ──► replaces individual colours on top          │
//! │                                                                         │
//! │  resolve() ──► Palette ──► css_vars():                                 │
//! │                  --color-primary:      #123456   (override)            │
//! │                  --color-primary-dark: #ee5a52   (warm)                │
//! │                  ...                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persisted as two preference keys: `colorScheme` (scheme name) and
//! `customColors` (JSON object of token → colour).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

pub const SCHEME_KEY: &str = "colorScheme";
pub const CUSTOM_COLORS_KEY: &str = "customColors";

// =============================================================================
// Colour Tokens
// =============================================================================

/// One themable colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ColorToken {
    Primary,
    PrimaryDark,
    Secondary,
    Accent,
    NeutralLight,
    NeutralSoft,
    NeutralMid,
    NeutralDark,
    Danger,
    Warning,
}

impl ColorToken {
    pub const ALL: [ColorToken; 10] = [
        ColorToken::Primary,
        ColorToken::PrimaryDark,
        ColorToken::Secondary,
        ColorToken::Accent,
        ColorToken::NeutralLight,
        ColorToken::NeutralSoft,
        ColorToken::NeutralMid,
        ColorToken::NeutralDark,
        ColorToken::Danger,
        ColorToken::Warning,
    ];

    /// camelCase name used in stored overrides.
    pub const fn name(&self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::PrimaryDark => "primaryDark",
            ColorToken::Secondary => "secondary",
            ColorToken::Accent => "accent",
            ColorToken::NeutralLight => "neutralLight",
            ColorToken::NeutralSoft => "neutralSoft",
            ColorToken::NeutralMid => "neutralMid",
            ColorToken::NeutralDark => "neutralDark",
            ColorToken::Danger => "danger",
            ColorToken::Warning => "warning",
        }
    }

    /// CSS custom property name.
    ///
    /// ## Example
    /// ```rust
    /// use atelier_core::theme::ColorToken;
    ///
    /// assert_eq!(ColorToken::PrimaryDark.css_var_name(), "--color-primary-dark");
    /// ```
    pub fn css_var_name(&self) -> String {
        let mut kebab = String::new();
        for c in self.name().chars() {
            if c.is_ascii_uppercase() {
                kebab.push('-');
            }
            kebab.push(c.to_ascii_lowercase());
        }
        format!("--color-{}", kebab)
    }

    const fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for ColorToken {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorToken::ALL
            .into_iter()
            .find(|token| token.name() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "color".to_string(),
                allowed: ColorToken::ALL.iter().map(|t| t.name().to_string()).collect(),
            })
    }
}

// =============================================================================
// Schemes
// =============================================================================

/// The predefined colour schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SchemeName {
    #[default]
    Default,
    Ocean,
    Warm,
    Forest,
}

// Colours in `ColorToken::ALL` order.
const DEFAULT_COLORS: [&str; 10] = [
    "#007bff", "#0056b3", "#6c757d", "#28a745", "#f8f9fa", "#e9ecef", "#6c757d", "#333333",
    "#dc3545", "#ffc107",
];
const OCEAN_COLORS: [&str; 10] = [
    "#006994", "#004d6f", "#5c8a9a", "#00acc1", "#f0f4f5", "#d4e1e5", "#6c8a94", "#2c3e44",
    "#e74c3c", "#f39c12",
];
const WARM_COLORS: [&str; 10] = [
    "#ff6b6b", "#ee5a52", "#95a5a6", "#f39c12", "#fef9f3", "#f5e6d3", "#7f8c8d", "#2c3e50",
    "#c0392b", "#e67e22",
];
const FOREST_COLORS: [&str; 10] = [
    "#27ae60", "#229954", "#7f8c8d", "#16a085", "#f4f9f4", "#d5e8d4", "#718c71", "#2c3e2c",
    "#e74c3c", "#f1c40f",
];

impl SchemeName {
    pub const ALL: [SchemeName; 4] = [
        SchemeName::Default,
        SchemeName::Ocean,
        SchemeName::Warm,
        SchemeName::Forest,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SchemeName::Default => "default",
            SchemeName::Ocean => "ocean",
            SchemeName::Warm => "warm",
            SchemeName::Forest => "forest",
        }
    }

    /// The scheme's colour for one token.
    pub const fn color(&self, token: ColorToken) -> &'static str {
        let colors = match self {
            SchemeName::Default => &DEFAULT_COLORS,
            SchemeName::Ocean => &OCEAN_COLORS,
            SchemeName::Warm => &WARM_COLORS,
            SchemeName::Forest => &FOREST_COLORS,
        };
        colors[token.index()]
    }

    pub fn palette(&self) -> Palette {
        Palette(
            ColorToken::ALL
                .into_iter()
                .map(|token| (token, self.color(token).to_string()))
                .collect(),
        )
    }
}

impl fmt::Display for SchemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemeName::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s.trim())
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "colorScheme".to_string(),
                allowed: SchemeName::ALL.iter().map(|s| s.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Palette & Preference
// =============================================================================

/// A fully resolved set of colours, one per token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Palette(BTreeMap<ColorToken, String>);

impl Palette {
    pub fn get(&self, token: ColorToken) -> &str {
        self.0.get(&token).map(String::as_str).unwrap_or_default()
    }

    /// `(css variable, colour)` pairs in token order.
    pub fn css_vars(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(token, color)| (token.css_var_name(), color.clone()))
            .collect()
    }
}

/// The visitor's stored theme choice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreference {
    pub scheme: SchemeName,
    #[serde(default)]
    pub overrides: BTreeMap<ColorToken, String>,
}

impl ThemePreference {
    /// Switches scheme. Earlier single-colour overrides are dropped so the
    /// new scheme shows as designed.
    pub fn apply_scheme(&mut self, scheme: SchemeName) {
        self.scheme = scheme;
        self.overrides.clear();
    }

    /// Overrides one colour. The value is used verbatim as a CSS colour.
    pub fn set_color(&mut self, token: ColorToken, value: impl Into<String>) {
        self.overrides.insert(token, value.into());
    }

    /// Back to the default scheme without overrides.
    pub fn reset(&mut self) {
        *self = ThemePreference::default();
    }

    /// Scheme colours with overrides applied.
    ///
    /// ## Example
    /// ```rust
    /// use atelier_core::theme::{ColorToken, SchemeName, ThemePreference};
    ///
    /// let mut theme = ThemePreference::default();
    /// theme.apply_scheme(SchemeName::Warm);
    /// theme.set_color(ColorToken::Primary, "#123456");
    ///
    /// let palette = theme.resolve();
    /// assert_eq!(palette.get(ColorToken::Primary), "#123456");
    /// assert_eq!(palette.get(ColorToken::PrimaryDark), "#ee5a52");
    /// ```
    pub fn resolve(&self) -> Palette {
        let mut palette = self.scheme.palette();
        for (token, color) in &self.overrides {
            palette.0.insert(*token, color.clone());
        }
        palette
    }
}
