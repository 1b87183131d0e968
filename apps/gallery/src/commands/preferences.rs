//! # Preference Commands
//!
//! Language switching and colour theme editing.
//!
//! Every change is applied to the live state first and then persisted, so
//! the next start comes up the way the visitor left it.

use atelier_core::theme::{ColorToken, SchemeName, ThemePreference};
use atelier_core::Language;
use serde::Serialize;
use tracing::info;
use ts_rs::TS;

use crate::error::ApiResult;
use crate::state::{PreferenceState, TranslationState};

pub fn get_language(translations: &TranslationState) -> Language {
    translations.language()
}

/// Switches the active language and stores the choice.
pub async fn set_language(
    code: &str,
    translations: &TranslationState,
    preferences: &PreferenceState,
) -> ApiResult<Language> {
    let language: Language = code.parse()?;

    translations.set_language(language).await;
    preferences.set_language(language).await?;

    info!(%language, "Language changed");
    Ok(language)
}

/// One CSS custom property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CssVar {
    pub name: String,
    pub value: String,
}

/// The stored theme plus its resolved CSS variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub theme: ThemePreference,
    pub css_vars: Vec<CssVar>,
}

impl From<ThemePreference> for ThemeResponse {
    fn from(theme: ThemePreference) -> Self {
        let css_vars = theme
            .resolve()
            .css_vars()
            .into_iter()
            .map(|(name, value)| CssVar { name, value })
            .collect();
        ThemeResponse { theme, css_vars }
    }
}

pub async fn get_theme(preferences: &PreferenceState) -> ApiResult<ThemeResponse> {
    Ok(preferences.theme().await?.into())
}

/// Switches to a named scheme, dropping custom colours.
pub async fn apply_color_scheme(
    name: &str,
    preferences: &PreferenceState,
) -> ApiResult<ThemeResponse> {
    let scheme: SchemeName = name.parse()?;

    let mut theme = preferences.theme().await?;
    theme.apply_scheme(scheme);
    preferences.save_theme(&theme).await?;

    Ok(theme.into())
}

/// Overrides a single colour on top of the current scheme.
pub async fn set_custom_color(
    token: &str,
    value: &str,
    preferences: &PreferenceState,
) -> ApiResult<ThemeResponse> {
    let token: ColorToken = token.parse()?;

    let mut theme = preferences.theme().await?;
    theme.set_color(token, value.trim());
    preferences.save_theme(&theme).await?;

    Ok(theme.into())
}

/// Back to the default scheme; both stored keys are cleared.
pub async fn reset_theme(preferences: &PreferenceState) -> ApiResult<ThemeResponse> {
    preferences.reset_theme().await?;
    Ok(ThemePreference::default().into())
}
