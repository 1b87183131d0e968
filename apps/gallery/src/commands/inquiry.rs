//! # Inquiry Commands
//!
//! Turns a filled-in purchase inquiry form into a pre-filled chat link.
//!
//! ```text
//! InquiryForm ── validate ──✗──► ApiError { fieldErrors: [...] }   (no link)
//!      │
//!      ✓
//!      ▼
//! message(language, title) ──► https://wa.me/<number>?text=<encoded message>
//! ```

use atelier_core::catalog::find_artwork;
use atelier_core::inquiry::InquiryForm;
use serde::Serialize;
use tracing::info;
use ts_rs::TS;
use url::Url;

use crate::error::{ApiError, ApiResult};
use crate::state::{CatalogState, GalleryConfig, TranslationState};

const CHAT_BASE_URL: &str = "https://wa.me/";

/// A ready-to-open inquiry link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InquiryLink {
    pub artwork_id: i64,
    pub url: String,
}

/// Validates the form and builds the link for one artwork.
///
/// Only works that are for sale accept inquiries. The message is written
/// in the active language.
pub fn create_inquiry_link(
    artwork_id: i64,
    form: &InquiryForm,
    catalog: &CatalogState,
    config: &GalleryConfig,
    translations: &TranslationState,
) -> ApiResult<InquiryLink> {
    let snapshot = catalog
        .current()
        .ok_or_else(|| ApiError::not_found("Artwork", &artwork_id.to_string()))?;
    let artwork = find_artwork(&snapshot.artworks, artwork_id)?;

    if !artwork.is_purchasable() {
        return Err(ApiError::validation(format!(
            "'{}' is not available for purchase",
            artwork.title
        )));
    }

    form.validate()?;

    let number = contact_number(config)?;
    let message = form.message(translations.language(), &artwork.title);
    let url = inquiry_url(&number, &message)?;

    info!(artwork_id, "Inquiry link created");
    Ok(InquiryLink {
        artwork_id,
        url: url.into(),
    })
}

/// The configured number with formatting characters removed.
fn contact_number(config: &GalleryConfig) -> ApiResult<String> {
    let digits: String = config
        .whatsapp_number
        .as_deref()
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return Err(ApiError::config("No contact number configured"));
    }
    Ok(digits)
}

fn inquiry_url(number: &str, message: &str) -> ApiResult<Url> {
    Url::parse_with_params(&format!("{}{}", CHAT_BASE_URL, number), &[("text", message)])
        .map_err(|e| ApiError::internal(format!("Invalid inquiry link: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use atelier_core::catalog::fallback_catalog;
    use atelier_core::Language;

    fn form() -> InquiryForm {
        InquiryForm {
            name: "Anna".to_string(),
            email: "anna@example.nl".to_string(),
            address: "Prinsengracht 263".to_string(),
        }
    }

    fn config() -> GalleryConfig {
        GalleryConfig {
            whatsapp_number: Some("+31 6 1234 5678".to_string()),
            ..Default::default()
        }
    }

    async fn setup(language: Language) -> (CatalogState, TranslationState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let translations = TranslationState::load(dir.path(), language).await;
        let catalog = CatalogState::new();
        catalog.publish(fallback_catalog());
        (catalog, translations, dir)
    }

    #[tokio::test]
    async fn test_link_for_available_work() {
        let (catalog, translations, _dir) = setup(Language::En).await;

        let link = create_inquiry_link(1, &form(), &catalog, &config(), &translations).unwrap();
        let url = Url::parse(&link.url).unwrap();
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/31612345678");

        let text: String = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(
            text,
            "Hello, I'm interested in buying 'Sunny Days'. My name is Anna and my address is Prinsengracht 263. My email is anna@example.nl."
        );
        assert!(!link.url.contains(' '));
    }

    #[tokio::test]
    async fn test_dutch_message() {
        let (catalog, translations, _dir) = setup(Language::Nl).await;

        let link = create_inquiry_link(1, &form(), &catalog, &config(), &translations).unwrap();
        let url = Url::parse(&link.url).unwrap();
        let (_, text) = url.query_pairs().next().unwrap();
        assert!(text.starts_with("Hallo, ik ben geïnteresseerd in de aankoop van 'Sunny Days'."));
    }

    #[tokio::test]
    async fn test_invalid_form_yields_no_link() {
        let (catalog, translations, _dir) = setup(Language::En).await;
        let bad = InquiryForm {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            address: "Short".to_string(),
        };

        let err = create_inquiry_link(1, &bad, &catalog, &config(), &translations).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.field_keys(),
            vec![
                ("name", "modal.errors.name.minLength"),
                ("email", "modal.errors.email.invalid"),
                ("address", "modal.errors.address.minLength"),
            ]
        );
    }

    #[tokio::test]
    async fn test_sold_and_missing_works() {
        let (catalog, translations, _dir) = setup(Language::En).await;

        let err = create_inquiry_link(3, &form(), &catalog, &config(), &translations).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = create_inquiry_link(42, &form(), &catalog, &config(), &translations).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_missing_number_is_config_error() {
        let (catalog, translations, _dir) = setup(Language::En).await;
        let err = create_inquiry_link(1, &form(), &catalog, &GalleryConfig::default(), &translations)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }
}
