//! # Catalog Commands
//!
//! Read-only views of the catalog for the grid and the detail page.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Grid                                   Detail page                     │
//! │  ┌─────────┐ ┌─────────┐ ┌─────────┐   ┌───────────────────────────┐    │
//! │  │ Sunny   │ │Amsterdam│ │ Dutch   │   │ Dutch Windmills           │    │
//! │  │ Days    │ │ Sunset  │ │Windmills│   │ Oil on canvas · 50x70 cm  │    │
//! │  │ €150.00 │ │Not for  │ │ Sold    │   │ Sold                      │    │
//! │  │         │ │ sale    │ │         │   │ [detail images...]        │    │
//! │  └─────────┘ └─────────┘ └─────────┘   └───────────────────────────┘    │
//! │   list_artworks()                        get_artwork(3)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use atelier_core::catalog::find_artwork;
use atelier_core::i18n::Translations;
use atelier_core::{Artwork, ArtworkStatus, Facets, Language};
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::state::{CatalogOrigin, CatalogState, FilterEngine, GalleryConfig, TranslationState};

/// One tile in the gallery grid.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkCard {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price_label: String,
    pub status: ArtworkStatus,
    pub purchasable: bool,
    pub main_image: String,
    pub dimensions: String,
    pub material: String,
}

/// The grid after filtering.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPage {
    pub items: Vec<ArtworkCard>,
    /// Size of the unfiltered catalog.
    pub total: usize,
    pub filters_active: bool,
}

/// Everything the detail page shows.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDetail {
    #[serde(flatten)]
    pub card: ArtworkCard,
    /// Description in the active language.
    pub description: String,
    pub detail_images: Vec<String>,
}

/// Price text shown under a work.
///
/// Sold wins over everything else; a work that is not for sale or has no
/// price reads as not for sale.
pub fn price_label(artwork: &Artwork, config: &GalleryConfig, translations: &Translations) -> String {
    match (artwork.status().translation_key(), artwork.price_cents) {
        (Some(key), _) => translations.translate(key),
        (None, Some(cents)) => config.format_currency(cents),
        (None, None) => translations.translate("artwork.notForSale"),
    }
}

fn card(artwork: &Artwork, config: &GalleryConfig, translations: &Translations) -> ArtworkCard {
    ArtworkCard {
        id: artwork.id,
        title: artwork.title.clone(),
        artist: artwork.artist.clone(),
        price_label: price_label(artwork, config, translations),
        status: artwork.status(),
        purchasable: artwork.is_purchasable(),
        main_image: artwork.main_image.clone(),
        dimensions: artwork.dimensions.clone(),
        material: artwork.material.clone(),
    }
}

fn detail(
    artwork: &Artwork,
    language: Language,
    config: &GalleryConfig,
    translations: &Translations,
) -> ArtworkDetail {
    ArtworkDetail {
        card: card(artwork, config, translations),
        description: artwork.description.get(language).to_string(),
        detail_images: artwork.detail_images.clone(),
    }
}

fn not_loaded() -> ApiError {
    ApiError::new(ErrorCode::CatalogError, "Catalog not loaded yet")
}

/// Lists the artworks matching the current criteria, in view order.
pub fn list_artworks(
    engine: &FilterEngine,
    config: &GalleryConfig,
    translations: &TranslationState,
) -> ApiResult<GalleryPage> {
    let frame = engine.frame().ok_or_else(not_loaded)?;
    let total = frame.catalog.artworks.len();
    let loaded = translations.current();

    debug!(visible = frame.view.len(), total, "Listing artworks");

    Ok(GalleryPage {
        items: frame
            .view
            .items()
            .iter()
            .map(|a| card(a, config, &loaded.table))
            .collect(),
        total,
        filters_active: frame.criteria.is_active(),
    })
}

/// Gets one artwork by id from the full catalog.
pub fn get_artwork(
    id: i64,
    catalog: &CatalogState,
    config: &GalleryConfig,
    translations: &TranslationState,
) -> ApiResult<ArtworkDetail> {
    let snapshot = catalog.current().ok_or_else(not_loaded)?;
    let artwork = find_artwork(&snapshot.artworks, id)?;
    let loaded = translations.current();

    Ok(detail(artwork, loaded.language, config, &loaded.table))
}

/// Filter panel options, from the full catalog.
pub fn get_facets(engine: &FilterEngine) -> ApiResult<Facets> {
    engine.facets().ok_or_else(not_loaded)
}

/// Where the current catalog came from.
pub fn catalog_origin(catalog: &CatalogState) -> ApiResult<CatalogOrigin> {
    catalog
        .current()
        .map(|snapshot| snapshot.origin)
        .ok_or_else(not_loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CriteriaStore;
    use atelier_core::catalog::fallback_catalog;

    fn translations() -> Translations {
        Translations::from_json_str(
            r#"{"artwork": {"sold": "Verkocht", "notForSale": "Niet te koop"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_price_labels() {
        let config = GalleryConfig::default();
        let t = translations();
        let labels: Vec<String> = fallback_catalog()
            .iter()
            .map(|a| price_label(a, &config, &t))
            .collect();
        assert_eq!(labels, vec!["€150.00", "Niet te koop", "Verkocht"]);
    }

    #[test]
    fn test_price_label_without_price_or_flags() {
        let mut artwork = fallback_catalog().remove(0);
        artwork.price_cents = None;
        let label = price_label(&artwork, &GalleryConfig::default(), &Translations::default());
        assert_eq!(label, "artwork.notForSale");
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let translations = TranslationState::load(dir.path(), Language::Nl).await;
        let config = GalleryConfig::default();
        let catalog = CatalogState::new();
        let criteria = CriteriaStore::new();
        let engine = FilterEngine::new(catalog.clone(), criteria.clone());

        let err = list_artworks(&engine, &config, &translations).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogError);

        catalog.publish(fallback_catalog());
        criteria.set_search_term("windmills");

        let page = list_artworks(&engine, &config, &translations).unwrap();
        assert_eq!(page.total, 3);
        assert!(page.filters_active);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].status, ArtworkStatus::Sold);
        assert!(!page.items[0].purchasable);

        let detail = get_artwork(1, &catalog, &config, &translations).unwrap();
        assert!(detail.description.starts_with("Een prachtig schilderij"));
        assert_eq!(detail.detail_images.len(), 2);

        let err = get_artwork(99, &catalog, &config, &translations).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_page_counts_follow_republished_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let translations = TranslationState::load(dir.path(), Language::En).await;
        let config = GalleryConfig::default();
        let catalog = CatalogState::new();
        let engine = FilterEngine::new(catalog.clone(), CriteriaStore::new());

        catalog.publish(fallback_catalog());
        let page = list_artworks(&engine, &config, &translations).unwrap();
        assert_eq!((page.items.len(), page.total), (3, 3));

        catalog.publish(fallback_catalog().into_iter().take(1).collect());
        let page = list_artworks(&engine, &config, &translations).unwrap();
        assert_eq!((page.items.len(), page.total), (1, 1));
        assert!(!page.filters_active);
    }
}
