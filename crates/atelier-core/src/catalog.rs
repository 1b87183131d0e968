//! # Catalog
//!
//! The built-in sample catalog and lookups over a loaded catalog.
//!
//! The sample works are what visitors see when the catalog file cannot be
//! read, so the gallery never renders empty because of a missing asset.

use crate::error::{CoreError, CoreResult};
use crate::types::{Artwork, LocalizedText};

/// The three sample works shipped with the gallery.
pub fn fallback_catalog() -> Vec<Artwork> {
    vec![
        Artwork {
            id: 1,
            title: "Sunny Days".to_string(),
            artist: "Scheve Schilder".to_string(),
            description: LocalizedText {
                en: "A beautiful painting depicting a sunny day in the Dutch countryside."
                    .to_string(),
                nl: "Een prachtig schilderij dat een zonnige dag op het Nederlandse platteland weergeeft."
                    .to_string(),
            },
            price_cents: Some(15000),
            sold: false,
            not_for_sale: false,
            main_image: "artwork1.png".to_string(),
            detail_images: vec![
                "artwork1_detail1.png".to_string(),
                "artwork1_detail2.png".to_string(),
            ],
            dimensions: "40x50 cm".to_string(),
            material: "Acrylic on canvas".to_string(),
        },
        Artwork {
            id: 2,
            title: "Amsterdam Sunset".to_string(),
            artist: "Scheve Schilder".to_string(),
            description: LocalizedText {
                en: "A vibrant sunset over the Amsterdam canals.".to_string(),
                nl: "Een levendige zonsondergang over de Amsterdamse grachten.".to_string(),
            },
            price_cents: None,
            sold: false,
            not_for_sale: true,
            main_image: "artwork2.png".to_string(),
            detail_images: Vec::new(),
            dimensions: "60x80 cm".to_string(),
            material: "Oil on wood panel".to_string(),
        },
        Artwork {
            id: 3,
            title: "Dutch Windmills".to_string(),
            artist: "Scheve Schilder".to_string(),
            description: LocalizedText {
                en: "Traditional Dutch windmills in a serene landscape.".to_string(),
                nl: "Traditionele Nederlandse windmolens in een sereen landschap.".to_string(),
            },
            price_cents: Some(20000),
            sold: true,
            not_for_sale: false,
            main_image: "artwork3.png".to_string(),
            detail_images: vec!["artwork3_detail1.png".to_string()],
            dimensions: "50x70 cm".to_string(),
            material: "Oil on canvas".to_string(),
        },
    ]
}

/// Finds an artwork by id.
///
/// ## Example
/// ```rust
/// use atelier_core::catalog::{fallback_catalog, find_artwork};
///
/// let catalog = fallback_catalog();
/// assert_eq!(find_artwork(&catalog, 3).unwrap().title, "Dutch Windmills");
/// assert!(find_artwork(&catalog, 99).is_err());
/// ```
pub fn find_artwork(catalog: &[Artwork], id: i64) -> CoreResult<&Artwork> {
    catalog
        .iter()
        .find(|artwork| artwork.id == id)
        .ok_or(CoreError::ArtworkNotFound(id))
}
