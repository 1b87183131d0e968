//! # Filter Module
//!
//! The pure derivation at the heart of the gallery: catalog + criteria in,
//! ordered visible set out.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    apply(catalog, criteria)                             │
//! │                                                                         │
//! │  catalog (borrowed, never mutated)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. search     title | artist | description.en | description.nl       │
//! │                case-insensitive substring, ANY field                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. price      price present AND min <= price <= max                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. materials  material label contains ANY selection (case-insensitive)│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. dimensions dimension label equals ANY selection                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. sort       stable; unpriced works always last for price sorts      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FilteredView                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Inactive dimensions (empty term, no range, empty sets, `SortKey::None`)
//! are skipped, so `apply(catalog, &FilterCriteria::default())` returns the
//! catalog unchanged.

use std::cmp::Ordering;

use crate::collate;
use crate::money::Money;
use crate::types::{Artwork, FilterCriteria, FilteredView, PriceRange, SortKey};

/// Applies every active criterion to the catalog.
///
/// ## Example
/// ```rust
/// use atelier_core::catalog::fallback_catalog;
/// use atelier_core::filter::apply;
/// use atelier_core::{FilterCriteria, SortKey};
///
/// let catalog = fallback_catalog();
/// let criteria = FilterCriteria {
///     search_term: "scheve".to_string(),
///     sort_by: SortKey::PriceAsc,
///     ..Default::default()
/// };
///
/// let view = apply(&catalog, &criteria);
/// assert_eq!(view.ids(), vec![1, 3, 2]);
/// ```
pub fn apply(catalog: &[Artwork], criteria: &FilterCriteria) -> FilteredView {
    let matcher = Matcher::new(criteria);

    let mut items: Vec<Artwork> = catalog
        .iter()
        .filter(|artwork| matcher.matches(artwork))
        .cloned()
        .collect();

    sort(&mut items, criteria.sort_by);

    FilteredView::new(items)
}

/// Checks a single artwork against every active filter dimension.
///
/// Sorting is not a filter and is ignored here.
pub fn matches(artwork: &Artwork, criteria: &FilterCriteria) -> bool {
    Matcher::new(criteria).matches(artwork)
}

/// Stable in-place sort by the given key.
pub fn sort(items: &mut [Artwork], key: SortKey) {
    match key {
        SortKey::None => {}
        SortKey::Title => items.sort_by(|a, b| collate::compare(&a.title, &b.title)),
        SortKey::Artist => items.sort_by(|a, b| collate::compare(&a.artist, &b.artist)),
        SortKey::PriceAsc => items.sort_by(|a, b| by_price(a.price(), b.price(), false)),
        SortKey::PriceDesc => items.sort_by(|a, b| by_price(a.price(), b.price(), true)),
    }
}

/// Unpriced works sort last in both directions.
fn by_price(a: Option<Money>, b: Option<Money>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Criteria with their case-folding done once per recomputation.
struct Matcher<'a> {
    search: Option<String>,
    price_range: Option<PriceRange>,
    materials: Vec<String>,
    dimensions: &'a std::collections::BTreeSet<String>,
}

impl<'a> Matcher<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Matcher {
            search: (!criteria.search_term.is_empty()).then(|| criteria.search_term.to_lowercase()),
            price_range: criteria.price_range,
            materials: criteria.materials.iter().map(|m| m.to_lowercase()).collect(),
            dimensions: &criteria.dimensions,
        }
    }

    fn matches(&self, artwork: &Artwork) -> bool {
        self.matches_search(artwork)
            && self.matches_price(artwork)
            && self.matches_material(artwork)
            && self.matches_dimensions(artwork)
    }

    fn matches_search(&self, artwork: &Artwork) -> bool {
        let Some(term) = &self.search else {
            return true;
        };

        [
            artwork.title.as_str(),
            artwork.artist.as_str(),
            artwork.description.en.as_str(),
            artwork.description.nl.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(term.as_str()))
    }

    fn matches_price(&self, artwork: &Artwork) -> bool {
        match self.price_range {
            None => true,
            Some(range) => artwork.price().is_some_and(|price| range.contains(price)),
        }
    }

    fn matches_material(&self, artwork: &Artwork) -> bool {
        if self.materials.is_empty() {
            return true;
        }
        let material = artwork.material.to_lowercase();
        self.materials.iter().any(|m| material.contains(m.as_str()))
    }

    fn matches_dimensions(&self, artwork: &Artwork) -> bool {
        self.dimensions.is_empty() || self.dimensions.contains(&artwork.dimensions)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_catalog;
    use crate::types::LocalizedText;
    use std::collections::BTreeSet;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn artwork(id: i64, title: &str, price_cents: Option<i64>) -> Artwork {
        Artwork {
            id,
            title: title.to_string(),
            artist: "Scheve Schilder".to_string(),
            description: LocalizedText::default(),
            price_cents,
            sold: false,
            not_for_sale: price_cents.is_none(),
            main_image: format!("artwork{}.png", id),
            detail_images: Vec::new(),
            dimensions: "40x50 cm".to_string(),
            material: "Oil on canvas".to_string(),
        }
    }

    /// The three sample works with descriptions that name their medium.
    fn scenario_catalog() -> Vec<Artwork> {
        let mut catalog = fallback_catalog();
        catalog[0].description.en = "Acrylic study of a summer day.".to_string();
        catalog[1].description.en = "Oil sketch of a sunset over the canals.".to_string();
        catalog[2].description.en = "Windmills painted in oil.".to_string();
        catalog
    }

    #[test]
    fn test_inactive_criteria_is_identity() {
        let catalog = fallback_catalog();
        let view = apply(&catalog, &FilterCriteria::default());
        assert_eq!(view.items(), catalog.as_slice());
    }

    #[test]
    fn test_search_then_price_ascending() {
        let catalog = scenario_catalog();
        let mut criteria = FilterCriteria {
            search_term: "oil".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&catalog, &criteria).ids(), vec![2, 3]);

        criteria.sort_by = SortKey::PriceAsc;
        assert_eq!(apply(&catalog, &criteria).ids(), vec![3, 2]);
    }

    #[test]
    fn test_search_ignores_material_label() {
        let catalog = fallback_catalog();
        let criteria = FilterCriteria {
            search_term: "oil".to_string(),
            ..Default::default()
        };
        assert!(apply(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_search_matches_dutch_description() {
        let catalog = fallback_catalog();
        let criteria = FilterCriteria {
            search_term: "WINDMOLENS".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&catalog, &criteria).ids(), vec![3]);
    }

    #[test]
    fn test_price_range_excludes_unpriced() {
        let catalog = fallback_catalog();
        let criteria = FilterCriteria {
            price_range: Some(PriceRange::from_major(140, 160)),
            ..Default::default()
        };
        assert_eq!(apply(&catalog, &criteria).ids(), vec![1]);

        let everything = FilterCriteria {
            price_range: Some(PriceRange::from_major(0, 1_000_000)),
            ..Default::default()
        };
        assert_eq!(apply(&catalog, &everything).ids(), vec![1, 3]);
    }

    #[test]
    fn test_material_substring_match() {
        let catalog = fallback_catalog();
        let criteria = FilterCriteria {
            materials: set(&["canvas"]),
            ..Default::default()
        };
        assert_eq!(apply(&catalog, &criteria).ids(), vec![1, 3]);
    }

    #[test]
    fn test_materials_are_or_within_dimension() {
        let catalog = fallback_catalog();
        let criteria = FilterCriteria {
            materials: set(&["Acrylic", "wood"]),
            ..Default::default()
        };
        assert_eq!(apply(&catalog, &criteria).ids(), vec![1, 2]);
    }

    #[test]
    fn test_dimensions_require_exact_label() {
        let catalog = fallback_catalog();
        let exact = FilterCriteria {
            dimensions: set(&["60x80 cm", "50x70 cm"]),
            ..Default::default()
        };
        assert_eq!(apply(&catalog, &exact).ids(), vec![2, 3]);

        let partial = FilterCriteria {
            dimensions: set(&["60x80"]),
            ..Default::default()
        };
        assert!(apply(&catalog, &partial).is_empty());
    }

    #[test]
    fn test_dimensions_and_materials_compose_with_and() {
        let catalog = fallback_catalog();
        let criteria = FilterCriteria {
            materials: set(&["canvas"]),
            dimensions: set(&["50x70 cm"]),
            ..Default::default()
        };
        assert_eq!(apply(&catalog, &criteria).ids(), vec![3]);
    }

    #[test]
    fn test_price_descending_keeps_unpriced_last() {
        let catalog = vec![
            artwork(1, "A", None),
            artwork(2, "B", Some(10000)),
            artwork(3, "C", None),
            artwork(4, "D", Some(30000)),
        ];
        let criteria = FilterCriteria {
            sort_by: SortKey::PriceDesc,
            ..Default::default()
        };
        assert_eq!(apply(&catalog, &criteria).ids(), vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_price_sort_is_stable() {
        let catalog = vec![
            artwork(1, "A", Some(5000)),
            artwork(2, "B", Some(5000)),
            artwork(3, "C", Some(1000)),
            artwork(4, "D", Some(5000)),
        ];
        let criteria = FilterCriteria {
            sort_by: SortKey::PriceAsc,
            ..Default::default()
        };
        assert_eq!(apply(&catalog, &criteria).ids(), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_title_sort_is_case_insensitive() {
        let catalog = vec![
            artwork(1, "zeeland", Some(100)),
            artwork(2, "Amsterdam", Some(100)),
            artwork(3, "beemster", Some(100)),
        ];
        let criteria = FilterCriteria {
            sort_by: SortKey::Title,
            ..Default::default()
        };
        assert_eq!(apply(&catalog, &criteria).ids(), vec![2, 3, 1]);
    }

    #[test]
    fn test_empty_catalog_and_no_match() {
        let criteria = FilterCriteria {
            search_term: "bronze".to_string(),
            ..Default::default()
        };
        assert!(apply(&[], &criteria).is_empty());
        assert!(apply(&fallback_catalog(), &criteria).is_empty());
    }

    #[test]
    fn test_catalog_is_not_mutated() {
        let catalog = fallback_catalog();
        let before = catalog.clone();
        let criteria = FilterCriteria {
            sort_by: SortKey::Title,
            ..Default::default()
        };
        let _ = apply(&catalog, &criteria);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_matches_ignores_sort() {
        let catalog = fallback_catalog();
        let criteria = FilterCriteria {
            materials: set(&["wood"]),
            sort_by: SortKey::PriceDesc,
            ..Default::default()
        };
        assert!(matches(&catalog[1], &criteria));
        assert!(!matches(&catalog[0], &criteria));
    }
}
