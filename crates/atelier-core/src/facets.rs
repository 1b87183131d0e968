//! # Facets
//!
//! Distinct values that populate the filter controls.
//!
//! Facets are always derived from the FULL catalog, never from the filtered
//! view: picking "canvas" must not make "wood panel" disappear from the
//! material list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Artwork, PriceRange};
use crate::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};

/// Everything the filter panel needs to render its controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub materials: Vec<String>,
    pub dimensions: Vec<String>,
    pub price_bounds: PriceRange,
}

impl Facets {
    pub fn derive(catalog: &[Artwork]) -> Self {
        Facets {
            materials: distinct_materials(catalog),
            dimensions: distinct_dimensions(catalog),
            price_bounds: price_bounds(catalog),
        }
    }
}

/// Distinct material labels, case-sensitive, ascending.
///
/// ## Example
/// ```rust
/// use atelier_core::catalog::fallback_catalog;
/// use atelier_core::facets::distinct_materials;
///
/// assert_eq!(
///     distinct_materials(&fallback_catalog()),
///     vec!["Acrylic on canvas", "Oil on canvas", "Oil on wood panel"]
/// );
/// ```
pub fn distinct_materials(catalog: &[Artwork]) -> Vec<String> {
    distinct(catalog.iter().map(|a| a.material.as_str()))
}

/// Distinct dimension labels, case-sensitive, ascending.
pub fn distinct_dimensions(catalog: &[Artwork]) -> Vec<String> {
    distinct(catalog.iter().map(|a| a.dimensions.as_str()))
}

/// Lowest and highest asking price over the priced works.
///
/// Falls back to 0..1000 whole euros when nothing in the catalog has a price.
pub fn price_bounds(catalog: &[Artwork]) -> PriceRange {
    let mut prices = catalog.iter().filter_map(Artwork::price);

    let Some(first) = prices.next() else {
        return PriceRange::from_major(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX);
    };

    let (min, max) = prices.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
    PriceRange::new(min, max)
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_catalog;
    use crate::filter;
    use crate::money::Money;
    use crate::types::FilterCriteria;

    #[test]
    fn test_dimensions_sorted_and_deduplicated() {
        let mut catalog = fallback_catalog();
        catalog.push(catalog[0].clone());
        assert_eq!(
            distinct_dimensions(&catalog),
            vec!["40x50 cm", "50x70 cm", "60x80 cm"]
        );
    }

    #[test]
    fn test_case_variants_stay_distinct() {
        let mut catalog = fallback_catalog();
        catalog[2].material = "oil on canvas".to_string();
        let materials = distinct_materials(&catalog);
        assert_eq!(materials.len(), 3);
        assert_eq!(materials[0], "Acrylic on canvas");
        assert_eq!(materials[2], "oil on canvas");
    }

    #[test]
    fn test_price_bounds_ignore_unpriced() {
        let bounds = price_bounds(&fallback_catalog());
        assert_eq!(bounds.min, Money::from_major(150));
        assert_eq!(bounds.max, Money::from_major(200));
    }

    #[test]
    fn test_price_bounds_default_without_prices() {
        let mut catalog = fallback_catalog();
        for artwork in &mut catalog {
            artwork.price_cents = None;
        }
        assert_eq!(price_bounds(&catalog), PriceRange::from_major(0, 1000));
        assert_eq!(price_bounds(&[]), PriceRange::from_major(0, 1000));
    }

    #[test]
    fn test_facets_do_not_follow_filters() {
        let catalog = fallback_catalog();
        let before = Facets::derive(&catalog);

        let criteria = FilterCriteria {
            search_term: "windmills".to_string(),
            ..Default::default()
        };
        let view = filter::apply(&catalog, &criteria);
        assert_eq!(view.len(), 1);

        assert_eq!(Facets::derive(&catalog), before);
    }
}
