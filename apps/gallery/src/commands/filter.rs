//! # Filter Commands
//!
//! Filter panel gestures, translated into criteria store writes.
//!
//! ```text
//! ┌───────────────────────────────┐
//! │ Search  [ oil            ]    │ ──► set_search_term("oil")
//! │ Price   [150]━━━━━━━━━[200]   │ ──► set_price_range(150, 200)
//! │ Material ☑ Oil on canvas      │ ──► toggle_material("Oil on canvas", true)
//! │ Size     ☐ 40x50 cm           │ ──► toggle_dimension("40x50 cm", false)
//! │ Sort    [ Price ↑        ▾]   │ ──► set_sort_by("price-asc")
//! │          ( Clear filters )    │ ──► reset_filters()
//! └───────────────────────────────┘
//! ```

use atelier_core::controls;
use atelier_core::{FilterCriteria, Money, PriceRange, SortKey, DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};
use serde::Serialize;
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::state::{CriteriaStore, FilterEngine};

/// Current criteria as the panel renders them.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaResponse {
    pub criteria: FilterCriteria,
    /// Whether the "clear filters" button is shown.
    pub has_active_filters: bool,
}

impl From<FilterCriteria> for CriteriaResponse {
    fn from(criteria: FilterCriteria) -> Self {
        CriteriaResponse {
            has_active_filters: controls::has_active_filters(&criteria),
            criteria,
        }
    }
}

pub fn get_criteria(store: &CriteriaStore) -> CriteriaResponse {
    store.snapshot().into()
}

pub fn set_search_term(store: &CriteriaStore, term: &str) -> CriteriaResponse {
    store.set_search_term(term);
    get_criteria(store)
}

/// Sets the price range from the two slider positions, in whole euros.
///
/// Sliders resting at the catalog's bounds clear the price filter.
pub fn set_price_range(engine: &FilterEngine, min: i64, max: i64) -> ApiResult<CriteriaResponse> {
    if min > max {
        return Err(ApiError::validation(format!(
            "Minimum price {} is above maximum {}",
            min, max
        )));
    }

    let bounds = engine
        .facets()
        .map(|facets| facets.price_bounds.whole_units())
        .unwrap_or(PriceRange::from_major(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX));

    let selected = match (Money::checked_from_major(min), Money::checked_from_major(max)) {
        (Some(min), Some(max)) => PriceRange::new(min, max),
        _ => {
            return Err(ApiError::validation(format!(
                "Price range {}..{} is out of range",
                min, max
            )))
        }
    };

    let store = engine.criteria();
    store.set_price_range(controls::price_selection(selected, bounds));
    Ok(get_criteria(store))
}

pub fn clear_price_range(store: &CriteriaStore) -> CriteriaResponse {
    store.set_price_range(None);
    get_criteria(store)
}

pub fn toggle_material(store: &CriteriaStore, material: &str, checked: bool) -> CriteriaResponse {
    store.toggle_material(material, checked);
    get_criteria(store)
}

pub fn toggle_dimension(store: &CriteriaStore, dimension: &str, checked: bool) -> CriteriaResponse {
    store.toggle_dimension(dimension, checked);
    get_criteria(store)
}

/// Sets the sort order from the sort control's value (`""`, `title`,
/// `artist`, `price-asc`, `price-desc`).
pub fn set_sort_by(store: &CriteriaStore, value: &str) -> ApiResult<CriteriaResponse> {
    let key: SortKey = value.parse()?;
    store.set_sort_by(key);
    Ok(get_criteria(store))
}

pub fn reset_filters(store: &CriteriaStore) -> CriteriaResponse {
    store.reset();
    get_criteria(store)
}
