//! # Filter Controls
//!
//! Translation from filter panel gestures to criteria values.
//!
//! The panel works in concrete values (two slider positions, checkbox
//! clicks, a sort dropdown string); the criteria store wants the inactive
//! state whenever a control is at its neutral position.

use std::collections::BTreeSet;

use crate::types::{FilterCriteria, PriceRange};

/// Maps the two slider positions to a price criterion.
///
/// Sliders resting at the catalog bounds mean "no price filter".
///
/// ## Example
/// ```rust
/// use atelier_core::controls::price_selection;
/// use atelier_core::PriceRange;
///
/// let bounds = PriceRange::from_major(150, 200);
/// assert_eq!(price_selection(bounds, bounds), None);
///
/// let narrowed = PriceRange::from_major(150, 180);
/// assert_eq!(price_selection(narrowed, bounds), Some(narrowed));
/// ```
pub fn price_selection(selected: PriceRange, bounds: PriceRange) -> Option<PriceRange> {
    (selected != bounds).then_some(selected)
}

/// Adds or removes one checkbox value.
pub fn toggle(selection: &BTreeSet<String>, value: &str, checked: bool) -> BTreeSet<String> {
    let mut next = selection.clone();
    if checked {
        next.insert(value.to_string());
    } else {
        next.remove(value);
    }
    next
}

/// Whether the panel shows its "clear filters" button.
pub fn has_active_filters(criteria: &FilterCriteria) -> bool {
    criteria.is_active()
}
