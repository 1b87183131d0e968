//! # atelier-core: Pure Domain Logic for Atelier
//!
//! This crate is the **heart** of the Atelier gallery. It contains the
//! filtering engine and everything around it as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Atelier Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Gallery view (TypeScript / CLI)                 │   │
//! │  │    Filter panel ──► Grid ──► Detail page ──► Inquiry modal     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 atelier-gallery (app state)                     │   │
//! │  │    CatalogState ──► FilterEngine ◄── CriteriaStore              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ atelier-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  filter   │  │  facets   │  │  inquiry  │  │   │
//! │  │   │  Artwork  │  │  apply()  │  │ materials │  │   form    │  │   │
//! │  │   │ Criteria  │  │  sort()   │  │  bounds   │  │  message  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  atelier-db (Database Layer)                    │   │
//! │  │           SQLite catalog, preferences, migrations               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Artwork, FilterCriteria, FilteredView, ...)
//! - [`money`] - Money type with integer cents
//! - [`filter`] - The filtering and sorting pipeline
//! - [`facets`] - Distinct values and price bounds for the filter controls
//! - [`controls`] - Filter panel gestures to criteria values
//! - [`collate`] - Locale-aware string ordering
//! - [`catalog`] - Built-in sample catalog and lookups
//! - [`inquiry`] - Purchase inquiry form
//! - [`validation`] - Field validators
//! - [`i18n`] - Translation tables
//! - [`theme`] - Colour schemes
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use atelier_core::catalog::fallback_catalog;
//! use atelier_core::{facets, filter, FilterCriteria, PriceRange};
//!
//! let catalog = fallback_catalog();
//!
//! let bounds = facets::price_bounds(&catalog);
//! assert_eq!(bounds, PriceRange::from_major(150, 200));
//!
//! let criteria = FilterCriteria {
//!     price_range: Some(PriceRange::from_major(140, 160)),
//!     ..Default::default()
//! };
//! assert_eq!(filter::apply(&catalog, &criteria).ids(), vec![1]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod collate;
pub mod controls;
pub mod error;
pub mod facets;
pub mod filter;
pub mod i18n;
pub mod inquiry;
pub mod money;
pub mod theme;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use facets::Facets;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lower price bound, in whole euros, when no work in the catalog is priced.
pub const DEFAULT_PRICE_MIN: i64 = 0;

/// Upper price bound, in whole euros, when no work in the catalog is priced.
pub const DEFAULT_PRICE_MAX: i64 = 1000;

/// Preference key holding the visitor's language code.
pub const LANGUAGE_KEY: &str = "language";
