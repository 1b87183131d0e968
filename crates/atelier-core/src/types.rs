//! # Domain Types
//!
//! Core domain types used throughout Atelier.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐      │
//! │  │    Artwork      │   │  FilterCriteria  │   │  FilteredView   │      │
//! │  │  ─────────────  │   │  ──────────────  │   │  ─────────────  │      │
//! │  │  id             │   │  search_term     │   │  items (ordered)│      │
//! │  │  title, artist  │──►│  price_range     │──►│  len()          │      │
//! │  │  description    │   │  materials (OR)  │   │                 │      │
//! │  │  price_cents?   │   │  dimensions (OR) │   │  recomputed,    │      │
//! │  │  material       │   │  sort_by         │   │  never mutated  │      │
//! │  │  dimensions     │   └──────────────────┘   └─────────────────┘      │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Criteria compose with AND across dimensions, OR within one.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Language
// =============================================================================

/// Languages the gallery is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Nl,
}

impl Language {
    /// All supported languages, in menu order.
    pub const ALL: [Language; 2] = [Language::En, Language::Nl];

    /// ISO 639-1 code, also the translation file stem (`en.json`).
    pub const fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "nl" => Ok(Language::Nl),
            _ => Err(ValidationError::NotAllowed {
                field: "language".to_string(),
                allowed: Language::ALL.iter().map(|l| l.code().to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Artwork
// =============================================================================

/// A description published in both gallery languages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LocalizedText {
    pub en: String,
    pub nl: String,
}

impl LocalizedText {
    /// Returns the variant for the given language.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Nl => &self.nl,
        }
    }
}

/// An artwork in the catalog.
///
/// ## Invariants
/// - `price_cents` is present only when the work is potentially purchasable
/// - `sold` and `not_for_sale` are independent flags; in practice at most one is set
///
/// ## Catalog files
/// Serialized with `priceCents`. Reading also accepts the older `price`
/// field in whole euros. One of the two must be present, `null` for an
/// unpriced work; a record with neither is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    /// Catalog identifier.
    pub id: i64,

    /// Display title.
    pub title: String,

    /// Creator name.
    pub artist: String,

    /// Description in English and Dutch.
    pub description: LocalizedText,

    /// Asking price in cents; `None` when the work has no price.
    pub price_cents: Option<i64>,

    pub sold: bool,

    pub not_for_sale: bool,

    /// Image file shown in the listing.
    pub main_image: String,

    /// Additional images shown on the detail page.
    pub detail_images: Vec<String>,

    /// Free-text dimension label, e.g. "40x50 cm".
    pub dimensions: String,

    /// Free-text material label, e.g. "Oil on canvas".
    pub material: String,
}

/// Artwork as found in catalog files.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtworkRecord {
    id: i64,
    title: String,
    artist: String,
    description: LocalizedText,
    #[serde(default, deserialize_with = "present")]
    price_cents: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    price: Option<Option<f64>>,
    #[serde(default)]
    sold: bool,
    #[serde(default)]
    not_for_sale: bool,
    main_image: String,
    #[serde(default)]
    detail_images: Vec<String>,
    dimensions: String,
    material: String,
}

/// Keeps an explicit `null` apart from a missing field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn euros_to_cents(euros: f64) -> Option<i64> {
    let cents = (euros * 100.0).round();
    (cents >= i64::MIN as f64 && cents < i64::MAX as f64).then_some(cents as i64)
}

impl TryFrom<ArtworkRecord> for Artwork {
    type Error = String;

    fn try_from(record: ArtworkRecord) -> Result<Self, Self::Error> {
        let price_cents = match (record.price_cents, record.price) {
            (Some(cents), _) => cents,
            (None, Some(None)) => None,
            (None, Some(Some(euros))) => Some(
                euros_to_cents(euros)
                    .ok_or_else(|| format!("artwork {}: price {} out of range", record.id, euros))?,
            ),
            (None, None) => {
                return Err(format!("artwork {}: missing field `priceCents`", record.id));
            }
        };

        Ok(Artwork {
            id: record.id,
            title: record.title,
            artist: record.artist,
            description: record.description,
            price_cents,
            sold: record.sold,
            not_for_sale: record.not_for_sale,
            main_image: record.main_image,
            detail_images: record.detail_images,
            dimensions: record.dimensions,
            material: record.material,
        })
    }
}

impl<'de> Deserialize<'de> for Artwork {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ArtworkRecord::deserialize(deserializer)?
            .try_into()
            .map_err(de::Error::custom)
    }
}

/// Availability of an artwork as shown to visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ArtworkStatus {
    Available,
    Sold,
    NotForSale,
}

impl ArtworkStatus {
    /// Translation key for the status label; `None` for available works.
    pub const fn translation_key(&self) -> Option<&'static str> {
        match self {
            ArtworkStatus::Available => None,
            ArtworkStatus::Sold => Some("artwork.sold"),
            ArtworkStatus::NotForSale => Some("artwork.notForSale"),
        }
    }
}

impl Artwork {
    /// Returns the price as Money.
    #[inline]
    pub fn price(&self) -> Option<Money> {
        self.price_cents.map(Money::from_cents)
    }

    /// Checks if a visitor can send a purchase inquiry for this work.
    pub fn is_purchasable(&self) -> bool {
        !self.sold && !self.not_for_sale && self.price_cents.is_some()
    }

    /// Availability shown next to the price.
    ///
    /// `sold` wins over `not_for_sale`; a work without a price that is not
    /// sold reads as not for sale.
    pub fn status(&self) -> ArtworkStatus {
        if self.sold {
            ArtworkStatus::Sold
        } else if self.not_for_sale || self.price_cents.is_none() {
            ArtworkStatus::NotForSale
        } else {
            ArtworkStatus::Available
        }
    }
}

// =============================================================================
// Filter Criteria
// =============================================================================

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub const fn new(min: Money, max: Money) -> Self {
        PriceRange { min, max }
    }

    /// Convenience constructor in whole currency units.
    pub const fn from_major(min: i64, max: i64) -> Self {
        PriceRange {
            min: Money::from_major(min),
            max: Money::from_major(max),
        }
    }

    /// Widened outward to whole currency units, the slider's resolution.
    pub const fn whole_units(&self) -> Self {
        PriceRange::from_major(self.min.floor_major(), self.max.ceil_major())
    }

    /// Inclusive on both ends.
    #[inline]
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

/// How the filtered view is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep catalog order.
    #[default]
    None,
    Title,
    Artist,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    /// Value used by the sort control (`""` for no sorting).
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::Title => "title",
            SortKey::Artist => "artist",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    #[inline]
    pub const fn is_active(&self) -> bool {
        !matches!(self, SortKey::None)
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(SortKey::None),
            "title" => Ok(SortKey::Title),
            "artist" => Ok(SortKey::Artist),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            _ => Err(ValidationError::NotAllowed {
                field: "sortBy".to_string(),
                allowed: ["title", "artist", "price-asc", "price-desc"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }),
        }
    }
}

/// The current value of every criterion dimension.
///
/// `FilterCriteria::default()` is the all-inactive state: the filtered view
/// equals the catalog in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Empty = inactive.
    pub search_term: String,

    /// `None` = inactive.
    pub price_range: Option<PriceRange>,

    /// Empty = inactive. OR semantics across entries.
    pub materials: BTreeSet<String>,

    /// Empty = inactive. OR semantics across entries.
    pub dimensions: BTreeSet<String>,

    pub sort_by: SortKey,
}

impl FilterCriteria {
    /// Checks if any dimension narrows or reorders the catalog.
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || self.price_range.is_some()
            || !self.materials.is_empty()
            || !self.dimensions.is_empty()
            || self.sort_by.is_active()
    }
}

/// One independently settable criterion dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    SearchTerm,
    PriceRange,
    Materials,
    Dimensions,
    SortBy,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::SearchTerm,
        Criterion::PriceRange,
        Criterion::Materials,
        Criterion::Dimensions,
        Criterion::SortBy,
    ];

    /// Position of this dimension in per-dimension bookkeeping arrays.
    #[inline]
    pub const fn index(&self) -> usize {
        match self {
            Criterion::SearchTerm => 0,
            Criterion::PriceRange => 1,
            Criterion::Materials => 2,
            Criterion::Dimensions => 3,
            Criterion::SortBy => 4,
        }
    }
}

// =============================================================================
// Filtered View
// =============================================================================

/// The derived, ordered result of applying criteria to a catalog.
///
/// Valid until the next recomputation. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FilteredView {
    items: Vec<Artwork>,
}

impl FilteredView {
    pub(crate) fn new(items: Vec<Artwork>) -> Self {
        FilteredView { items }
    }

    pub fn items(&self) -> &[Artwork] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Artwork> {
        self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Artwork ids in view order.
    pub fn ids(&self) -> Vec<i64> {
        self.items.iter().map(|a| a.id).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(price_cents: Option<i64>, sold: bool, not_for_sale: bool) -> Artwork {
        Artwork {
            id: 1,
            title: "Sunny Days".to_string(),
            artist: "Scheve Schilder".to_string(),
            description: LocalizedText::default(),
            price_cents,
            sold,
            not_for_sale,
            main_image: "artwork1.png".to_string(),
            detail_images: Vec::new(),
            dimensions: "40x50 cm".to_string(),
            material: "Acrylic on canvas".to_string(),
        }
    }

    #[test]
    fn test_status_and_purchasable() {
        let available = artwork(Some(15000), false, false);
        assert_eq!(available.status(), ArtworkStatus::Available);
        assert!(available.is_purchasable());

        let sold = artwork(Some(20000), true, false);
        assert_eq!(sold.status(), ArtworkStatus::Sold);
        assert!(!sold.is_purchasable());

        let unpriced = artwork(None, false, false);
        assert_eq!(unpriced.status(), ArtworkStatus::NotForSale);
        assert!(!unpriced.is_purchasable());
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("".parse::<SortKey>().unwrap(), SortKey::None);
        assert_eq!("price-asc".parse::<SortKey>().unwrap(), SortKey::PriceAsc);
        assert_eq!("artist".parse::<SortKey>().unwrap(), SortKey::Artist);
        assert!("cheapest".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_key_serde_matches_control_values() {
        let json = serde_json::to_string(&SortKey::PriceDesc).unwrap();
        assert_eq!(json, "\"price-desc\"");
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("NL".parse::<Language>().unwrap(), Language::Nl);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_default_criteria_is_inactive() {
        assert!(!FilterCriteria::default().is_active());

        let criteria = FilterCriteria {
            sort_by: SortKey::Title,
            ..Default::default()
        };
        assert!(criteria.is_active());
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange::from_major(140, 160);
        assert!(range.contains(Money::from_major(140)));
        assert!(range.contains(Money::from_major(160)));
        assert!(!range.contains(Money::from_cents(16001)));

        let odd = PriceRange::new(Money::from_cents(14950), Money::from_cents(19999));
        assert_eq!(odd.whole_units(), PriceRange::from_major(149, 200));
    }

    #[test]
    fn test_artwork_json_shape() {
        let json = r#"{
            "id": 2,
            "title": "Amsterdam Sunset",
            "artist": "Scheve Schilder",
            "description": { "en": "A sunset.", "nl": "Een zonsondergang." },
            "priceCents": null,
            "notForSale": true,
            "mainImage": "artwork2.png",
            "dimensions": "60x80 cm",
            "material": "Oil on wood panel"
        }"#;
        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.price(), None);
        assert!(artwork.not_for_sale);
        assert!(!artwork.sold);
        assert!(artwork.detail_images.is_empty());
        assert_eq!(artwork.description.get(Language::Nl), "Een zonsondergang.");
    }

    fn record(price_field: &str) -> String {
        format!(
            r#"{{
                "id": 1,
                "title": "Sunny Days",
                "artist": "Scheve Schilder",
                "description": {{ "en": "Bright.", "nl": "Zonnig." }},
                {}
                "mainImage": "artwork1.png",
                "dimensions": "40x50 cm",
                "material": "Acrylic on canvas"
            }}"#,
            price_field
        )
    }

    #[test]
    fn test_whole_euro_price_field() {
        let artwork: Artwork = serde_json::from_str(&record(r#""price": 150,"#)).unwrap();
        assert_eq!(artwork.price_cents, Some(15000));
        assert!(artwork.is_purchasable());

        let artwork: Artwork = serde_json::from_str(&record(r#""price": 149.5,"#)).unwrap();
        assert_eq!(artwork.price_cents, Some(14950));

        let artwork: Artwork = serde_json::from_str(&record(r#""price": null,"#)).unwrap();
        assert_eq!(artwork.price_cents, None);

        let artwork: Artwork =
            serde_json::from_str(&record(r#""priceCents": 12345, "price": 150,"#)).unwrap();
        assert_eq!(artwork.price_cents, Some(12345));
    }

    #[test]
    fn test_missing_price_is_rejected() {
        let err = serde_json::from_str::<Artwork>(&record("")).unwrap_err();
        assert!(err.to_string().contains("priceCents"));

        assert!(serde_json::from_str::<Artwork>(&record(r#""price": 1e300,"#)).is_err());
    }

    #[test]
    fn test_serialized_artwork_reads_back() {
        let json = serde_json::to_string(&crate::catalog::fallback_catalog()).unwrap();
        let parsed: Vec<Artwork> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, crate::catalog::fallback_catalog());
    }
}
