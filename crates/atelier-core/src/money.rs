//! # Money
//!
//! Asking prices as integer cents.
//!
//! Catalog files and the database store cents; the price slider works in
//! whole euros. `Money` is the bridge, and the only place the factor 100
//! appears.
//!
//! ```text
//!   priceCents: 15000  ──Money::from_cents──►  Money(15000)  ──Display──►  €150.00
//!   slider:       150  ──Money::from_major──►  Money(15000)
//!   Money(15050)  ──floor_major()──► 150      ceil_major() ──► 151
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

const CENTS_PER_MAJOR: i64 = 100;

/// An amount in euro cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Whole euros, as set on the price slider.
    ///
    /// ## Example
    /// ```rust
    /// use atelier_core::Money;
    ///
    /// assert_eq!(Money::from_major(150), Money::from_cents(15000));
    /// ```
    ///
    /// Saturates at the `i64` cent range; see [`Money::checked_from_major`].
    pub const fn from_major(major: i64) -> Self {
        Money(major.saturating_mul(CENTS_PER_MAJOR))
    }

    /// Whole euros, or `None` when the amount has no cent representation.
    pub const fn checked_from_major(major: i64) -> Option<Self> {
        match major.checked_mul(CENTS_PER_MAJOR) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole euros, truncated toward zero.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / CENTS_PER_MAJOR
    }

    /// Largest whole-euro amount not above this one.
    pub const fn floor_major(&self) -> i64 {
        self.0.div_euclid(CENTS_PER_MAJOR)
    }

    /// Smallest whole-euro amount not below this one.
    pub const fn ceil_major(&self) -> i64 {
        let floor = self.floor_major();
        if self.0.rem_euclid(CENTS_PER_MAJOR) == 0 {
            floor
        } else {
            floor + 1
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = CENTS_PER_MAJOR as u64;
        write!(f, "{}€{}.{:02}", sign, abs / per, abs % per)
    }
}
