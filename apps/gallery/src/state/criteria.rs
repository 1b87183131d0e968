//! # Criteria Store
//!
//! The single mutable piece of gallery state: the current value of every
//! filter dimension.
//!
//! ## Notification Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CriteriaStore                                    │
//! │                                                                         │
//! │  set_search_term("oil") ──┐                                             │
//! │  set_price_range(..)   ───┤    watch<CriteriaSnapshot>                  │
//! │  set_materials(..)     ───┼──►  criteria:  FilterCriteria               │
//! │  set_dimensions(..)    ───┤     revisions: [search, price, materials,   │
//! │  set_sort_by(..)       ───┤                 dimensions, sort]           │
//! │  reset()               ───┘                                             │
//! │                                   │                                     │
//! │             ┌─────────────────────┼─────────────────────┐               │
//! │             ▼                     ▼                     ▼               │
//! │        subscribe()         watch_dimension(d)        stream()           │
//! │     every snapshot       only when d's revision   WatchStream of        │
//! │                              moved                 snapshots            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every write replaces the whole snapshot in one send, so `reset()` is seen
//! by combined subscribers as a single update. Setters always bump their
//! dimension's revision, even when the value is unchanged.

use std::collections::BTreeSet;
use std::sync::Arc;

use atelier_core::controls;
use atelier_core::{Criterion, FilterCriteria, PriceRange, SortKey};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::debug;

/// Criteria plus a per-dimension write counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaSnapshot {
    pub criteria: FilterCriteria,
    revisions: [u64; Criterion::ALL.len()],
}

impl CriteriaSnapshot {
    /// Number of writes to `criterion` so far.
    pub fn revision(&self, criterion: Criterion) -> u64 {
        self.revisions[criterion.index()]
    }
}

/// Shared handle to the current filter criteria.
///
/// Cloning is cheap; clones write to the same store.
#[derive(Debug, Clone)]
pub struct CriteriaStore {
    tx: Arc<watch::Sender<CriteriaSnapshot>>,
}

impl Default for CriteriaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CriteriaStore {
    /// A store with every dimension inactive.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(CriteriaSnapshot::default());
        CriteriaStore { tx: Arc::new(tx) }
    }

    fn update(&self, criterion: Criterion, apply: impl FnOnce(&mut FilterCriteria)) {
        self.tx.send_modify(|snapshot| {
            apply(&mut snapshot.criteria);
            snapshot.revisions[criterion.index()] += 1;
        });
        debug!(?criterion, "Criteria updated");
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        self.update(Criterion::SearchTerm, |c| c.search_term = term);
    }

    pub fn set_price_range(&self, range: Option<PriceRange>) {
        self.update(Criterion::PriceRange, |c| c.price_range = range);
    }

    pub fn set_materials(&self, materials: BTreeSet<String>) {
        self.update(Criterion::Materials, |c| c.materials = materials);
    }

    pub fn set_dimensions(&self, dimensions: BTreeSet<String>) {
        self.update(Criterion::Dimensions, |c| c.dimensions = dimensions);
    }

    pub fn set_sort_by(&self, sort_by: SortKey) {
        self.update(Criterion::SortBy, |c| c.sort_by = sort_by);
    }

    /// Checks or unchecks one material, as one write.
    pub fn toggle_material(&self, material: &str, checked: bool) {
        self.update(Criterion::Materials, |c| {
            c.materials = controls::toggle(&c.materials, material, checked)
        });
    }

    /// Checks or unchecks one dimension label, as one write.
    pub fn toggle_dimension(&self, dimension: &str, checked: bool) {
        self.update(Criterion::Dimensions, |c| {
            c.dimensions = controls::toggle(&c.dimensions, dimension, checked)
        });
    }

    /// Clears every dimension in a single update.
    pub fn reset(&self) {
        self.tx.send_modify(|snapshot| {
            snapshot.criteria = FilterCriteria::default();
            for revision in snapshot.revisions.iter_mut() {
                *revision += 1;
            }
        });
        debug!("Criteria reset");
    }

    /// Current criteria.
    pub fn snapshot(&self) -> FilterCriteria {
        self.tx.borrow().criteria.clone()
    }

    /// Receiver of every snapshot; the current one counts as seen.
    pub fn subscribe(&self) -> watch::Receiver<CriteriaSnapshot> {
        self.tx.subscribe()
    }

    /// Notifications for one dimension only.
    pub fn watch_dimension(&self, criterion: Criterion) -> DimensionWatch {
        let rx = self.tx.subscribe();
        let seen = rx.borrow().revision(criterion);
        DimensionWatch { rx, criterion, seen }
    }

    /// Stream of snapshots, starting with the current one.
    pub fn stream(&self) -> WatchStream<CriteriaSnapshot> {
        WatchStream::new(self.tx.subscribe())
    }
}

/// Waits for writes to a single criterion dimension.
#[derive(Debug)]
pub struct DimensionWatch {
    rx: watch::Receiver<CriteriaSnapshot>,
    criterion: Criterion,
    seen: u64,
}

impl DimensionWatch {
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Resolves with the criteria after the next write to this dimension.
    ///
    /// Writes that land before the watcher polls are coalesced into one
    /// notification carrying the latest value. Returns `None` once every
    /// store handle is dropped.
    pub async fn changed(&mut self) -> Option<FilterCriteria> {
        loop {
            self.rx.changed().await.ok()?;

            let snapshot = self.rx.borrow_and_update();
            let revision = snapshot.revision(self.criterion);
            if revision != self.seen {
                self.seen = revision;
                return Some(snapshot.criteria.clone());
            }
        }
    }
}
