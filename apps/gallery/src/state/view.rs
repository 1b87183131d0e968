//! # Filter Engine
//!
//! Joins the latest catalog with the latest criteria and recomputes the
//! filtered view whenever either changes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   CatalogState ──► watch<Option<Arc<CatalogSnapshot>>> ──┐              │
//! │                                                          ├─► select!    │
//! │   CriteriaStore ──► watch<CriteriaSnapshot> ─────────────┘      │       │
//! │                                                                 ▼       │
//! │                                        filter::apply(catalog, criteria) │
//! │                                                                 │       │
//! │                                                                 ▼       │
//! │                                                 ViewSubscription::next  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Recomputation is synchronous and pure. Nothing is emitted until the
//! first catalog has been published. Each subscription owns its receivers,
//! so a new subscriber starts from the current values.

use std::sync::Arc;

use futures_util::stream::{self, Stream};
use tokio::sync::watch;
use tracing::debug;

use atelier_core::{filter, Facets, FilterCriteria, FilteredView};

use super::catalog::{CatalogSnapshot, CatalogState};
use super::criteria::{CriteriaSnapshot, CriteriaStore};

/// A filtered view together with the inputs it was computed from.
#[derive(Debug, Clone)]
pub struct ViewFrame {
    pub catalog: Arc<CatalogSnapshot>,
    pub criteria: FilterCriteria,
    pub view: FilteredView,
}

/// Produces filtered views from catalog and criteria state.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    catalog: CatalogState,
    criteria: CriteriaStore,
}

impl FilterEngine {
    pub fn new(catalog: CatalogState, criteria: CriteriaStore) -> Self {
        FilterEngine { catalog, criteria }
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn criteria(&self) -> &CriteriaStore {
        &self.criteria
    }

    /// The view for the current catalog and criteria, or `None` before the
    /// first catalog.
    pub fn current(&self) -> Option<FilteredView> {
        self.frame().map(|frame| frame.view)
    }

    /// Like [`FilterEngine::current`], keeping the catalog snapshot and
    /// criteria the view was built from.
    pub fn frame(&self) -> Option<ViewFrame> {
        let catalog = self.catalog.current()?;
        let criteria = self.criteria.snapshot();
        let view = filter::apply(&catalog.artworks, &criteria);
        Some(ViewFrame { catalog, criteria, view })
    }

    /// Facets of the full catalog, independent of the active criteria.
    pub fn facets(&self) -> Option<Facets> {
        self.catalog
            .current()
            .map(|snapshot| Facets::derive(&snapshot.artworks))
    }

    pub fn subscribe(&self) -> ViewSubscription {
        ViewSubscription {
            catalog: self.catalog.subscribe(),
            criteria: self.criteria.subscribe(),
            primed: false,
        }
    }
}

/// A live sequence of filtered views.
#[derive(Debug)]
pub struct ViewSubscription {
    catalog: watch::Receiver<Option<Arc<CatalogSnapshot>>>,
    criteria: watch::Receiver<CriteriaSnapshot>,
    primed: bool,
}

impl ViewSubscription {
    /// The next view.
    ///
    /// The first call resolves immediately with the view for the current
    /// values if a catalog exists. Later calls wait for a change to either
    /// input. Changes arriving together produce one view. Returns `None`
    /// once the catalog or criteria state has been dropped.
    pub async fn next(&mut self) -> Option<FilteredView> {
        if !self.primed {
            self.primed = true;
            if let Some(view) = self.recompute() {
                return Some(view);
            }
        }

        loop {
            let open = tokio::select! {
                res = self.catalog.changed() => res.is_ok(),
                res = self.criteria.changed() => res.is_ok(),
            };
            if !open {
                return None;
            }

            if let Some(view) = self.recompute() {
                return Some(view);
            }
        }
    }

    fn recompute(&mut self) -> Option<FilteredView> {
        let criteria = self.criteria.borrow_and_update().criteria.clone();
        let catalog = self.catalog.borrow_and_update().clone()?;

        let view = filter::apply(&catalog.artworks, &criteria);
        debug!(
            catalog = catalog.artworks.len(),
            visible = view.len(),
            "Filtered view recomputed"
        );
        Some(view)
    }

    /// Adapts the subscription into a `Stream`.
    pub fn into_stream(self) -> impl Stream<Item = FilteredView> {
        stream::unfold(self, |mut sub| async move {
            sub.next().await.map(|view| (view, sub))
        })
    }
}
