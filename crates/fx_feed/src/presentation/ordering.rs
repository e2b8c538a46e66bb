//! User-chosen row order.
//!
//! The order is persisted by the view layer as a small versioned JSON
//! document under [`ROW_ORDER_STORAGE_KEY`]. A document with a different
//! version, or one that fails to parse, is discarded in favour of the
//! default order.

use fx_core::types::PairId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Current document version.
pub const ROW_ORDER_VERSION: u32 = 1;

/// Storage key used for the rate table order.
pub const ROW_ORDER_STORAGE_KEY: &str = "rates-row-order";

/// Persisted form of a [`RowOrder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowOrderDocument {
    /// Schema version
    pub version: u32,
    /// Pair ids in display order
    pub order: Vec<PairId>,
}

/// Custom row order; `None` keeps rows in their natural order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowOrder {
    custom: Option<Vec<PairId>>,
}

impl RowOrder {
    /// Order from an explicit id list.
    pub fn custom(order: Vec<PairId>) -> Self {
        Self {
            custom: Some(order),
        }
    }

    /// Returns true if a custom order is set.
    pub fn is_custom(&self) -> bool {
        self.custom.is_some()
    }

    /// Saved id list, if any.
    pub fn saved(&self) -> Option<&[PairId]> {
        self.custom.as_deref()
    }

    /// Drop the custom order.
    pub fn reset(&mut self) {
        self.custom = None;
    }

    fn rank(&self, id: &PairId) -> usize {
        self.custom
            .as_ref()
            .and_then(|order| order.iter().position(|o| o == id))
            .unwrap_or(usize::MAX)
    }

    /// Sort `rows` by the saved order.
    ///
    /// Rows whose id is not in the saved order go last, keeping their
    /// relative order.
    pub fn sort_rows<T, F>(&self, rows: &mut [T], id_of: F)
    where
        F: Fn(&T) -> &PairId,
    {
        if self.custom.is_some() {
            rows.sort_by_key(|row| self.rank(id_of(row)));
        }
    }

    /// `ids` in display order.
    pub fn ordered_ids(&self, ids: &[PairId]) -> Vec<PairId> {
        let mut out = ids.to_vec();
        self.sort_rows(&mut out, |id| id);
        out
    }

    /// Move `source` to the position of `target` within the visible order
    /// `current` and save the result.
    ///
    /// Returns false, leaving the order untouched, when either id is not
    /// visible or both are the same.
    ///
    /// ```
    /// use fx_core::types::PairId;
    /// use fx_feed::presentation::RowOrder;
    ///
    /// let ids: Vec<PairId> = ["A", "B", "C", "D"].into_iter().map(PairId::from).collect();
    /// let mut order = RowOrder::default();
    /// assert!(order.move_row(&ids, &ids[0], &ids[2]));
    /// let got: Vec<String> = order.ordered_ids(&ids).iter().map(|id| id.to_string()).collect();
    /// assert_eq!(got, ["B", "C", "A", "D"]);
    /// ```
    pub fn move_row(&mut self, current: &[PairId], source: &PairId, target: &PairId) -> bool {
        if source == target {
            return false;
        }
        let (Some(from), Some(to)) = (
            current.iter().position(|id| id == source),
            current.iter().position(|id| id == target),
        ) else {
            return false;
        };

        let mut order = current.to_vec();
        let moved = order.remove(from);
        order.insert(to, moved);
        self.custom = Some(order);
        true
    }

    /// Persisted document, or `None` for the default order.
    pub fn to_document(&self) -> Option<RowOrderDocument> {
        self.custom.as_ref().map(|order| RowOrderDocument {
            version: ROW_ORDER_VERSION,
            order: order.clone(),
        })
    }

    /// Serialise to JSON; the default order serialises to `None`.
    pub fn to_json(&self) -> Option<String> {
        self.to_document()
            .and_then(|doc| serde_json::to_string(&doc).ok())
    }

    /// Restore from JSON, falling back to the default order.
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str::<RowOrderDocument>(text) {
            Ok(doc) if doc.version == ROW_ORDER_VERSION => Self::custom(doc.order),
            Ok(doc) => {
                debug!(version = doc.version, "Discarding row order with stale version");
                Self::default()
            }
            Err(e) => {
                debug!(error = %e, "Discarding unreadable row order");
                Self::default()
            }
        }
    }
}
