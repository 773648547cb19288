// Municode - core/view.rs
//
// Render-ready view model: the filtered records plus their aggregates.
// This is the only shape the presentation layer reads.

use crate::core::aggregate::{self, Stats};
use crate::core::filter::{self, FilterMode, ModeCounts};
use crate::core::model::Record;

/// Filtered-and-aggregated snapshot of the dataset for one filter mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel<'a> {
    /// Active filter mode.
    pub mode: FilterMode,

    /// Records matching `mode`, in source order.
    pub records: Vec<&'a Record>,

    /// Aggregates over `records`.
    pub stats: Stats,

    /// Per-mode counts over the full dataset, for labelling filter controls.
    pub mode_counts: ModeCounts,

    /// False until the dataset load has resolved (successfully or not).
    pub loaded: bool,
}

impl<'a> ViewModel<'a> {
    /// Assemble a view model directly from the full dataset.
    pub fn build(records: &'a [Record], mode: FilterMode) -> Self {
        let filtered = filter::filter_records(records, mode);
        let stats = aggregate::aggregate(filtered.iter().copied());
        Self {
            mode,
            records: filtered,
            stats,
            mode_counts: ModeCounts::count(records),
            loaded: true,
        }
    }

    /// The first `limit` records, for table previews.
    pub fn preview(&self, limit: usize) -> &[&'a Record] {
        &self.records[..self.records.len().min(limit)]
    }

    /// Whether the preview hides some records.
    pub fn is_truncated(&self, limit: usize) -> bool {
        self.records.len() > limit
    }
}
