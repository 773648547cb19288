// Municode - app/dashboard.rs
//
// Dashboard state: the loaded dataset, the active filter mode, and the
// derived filter result and aggregates. Independent of any renderer, so
// the whole pipeline can be driven from tests.

use crate::core::aggregate::{self, Stats};
use crate::core::filter::{self, FilterMode, ModeCounts};
use crate::core::model::Record;
use crate::core::view::ViewModel;

/// Owns the dataset and the one piece of mutable UI state, the filter mode.
#[derive(Debug, Default)]
pub struct Dashboard {
    /// Records in source order. Replaced wholesale on load, never edited.
    records: Vec<Record>,

    /// Active filter mode.
    mode: FilterMode,

    /// Indices into `records` matching `mode`.
    filtered_indices: Vec<usize>,

    /// Aggregates over the filtered records.
    stats: Stats,

    /// Counts for each mode over the full dataset.
    mode_counts: ModeCounts,

    /// Whether a load has completed.
    loaded: bool,
}

impl Dashboard {
    /// Empty, not-yet-loaded dashboard showing all records.
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Dashboard over an already-loaded dataset.
    pub fn with_records(records: Vec<Record>, mode: FilterMode) -> Self {
        let mut dashboard = Self::new(mode);
        dashboard.set_records(records);
        dashboard
    }

    /// Install a freshly loaded dataset and recompute. The filter mode is kept.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.mode_counts = ModeCounts::count(&self.records);
        self.loaded = true;
        self.recompute();
    }

    /// Change the active filter mode and recompute.
    pub fn set_filter(&mut self, mode: FilterMode) {
        if mode != self.mode {
            tracing::debug!(from = %self.mode, to = %mode, "Filter mode changed");
        }
        self.mode = mode;
        self.recompute();
    }

    pub fn filter(&self) -> FilterMode {
        self.mode
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn mode_counts(&self) -> ModeCounts {
        self.mode_counts
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Current view model, borrowing from the held dataset.
    pub fn view_model(&self) -> ViewModel<'_> {
        ViewModel {
            mode: self.mode,
            records: self
                .filtered_indices
                .iter()
                .filter_map(|&idx| self.records.get(idx))
                .collect(),
            stats: self.stats,
            mode_counts: self.mode_counts,
            loaded: self.loaded,
        }
    }

    fn recompute(&mut self) {
        self.filtered_indices = filter::filter_indices(&self.records, self.mode);
        self.stats = aggregate::aggregate(self.filtered_indices.iter().map(|&i| &self.records[i]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: &str, is_suburb: bool, is_arctic: bool, revenue: f64) -> Record {
        Record {
            name: name.to_string(),
            is_suburb,
            is_arctic,
            revenue_per_capita: revenue,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            make_record("Кола", true, true, 100.0),
            make_record("Тверь", true, false, 200.0),
            make_record("Норильск", false, true, 600.0),
        ]
    }

    #[test]
    fn test_new_dashboard_is_empty_and_unloaded() {
        let dashboard = Dashboard::new(FilterMode::All);
        let vm = dashboard.view_model();
        assert!(!vm.loaded);
        assert!(vm.records.is_empty());
        assert_eq!(vm.stats.total, 0);
        assert_eq!(vm.stats.avg_revenue, None);
    }

    #[test]
    fn test_set_filter_recomputes() {
        let mut dashboard = Dashboard::with_records(sample(), FilterMode::All);
        assert_eq!(dashboard.stats().total, 3);
        assert_eq!(dashboard.stats().avg_revenue, Some(300.0));

        dashboard.set_filter(FilterMode::Suburb);
        let vm = dashboard.view_model();
        let names: Vec<_> = vm.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Кола", "Тверь"]);
        assert_eq!(vm.stats.avg_revenue, Some(150.0));

        dashboard.set_filter(FilterMode::Arctic);
        assert_eq!(dashboard.stats().avg_revenue, Some(350.0));
        assert_eq!(dashboard.records().len(), 3, "dataset untouched by filtering");
    }

    #[test]
    fn test_view_model_matches_direct_build() {
        let records = sample();
        let mut dashboard = Dashboard::with_records(records.clone(), FilterMode::All);
        for &mode in FilterMode::all() {
            dashboard.set_filter(mode);
            assert_eq!(dashboard.view_model(), ViewModel::build(&records, mode));
        }
    }

    #[test]
    fn test_reload_keeps_mode() {
        let mut dashboard = Dashboard::with_records(sample(), FilterMode::Arctic);
        dashboard.set_records(vec![make_record("Тула", false, false, 5.0)]);
        assert_eq!(dashboard.filter(), FilterMode::Arctic);
        assert_eq!(dashboard.stats().total, 0);
        assert_eq!(dashboard.mode_counts().all, 1);
    }
}
