// Municode - core/filter.rs
//
// View-mode filtering of municipality records.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::Record;
use std::str::FromStr;

/// Which municipalities the dashboard is currently showing.
///
/// The modes are mutually exclusive views, not AND-combined filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    All,
    Suburb,
    Arctic,
}

impl FilterMode {
    /// Returns all variants in display order.
    pub fn all() -> &'static [FilterMode] {
        &[FilterMode::All, FilterMode::Suburb, FilterMode::Arctic]
    }

    /// Human-readable label for filter buttons.
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "Все",
            FilterMode::Suburb => "Пригороды",
            FilterMode::Arctic => "Арктика",
        }
    }

    /// Keyword used on the command line and in config.toml.
    pub fn keyword(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Suburb => "suburb",
            FilterMode::Arctic => "arctic",
        }
    }

    /// Whether a record belongs in this view. Depends on the record alone.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Suburb => record.is_suburb,
            FilterMode::Arctic => record.is_arctic,
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterMode::all()
            .iter()
            .copied()
            .find(|m| m.keyword().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown filter mode '{s}' (expected all, suburb, or arctic)"))
    }
}

/// Indices of records matching `mode`, in source order.
///
/// Returning indices avoids copying records; the caller resolves them
/// against the same slice.
pub fn filter_indices(records: &[Record], mode: FilterMode) -> Vec<usize> {
    if mode == FilterMode::All {
        return (0..records.len()).collect();
    }
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| mode.matches(r))
        .map(|(idx, _)| idx)
        .collect()
}

/// Records matching `mode`, in source order. The source slice is untouched.
pub fn filter_records(records: &[Record], mode: FilterMode) -> Vec<&Record> {
    records.iter().filter(|r| mode.matches(r)).collect()
}

/// Number of records each mode would show, over the full dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeCounts {
    pub all: usize,
    pub suburb: usize,
    pub arctic: usize,
}

impl ModeCounts {
    pub fn count(records: &[Record]) -> Self {
        records.iter().fold(
            ModeCounts {
                all: records.len(),
                ..Default::default()
            },
            |mut acc, r| {
                acc.suburb += usize::from(r.is_suburb);
                acc.arctic += usize::from(r.is_arctic);
                acc
            },
        )
    }

    pub fn get(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.all,
            FilterMode::Suburb => self.suburb,
            FilterMode::Arctic => self.arctic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: &str, is_suburb: bool, is_arctic: bool) -> Record {
        Record {
            name: name.to_string(),
            is_suburb,
            is_arctic,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            make_record("a", true, false),
            make_record("b", false, true),
            make_record("c", true, true),
            make_record("d", false, false),
        ]
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let records = sample();
        assert_eq!(filter_indices(&records, FilterMode::All), vec![0, 1, 2, 3]);
        let names: Vec<_> = filter_records(&records, FilterMode::All)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_suburb_and_arctic() {
        let records = sample();
        assert_eq!(filter_indices(&records, FilterMode::Suburb), vec![0, 2]);
        assert_eq!(filter_indices(&records, FilterMode::Arctic), vec![1, 2]);
    }

    #[test]
    fn test_idempotent_and_non_destructive() {
        let records = sample();
        let before = records.clone();
        let first = filter_indices(&records, FilterMode::Arctic);
        let second = filter_indices(&records, FilterMode::Arctic);
        assert_eq!(first, second);
        assert_eq!(records, before);
    }

    #[test]
    fn test_each_record_classified_by_own_flags() {
        let records = sample();
        let suburb = filter_indices(&records, FilterMode::Suburb);
        let arctic = filter_indices(&records, FilterMode::Arctic);
        for (idx, r) in records.iter().enumerate() {
            assert_eq!(suburb.contains(&idx), r.is_suburb);
            assert_eq!(arctic.contains(&idx), r.is_arctic);
            let neither = !suburb.contains(&idx) && !arctic.contains(&idx);
            assert_eq!(neither, !r.is_suburb && !r.is_arctic);
        }
    }

    #[test]
    fn test_mode_counts() {
        let counts = ModeCounts::count(&sample());
        assert_eq!(
            counts,
            ModeCounts {
                all: 4,
                suburb: 2,
                arctic: 2
            }
        );
        assert_eq!(counts.get(FilterMode::Arctic), 2);
        assert_eq!(ModeCounts::count(&[]), ModeCounts::default());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("suburb".parse::<FilterMode>(), Ok(FilterMode::Suburb));
        assert_eq!(" ARCTIC ".parse::<FilterMode>(), Ok(FilterMode::Arctic));
        assert!("rural".parse::<FilterMode>().is_err());
    }
}
