// Municode - core/aggregate.rs
//
// Summary statistics over a (possibly filtered) record sequence.

use crate::core::filter::FilterMode;
use crate::core::model::Record;

/// Count and per-capita means of a record sequence.
///
/// Averages are `None` when there are no records; the display layer
/// renders that as a placeholder instead of a number.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub total: usize,
    pub avg_revenue: Option<f64>,
    pub avg_profit: Option<f64>,
    pub avg_investment: Option<f64>,
}

impl Stats {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Compute [`Stats`] over any sequence of record references.
pub fn aggregate<'a, I>(records: I) -> Stats
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut total = 0usize;
    let (mut revenue, mut profit, mut investment) = (0.0_f64, 0.0_f64, 0.0_f64);
    for r in records {
        total += 1;
        revenue += r.revenue_per_capita;
        profit += r.profit_per_capita;
        investment += r.investment_per_capita;
    }

    if total == 0 {
        return Stats::default();
    }

    let n = total as f64;
    Stats {
        total,
        avg_revenue: Some(revenue / n),
        avg_profit: Some(profit / n),
        avg_investment: Some(investment / n),
    }
}

/// [`Stats`] for every filter mode side by side, in [`FilterMode::all`] order.
pub fn aggregate_by_mode(records: &[Record]) -> Vec<(FilterMode, Stats)> {
    FilterMode::all()
        .iter()
        .map(|&mode| (mode, aggregate(records.iter().filter(|r| mode.matches(r)))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(revenue: f64, profit: f64, investment: f64) -> Record {
        Record {
            revenue_per_capita: revenue,
            profit_per_capita: profit,
            investment_per_capita: investment,
            ..Default::default()
        }
    }

    #[test]
    fn test_mean_revenue() {
        let records = vec![
            make_record(100.0, 10.0, 1.0),
            make_record(200.0, 20.0, 2.0),
            make_record(300.0, 30.0, 4.5),
        ];
        let stats = aggregate(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.avg_revenue, Some(200.0));
        assert_eq!(stats.avg_profit, Some(20.0));
        assert_eq!(stats.avg_investment, Some(2.5));
    }

    #[test]
    fn test_empty_input_is_defined() {
        let stats = aggregate(std::iter::empty::<&Record>());
        assert_eq!(stats.total, 0);
        assert!(stats.is_empty());
        assert_eq!(stats.avg_revenue, None);
        assert_eq!(stats.avg_profit, None);
        assert_eq!(stats.avg_investment, None);
    }

    #[test]
    fn test_accepts_filtered_references() {
        let records = vec![make_record(10.0, 0.0, 0.0), make_record(30.0, 0.0, 0.0)];
        let refs: Vec<&Record> = records.iter().collect();
        let stats = aggregate(refs.iter().copied());
        assert_eq!(stats.avg_revenue, Some(20.0));
    }

    #[test]
    fn test_aggregate_by_mode_splits_groups() {
        let mut suburb = make_record(300.0, 30.0, 3.0);
        suburb.is_suburb = true;
        let mut arctic = make_record(100.0, 10.0, 1.0);
        arctic.is_arctic = true;
        let plain = make_record(200.0, 20.0, 2.0);
        let records = vec![suburb, arctic, plain];

        let by_mode = aggregate_by_mode(&records);
        let modes: Vec<FilterMode> = by_mode.iter().map(|(m, _)| *m).collect();
        assert_eq!(modes, FilterMode::all().to_vec());

        assert_eq!(by_mode[0].1.total, 3);
        assert_eq!(by_mode[0].1.avg_revenue, Some(200.0));
        assert_eq!(by_mode[1].1.total, 1);
        assert_eq!(by_mode[1].1.avg_revenue, Some(300.0));
        assert_eq!(by_mode[2].1.total, 1);
        assert_eq!(by_mode[2].1.avg_profit, Some(10.0));
    }

    #[test]
    fn test_aggregate_by_mode_empty_group_has_no_averages() {
        let records = vec![make_record(50.0, 5.0, 0.5)];
        let by_mode = aggregate_by_mode(&records);
        assert_eq!(by_mode[0].1.total, 1);
        assert!(by_mode[1].1.is_empty());
        assert_eq!(by_mode[2].1.avg_investment, None);
    }
}
