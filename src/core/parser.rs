// Municode - core/parser.rs
//
// Best-effort CSV parsing of the municipal dataset into typed records.
// Core layer: accepts text, never touches the filesystem directly.
//
// The format is deliberately minimal: a header line, then one record per
// line, fields split on a bare comma. Quoted fields are not supported, so
// no field may contain a literal comma. Parsing never fails; a cell that
// is missing or malformed takes its column's default value.

use crate::core::model::{Coercion, Column, Record};
use crate::util::constants::CSV_DELIMITER;
use regex::Regex;
use std::sync::OnceLock;

/// Parse the full dataset text into records, one per data line, in source order.
///
/// Leading byte-order mark and surrounding whitespace are discarded before
/// splitting. Header cells that do not name a known column are ignored,
/// as are the cells beneath them.
pub fn parse_csv(text: &str) -> Vec<Record> {
    let text = text.trim_start_matches('\u{feff}').trim();
    if text.is_empty() {
        tracing::debug!("Dataset text is empty");
        return Vec::new();
    }

    let mut lines = text.lines();
    let header_line = lines.next().unwrap_or_default();
    let columns = resolve_header(header_line);

    let records: Vec<Record> = lines.map(|line| parse_line(line, &columns)).collect();

    tracing::debug!(
        records = records.len(),
        columns = columns.iter().flatten().count(),
        "Parsed dataset"
    );
    records
}

/// Map each header cell to the column it names, positionally.
fn resolve_header(line: &str) -> Vec<Option<Column>> {
    line.split(CSV_DELIMITER)
        .map(|cell| {
            let cell = cell.trim();
            let column = Column::from_header(cell);
            if column.is_none() {
                tracing::debug!(header = cell, "Ignoring unrecognised column");
            }
            column
        })
        .collect()
}

fn parse_line(line: &str, columns: &[Option<Column>]) -> Record {
    let cells: Vec<&str> = line.split(CSV_DELIMITER).collect();
    let mut builder = RecordBuilder::default();
    for (i, column) in columns.iter().enumerate() {
        if let Some(column) = column {
            builder.set(*column, cells.get(i).copied());
        }
    }
    builder.build()
}

// =============================================================================
// Record builder
// =============================================================================

/// Accumulates the typed fields of one row.
///
/// Fields that are never set keep their default value. Setting a column
/// twice (a duplicated header) keeps the later cell.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Coerce `raw` according to `column`'s rule and store it.
    /// `None` means the row had no cell at this position.
    pub fn set(&mut self, column: Column, raw: Option<&str>) -> &mut Self {
        let value = raw.map(str::trim).unwrap_or_default();
        let r = &mut self.record;
        match column.coercion() {
            Coercion::Text => r.name = value.to_string(),
            Coercion::Flag => {
                let flag = parse_flag(value);
                match column {
                    Column::IsArctic => r.is_arctic = flag,
                    _ => r.is_suburb = flag,
                }
            }
            Coercion::Integer => r.federal_retail_count = parse_count(value),
            Coercion::Float => {
                let number = parse_number(value);
                match column {
                    Column::Revenue => r.revenue_per_capita = number,
                    Column::Profit => r.profit_per_capita = number,
                    Column::Investment => r.investment_per_capita = number,
                    Column::KindergartenAccess => r.kindergarten_access = number,
                    Column::PrimaryCareAccess => r.primary_care_access = number,
                    _ => r.sports_facility_access = number,
                }
            }
        }
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

// =============================================================================
// Cell coercion
// =============================================================================

/// A flag is set only by the exact tokens `True` or `true`.
pub fn parse_flag(value: &str) -> bool {
    value == "True" || value == "true"
}

/// Leading integer of the cell; anything that is not a non-negative
/// integer that fits in `u32` becomes 0.
///
/// Trailing junk after the digits is ignored, so `"12.7"` gives 12.
pub fn parse_count(value: &str) -> u32 {
    static INT_PREFIX: OnceLock<Regex> = OnceLock::new();
    let re = INT_PREFIX.get_or_init(|| Regex::new(r"^[+-]?\d+").expect("static regex"));

    re.find(value)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

/// Leading decimal number of the cell; missing, malformed, or non-finite
/// values become 0.
///
/// Trailing junk after the number is ignored, so `"100.5 руб."` gives 100.5.
pub fn parse_number(value: &str) -> f64 {
    static FLOAT_PREFIX: OnceLock<Regex> = OnceLock::new();
    let re = FLOAT_PREFIX.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("static regex")
    });

    match re.find(value).and_then(|m| m.as_str().parse::<f64>().ok()) {
        // Folds -0.0 into 0.0 as well.
        Some(n) if n.is_finite() && n != 0.0 => n,
        _ => 0.0,
    }
}
