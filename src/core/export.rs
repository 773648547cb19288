// Municode - core/export.rs
//
// CSV and JSON export of the currently filtered records.
// Core layer: writes to any Write trait object.

use crate::core::model::{Column, Record};
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export records to CSV using the dataset's own headers, so the output
/// can be loaded back into the dashboard.
pub fn export_csv<W: Write>(
    records: &[&Record],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    csv_writer
        .write_record(Column::all().iter().map(Column::header))
        .map_err(csv_err)?;

    let mut count = 0;
    for r in records {
        csv_writer
            .write_record([
                r.name.clone(),
                bool_token(r.is_suburb).to_string(),
                bool_token(r.is_arctic).to_string(),
                r.revenue_per_capita.to_string(),
                r.profit_per_capita.to_string(),
                r.investment_per_capita.to_string(),
                r.federal_retail_count.to_string(),
                r.kindergarten_access.to_string(),
                r.primary_care_access.to_string(),
                r.sports_facility_access.to_string(),
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %export_path.display(), records = count, "Exported CSV");
    Ok(count)
}

/// Export records to JSON format (array of objects).
pub fn export_json<W: Write>(
    records: &[&Record],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %export_path.display(), records = records.len(), "Exported JSON");
    Ok(records.len())
}

fn bool_token(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}
