// Municode - app/loader.rs
//
// Dataset loading: fetch -> parse, degrading to an empty dataset on any
// retrieval failure.
//
// Architecture:
//   - `load_records` is the synchronous pipeline; it never fails.
//   - `LoadManager` lives on the UI thread and runs one load on a
//     background thread, delivering a single `LoadOutcome` over an mpsc
//     channel. Loads are one-shot: not retried, not cancelled. Starting a
//     new load abandons the receiver of the previous one.

use crate::core::model::Record;
use crate::core::parser;
use crate::platform::source::DataSource;
use crate::util::error::{LoadError, MunicodeError};
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// Result of one completed load.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Where the data came from, for display.
    pub origin: String,

    /// Parsed records; empty when the load failed.
    pub records: Vec<Record>,

    /// Why the load failed, if it did. Informational only.
    pub error: Option<MunicodeError>,

    /// Wall time spent fetching and parsing.
    pub duration: Duration,
}

/// Fetch and parse, reporting what happened.
pub fn load(source: &dyn DataSource) -> LoadOutcome {
    let started = Instant::now();
    let origin = source.describe();

    match source.fetch() {
        Ok(text) => {
            let records = parser::parse_csv(&text);
            let duration = started.elapsed();
            tracing::info!(
                source = %origin,
                records = records.len(),
                elapsed_ms = duration.as_millis() as u64,
                "Dataset loaded"
            );
            LoadOutcome {
                origin,
                records,
                error: None,
                duration,
            }
        }
        Err(e) => {
            tracing::warn!(source = %origin, error = %e, "Dataset load failed; showing empty dataset");
            LoadOutcome {
                origin,
                records: Vec::new(),
                error: Some(e.into()),
                duration: started.elapsed(),
            }
        }
    }
}

/// Fetch and parse the dataset. Any failure yields an empty dataset.
pub fn load_records(source: &dyn DataSource) -> Vec<Record> {
    load(source).records
}

// =============================================================================
// LoadManager
// =============================================================================

/// Runs a dataset load on a background thread.
pub struct LoadManager {
    rx: Option<mpsc::Receiver<LoadOutcome>>,
}

impl LoadManager {
    pub fn new() -> Self {
        Self { rx: None }
    }

    /// Spawn a background load of `source`.
    pub fn start_load(&mut self, source: Box<dyn DataSource>) {
        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);

        std::thread::spawn(move || {
            let outcome = load(source.as_ref());
            // Receiver dropped means a newer load superseded this one.
            let _ = tx.send(outcome);
        });

        tracing::debug!("Load started");
    }

    /// Whether a load has been started and has not yet been collected.
    pub fn is_loading(&self) -> bool {
        self.rx.is_some()
    }

    /// Take the outcome if the load has finished. Never blocks.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.rx = None;
                Some(outcome)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                // The loader thread panicked before sending.
                self.rx = None;
                let error = LoadError::WorkerExited;
                tracing::error!(error = %error, "Dataset load abandoned");
                Some(LoadOutcome {
                    origin: String::new(),
                    records: Vec::new(),
                    error: Some(error.into()),
                    duration: Duration::ZERO,
                })
            }
        }
    }
}

impl Default for LoadManager {
    fn default() -> Self {
        Self::new()
    }
}
