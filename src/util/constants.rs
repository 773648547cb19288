// Municode - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Municode";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Municode";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Data loading
// =============================================================================

/// File name of the dataset when no path is given on the CLI or in config.
pub const DEFAULT_DATA_FILE: &str = "data.csv";

/// Hard upper bound on the size of the dataset file.
///
/// The dataset is a few dozen rows; anything this large is the wrong file.
pub const MAX_DATA_FILE_SIZE: u64 = 16 * 1024 * 1024; // 16 MB

/// Field delimiter of the dataset. Quoting is not supported.
pub const CSV_DELIMITER: char = ',';

// =============================================================================
// Display
// =============================================================================

/// Number of filtered records shown in the data table.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Minimum user-configurable table preview size.
pub const MIN_PREVIEW_ROWS: usize = 1;

/// Maximum user-configurable table preview size.
pub const MAX_PREVIEW_ROWS: usize = 500;

/// Decimal places for averaged per-capita metrics on the metric cards.
pub const CARD_DECIMALS: usize = 0;

/// Decimal places for revenue and profit in the data table.
pub const TABLE_MONEY_DECIMALS: usize = 0;

/// Decimal places for investment in the data table.
pub const TABLE_INVESTMENT_DECIMALS: usize = 2;

/// Text shown in place of an average when there is nothing to average.
pub const NO_DATA_PLACEHOLDER: &str = "\u{2014}";

/// Currency unit label under money metrics.
pub const CURRENCY_LABEL: &str = "руб.";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// File names
// =============================================================================

/// Configuration file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
