// Municode - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::filter::FilterMode;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Municode configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/municode/ or %APPDATA%\Municode\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[data]` section.
    pub data: DataSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[data]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DataSection {
    /// Dataset file path.
    pub path: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Rows shown in the data table.
    pub preview_rows: Option<usize>,
    /// Filter mode selected at startup: "all", "suburb", or "arctic".
    pub default_filter: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Dataset path from config, if any.
    pub data_path: Option<PathBuf>,
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Rows shown in the data table.
    pub preview_rows: usize,
    /// Filter mode selected at startup.
    pub default_filter: FilterMode,
    /// Log level override.
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            dark_mode: false,
            preview_rows: constants::DEFAULT_PREVIEW_ROWS,
            default_filter: FilterMode::All,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with a warning.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.clone(),
                source: e,
            };
            tracing::warn!(error = %err, "Using default configuration");
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.clone(),
                source: e,
            };
            tracing::warn!(error = %err, "Using default configuration");
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");
    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

/// Validate each field against named constants, accumulating all problems.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();
    let mut reject = |field: &str, value: String, expected: String| {
        let err = ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value,
            expected,
        };
        warnings.push(format!("{err}. Using default."));
    };

    // -- Data: path --
    if let Some(path) = raw.data.path {
        if path.trim().is_empty() {
            reject("data.path", path, "a non-empty file path".to_string());
        } else {
            config.data_path = Some(PathBuf::from(path));
        }
    }

    // -- UI: theme --
    if let Some(theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            _ => reject("ui.theme", theme, "\"dark\" or \"light\"".to_string()),
        }
    }

    // -- UI: preview_rows --
    if let Some(rows) = raw.ui.preview_rows {
        if (constants::MIN_PREVIEW_ROWS..=constants::MAX_PREVIEW_ROWS).contains(&rows) {
            config.preview_rows = rows;
        } else {
            reject(
                "ui.preview_rows",
                rows.to_string(),
                format!(
                    "{}-{}",
                    constants::MIN_PREVIEW_ROWS,
                    constants::MAX_PREVIEW_ROWS
                ),
            );
        }
    }

    // -- UI: default_filter --
    if let Some(mode) = raw.ui.default_filter {
        match mode.parse::<FilterMode>() {
            Ok(m) => config.default_filter = m,
            Err(_) => reject(
                "ui.default_filter",
                mode,
                "\"all\", \"suburb\", or \"arctic\"".to_string(),
            ),
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            reject(
                "logging.level",
                level,
                "error, warn, info, debug, or trace".to_string(),
            );
        }
    }

    config
}

/// Pick the dataset path: CLI argument > config.toml > `data.csv` in the
/// working directory.
pub fn resolve_data_path(cli_path: Option<&Path>, config: &AppConfig) -> PathBuf {
    cli_path
        .map(Path::to_path_buf)
        .or_else(|| config.data_path.clone())
        .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_DATA_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, body: &str) {
        std::fs::write(dir.join(constants::CONFIG_FILE_NAME), body).unwrap();
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.preview_rows, constants::DEFAULT_PREVIEW_ROWS);
        assert_eq!(config.default_filter, FilterMode::All);
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_valid_config_applied() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[data]
path = "/srv/municode/data.csv"

[ui]
theme = "Dark"
preview_rows = 25
default_filter = "arctic"

[logging]
level = "DEBUG"
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(
            config.data_path,
            Some(PathBuf::from("/srv/municode/data.csv"))
        );
        assert!(config.dark_mode);
        assert_eq!(config.preview_rows, 25);
        assert_eq!(config.default_filter, FilterMode::Arctic);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_values_warn_and_default() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[ui]
theme = "sepia"
preview_rows = 0
default_filter = "rural"

[logging]
level = "loud"
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 4, "{warnings:?}");
        assert!(!config.dark_mode);
        assert_eq!(config.preview_rows, constants::DEFAULT_PREVIEW_ROWS);
        assert_eq!(config.default_filter, FilterMode::All);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_unparseable_config_warns() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[ui\ntheme = ");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Config parse error"));
        assert_eq!(config.preview_rows, constants::DEFAULT_PREVIEW_ROWS);
    }

    #[test]
    fn test_data_path_priority() {
        let config = AppConfig {
            data_path: Some(PathBuf::from("from-config.csv")),
            ..Default::default()
        };
        assert_eq!(
            resolve_data_path(Some(Path::new("cli.csv")), &config),
            PathBuf::from("cli.csv")
        );
        assert_eq!(
            resolve_data_path(None, &config),
            PathBuf::from("from-config.csv")
        );
        assert_eq!(
            resolve_data_path(None, &AppConfig::default()),
            PathBuf::from(constants::DEFAULT_DATA_FILE)
        );
    }
}
