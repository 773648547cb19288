// Municode - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use municode::app;
pub use municode::core;
pub use municode::platform;
pub use municode::ui;
pub use municode::util;

use clap::Parser;
use std::path::PathBuf;

/// Municode - Arctic municipal economics dashboard.
///
/// Loads a CSV of per-municipality indicators and shows averages for all
/// municipalities, suburbs, or the Arctic zone.
#[derive(Parser, Debug)]
#[command(name = "Municode", version, about)]
struct Cli {
    /// Dataset CSV file (defaults to [data] path in config.toml, then ./data.csv).
    path: Option<PathBuf>,

    /// Initial filter mode: all, suburb, or arctic.
    #[arg(short = 'f', long = "filter")]
    filter: Option<crate::core::filter::FilterMode>,

    /// Directory containing config.toml (overrides the platform default).
    #[arg(short = 'c', long = "config", value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging is up so its level can apply;
    // its warnings are logged once the subscriber exists.
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_dir);
    let (mut config, config_warnings) = platform::config::load_config(&config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "Municode starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    if let Some(mode) = cli.filter {
        config.default_filter = mode;
    }
    let data_path = platform::config::resolve_data_path(cli.path.as_deref(), &config);
    tracing::info!(
        data = %data_path.display(),
        filter = %config.default_filter,
        "Ready to launch GUI"
    );

    let dark_mode = config.dark_mode;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode);
            Ok(Box::new(gui::MunicodeApp::new(
                config,
                data_path,
                config_warnings,
            )))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Municode GUI: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::FilterMode;

    #[test]
    fn test_cli_accepts_config_flag() {
        let cli = Cli::try_parse_from([
            "municode",
            "--config",
            "/etc/municode",
            "-f",
            "arctic",
            "data.csv",
        ])
        .expect("valid arguments");
        assert_eq!(cli.config_dir, Some(PathBuf::from("/etc/municode")));
        assert_eq!(cli.filter, Some(FilterMode::Arctic));
        assert_eq!(cli.path, Some(PathBuf::from("data.csv")));
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_short_config_flag() {
        let cli = Cli::try_parse_from(["municode", "-c", "cfg", "-d"]).expect("valid arguments");
        assert_eq!(cli.config_dir, Some(PathBuf::from("cfg")));
        assert!(cli.debug);
        assert!(cli.path.is_none());
    }

    #[test]
    fn test_cli_rejects_old_config_dir_flag() {
        assert!(Cli::try_parse_from(["municode", "--config-dir", "cfg"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_filter() {
        assert!(Cli::try_parse_from(["municode", "-f", "tundra"]).is_err());
    }
}
