// Municode - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels and manages the dataset load lifecycle.

use crate::app::dashboard::Dashboard;
use crate::app::loader::LoadManager;
use crate::core::aggregate::aggregate_by_mode;
use crate::core::export;
use crate::core::model::Record;
use crate::platform::config::AppConfig;
use crate::platform::source::FileSource;
use crate::ui;
use crate::ui::panels::sections;
use crate::util::error::{ExportError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Poll interval while the background load is running.
const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Comparison,
    Data,
}

impl Tab {
    fn all() -> &'static [Tab] {
        &[Tab::Overview, Tab::Comparison, Tab::Data]
    }

    fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Обзор",
            Tab::Comparison => "Сравнение",
            Tab::Data => "Данные",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ExportFormat {
    Csv,
    Json,
}

/// The Municode application.
pub struct MunicodeApp {
    dashboard: Dashboard,
    load_manager: LoadManager,
    config: AppConfig,
    tab: Tab,
    status_message: String,
    load_failed: bool,
    config_warnings: Vec<String>,
}

impl MunicodeApp {
    /// Create the application and start loading `data_path` in the background.
    pub fn new(config: AppConfig, data_path: PathBuf, config_warnings: Vec<String>) -> Self {
        let mut app = Self {
            dashboard: Dashboard::new(config.default_filter),
            load_manager: LoadManager::new(),
            config,
            tab: Tab::Overview,
            status_message: String::new(),
            load_failed: false,
            config_warnings,
        };
        app.start_load(data_path);
        app
    }

    fn start_load(&mut self, path: PathBuf) {
        self.status_message = format!("Loading {}\u{2026}", path.display());
        self.load_failed = false;
        self.load_manager.start_load(Box::new(FileSource::new(path)));
    }

    fn poll_load(&mut self) {
        if let Some(outcome) = self.load_manager.poll() {
            match outcome.error {
                Some(err) => {
                    self.status_message = format!("Could not load data: {err}");
                    self.load_failed = true;
                }
                None => {
                    self.status_message = format!(
                        "Loaded {} municipalities from {} in {:.0} ms",
                        outcome.records.len(),
                        outcome.origin,
                        outcome.duration.as_secs_f64() * 1000.0
                    );
                }
            }
            self.dashboard.set_records(outcome.records);
        }
    }

    fn export_view(&mut self, format: ExportFormat) {
        let (label, ext, default_name) = match format {
            ExportFormat::Csv => ("CSV", "csv", "municipalities.csv"),
            ExportFormat::Json => ("JSON", "json", "municipalities.json"),
        };
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(label, &[ext])
            .set_file_name(default_name)
            .save_file()
        else {
            return;
        };

        let vm = self.dashboard.view_model();
        let result = write_export(&vm.records, &dest, format);
        self.status_message = match result {
            Ok(n) => format!("Exported {n} municipalities to {label}."),
            Err(e) => {
                tracing::warn!(error = %e, "Export failed");
                format!("{label} export failed: {e}")
            }
        };
    }
}

fn write_export(records: &[&Record], dest: &Path, format: ExportFormat) -> Result<usize> {
    let file = std::fs::File::create(dest).map_err(|e| ExportError::Io {
        path: dest.to_path_buf(),
        source: e,
    })?;
    let writer = std::io::BufWriter::new(file);
    let written = match format {
        ExportFormat::Csv => export::export_csv(records, writer, dest)?,
        ExportFormat::Json => export::export_json(records, writer, dest)?,
    };
    Ok(written)
}

/// Status line text, with a note when config.toml produced warnings.
/// The warnings themselves are in the log.
fn compose_status(message: &str, config_warnings: &[String]) -> String {
    match config_warnings.len() {
        0 => message.to_string(),
        1 => format!("{message} \u{00b7} 1 config warning, see log"),
        n => format!("{message} \u{00b7} {n} config warnings, see log"),
    }
}

impl eframe::App for MunicodeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();
        if self.load_manager.is_loading() {
            ctx.request_repaint_after(LOAD_POLL_INTERVAL);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Data File\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .pick_file()
                        {
                            self.start_load(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    let has_records = self.dashboard.stats().total > 0;
                    ui.add_enabled_ui(has_records, |ui| {
                        if ui.button("Export CSV\u{2026}").clicked() {
                            self.export_view(ExportFormat::Csv);
                            ui.close_menu();
                        }
                        if ui.button("Export JSON\u{2026}").clicked() {
                            self.export_view(ExportFormat::Json);
                            ui.close_menu();
                        }
                    });
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = compose_status(&self.status_message, &self.config_warnings);
            let text = egui::RichText::new(status).small();
            if self.load_failed {
                ui.label(text.color(ui::theme::STATUS_ERROR));
            } else {
                ui.label(text);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Муниципальный код")
                    .size(30.0)
                    .strong()
                    .color(ui::theme::ACCENT_GREEN),
            );
            ui.label(
                egui::RichText::new(
                    "Связанные вместе: анализ взаимосвязей в арктических муниципалитетах",
                )
                .weak(),
            );
            ui.separator();

            if !self.dashboard.is_loaded() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Загрузка данных\u{2026}");
                });
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                sections::about(ui);
                ui.add_space(12.0);

                ui::panels::cards::render(ui, &self.dashboard.view_model());
                ui.add_space(12.0);

                ui.heading("Анализ данных");
                ui.horizontal(|ui| {
                    for &tab in Tab::all() {
                        ui.selectable_value(&mut self.tab, tab, tab.label());
                    }
                });
                ui.separator();

                match self.tab {
                    Tab::Overview => {
                        let by_mode = aggregate_by_mode(self.dashboard.records());
                        sections::mode_comparison(ui, &by_mode);
                    }
                    Tab::Comparison => sections::geography(ui),
                    Tab::Data => {
                        ui::panels::filters::render(ui, &mut self.dashboard);
                        ui.add_space(6.0);
                        let vm = self.dashboard.view_model();
                        ui::panels::table::render(ui, &vm, self.config.preview_rows);
                    }
                }

                ui.add_space(12.0);
                sections::conclusions(ui);
                ui.separator();
                sections::footer(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_without_warnings_is_unchanged() {
        assert_eq!(compose_status("Loading data.csv…", &[]), "Loading data.csv…");
    }

    #[test]
    fn test_status_keeps_message_and_counts_warnings() {
        let one = vec!["Config 'ui.preview_rows' = '0' is out of range".to_string()];
        let status = compose_status("Loading data.csv…", &one);
        assert!(status.starts_with("Loading data.csv…"), "{status}");
        assert!(status.ends_with("1 config warning, see log"), "{status}");

        let two = vec!["a".to_string(), "b".to_string()];
        let status = compose_status("Loaded 4 municipalities", &two);
        assert!(status.starts_with("Loaded 4 municipalities"), "{status}");
        assert!(status.ends_with("2 config warnings, see log"), "{status}");
    }

    #[test]
    fn test_tabs_in_display_order() {
        let labels: Vec<&str> = Tab::all().iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Обзор", "Сравнение", "Данные"]);
    }

    #[test]
    fn test_write_export_missing_directory_is_export_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let dest = dir.path().join("missing").join("out.csv");
        let err = write_export(&[], &dest, ExportFormat::Csv).expect_err("no parent dir");
        assert!(matches!(
            err,
            crate::util::error::MunicodeError::Export(ExportError::Io { .. })
        ));
    }

    #[test]
    fn test_write_export_json_counts_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let dest = dir.path().join("out.json");
        let record = Record {
            name: "A".to_string(),
            ..Default::default()
        };
        let written = write_export(&[&record], &dest, ExportFormat::Json).expect("export");
        assert_eq!(written, 1);
        assert!(std::fs::read_to_string(&dest).expect("read").contains("\"A\""));
    }
}
