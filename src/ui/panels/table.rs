// Municode - ui/panels/table.rs
//
// Data table: the first few filtered municipalities with their
// per-capita revenue, profit, and investment.

use crate::core::format::format_fixed;
use crate::core::view::ViewModel;
use crate::ui::theme;
use crate::util::constants::{TABLE_INVESTMENT_DECIMALS, TABLE_MONEY_DECIMALS};

/// Render up to `preview_rows` records of the view model.
pub fn render(ui: &mut egui::Ui, vm: &ViewModel<'_>, preview_rows: usize) {
    if vm.records.is_empty() {
        ui.label(egui::RichText::new("Нет данных для выбранного фильтра.").weak());
        return;
    }

    egui::ScrollArea::horizontal()
        .id_salt("data_table")
        .show(ui, |ui| {
            egui::Grid::new("data_table_grid")
                .num_columns(4)
                .striped(true)
                .spacing([16.0, 4.0])
                .min_col_width(theme::VALUE_COLUMN_WIDTH)
                .show(ui, |ui| {
                    ui.strong("Муниципалитет");
                    ui.strong("Выручка");
                    ui.strong("Прибыль");
                    ui.strong("Инвестиции");
                    ui.end_row();

                    for r in vm.preview(preview_rows) {
                        ui.label(&r.name);
                        numeric(ui, format_fixed(r.revenue_per_capita, TABLE_MONEY_DECIMALS));
                        numeric(ui, format_fixed(r.profit_per_capita, TABLE_MONEY_DECIMALS));
                        numeric(
                            ui,
                            format_fixed(r.investment_per_capita, TABLE_INVESTMENT_DECIMALS),
                        );
                        ui.end_row();
                    }
                });
        });

    if vm.is_truncated(preview_rows) {
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "Показаны первые {} из {} муниципалитетов",
                    preview_rows,
                    vm.records.len()
                ))
                .small()
                .weak(),
            );
        });
    }
}

fn numeric(ui: &mut egui::Ui, text: String) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        ui.label(egui::RichText::new(text).monospace());
    });
}
