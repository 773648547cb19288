// Municode - ui/panels/cards.rs
//
// Key metric cards: municipality count and the three per-capita averages
// for the active filter.

use crate::core::format::format_average;
use crate::core::view::ViewModel;
use crate::ui::theme;
use crate::util::constants::{CARD_DECIMALS, CURRENCY_LABEL};

/// Render the metric card row.
pub fn render(ui: &mut egui::Ui, vm: &ViewModel<'_>) {
    ui.heading("Ключевые метрики");
    ui.add_space(6.0);

    ui.horizontal_wrapped(|ui| {
        card(
            ui,
            "Всего муниципалитетов",
            vm.stats.total.to_string(),
            None,
            theme::ACCENT_GREEN,
        );
        card(
            ui,
            "Средняя выручка на чел.",
            format_average(vm.stats.avg_revenue, CARD_DECIMALS),
            Some(CURRENCY_LABEL),
            theme::ACCENT_BLUE,
        );
        card(
            ui,
            "Средняя прибыль на чел.",
            format_average(vm.stats.avg_profit, CARD_DECIMALS),
            Some(CURRENCY_LABEL),
            theme::ACCENT_BLUE,
        );
        card(
            ui,
            "Средние инвестиции на чел.",
            format_average(vm.stats.avg_investment, CARD_DECIMALS),
            Some(CURRENCY_LABEL),
            theme::ACCENT_BLUE,
        );
    });
}

fn card(ui: &mut egui::Ui, title: &str, value: String, unit: Option<&str>, colour: egui::Color32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(theme::CARD_WIDTH);
        ui.label(egui::RichText::new(title).small().weak());
        ui.label(
            egui::RichText::new(value)
                .size(theme::CARD_VALUE_SIZE)
                .strong()
                .color(colour),
        );
        if let Some(unit) = unit {
            ui.label(egui::RichText::new(unit).small().weak());
        }
    });
}
