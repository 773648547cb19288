// Municode - ui/panels/filters.rs
//
// Filter mode buttons, each labelled with how many municipalities it shows.

use crate::app::dashboard::Dashboard;
use crate::core::filter::FilterMode;
use crate::ui::theme;

/// Render the filter bar. Clicking a mode recomputes the dashboard.
pub fn render(ui: &mut egui::Ui, dashboard: &mut Dashboard) {
    let counts = dashboard.mode_counts();
    let active = dashboard.filter();

    ui.horizontal(|ui| {
        for &mode in FilterMode::all() {
            let text = format!("{} ({})", mode.label(), counts.get(mode));
            let button = if mode == active {
                egui::Button::new(egui::RichText::new(text).color(egui::Color32::WHITE))
                    .fill(theme::ACTIVE_FILTER_BG)
            } else {
                egui::Button::new(text)
            };
            if ui.add(button).clicked() && mode != active {
                dashboard.set_filter(mode);
            }
        }
    });
}
