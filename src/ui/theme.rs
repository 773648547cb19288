// Municode - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Headline colour for counts and the app title.
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(21, 128, 61); // Green 700

/// Headline colour for money metrics.
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(29, 78, 216); // Blue 700

/// Fill for the active filter button.
pub const ACTIVE_FILTER_BG: Color32 = Color32::from_rgb(22, 163, 74); // Green 600

/// Failed-load status colour.
pub const STATUS_ERROR: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Layout constants.
pub const CARD_WIDTH: f32 = 200.0;
pub const CARD_VALUE_SIZE: f32 = 28.0;
pub const VALUE_COLUMN_WIDTH: f32 = 110.0;

/// Switch egui between its dark and light visuals.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    let visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(visuals);
}
