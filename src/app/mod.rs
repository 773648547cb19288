// Municode - app/mod.rs
//
// Application layer: dataset loading and dashboard state.
// Dependencies: core layer, platform data sources.
// Must NOT depend on: ui.

pub mod dashboard;
pub mod loader;
