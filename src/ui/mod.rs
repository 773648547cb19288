// Municode - ui/mod.rs
//
// UI layer: presentation only. Reads the view model and calls the
// dashboard's filter setter.
// Dependencies: app (dashboard), core (read-only models), egui.
// Must NOT depend on: platform, direct I/O.

pub mod panels;
pub mod theme;
