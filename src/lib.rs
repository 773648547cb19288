// Municode - lib.rs
//
// Library entry point, exposing the data pipeline and UI panels for
// integration testing and programmatic use.
//
// The eframe application shell (`gui`) lives beside `main.rs` and is not
// part of the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
