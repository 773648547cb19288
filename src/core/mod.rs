// Municode - core/mod.rs
//
// Core business logic layer: the record model and the
// parse -> filter -> aggregate -> view model pipeline.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod format;
pub mod model;
pub mod parser;
pub mod view;
