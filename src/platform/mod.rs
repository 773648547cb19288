// Municode - platform/mod.rs
//
// Platform abstraction layer: dataset retrieval and config.toml.
// Dependencies: standard library, directories, toml.
// Must NOT depend on: app, ui.

pub mod config;
pub mod source;
