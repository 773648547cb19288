// Municode - ui/panels/mod.rs

pub mod cards;
pub mod filters;
pub mod sections;
pub mod table;
