//! CLI commands

pub mod admin;
pub mod browse;
pub mod prefs;
pub mod utils;
