//! toolshelf library
//!
//! A curated directory of tools: a fixed built-in catalog merged with
//! user-added entries, category and text filtering, per-profile likes and
//! saves, and a password-gated admin area for managing custom entries.
//!
//! All state is kept in a [`storage::KeyValueStore`] injected into a
//! [`shelf::Shelf`] at startup.

pub mod catalog;
pub mod config;
pub mod shelf;
pub mod storage;
