// src/export/mod.rs
//! Export utilities for bitwarden-to-keeper
//!
//! The Keeper import file holds every password in cleartext, exactly like the
//! Bitwarden export it came from. Treat both as secrets and delete them after
//! the import.

pub use json::write_import_file;

pub mod json;
