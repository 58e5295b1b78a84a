// src/config/mod.rs
//! Configuration system for bitwarden-to-keeper
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{from_toml_str, load, Config, Paths};

mod app;
mod defaults;
