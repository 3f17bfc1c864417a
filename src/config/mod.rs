// src/config/mod.rs

//! Persisted user settings for driplaunch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load and save the settings file (`loader.rs`).
//! - Validate settings before they are accepted (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_from_path, load_or_default, save_to_path};
pub use model::LaunchConfig;
pub use validate::validate_config;
