//! Configuration module
//!
//! Settings are optional: `Budget::new` uses the defaults, and
//! `Budget::with_settings` accepts a loaded `Settings`.

pub mod settings;

pub use settings::Settings;
