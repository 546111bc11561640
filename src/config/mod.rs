//! Configuration module for menu-board
//!
//! Concentrates the user-tunable presentation settings (title,
//! currency symbol, tick rate) shared between the event loop and the
//! rendering code.

pub mod settings;

pub use settings::{Settings, SettingsError};
