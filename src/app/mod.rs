//! Application orchestration layer
//!
//! This module coordinates between input, domain, and UI layers.
//! It manages the main application state and event handling.

pub mod controller;
pub mod state;

pub use controller::{AddForm, AppController, FormField};
pub use state::{Notice, NoticeKind, Screen};
