//! Domain logic and core data structures
//!
//! This module contains pure business logic that is independent
//! of terminal rendering and input handling.

pub mod course;
pub mod item;
pub mod menu;

pub use course::Course;
pub use item::{ItemId, MenuItem};
pub use menu::{CourseAverage, ItemDraft, Menu, MenuError};
