//! Menu item identity and record types

use crate::domain::course::Course;
use std::fmt;

/// Opaque identifier for a stored menu item
///
/// Assigned once by the collection when an item is added, never
/// reused, and stable for the lifetime of the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single priced, described dish belonging to one course
///
/// Field invariants are enforced by `Menu::add`: `name` and
/// `description` are trimmed and non-empty, `price` is finite and
/// non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: f64,
}
