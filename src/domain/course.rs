//! The fixed course categories a dish can belong to

use std::fmt;

/// Category of a menu item
///
/// A closed set: every dish is exactly one of these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Course {
    Starter,
    Main,
    Dessert,
}

impl Course {
    /// All courses in menu-reading order (Starter, Main, Dessert)
    ///
    /// This is the order used for the average-price summary, not the
    /// order produced by sorting the collection by course.
    pub const ALL: [Course; 3] = [Course::Starter, Course::Main, Course::Dessert];

    /// Returns the display label for this course
    pub fn label(&self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
        }
    }

    /// Returns the next course in selector order, wrapping around
    pub fn next(&self) -> Course {
        match self {
            Course::Starter => Course::Main,
            Course::Main => Course::Dessert,
            Course::Dessert => Course::Starter,
        }
    }

    /// Returns the previous course in selector order, wrapping around
    pub fn prev(&self) -> Course {
        match self {
            Course::Starter => Course::Dessert,
            Course::Main => Course::Starter,
            Course::Dessert => Course::Main,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
