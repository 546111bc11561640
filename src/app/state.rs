//! Application state management
//!
//! Transient presentation state that is not part of the menu itself:
//! which screen is showing, the current outcome notice, and the short
//! list highlight that follows a change in item count. The menu and
//! the form buffers live in the controller.

use std::time::{Duration, Instant};

/// Which view is currently showing
///
/// A two-state flag: the app is either on the home overview or on the
/// combined add/remove form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    AddItem,
}

impl Screen {
    /// Returns the header title for this screen
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Menu Overview",
            Screen::AddItem => "Add Menu Item",
        }
    }
}

/// Severity of an outcome notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A modal, user-facing message about the outcome of an operation
///
/// Shown until the next key press. Every add/remove outcome produces
/// one; sorts and navigation do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Returns the overlay title for this notice
    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => " Success ",
            NoticeKind::Error => " Notice ",
        }
    }
}

/// Short-lived list highlight after the item count changes
///
/// Stands in for a fade-in: while active, the list is drawn with an
/// accent style, then settles back to normal on the next ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFlash {
    triggered_at: Option<Instant>,
}

impl ListFlash {
    /// How long the highlight stays visible
    pub const DURATION: Duration = Duration::from_millis(300);

    pub fn new() -> Self {
        Self::default()
    }

    /// Restarts the highlight window from now
    pub fn trigger(&mut self) {
        self.triggered_at = Some(Instant::now());
    }

    /// Returns true while the highlight window is still open
    pub fn is_active(&self) -> bool {
        self.triggered_at
            .is_some_and(|at| at.elapsed() < Self::DURATION)
    }
}
