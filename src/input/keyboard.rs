//! Keyboard event translation
//!
//! Translates raw crossterm events into the small set of semantic key
//! presses the controller understands. Only key-down events count;
//! release and repeat events from terminals that report them are
//! dropped so a single press never acts twice.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A semantic key press relevant to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    /// Printable character for the focused text field (or a home-screen shortcut)
    Char(char),
    /// Delete the character before the cursor
    Backspace,
    /// Submit the form the focused field belongs to
    Enter,
    /// Leave the form screen, or quit from home
    Escape,
    /// Move focus to the next field
    Tab,
    /// Move focus to the previous field
    BackTab,
    Up,
    Down,
    Left,
    Right,
    /// Ctrl+C, quits from anywhere
    Interrupt,
}

impl KeyPress {
    /// Maps a terminal event to a semantic key press
    ///
    /// # Returns
    /// The matching `KeyPress`, or None for events the application
    /// ignores (releases, mouse, resize, modified characters).
    pub fn from_event(event: &Event) -> Option<Self> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }

        Self::from_key_event(key)
    }

    fn from_key_event(key: &KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(KeyPress::Interrupt),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some(KeyPress::Char(c)),
            KeyCode::Backspace => Some(KeyPress::Backspace),
            KeyCode::Enter => Some(KeyPress::Enter),
            KeyCode::Esc => Some(KeyPress::Escape),
            KeyCode::Tab => Some(KeyPress::Tab),
            KeyCode::BackTab => Some(KeyPress::BackTab),
            KeyCode::Up => Some(KeyPress::Up),
            KeyCode::Down => Some(KeyPress::Down),
            KeyCode::Left => Some(KeyPress::Left),
            KeyCode::Right => Some(KeyPress::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn plain_characters_pass_through() {
        let event = press(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(KeyPress::from_event(&event), Some(KeyPress::Char('a')));
    }

    #[test]
    fn shifted_characters_keep_their_case() {
        let event = press(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(KeyPress::from_event(&event), Some(KeyPress::Char('R')));
    }

    #[test]
    fn ctrl_c_maps_to_interrupt() {
        let event = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyPress::from_event(&event), Some(KeyPress::Interrupt));
    }

    #[test]
    fn other_ctrl_chords_are_ignored() {
        let event = press(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(KeyPress::from_event(&event), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(KeyPress::from_event(&Event::Key(key)), None);
    }

    #[test]
    fn resize_events_are_ignored() {
        assert_eq!(KeyPress::from_event(&Event::Resize(80, 24)), None);
    }

    #[test]
    fn navigation_keys_map_one_to_one() {
        let cases = [
            (KeyCode::Enter, KeyPress::Enter),
            (KeyCode::Esc, KeyPress::Escape),
            (KeyCode::Tab, KeyPress::Tab),
            (KeyCode::BackTab, KeyPress::BackTab),
            (KeyCode::Up, KeyPress::Up),
            (KeyCode::Down, KeyPress::Down),
            (KeyCode::Left, KeyPress::Left),
            (KeyCode::Right, KeyPress::Right),
            (KeyCode::Backspace, KeyPress::Backspace),
        ];
        for (code, expected) in cases {
            let event = press(code, KeyModifiers::NONE);
            assert_eq!(KeyPress::from_event(&event), Some(expected));
        }
    }
}
