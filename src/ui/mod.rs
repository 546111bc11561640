//! Terminal rendering
//!
//! Every frame redraws the whole screen from the controller's state:
//! header, the active screen's content, a key-hint footer, and the
//! notice overlay on top when an operation just finished.

pub mod form;
pub mod home;
pub mod widgets;

use crate::app::controller::AppController;
use crate::app::state::Screen;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Paragraph},
};

/// Draws one full frame
pub fn draw(frame: &mut Frame, app: &AppController) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(10),   // content
            Constraint::Length(2), // footer
        ])
        .split(frame.area());

    let header = Paragraph::new(format!(
        "  {} - {}",
        app.settings().title,
        app.screen().title()
    ))
    .style(Style::default().fg(Color::Cyan).bold())
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.screen() {
        Screen::Home => home::render(frame, chunks[1], app),
        Screen::AddItem => form::render(frame, chunks[1], app),
    }

    let footer = Paragraph::new(key_hints(app.screen()))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[2]);

    if let Some(notice) = app.notice() {
        widgets::draw_notice(frame, notice);
    }
}

fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "  [a] Add Item  [c] Sort by Course  [p] Sort by Price  [q] Quit",
        Screen::AddItem => {
            "  [Tab/Down] Next Field  [Up] Previous  [Left/Right] Course  [Enter] Submit  [Esc] Home"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::input::KeyPress;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_text(app: &AppController) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn type_text(app: &mut AppController, s: &str) {
        for c in s.chars() {
            app.handle_key(KeyPress::Char(c));
        }
    }

    #[test]
    fn empty_home_shows_zero_filled_averages_and_placeholder() {
        let app = AppController::new(Settings::default());
        let text = render_to_text(&app);

        assert!(text.contains("Total items: 0"));
        assert!(text.contains("Starter: R0.00"));
        assert!(text.contains("Main: R0.00"));
        assert!(text.contains("Dessert: R0.00"));
        assert!(text.contains("No menu items yet. Add some!"));
    }

    #[test]
    fn home_lists_items_with_course_and_price() {
        let mut app = AppController::new(Settings::default());
        app.handle_key(KeyPress::Char('a'));
        type_text(&mut app, "Caesar Salad");
        app.handle_key(KeyPress::Tab);
        type_text(&mut app, "Fresh greens");
        app.handle_key(KeyPress::Tab);
        app.handle_key(KeyPress::Tab);
        type_text(&mut app, "49.99");
        app.handle_key(KeyPress::Enter);
        app.handle_key(KeyPress::Char(' ')); // dismiss success notice
        app.handle_key(KeyPress::Escape);

        let text = render_to_text(&app);
        assert!(text.contains("Total items: 1"));
        assert!(text.contains("Caesar Salad (Starter) - R49.99"));
        assert!(text.contains("Fresh greens"));
        assert!(text.contains("Starter: R49.99"));
    }

    #[test]
    fn add_screen_shows_every_field_label() {
        let mut app = AppController::new(Settings::default());
        app.handle_key(KeyPress::Char('a'));
        let text = render_to_text(&app);

        assert!(text.contains("Dish Name"));
        assert!(text.contains("Description"));
        assert!(text.contains("Course"));
        assert!(text.contains("Price"));
        assert!(text.contains("Remove Dish by Name"));
    }

    #[test]
    fn notice_overlay_renders_its_message() {
        let mut app = AppController::new(Settings::default());
        app.handle_key(KeyPress::Char('a'));
        app.handle_key(KeyPress::Enter); // blank add

        let text = render_to_text(&app);
        assert!(text.contains("Please fill in all fields."));
    }

    #[test]
    fn custom_currency_symbol_is_used() {
        let settings = Settings {
            currency: "$".to_string(),
            ..Settings::default()
        };
        let app = AppController::new(settings);
        let text = render_to_text(&app);
        assert!(text.contains("Starter: $0.00"));
    }
}
