//! Shared rendering helpers
//!
//! Small building blocks used by both screens: labeled text inputs,
//! price formatting, the centered notice overlay.

use crate::app::state::{Notice, NoticeKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Accent color used for focus and highlights
pub const ACCENT: Color = Color::Cyan;

/// Formats a price for display with two decimals
///
/// # Example
/// `format_price("R", 49.99)` renders as `R49.99`.
pub fn format_price(currency: &str, value: f64) -> String {
    format!("{currency}{value:.2}")
}

/// Builds a bordered one-line text input
///
/// The focused field gets an accent border and a trailing block
/// cursor so it is obvious where typed characters will land.
pub fn input_field<'a>(label: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let border_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::raw(value)];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(ACCENT)));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {label} ")),
    )
}

/// Draws the modal outcome notice centered over the current view
pub fn draw_notice(frame: &mut Frame, notice: &Notice) {
    let style = match notice.kind {
        NoticeKind::Success => Style::default().fg(Color::Green),
        NoticeKind::Error => Style::default().fg(Color::Yellow),
    };

    // max-then-min rather than clamp: the terminal may be narrower than 24
    let width = (notice.message.len() as u16 + 6)
        .max(24)
        .min(frame.area().width);
    let area = centered_rect(width, 5, frame.area());

    let body = Paragraph::new(Line::from(vec![Span::raw(notice.message.as_str())]))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(notice.title())
                .title_bottom(Line::from(" press any key ").right_aligned().dark_gray()),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(body, area);
}

/// Returns a rect of the given size centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [horizontal] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(horizontal);
    centered
}
