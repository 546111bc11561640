//! Home screen rendering
//!
//! The overview: item count, the three-course average-price summary,
//! and the full menu list in its current order.

use crate::app::controller::AppController;
use crate::ui::widgets::{ACCENT, format_price};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, app: &AppController) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // item count
            Constraint::Length(5), // averages box
            Constraint::Min(3),    // menu list
        ])
        .split(area);

    let count = Paragraph::new(format!("  Total items: {}", app.menu().len()))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(count, chunks[0]);

    frame.render_widget(averages_box(app), chunks[1]);

    if app.menu().is_empty() {
        let empty = Paragraph::new("No menu items yet. Add some!")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Menu "));
        frame.render_widget(empty, chunks[2]);
    } else {
        frame.render_widget(menu_list(app), chunks[2]);
    }
}

/// The always-three-row average price summary
///
/// Courses with no items show as 0.00 rather than being omitted.
fn averages_box(app: &AppController) -> List<'_> {
    let currency = &app.settings().currency;
    let rows: Vec<ListItem> = app
        .menu()
        .averages_by_course()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}: ", entry.course.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format_price(currency, entry.average)),
            ]))
        })
        .collect();

    List::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Average Prices "),
    )
}

fn menu_list(app: &AppController) -> List<'_> {
    let currency = &app.settings().currency;
    let title_style = if app.list_flash_active() {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let items: Vec<ListItem> = app
        .menu()
        .items()
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!(
                        "{} ({}) - {}",
                        item.name,
                        item.course,
                        format_price(currency, item.price)
                    ),
                    title_style,
                )),
                Line::from(Span::styled(
                    format!("  {}", item.description),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    List::new(items).block(Block::default().borders(Borders::ALL).title(" Menu "))
}
