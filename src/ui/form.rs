//! Add/remove screen rendering
//!
//! One scrolling-free column of labeled inputs: the add form (name,
//! description, course selector, price) followed by the remove-by-name
//! input. The focused field carries the accent border.

use crate::app::controller::{AppController, FormField};
use crate::domain::Course;
use crate::ui::widgets::{ACCENT, input_field};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, app: &AppController) {
    let form = app.form();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Length(3), // description
            Constraint::Length(3), // course selector
            Constraint::Length(3), // price
            Constraint::Length(1), // spacer
            Constraint::Length(3), // remove by name
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        input_field(
            FormField::Name.label(),
            &form.name,
            form.focus == FormField::Name,
        ),
        chunks[0],
    );
    frame.render_widget(
        input_field(
            FormField::Description.label(),
            &form.description,
            form.focus == FormField::Description,
        ),
        chunks[1],
    );
    frame.render_widget(
        course_selector(form.course, form.focus == FormField::Course),
        chunks[2],
    );
    frame.render_widget(
        input_field(
            FormField::Price.label(),
            &form.price,
            form.focus == FormField::Price,
        ),
        chunks[3],
    );
    frame.render_widget(
        input_field(
            FormField::RemoveName.label(),
            &form.remove_name,
            form.focus == FormField::RemoveName,
        ),
        chunks[5],
    );
}

/// The three-way course selector
///
/// Rendered as one row of segmented labels with the selected course
/// highlighted.
fn course_selector(selected: Course, focused: bool) -> Paragraph<'static> {
    let border_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans: Vec<Span> = Vec::new();
    for course in Course::ALL {
        spans.push(Span::raw(" "));
        let label = format!(" {} ", course.label());
        if course == selected {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(label));
        }
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", FormField::Course.label())),
    )
}
