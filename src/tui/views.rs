//! TUI Views
//!
//! Draws the host's elements top to bottom: the input form, then each
//! list view, plus a header, a key-binding footer and the alert popup.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use super::app::App;
use super::colors;
use crate::error::Field;
use crate::template::{Element, Shape};
use crate::view::{ListKind, ListView};

/// Width of the label column in the form.
const LABEL_WIDTH: u16 = 13;

/// Render the whole screen.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    render_header(app, frame, chunks[0]);
    render_host(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);

    if let Some(message) = app.state().alert_message() {
        render_alert(frame, area, message);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let store = app.board().store();
    let active = app.board().view(ListKind::Active).items().len();
    let finished = app.board().view(ListKind::Finished).items().len();
    let line = Line::from(vec![
        Span::styled(
            " projboard ",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("│ {} project(s) │ {} active │ {} finished", store.len(), active, finished),
            Style::default().fg(colors::DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let bindings: &[(&str, &str)] = if app.state().alert_message().is_some() {
        &[("Enter/Esc", "dismiss"), ("Ctrl+C", "quit")]
    } else {
        &[("Tab/↓", "next field"), ("Shift+Tab/↑", "prev field"), ("Enter", "add project"), ("Esc", "quit")]
    };

    let mut spans = Vec::new();
    for (key, action) in bindings {
        spans.push(Span::styled(format!(" <{}>", key), Style::default().fg(colors::KEYBIND)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(colors::DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_host(app: &App, frame: &mut Frame, area: Rect) {
    let elements = app.board().host().elements();
    let constraints: Vec<Constraint> = elements
        .iter()
        .map(|element| match element.shape {
            // fields + status line + borders
            Shape::Form { fields } => Constraint::Length(fields.len() as u16 + 3),
            Shape::List => Constraint::Min(3),
        })
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (element, chunk) in elements.iter().zip(chunks.iter()) {
        match element.shape {
            Shape::Form { .. } => render_form(app, frame, *chunk),
            Shape::List => {
                if let Some(view) = element.id.as_deref().and_then(|id| app.board().view_by_element(id)) {
                    render_list(&view, element, frame, *chunk);
                }
            }
        }
    }
}

fn render_form(app: &App, frame: &mut Frame, area: Rect) {
    let form = app.board().form();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New Project ")
        .border_style(Style::default().fg(colors::HEADER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Field::ALL
        .iter()
        .map(|field| {
            let focused = *field == form.focus();
            let label_style = if focused {
                Style::default().fg(colors::KEYBIND).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::DIM)
            };
            Line::from(vec![
                Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize), label_style),
                Span::raw(form.field(*field).content().to_string()),
            ])
        })
        .collect();

    if let Some(status) = &app.state().status_message {
        lines.push(Line::from(Span::styled(status.clone(), Style::default().fg(colors::ACTIVE))));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    if app.state().alert_message().is_none() {
        let row = Field::ALL.iter().position(|f| *f == form.focus()).unwrap_or(0) as u16;
        // A pasted value can be wider than u16; the cursor pins to the right edge
        let column = u16::try_from(form.field(form.focus()).cursor()).unwrap_or(u16::MAX);
        let x = inner
            .x
            .saturating_add(LABEL_WIDTH)
            .saturating_add(column)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y.saturating_add(row)));
    }
}

fn render_list(view: &ListView, element: &Element, frame: &mut Frame, area: Rect) {
    let color = match view.kind() {
        ListKind::Active => colors::ACTIVE,
        ListKind::Finished => colors::FINISHED,
    };
    let heading = element.heading.clone().unwrap_or_else(|| view.heading());

    let items: Vec<ListItem> = view
        .items()
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled("• ", Style::default().fg(color)),
                Span::raw(item.text.clone()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ({}) ", heading, view.items().len())),
    );
    frame.render_widget(list, area);
}

fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(40, 5, area);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(Span::styled(message.to_string(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(colors::DIM))),
    ];
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::ALERT))
            .title(" Alert "),
    );
    frame.render_widget(paragraph, popup);
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
