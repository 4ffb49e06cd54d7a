//! Home screen: registration form + patient list.
//!
//! ```text
//! ┌ PASSO ──────────────────────────┐
//! │ NEW PATIENT                     │
//! │ > Ana_                          │
//! ├─────────────────────────────────┤
//! │ REGISTERED PATIENTS             │
//! │ > Ana        ID: #1             │
//! │   Bia        ID: #2             │
//! └─────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::app::App;

/// Render the home screen.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // registration form
            Constraint::Min(3),    // patient list
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_form(frame, chunks[1], app);
    render_list(frame, chunks[2], app);
    render_hints(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "PASSO ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("patient registry", Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, area);
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let input = app.home.name_input();

    let content = if input.is_empty() {
        Line::from(Span::styled(
            "Patient name",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![Span::raw(input), Span::raw("_")])
    };

    let title = if app.home.submit_pending() {
        Span::styled(" NEW PATIENT (submitting) ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            " NEW PATIENT ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };

    let form = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(form, area);
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            " REGISTERED PATIENTS ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let patients = app.home.patients();

    if patients.is_empty() {
        let empty = Paragraph::new("No patients registered.")
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = patients
        .iter()
        .enumerate()
        .map(|(index, patient)| {
            let is_selected = index == app.selected;
            let marker = if is_selected { "> " } else { "  " };

            let line_style = if is_selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let spans = vec![
                Span::raw(marker),
                Span::styled(
                    patient.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ID: #{}", patient.id),
                    Style::default().fg(Color::DarkGray),
                ),
            ];

            ListItem::new(Line::from(spans)).style(line_style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new("Enter: register/open | Up/Down: select | Esc: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, area);
}
