//! Detail screen for a single patient.

use passo_core::Route;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

/// Render the detail screen.
pub fn render(frame: &mut Frame, app: &App) {
    let Some(detail) = &app.detail else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let route = Route::PatientDetail { id: detail.id() };
    let title = Span::styled(
        format!(" PATIENT {} ", route.path()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let lines = match detail.patient() {
        Some(patient) => vec![
            Line::from(vec![
                Span::styled("Name: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    patient.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("ID:   ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("#{}", patient.id)),
            ]),
        ],
        None => vec![
            Line::from(Span::styled(
                "Record unavailable.",
                Style::default().fg(Color::Red),
            )),
            Line::from(Span::styled(
                "The registry could not be reached and no record was carried over.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let body = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(body, chunks[0]);

    let hints = Paragraph::new("d: dashboard | Esc: back")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[1]);
}
