//! Dashboard screen placeholder.
//!
//! The registry exposes a `/dashboard/:id` route; its content is owned by an
//! external collaborator, so this screen only identifies the patient.

use passo_core::Route;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

/// Render the dashboard screen.
pub fn render(frame: &mut Frame, app: &App) {
    let Some(detail) = &app.detail else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let route = Route::Dashboard { id: detail.id() };
    let title = Span::styled(
        format!(" DASHBOARD {} ", route.path()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let mut lines = Vec::new();
    if let Some(patient) = detail.patient() {
        lines.push(Line::from(vec![
            Span::styled("Patient: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} (#{})", patient.name, patient.id),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::raw(""));
    }
    lines.push(Line::from(Span::styled(
        "No dashboard data available.",
        Style::default().fg(Color::DarkGray),
    )));

    let body = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(body, chunks[0]);

    let hints = Paragraph::new("Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[1]);
}
