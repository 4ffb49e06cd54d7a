//! Terminal rendering.
//!
//! One renderer per screen:
//! - `home.rs`: registration form + patient list
//! - `detail.rs`: per-patient detail
//! - `dashboard.rs`: per-patient dashboard placeholder

mod dashboard;
mod detail;
mod home;

use ratatui::Frame;

use crate::app::{App, Screen};

/// Render the active screen.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Home => home::render(frame, app),
        Screen::PatientDetail => detail::render(frame, app),
        Screen::Dashboard => dashboard::render(frame, app),
    }
}
