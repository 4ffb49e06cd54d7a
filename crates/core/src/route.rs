//! Routing surface consumed by the client.
//!
//! Navigation is treated as a black-box capability: a view produces a
//! [`NavigationRequest`] and whatever hosts the views carries it out.

use passo_types::Patient;

/// Navigable locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// List/registration view.
    Home,
    /// Per-patient detail view.
    PatientDetail { id: i64 },
    /// Per-patient dashboard view.
    Dashboard { id: i64 },
}

impl Route {
    /// Render the route as the path the web surface exposes.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_owned(),
            Route::PatientDetail { id } => format!("/patient/{id}"),
            Route::Dashboard { id } => format!("/dashboard/{id}"),
        }
    }
}

/// A fire-and-forget navigation request.
///
/// `patient` is transient navigation state: it exists in memory for this
/// transition only and is not recoverable if lost. Destinations must cope
/// with it being absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub route: Route,
    pub patient: Option<Patient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths_match_web_surface() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::PatientDetail { id: 7 }.path(), "/patient/7");
        assert_eq!(Route::Dashboard { id: 12 }.path(), "/dashboard/12");
    }
}
