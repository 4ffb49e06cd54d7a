//! Home view: patient list loading, registration and selection.

use passo_client::ApiResult;
use passo_types::{Patient, PatientName};

use crate::route::{NavigationRequest, Route};

/// State behind the list/registration screen.
///
/// Owns the patient list and the name input; both are mutated only through
/// this view. Between loads the list is a verbatim snapshot of the last
/// successful server response — no client-side filtering, sorting or
/// deduplication.
///
/// The view holds no transport handle: callers issue the requests and feed
/// the outcomes back through [`HomeView::apply_load`] and
/// [`HomeView::finish_submit`], so the rendering surface stays responsive
/// while a request is in flight.
#[derive(Debug, Default)]
pub struct HomeView {
    patients: Vec<Patient>,
    name_input: String,
    submit_pending: bool,
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of a collection fetch.
    ///
    /// A successful response replaces the held list wholesale. Failures are
    /// logged and swallowed; the previously held list is left unchanged and
    /// the view stays interactive.
    pub fn apply_load(&mut self, result: ApiResult<Vec<Patient>>) {
        match result {
            Ok(patients) => self.patients = patients,
            Err(e) => tracing::error!("failed to fetch patients: {e}"),
        }
    }

    /// Begin submitting the current name input as a new patient.
    ///
    /// Returns the validated name to send, or `None` when no request must be
    /// issued: empty or whitespace-only input is a no-op, and a submission
    /// attempted while one is already in flight is ignored. On `Some` the
    /// view is marked in flight until [`HomeView::finish_submit`] is called.
    pub fn begin_submit(&mut self) -> Option<PatientName> {
        if self.submit_pending {
            return None;
        }

        let name = PatientName::new(&self.name_input).ok()?;
        self.submit_pending = true;
        Some(name)
    }

    /// Finish an in-flight submission with the creation outcome.
    ///
    /// On success the input is cleared; on failure it is preserved so the
    /// user may retry, and the failure is logged. Returns `true` when the
    /// caller should reload the list (success only).
    pub fn finish_submit(&mut self, result: ApiResult<()>) -> bool {
        self.submit_pending = false;
        match result {
            Ok(()) => {
                self.name_input.clear();
                true
            }
            Err(e) => {
                tracing::error!("failed to register patient: {e}");
                false
            }
        }
    }

    /// Navigation request for the list entry at `index`.
    ///
    /// The full selected record is forwarded as transient navigation state.
    /// Returns `None` when `index` is out of range.
    pub fn select(&self, index: usize) -> Option<NavigationRequest> {
        let patient = self.patients.get(index)?.clone();
        Some(NavigationRequest {
            route: Route::PatientDetail { id: patient.id },
            patient: Some(patient),
        })
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn submit_pending(&self) -> bool {
        self.submit_pending
    }

    /// Replace the name input wholesale (e.g. a paste).
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.name_input = value.into();
    }

    /// Append one typed character to the name input.
    pub fn push_input(&mut self, c: char) {
        self.name_input.push(c);
    }

    /// Remove the last character of the name input.
    pub fn pop_input(&mut self) {
        self.name_input.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use passo_client::ApiError;

    fn patient(id: i64, name: &str) -> Patient {
        Patient {
            id,
            name: name.to_owned(),
        }
    }

    #[test]
    fn apply_load_replaces_list_in_server_order() {
        let mut view = HomeView::new();
        view.apply_load(Ok(vec![patient(2, "Bia"), patient(1, "Ana")]));

        assert_eq!(view.patients(), &[patient(2, "Bia"), patient(1, "Ana")]);
    }

    #[test]
    fn apply_load_failure_keeps_previous_list() {
        let mut view = HomeView::new();
        view.apply_load(Ok(vec![patient(1, "Ana")]));
        view.apply_load(Err(ApiError::Connection("http://localhost:8000".into())));

        assert_eq!(view.patients(), &[patient(1, "Ana")]);
    }

    #[test]
    fn empty_submit_issues_no_request() {
        let mut view = HomeView::new();

        assert!(view.begin_submit().is_none());
        assert!(!view.submit_pending());
        assert!(view.patients().is_empty());
    }

    #[test]
    fn whitespace_submit_issues_no_request() {
        let mut view = HomeView::new();
        view.set_input("   ");

        assert!(view.begin_submit().is_none());
        assert!(!view.submit_pending());
        assert_eq!(view.name_input(), "   ");
    }

    #[test]
    fn begin_submit_trims_and_marks_in_flight() {
        let mut view = HomeView::new();
        view.set_input("  Ana  ");

        let name = view.begin_submit().unwrap();
        assert_eq!(name.as_str(), "Ana");
        assert!(view.submit_pending());
    }

    #[test]
    fn submit_while_in_flight_is_ignored() {
        let mut view = HomeView::new();
        view.set_input("Ana");

        assert!(view.begin_submit().is_some());
        // Still in flight: a second submission must not issue a request.
        assert!(view.begin_submit().is_none());
        assert!(view.submit_pending());
    }

    #[test]
    fn successful_submit_clears_input_and_requests_reload() {
        let mut view = HomeView::new();
        view.set_input("Ana");
        view.begin_submit().unwrap();

        let reload = view.finish_submit(Ok(()));

        assert!(reload);
        assert_eq!(view.name_input(), "");
        assert!(!view.submit_pending());
    }

    #[test]
    fn failed_submit_keeps_input_and_does_not_reload() {
        let mut view = HomeView::new();
        view.set_input("Ana");
        view.begin_submit().unwrap();

        let reload = view.finish_submit(Err(ApiError::Parse("boom".into())));

        assert!(!reload);
        assert_eq!(view.name_input(), "Ana");
        assert!(!view.submit_pending());
    }

    #[test]
    fn resubmit_after_failure_is_permitted() {
        let mut view = HomeView::new();
        view.set_input("Ana");
        view.begin_submit().unwrap();
        view.finish_submit(Err(ApiError::Connection("http://localhost:8000".into())));

        let name = view.begin_submit().unwrap();
        assert_eq!(name.as_str(), "Ana");
    }

    #[test]
    fn select_carries_full_record_to_detail_route() {
        let mut view = HomeView::new();
        view.apply_load(Ok(vec![patient(7, "Ana")]));

        let request = view.select(0).unwrap();
        assert_eq!(request.route, Route::PatientDetail { id: 7 });
        assert_eq!(request.route.path(), "/patient/7");
        assert_eq!(request.patient, Some(patient(7, "Ana")));
    }

    #[test]
    fn select_out_of_range_is_none() {
        let view = HomeView::new();
        assert!(view.select(0).is_none());
    }
}
