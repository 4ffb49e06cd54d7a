//! Application state for the interactive client.
//!
//! Network requests never run on the UI loop: `request_*` methods spawn a
//! task and the outcome comes back as a [`Message`], drained before each
//! draw. The screen keeps rendering while a request is in flight.

use tokio::sync::mpsc;

use passo_client::{ApiResult, PatientDirectory, RegistryClient};
use passo_core::{DetailView, HomeView, NavigationRequest, Route};
use passo_types::Patient;

/// Which screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// List/registration view.
    Home,
    /// Per-patient detail view.
    PatientDetail,
    /// Per-patient dashboard view.
    Dashboard,
}

/// Outcome of a spawned request, applied on the UI loop.
#[derive(Debug)]
pub enum Message {
    /// A collection fetch finished.
    Loaded(ApiResult<Vec<Patient>>),
    /// An in-flight registration finished.
    SubmitFinished(ApiResult<()>),
    /// A detail/dashboard navigation resolved its record.
    Navigated(Screen, DetailView),
}

/// Top-level application model: the active screen plus the state behind it.
pub struct App {
    client: RegistryClient,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
    pub home: HomeView,
    pub detail: Option<DetailView>,
    pub screen: Screen,
    pub selected: usize,
    should_quit: bool,
}

impl App {
    pub fn new(client: RegistryClient) -> Self {
        let (tx, rx) = mpsc::channel(100);
        Self {
            client,
            tx,
            rx,
            home: HomeView::new(),
            detail: None,
            screen: Screen::Home,
            selected: 0,
            should_quit: false,
        }
    }

    /// Next pending request outcome, if any.
    pub fn poll_message(&mut self) -> Option<Message> {
        self.rx.try_recv().ok()
    }

    /// Apply a request outcome to the view state.
    pub fn apply(&mut self, message: Message) {
        match message {
            Message::Loaded(result) => {
                self.home.apply_load(result);
                self.clamp_selection();
            }
            Message::SubmitFinished(result) => {
                if self.home.finish_submit(result) {
                    self.request_load();
                }
            }
            Message::Navigated(screen, view) => {
                self.detail = Some(view);
                self.screen = screen;
            }
        }
    }

    /// Kick off a collection fetch.
    pub fn request_load(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(Message::Loaded(client.list_patients().await)).await;
        });
    }

    /// Kick off a registration for the current name input.
    ///
    /// No-op when the input is empty or a submission is already in flight.
    pub fn request_submit(&mut self) {
        let Some(name) = self.home.begin_submit() else {
            return;
        };
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.create_patient(&name).await;
            let _ = tx.send(Message::SubmitFinished(result)).await;
        });
    }

    /// Carry out a navigation request.
    pub fn navigate(&mut self, request: NavigationRequest) {
        match request.route {
            Route::Home => {
                // Returning home remounts the list view: reload.
                self.detail = None;
                self.screen = Screen::Home;
                self.request_load();
            }
            Route::PatientDetail { id } => {
                self.request_detail(Screen::PatientDetail, id, request.patient);
            }
            Route::Dashboard { id } => {
                self.request_detail(Screen::Dashboard, id, request.patient);
            }
        }
    }

    fn request_detail(&self, screen: Screen, id: i64, carried: Option<Patient>) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let view = DetailView::resolve(&client, id, carried).await;
            let _ = tx.send(Message::Navigated(screen, view)).await;
        });
    }

    /// Return to the home screen.
    pub fn go_home(&mut self) {
        self.navigate(NavigationRequest {
            route: Route::Home,
            patient: None,
        });
    }

    /// Open the dashboard for the record on the current detail screen.
    pub fn open_dashboard(&mut self) {
        let Some(detail) = &self.detail else {
            return;
        };
        let id = detail.id();
        let patient = detail.patient().cloned();
        self.navigate(NavigationRequest {
            route: Route::Dashboard { id },
            patient,
        });
    }

    /// Move the list selection up.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the list selection down.
    pub fn select_next(&mut self) {
        let len = self.home.patients().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Clamp the selection after the list changed underneath it.
    pub fn clamp_selection(&mut self) {
        let len = self.home.patients().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
