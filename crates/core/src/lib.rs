//! # Passo Core
//!
//! View logic for the Passo patient-registry client.
//!
//! This crate contains the state and workflows behind each screen:
//! - Home: patient list loading, registration and selection
//! - Detail: record resolution with transient-state fallback
//! - Routing types and startup configuration
//!
//! **No transport or rendering concerns**: HTTP plumbing lives in
//! `passo-client` and terminal drawing in the run binary.

pub mod config;
pub mod detail;
pub mod home;
pub mod route;

pub use config::{ClientConfig, ConfigError};
pub use detail::DetailView;
pub use home::HomeView;
pub use route::{NavigationRequest, Route};
