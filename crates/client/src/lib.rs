//! HTTP client for the patient-registry collection endpoint.
//!
//! The registry exposes a single REST resource:
//! - `GET /patients` — full collection as a JSON array
//! - `POST /patients` — create a patient from a JSON `{name}` body
//!
//! View logic depends on the [`PatientDirectory`] trait rather than on the
//! concrete [`RegistryClient`], so it can be exercised without a server.

mod client;
mod types;

pub use client::{ApiError, ApiResult, PatientDirectory, RegistryClient};
pub use types::CreatePatientReq;
