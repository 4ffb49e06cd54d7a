//! Wire types for the collection endpoint.

/// Request body for `POST /patients`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreatePatientReq {
    /// Display name of the patient to register.
    pub name: String,
}
