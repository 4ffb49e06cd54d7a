//! Registry API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use passo_types::{Patient, PatientName};

use crate::types::CreatePatientReq;

/// Errors that can occur when talking to the registry API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("cannot connect to {0}")]
    Connection(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
    #[error("failed to parse response: {0}")]
    Parse(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Read/create access to the patient collection.
///
/// The trait is the seam between view logic and transport: views hold a
/// `PatientDirectory` and never see URLs or response bodies.
#[async_trait]
pub trait PatientDirectory {
    /// Fetch the full patient collection, in server order.
    async fn list_patients(&self) -> ApiResult<Vec<Patient>>;

    /// Register a new patient. The response body is unused; any 2xx status
    /// counts as success.
    async fn create_patient(&self, name: &PatientName) -> ApiResult<()>;
}

/// HTTP client for the registry collection endpoint.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: Client,
    base_url: String,
}

impl RegistryClient {
    /// Create a new registry client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    fn patients_url(&self) -> String {
        format!("{}/patients", self.base_url)
    }

    fn map_send_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_connect() {
            ApiError::Connection(self.base_url.clone())
        } else {
            ApiError::Http(e)
        }
    }
}

#[async_trait]
impl PatientDirectory for RegistryClient {
    async fn list_patients(&self) -> ApiResult<Vec<Patient>> {
        let response = self
            .client
            .get(self.patients_url())
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        response
            .json::<Vec<Patient>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn create_patient(&self, name: &PatientName) -> ApiResult<()> {
        let body = CreatePatientReq {
            name: name.as_str().to_owned(),
        };

        let response = self
            .client
            .post(self.patients_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use axum::http::StatusCode as ServerStatus;
    use axum::routing::{get, post};
    use axum::{Json, Router};

    /// Bind a router to an ephemeral loopback port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve");
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn list_preserves_server_order() {
        let router = Router::new().route(
            "/patients",
            get(|| async {
                // Extra fields mimic the real backend response.
                Json(serde_json::json!([
                    {"id": 3, "name": "Carla", "created_at": "2024-01-03T00:00:00"},
                    {"id": 1, "name": "Ana", "created_at": "2024-01-01T00:00:00"},
                    {"id": 2, "name": "Bia", "created_at": "2024-01-02T00:00:00"},
                ]))
            }),
        );
        let client = RegistryClient::new(serve(router).await).unwrap();

        let patients = client.list_patients().await.unwrap();

        let ids: Vec<i64> = patients.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(patients[1].name, "Ana");
    }

    #[tokio::test]
    async fn list_non_success_maps_to_status() {
        let router = Router::new().route(
            "/patients",
            get(|| async { ServerStatus::INTERNAL_SERVER_ERROR }),
        );
        let client = RegistryClient::new(serve(router).await).unwrap();

        let err = client.list_patients().await.unwrap_err();
        assert!(matches!(err, ApiError::Status(s) if s.as_u16() == 500));
    }

    #[tokio::test]
    async fn list_malformed_body_is_parse_error() {
        let router = Router::new().route("/patients", get(|| async { "not json" }));
        let client = RegistryClient::new(serve(router).await).unwrap();

        let err = client.list_patients().await.unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[tokio::test]
    async fn create_sends_json_name_body() {
        let received: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let router = Router::new()
            .route(
                "/patients",
                post(
                    // The Json extractor rejects requests without a JSON
                    // content type, so reaching the handler also proves the
                    // header was set.
                    |State(received): State<Arc<Mutex<Vec<String>>>>,
                     Json(req): Json<CreatePatientReq>| async move {
                        received.lock().unwrap().push(req.name);
                        ServerStatus::CREATED
                    },
                ),
            )
            .with_state(received.clone());
        let client = RegistryClient::new(serve(router).await).unwrap();

        let name = PatientName::new("Ana").unwrap();
        client.create_patient(&name).await.unwrap();

        assert_eq!(*received.lock().unwrap(), vec!["Ana".to_string()]);
    }

    #[tokio::test]
    async fn create_non_success_is_status_error() {
        let router = Router::new().route(
            "/patients",
            post(|| async { ServerStatus::UNPROCESSABLE_ENTITY }),
        );
        let client = RegistryClient::new(serve(router).await).unwrap();

        let name = PatientName::new("Ana").unwrap();
        let err = client.create_patient(&name).await.unwrap_err();
        assert!(matches!(err, ApiError::Status(s) if s.as_u16() == 422));
    }

    #[tokio::test]
    async fn unreachable_server_is_connection_error() {
        // Nothing listens on port 1.
        let client = RegistryClient::new("http://127.0.0.1:1").unwrap();

        let err = client.list_patients().await.unwrap_err();
        assert!(matches!(err, ApiError::Connection(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = RegistryClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.patients_url(), "http://localhost:8000/patients");
    }
}
