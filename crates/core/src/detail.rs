//! Detail view: record resolution for `/patient/:id`.

use passo_client::PatientDirectory;
use passo_types::Patient;

/// State behind the per-patient detail and dashboard screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    id: i64,
    patient: Option<Patient>,
}

impl DetailView {
    /// Resolve the record for `id`.
    ///
    /// Always re-fetches by identifier (the registry offers no
    /// single-resource read, so this lists and finds) and only falls back to
    /// the record carried as transient navigation state. A carried record may
    /// be missing entirely, e.g. when the view is reached after a reload.
    pub async fn resolve<D: PatientDirectory>(
        directory: &D,
        id: i64,
        carried: Option<Patient>,
    ) -> Self {
        let fetched = match directory.list_patients().await {
            Ok(patients) => patients.into_iter().find(|p| p.id == id),
            Err(e) => {
                tracing::warn!("failed to fetch patient {id}: {e}");
                None
            }
        };

        Self {
            id,
            patient: fetched.or(carried),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// The resolved record, if either the registry or the carried state
    /// provided one.
    pub fn patient(&self) -> Option<&Patient> {
        self.patient.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use passo_client::{ApiError, ApiResult};
    use passo_types::PatientName;

    /// Directory whose list either succeeds with a fixed collection or fails.
    struct FixedDirectory {
        patients: Option<Vec<Patient>>,
    }

    #[async_trait]
    impl PatientDirectory for FixedDirectory {
        async fn list_patients(&self) -> ApiResult<Vec<Patient>> {
            match &self.patients {
                Some(patients) => Ok(patients.clone()),
                None => Err(ApiError::Connection("http://localhost:8000".into())),
            }
        }

        async fn create_patient(&self, _name: &PatientName) -> ApiResult<()> {
            Ok(())
        }
    }

    fn patient(id: i64, name: &str) -> Patient {
        Patient {
            id,
            name: name.to_owned(),
        }
    }

    #[tokio::test]
    async fn prefers_server_record_over_carried_state() {
        let directory = FixedDirectory {
            patients: Some(vec![patient(7, "Ana Maria")]),
        };

        let view = DetailView::resolve(&directory, 7, Some(patient(7, "Ana"))).await;

        assert_eq!(view.patient(), Some(&patient(7, "Ana Maria")));
    }

    #[tokio::test]
    async fn falls_back_to_carried_state_on_fetch_failure() {
        let directory = FixedDirectory { patients: None };

        let view = DetailView::resolve(&directory, 7, Some(patient(7, "Ana"))).await;

        assert_eq!(view.id(), 7);
        assert_eq!(view.patient(), Some(&patient(7, "Ana")));
    }

    #[tokio::test]
    async fn falls_back_when_id_is_absent_from_collection() {
        let directory = FixedDirectory {
            patients: Some(vec![patient(1, "Bia")]),
        };

        let view = DetailView::resolve(&directory, 7, Some(patient(7, "Ana"))).await;

        assert_eq!(view.patient(), Some(&patient(7, "Ana")));
    }

    #[tokio::test]
    async fn unresolvable_record_is_none() {
        let directory = FixedDirectory { patients: None };

        let view = DetailView::resolve(&directory, 7, None).await;

        assert_eq!(view.patient(), None);
    }
}
