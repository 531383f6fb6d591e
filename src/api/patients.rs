//! Patient registry endpoints.

use crate::error::ApiError;
use crate::models::Patient;

use super::client::ClinicClient;
use super::types::{PatientCreate, PatientStatusUpdate, PatientUpdate};

impl ClinicClient {
    pub fn create_patient(&self, request: &PatientCreate) -> Result<Patient, ApiError> {
        tracing::info!(name = %request.name, "creating patient");
        self.send_json(self.post("/patients").json(request))
    }

    pub fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.send_json(self.get("/patients"))
    }

    pub fn active_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.send_json(self.get("/patients/active"))
    }

    pub fn patient(&self, id: i64) -> Result<Patient, ApiError> {
        self.send_json(self.get(&format!("/patients/{id}")))
    }

    /// Free-text search, as typed into the booking form's patient box.
    pub fn search_patients(&self, name: &str) -> Result<Vec<Patient>, ApiError> {
        self.send_json(self.get("/patients/search").query(&[("name", name)]))
    }

    pub fn patient_by_cpf(&self, cpf: &str) -> Result<Patient, ApiError> {
        self.send_json(self.get(&format!("/patients/cpf/{cpf}")))
    }

    pub fn update_patient(&self, id: i64, request: &PatientUpdate) -> Result<Patient, ApiError> {
        tracing::info!(id, "updating patient");
        self.send_json(self.put(&format!("/patients/{id}")).json(request))
    }

    pub fn update_patient_status(&self, id: i64, active: bool) -> Result<Patient, ApiError> {
        tracing::info!(id, active, "updating patient status");
        let body = PatientStatusUpdate { active };
        self.send_json(self.patch(&format!("/patients/{id}/status")).json(&body))
    }

    pub fn delete_patient(&self, id: i64) -> Result<(), ApiError> {
        tracing::info!(id, "deleting patient");
        self.send_no_content(self.delete(&format!("/patients/{id}")))
    }
}
