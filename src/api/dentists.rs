//! Dentist registry endpoints.

use crate::error::ApiError;
use crate::models::Dentist;

use super::client::ClinicClient;
use super::types::{DentistCreate, DentistUpdate};

impl ClinicClient {
    pub fn create_dentist(&self, request: &DentistCreate) -> Result<Dentist, ApiError> {
        tracing::info!(cro = %request.cro, "creating dentist");
        self.send_json(self.post("/dentists").json(request))
    }

    pub fn list_dentists(&self) -> Result<Vec<Dentist>, ApiError> {
        self.send_json(self.get("/dentists"))
    }

    pub fn active_dentists(&self) -> Result<Vec<Dentist>, ApiError> {
        self.send_json(self.get("/dentists/active"))
    }

    pub fn dentist(&self, id: i64) -> Result<Dentist, ApiError> {
        self.send_json(self.get(&format!("/dentists/{id}")))
    }

    pub fn dentist_by_cro(&self, cro: &str) -> Result<Dentist, ApiError> {
        self.send_json(self.get(&format!("/dentists/cro/{cro}")))
    }

    pub fn dentist_by_email(&self, email: &str) -> Result<Dentist, ApiError> {
        self.send_json(self.get(&format!("/dentists/email/{email}")))
    }

    pub fn dentists_by_specialty(&self, specialty: &str) -> Result<Vec<Dentist>, ApiError> {
        self.send_json(self.get(&format!("/dentists/specialty/{specialty}")))
    }

    pub fn dentists_by_name(&self, name: &str) -> Result<Vec<Dentist>, ApiError> {
        self.send_json(self.get("/dentists/search").query(&[("name", name)]))
    }

    pub fn update_dentist(&self, id: i64, request: &DentistUpdate) -> Result<Dentist, ApiError> {
        tracing::info!(id, "updating dentist");
        self.send_json(self.put(&format!("/dentists/{id}")).json(request))
    }

    pub fn delete_dentist(&self, id: i64) -> Result<(), ApiError> {
        tracing::info!(id, "deleting dentist");
        self.send_no_content(self.delete(&format!("/dentists/{id}")))
    }

    /// Keeps the record for appointment history but hides the dentist
    /// from booking forms.
    pub fn deactivate_dentist(&self, id: i64) -> Result<(), ApiError> {
        tracing::info!(id, "deactivating dentist");
        self.send_no_content(self.patch(&format!("/dentists/{id}/deactivate")))
    }

    pub fn cro_exists(&self, cro: &str) -> Result<bool, ApiError> {
        self.send_json(self.get(&format!("/dentists/exists/cro/{cro}")))
    }
}
