//! Appointment endpoints.

use crate::error::ApiError;
use crate::models::{Appointment, AppointmentStatus, AppointmentSummary};

use super::client::ClinicClient;
use super::types::{
    AppointmentCreate, AppointmentUpdate, AvailabilityRequest, NextSlotResponse, StatusUpdate,
};
use super::ClinicBackend;

impl ClinicClient {
    pub fn create_appointment(&self, request: &AppointmentCreate) -> Result<Appointment, ApiError> {
        tracing::info!(dentist_id = request.dentist_id, "creating appointment");
        self.send_json(self.post("/appointments").json(request))
    }

    pub fn list_appointments(&self) -> Result<Vec<AppointmentSummary>, ApiError> {
        self.send_json(self.get("/appointments"))
    }

    pub fn appointments_by_dentist(
        &self,
        dentist_id: i64,
    ) -> Result<Vec<AppointmentSummary>, ApiError> {
        self.send_json(self.get(&format!("/appointments/dentist/{dentist_id}")))
    }

    pub fn appointments_by_patient(
        &self,
        patient_id: i64,
    ) -> Result<Vec<AppointmentSummary>, ApiError> {
        self.send_json(self.get(&format!("/appointments/patient/{patient_id}")))
    }

    pub fn appointments_by_status(
        &self,
        status: &AppointmentStatus,
    ) -> Result<Vec<AppointmentSummary>, ApiError> {
        self.send_json(self.get(&format!("/appointments/status/{}", status.as_str())))
    }

    pub fn appointment(&self, id: i64) -> Result<Appointment, ApiError> {
        self.send_json(self.get(&format!("/appointments/{id}")))
    }

    pub fn update_appointment(
        &self,
        id: i64,
        request: &AppointmentUpdate,
    ) -> Result<Appointment, ApiError> {
        tracing::info!(id, "updating appointment");
        self.send_json(self.put(&format!("/appointments/{id}")).json(request))
    }

    pub fn update_appointment_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<Appointment, ApiError> {
        tracing::info!(id, status = status.as_str(), "updating appointment status");
        let body = StatusUpdate { status };
        self.send_json(self.patch(&format!("/appointments/{id}/status")).json(&body))
    }

    /// Hard delete.
    pub fn delete_appointment(&self, id: i64) -> Result<(), ApiError> {
        tracing::info!(id, "deleting appointment");
        self.send_no_content(self.delete(&format!("/appointments/{id}")))
    }

    /// Soft removal; the record stays but leaves every listing.
    pub fn deactivate_appointment(&self, id: i64) -> Result<(), ApiError> {
        tracing::info!(id, "deactivating appointment");
        self.send_no_content(self.patch(&format!("/appointments/{id}/deactivate")))
    }

    pub fn free_slots(&self, request: &AvailabilityRequest) -> Result<Vec<String>, ApiError> {
        tracing::debug!(
            dentist_id = request.dentist_id,
            date = %request.date,
            "querying availability"
        );
        self.send_json(self.post("/appointments/availability").json(request))
    }

    pub fn next_slot(&self, dentist_id: i64) -> Result<NextSlotResponse, ApiError> {
        self.send_json(self.get(&format!("/appointments/dentist/{dentist_id}/next-slot")))
    }
}

impl ClinicBackend for ClinicClient {
    fn create_appointment(&self, request: &AppointmentCreate) -> Result<Appointment, ApiError> {
        ClinicClient::create_appointment(self, request)
    }

    fn update_appointment(
        &self,
        id: i64,
        request: &AppointmentUpdate,
    ) -> Result<Appointment, ApiError> {
        ClinicClient::update_appointment(self, id, request)
    }

    fn update_appointment_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<Appointment, ApiError> {
        ClinicClient::update_appointment_status(self, id, status)
    }

    fn free_slots(&self, request: &AvailabilityRequest) -> Result<Vec<String>, ApiError> {
        ClinicClient::free_slots(self, request)
    }

    fn next_slot(&self, dentist_id: i64) -> Result<NextSlotResponse, ApiError> {
        ClinicClient::next_slot(self, dentist_id)
    }
}
