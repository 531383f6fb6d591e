//! Typed REST client for the clinic backend.
//!
//! `ClinicClient` is the real HTTP client; `ClinicBackend` is the seam
//! the scheduling side talks through so availability and booking logic
//! can be exercised against `MockBackend` without a server.

pub mod client;
pub mod types;

mod appointments;
mod dentists;
mod patients;

pub use client::ClinicClient;
pub use types::{
    AppointmentCreate, AppointmentUpdate, AvailabilityRequest, DentistCreate, DentistUpdate,
    NextSlotResponse, PatientCreate, PatientStatusUpdate, PatientUpdate, StatusUpdate,
};

use std::cell::RefCell;

use chrono::NaiveDate;

use crate::error::ApiError;
use crate::models::{Appointment, AppointmentStatus};

/// The slice of the backend the scheduling logic depends on.
pub trait ClinicBackend {
    fn create_appointment(&self, request: &AppointmentCreate) -> Result<Appointment, ApiError>;

    fn update_appointment(
        &self,
        id: i64,
        request: &AppointmentUpdate,
    ) -> Result<Appointment, ApiError>;

    fn update_appointment_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<Appointment, ApiError>;

    /// Free `HH:MM` slots for one dentist on one day.
    fn free_slots(&self, request: &AvailabilityRequest) -> Result<Vec<String>, ApiError>;

    /// The dentist's next bookable instant, as the backend sees it.
    fn next_slot(&self, dentist_id: i64) -> Result<NextSlotResponse, ApiError>;
}

/// Scripted in-memory backend for exercising scheduling logic in tests.
///
/// `None` for a response means that endpoint fails with a connection
/// error, which is how transport outages are simulated.
pub struct MockBackend {
    slots: Option<Vec<String>>,
    next: Option<NextSlotResponse>,
    conflict: Option<String>,
    created: RefCell<Vec<AppointmentCreate>>,
    updated: RefCell<Vec<(i64, AppointmentUpdate)>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            slots: Some(
                ["08:00", "09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            next: None,
            conflict: None,
            created: RefCell::new(Vec::new()),
            updated: RefCell::new(Vec::new()),
        }
    }

    pub fn with_free_slots(mut self, slots: Vec<&str>) -> Self {
        self.slots = Some(slots.into_iter().map(String::from).collect());
        self
    }

    /// Availability endpoint becomes unreachable.
    pub fn with_availability_outage(mut self) -> Self {
        self.slots = None;
        self
    }

    pub fn with_next_slot(mut self, response: NextSlotResponse) -> Self {
        self.next = Some(response);
        self
    }

    /// Create and update start failing with a scheduling conflict.
    pub fn with_conflict(mut self, message: &str) -> Self {
        self.conflict = Some(message.to_string());
        self
    }

    pub fn created(&self) -> Vec<AppointmentCreate> {
        self.created.borrow().clone()
    }

    pub fn updated(&self) -> Vec<(i64, AppointmentUpdate)> {
        self.updated.borrow().clone()
    }

    fn unreachable() -> ApiError {
        ApiError::Connection("http://mock.invalid".into())
    }

    fn fabricate(
        &self,
        id: i64,
        request: &AppointmentCreate,
        status: AppointmentStatus,
    ) -> Appointment {
        Appointment {
            id,
            patient_id: request.patient_id,
            patient_name: request
                .patient_name
                .clone()
                .unwrap_or_else(|| "Walk-in".into()),
            dentist_id: request.dentist_id,
            dentist_name: request
                .dentist_name
                .clone()
                .unwrap_or_else(|| "Dentist".into()),
            date_time: request.date_time,
            status,
            notes: request.notes.clone(),
            phone: request.phone.clone(),
            email: request.email.clone(),
            registered_at: request.date_time,
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ClinicBackend for MockBackend {
    fn create_appointment(&self, request: &AppointmentCreate) -> Result<Appointment, ApiError> {
        if let Some(message) = &self.conflict {
            return Err(ApiError::Conflict(message.clone()));
        }
        self.created.borrow_mut().push(request.clone());
        let id = 100 + self.created.borrow().len() as i64;
        Ok(self.fabricate(id, request, request.status.clone()))
    }

    fn update_appointment(
        &self,
        id: i64,
        request: &AppointmentUpdate,
    ) -> Result<Appointment, ApiError> {
        if let Some(message) = &self.conflict {
            return Err(ApiError::Conflict(message.clone()));
        }
        self.updated.borrow_mut().push((id, request.clone()));
        let echo = AppointmentCreate {
            patient_id: request.patient_id,
            patient_name: None,
            dentist_id: request.dentist_id,
            dentist_name: None,
            date_time: request.date_time,
            status: AppointmentStatus::Scheduled,
            notes: request.notes.clone(),
            phone: request.phone.clone(),
            email: request.email.clone(),
        };
        Ok(self.fabricate(id, &echo, AppointmentStatus::Scheduled))
    }

    fn update_appointment_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<Appointment, ApiError> {
        let echo = AppointmentCreate {
            patient_id: None,
            patient_name: None,
            dentist_id: 0,
            dentist_name: None,
            date_time: NaiveDate::from_ymd_opt(2026, 1, 5)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            status: status.clone(),
            notes: None,
            phone: None,
            email: None,
        };
        Ok(self.fabricate(id, &echo, status))
    }

    fn free_slots(&self, _request: &AvailabilityRequest) -> Result<Vec<String>, ApiError> {
        self.slots.clone().ok_or_else(Self::unreachable)
    }

    fn next_slot(&self, _dentist_id: i64) -> Result<NextSlotResponse, ApiError> {
        self.next.clone().ok_or_else(Self::unreachable)
    }
}
