//! The booking submit path: validate the form, check availability,
//! hand the request to the backend.
//!
//! Validation failures never reach the network. Availability is checked
//! fail-open, so the backend's own conflict rejection (HTTP 409) is the
//! final word and surfaces as [`BookingError::Conflict`].

use chrono::{Datelike, NaiveDateTime, Weekday};
use thiserror::Error;

use crate::api::{AppointmentCreate, AppointmentUpdate, ClinicBackend};
use crate::availability::AvailabilityChecker;
use crate::error::ApiError;
use crate::models::{Appointment, AppointmentStatus};
use crate::schedule::work_calendar;

/// What the booking form holds before submission. Everything is
/// optional until validation pins it down.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub patient_id: Option<i64>,
    pub patient_name: Option<String>,
    pub dentist_id: Option<i64>,
    pub date_time: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Why a booking was refused. Each variant maps to one user
/// notification.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Select a dentist")]
    MissingDentist,

    #[error("Select a date and time")]
    MissingDateTime,

    #[error("Select a future date and time")]
    PastDateTime,

    #[error("The clinic is closed on Sundays")]
    SundayClosed,

    #[error("Outside Saturday hours (08:00-12:00)")]
    OutsideSaturdayHours,

    #[error("Outside working hours (09:00-12:00 and 14:00-18:00)")]
    OutsideWeekdayHours,

    #[error("Select a registered patient or enter the patient's name")]
    MissingPatient,

    #[error("A {0} appointment can no longer change status")]
    TerminalStatus(AppointmentStatus),

    #[error("The selected slot is no longer available")]
    SlotUnavailable,

    #[error("Scheduling conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Backend(ApiError),
}

/// Shape-check a draft, returning the pinned dentist and instant.
/// Mirrors the order a receptionist sees the messages in the form.
pub fn validate_draft(
    draft: &BookingDraft,
    now: NaiveDateTime,
) -> Result<(i64, NaiveDateTime), BookingError> {
    let dentist_id = draft.dentist_id.ok_or(BookingError::MissingDentist)?;
    let at = draft.date_time.ok_or(BookingError::MissingDateTime)?;

    if at <= now {
        return Err(BookingError::PastDateTime);
    }
    if !work_calendar::is_valid_appointment_date(at.date()) {
        return Err(BookingError::SundayClosed);
    }
    if !work_calendar::is_valid_appointment_time(at) {
        return Err(if at.date().weekday() == Weekday::Sat {
            BookingError::OutsideSaturdayHours
        } else {
            BookingError::OutsideWeekdayHours
        });
    }

    let has_name = draft
        .patient_name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty());
    if draft.patient_id.is_none() && !has_name {
        return Err(BookingError::MissingPatient);
    }

    Ok((dentist_id, at))
}

/// Client-side mirror of the backend's status rule: once completed or
/// canceled, an appointment's status is frozen.
pub fn validate_status_change(
    current: &AppointmentStatus,
    requested: &AppointmentStatus,
) -> Result<(), BookingError> {
    if current.is_terminal() {
        return Err(BookingError::TerminalStatus(current.clone()));
    }
    tracing::debug!(from = current.as_str(), to = requested.as_str(), "status transition");
    Ok(())
}

/// Submit a draft: create a new appointment, or rebook the appointment
/// in `editing`.
pub fn submit<B: ClinicBackend>(
    checker: &AvailabilityChecker<'_, B>,
    draft: &BookingDraft,
    editing: Option<i64>,
    now: NaiveDateTime,
) -> Result<Appointment, BookingError> {
    let (dentist_id, at) = validate_draft(draft, now)?;

    let check = checker.check(dentist_id, at);
    if !check.available {
        return Err(BookingError::SlotUnavailable);
    }

    let result = match editing {
        Some(id) => {
            let request = AppointmentUpdate {
                patient_id: draft.patient_id,
                dentist_id,
                date_time: at,
                notes: draft.notes.clone(),
                phone: draft.phone.clone(),
                email: draft.email.clone(),
            };
            checker.backend().update_appointment(id, &request)
        }
        None => {
            let request = AppointmentCreate {
                patient_id: draft.patient_id,
                patient_name: draft.patient_name.clone(),
                dentist_id,
                dentist_name: None,
                date_time: at,
                status: AppointmentStatus::Scheduled,
                notes: draft.notes.clone(),
                phone: draft.phone.clone(),
                email: draft.email.clone(),
            };
            checker.backend().create_appointment(&request)
        }
    };

    result.map_err(|error| match error {
        ApiError::Conflict(message) => BookingError::Conflict(message),
        other => BookingError::Backend(other),
    })
}

/// Change an appointment's status after checking the terminal rule.
pub fn change_status<B: ClinicBackend>(
    backend: &B,
    id: i64,
    current: &AppointmentStatus,
    requested: AppointmentStatus,
) -> Result<Appointment, BookingError> {
    validate_status_change(current, &requested)?;
    backend
        .update_appointment_status(id, requested)
        .map_err(|error| match error {
            ApiError::Conflict(message) => BookingError::Conflict(message),
            other => BookingError::Backend(other),
        })
}
