//! Request and response payloads, one explicit DTO per endpoint shape.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::AppointmentStatus;

/// Body for `POST /appointments`.
///
/// Either `patient_id` (registered patient) or `patient_name` (walk-in)
/// identifies the patient; the client validates that one is present
/// before sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCreate {
    pub patient_id: Option<i64>,
    pub patient_name: Option<String>,
    pub dentist_id: i64,
    /// Filled in by the backend from `dentist_id` when omitted.
    pub dentist_name: Option<String>,
    #[serde(with = "crate::models::wire::minute_datetime")]
    pub date_time: NaiveDateTime,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Body for `PUT /appointments/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    pub patient_id: Option<i64>,
    pub dentist_id: i64,
    #[serde(with = "crate::models::wire::minute_datetime")]
    pub date_time: NaiveDateTime,
    pub notes: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Body for `PATCH /appointments/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: AppointmentStatus,
}

/// Body for `POST /appointments/availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub dentist_id: i64,
    pub date: NaiveDate,
    #[serde(with = "crate::models::wire::hm_time")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::models::wire::hm_time")]
    pub end_time: NaiveTime,
}

impl AvailabilityRequest {
    /// The fixed 08:00-17:00 window every availability check queries.
    pub fn for_date(dentist_id: i64, date: NaiveDate) -> Self {
        Self {
            dentist_id,
            date,
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        }
    }
}

/// Response of `GET /appointments/dentist/{id}/next-slot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextSlotResponse {
    #[serde(with = "crate::models::wire::minute_datetime")]
    pub date_time: NaiveDateTime,
    pub dentist_name: String,
    pub patient_name: String,
}

/// Body for `POST /dentists`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DentistCreate {
    pub name: String,
    pub cro: String,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
}

/// Body for `PUT /dentists/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DentistUpdate {
    pub name: Option<String>,
    pub cro: Option<String>,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
}

/// Body for `POST /patients`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientCreate {
    pub name: String,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// Body for `PUT /patients/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// Body for `PATCH /patients/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientStatusUpdate {
    pub active: bool,
}
