use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::status::AppointmentStatus;

/// A booked consultation as the backend returns it.
///
/// The patient reference is either a registered patient id or, for
/// walk-in bookings, just the free-text name the receptionist entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    #[serde(default)]
    pub patient_id: Option<i64>,
    pub patient_name: String,
    pub dentist_id: i64,
    pub dentist_name: String,
    #[serde(with = "crate::models::wire::minute_datetime")]
    pub date_time: NaiveDateTime,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(with = "crate::models::wire::minute_datetime")]
    pub registered_at: NaiveDateTime,
}

/// One row of an appointment listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSummary {
    pub id: i64,
    pub patient_name: String,
    pub dentist_name: String,
    #[serde(with = "crate::models::wire::minute_datetime")]
    pub date_time: NaiveDateTime,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub phone: Option<String>,
}
