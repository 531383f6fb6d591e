//! Availability checking against the clinic backend.
//!
//! The backend owns the truth about which slots are taken; this module
//! asks it and deliberately fails open. A transport or server failure
//! answers "available" so a flaky network never blocks the receptionist
//! from booking; the backend still rejects a real conflict at submit
//! time. That tradeoff is intentional and must not become fail-closed.
//!
//! Checks are stamped with a request generation so a delayed response
//! from an earlier check can be recognized as stale and dropped instead
//! of overwriting a newer answer.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::api::{AvailabilityRequest, ClinicBackend};
use crate::schedule::work_calendar;

/// Outcome of one availability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityCheck {
    /// Which check this answer belongs to; compare via
    /// [`AvailabilityChecker::is_current`].
    pub generation: u64,
    pub available: bool,
}

/// Asks the backend whether a dentist/instant pair can be booked.
pub struct AvailabilityChecker<'a, B: ClinicBackend> {
    backend: &'a B,
    generation: AtomicU64,
}

impl<'a, B: ClinicBackend> AvailabilityChecker<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            backend,
            generation: AtomicU64::new(0),
        }
    }

    pub fn backend(&self) -> &'a B {
        self.backend
    }

    /// Is this dentist free at this instant?
    ///
    /// Queries the day's free slots over the fixed 08:00-17:00 window
    /// and looks for the candidate's exact `HH:MM`. Any failure is
    /// logged and treated as available (fail-open).
    pub fn check(&self, dentist_id: i64, at: NaiveDateTime) -> AvailabilityCheck {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let request = AvailabilityRequest::for_date(dentist_id, at.date());

        let available = match self.backend.free_slots(&request) {
            Ok(slots) => {
                let candidate = at.format("%H:%M").to_string();
                slots.iter().any(|slot| *slot == candidate)
            }
            Err(error) => {
                tracing::warn!(
                    %error,
                    dentist_id,
                    at = %at,
                    "availability check failed, assuming slot is free"
                );
                true
            }
        };

        AvailabilityCheck {
            generation,
            available,
        }
    }

    /// Whether no newer check has been started since this one.
    pub fn is_current(&self, check: &AvailabilityCheck) -> bool {
        check.generation == self.generation.load(Ordering::SeqCst)
    }

    /// The dentist's next bookable instant.
    ///
    /// The backend computes this from its live agenda; if it cannot be
    /// reached, fall back to the first open day starting tomorrow at
    /// opening time.
    pub fn next_slot(&self, dentist_id: i64, now: NaiveDateTime) -> NaiveDateTime {
        match self.backend.next_slot(dentist_id) {
            Ok(response) => response.date_time,
            Err(error) => {
                tracing::warn!(%error, dentist_id, "next-slot lookup failed, searching locally");
                local_next_slot(now)
            }
        }
    }
}

/// Offline approximation of the next bookable instant: 08:00 tomorrow,
/// advancing a day at a time until the clinic is open and the candidate
/// is strictly in the future.
fn local_next_slot(now: NaiveDateTime) -> NaiveDateTime {
    let opening = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let mut candidate = (now.date() + Duration::days(1)).and_time(opening);

    while !work_calendar::is_valid_appointment_date(candidate.date()) || candidate <= now {
        candidate = (candidate.date() + Duration::days(1)).and_time(opening);
    }

    candidate
}
