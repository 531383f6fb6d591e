pub mod appointment;
pub mod dentist;
pub mod patient;
pub mod status;
pub mod wire;

pub use appointment::{Appointment, AppointmentSummary};
pub use dentist::Dentist;
pub use patient::Patient;
pub use status::AppointmentStatus;
