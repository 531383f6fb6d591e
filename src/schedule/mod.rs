pub mod month_grid;
pub mod work_calendar;

pub use month_grid::{month_grid, DayCell, DAILY_CAPACITY};
pub use work_calendar::{
    available_dates, is_valid_appointment_date, is_valid_appointment_time, slot_labels, time_slots,
};
