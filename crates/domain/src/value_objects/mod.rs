//! Value objects for the registration panel

mod calendar;
mod gender;
mod names;

pub use calendar::{
    days_in_month, first_weekday, format_dmy, format_iso, format_long, parse_iso,
    CalendarCursor, DayCell, DayGrid, YearRange, MONTH_NAMES, WEEKDAY_LABELS,
};
pub use gender::Gender;
pub use names::{finalize_name, sanitize_name};
