//! Identity Panel domain.
//!
//! Pure state and rules for the character-registration panel: the runtime
//! configuration pushed by the host, the form fields and their sanitization,
//! the calendar/month/year picker, and the submit-time validation that turns
//! a filled form into a [`Registration`].
//!
//! Nothing here performs I/O. Every transition is a plain method on
//! [`RegistrationPanel`] so the UI layer can drive it from event handlers and
//! tests can drive it directly.

pub mod config;
pub mod date_picker;
pub mod error;
pub mod panel;
pub mod registration;
pub mod value_objects;

pub use config::PanelConfig;
pub use date_picker::{DatePicker, PickerView};
pub use error::{FormField, RegistrationError};
pub use panel::RegistrationPanel;
pub use registration::{parse_height, validate, FormState, Registration};
pub use value_objects::{
    days_in_month, finalize_name, first_weekday, format_dmy, format_iso, format_long, parse_iso,
    sanitize_name, CalendarCursor, DayCell, DayGrid, Gender, YearRange, MONTH_NAMES,
    WEEKDAY_LABELS,
};
