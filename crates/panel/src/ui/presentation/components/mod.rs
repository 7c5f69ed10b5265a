//! UI components for the registration panel

pub mod date_picker;
pub mod gender_toggle;
pub mod registration_form;

pub use date_picker::DateOfBirthPicker;
pub use gender_toggle::GenderToggle;
pub use registration_form::RegistrationForm;
