//! Registration form fields and submit-time validation

use chrono::NaiveDate;

use crate::config::PanelConfig;
use crate::error::{FormField, RegistrationError};
use crate::value_objects::{finalize_name, format_dmy, parse_iso, sanitize_name, Gender};

/// Everything the player has typed or picked so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Letters and whitespace only, at most `max_name_length` characters
    pub first_name: String,
    /// Same constraints as `first_name`
    pub last_name: String,
    /// ISO `YYYY-MM-DD`, empty until a day is picked
    pub date_of_birth: String,
    /// Raw text from the height input; parsed at submit time
    pub height: String,
    pub gender: Option<Gender>,
}

impl FormState {
    pub fn set_first_name(&mut self, raw: &str, config: &PanelConfig) {
        self.first_name = sanitize_name(raw, config.name_limit());
    }

    pub fn set_last_name(&mut self, raw: &str, config: &PanelConfig) {
        self.last_name = sanitize_name(raw, config.name_limit());
    }

    pub fn set_height(&mut self, raw: &str) {
        self.height = raw.to_string();
    }

    /// Choosing one gender deselects the other.
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = Some(gender);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A validated registration, normalized for the identity backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub height: i32,
    pub gender: Gender,
}

impl Registration {
    /// Date of birth as `DD/MM/YYYY`.
    pub fn date_of_birth_dmy(&self) -> String {
        format_dmy(self.date_of_birth)
    }
}

/// Read a leading integer from `raw`.
///
/// Leading whitespace and a single sign are accepted; anything after the
/// digits is ignored (`"180cm"` reads as 180, `"180.9"` as 180). Values too
/// large for `i64` saturate, which the range check then rejects.
///
/// # Errors
///
/// Returns `RegistrationError::InvalidHeight` if no digit follows the
/// optional sign.
pub fn parse_height(raw: &str) -> Result<i64, RegistrationError> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(10))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return Err(RegistrationError::InvalidHeight(raw.to_string()));
    }

    let magnitude = digits
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));
    Ok(if negative { -magnitude } else { magnitude })
}

/// Validate `form` against `config`, in submit order.
///
/// 1. every field present
/// 2. height is an integer within bounds
/// 3. names still non-empty after a second sanitization pass
/// 4. date of birth is a real date
///
/// # Errors
///
/// Returns the first `RegistrationError` encountered.
pub fn validate(form: &FormState, config: &PanelConfig) -> Result<Registration, RegistrationError> {
    let required = [
        (FormField::FirstName, form.first_name.is_empty()),
        (FormField::LastName, form.last_name.is_empty()),
        (FormField::DateOfBirth, form.date_of_birth.is_empty()),
        (FormField::Height, form.height.is_empty()),
    ];
    if let Some((field, _)) = required.iter().find(|(_, missing)| *missing) {
        return Err(RegistrationError::missing(*field));
    }
    let gender = form
        .gender
        .ok_or_else(|| RegistrationError::missing(FormField::Gender))?;

    let height = parse_height(&form.height)?;
    if !config.accepts_height(height) {
        return Err(RegistrationError::height_out_of_range(
            height,
            config.min_height,
            config.max_height,
        ));
    }

    let first_name = finalize_name(&form.first_name);
    if first_name.is_empty() {
        return Err(RegistrationError::EmptyName(FormField::FirstName));
    }
    let last_name = finalize_name(&form.last_name);
    if last_name.is_empty() {
        return Err(RegistrationError::EmptyName(FormField::LastName));
    }

    let date_of_birth = parse_iso(&form.date_of_birth)
        .ok_or_else(|| RegistrationError::InvalidDate(form.date_of_birth.clone()))?;

    Ok(Registration {
        first_name,
        last_name,
        date_of_birth,
        // accepts_height bounded it by two i32 values
        height: height as i32,
        gender,
    })
}
