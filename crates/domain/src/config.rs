//! Runtime panel configuration pushed by the host

use serde::{Deserialize, Serialize};

/// Default maximum length of a first or last name
pub const DEFAULT_MAX_NAME_LENGTH: u32 = 20;
/// Default lower height bound in centimetres
pub const DEFAULT_MIN_HEIGHT: i32 = 120;
/// Default upper height bound in centimetres
pub const DEFAULT_MAX_HEIGHT: i32 = 220;
/// Default earliest selectable birth year
pub const DEFAULT_LOWEST_YEAR: i32 = 1900;
/// Default latest selectable birth year
pub const DEFAULT_HIGHEST_YEAR: i32 = 2005;
/// Default date format advertised by the host
pub const DEFAULT_DATE_FORMAT: &str = "DD/MM/YYYY";

/// Validation bounds for the registration form.
///
/// Replaced wholesale whenever the host sends a `setConfig` message. The
/// host is trusted: `lowest_year <= highest_year` and
/// `min_height <= max_height` are assumed, not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    /// Names are truncated to this many characters while typing
    pub max_name_length: u32,
    /// Smallest accepted height (inclusive)
    pub min_height: i32,
    /// Largest accepted height (inclusive)
    pub max_height: i32,
    /// Earliest year offered by the year picker
    pub lowest_year: i32,
    /// Latest year offered by the year picker; the calendar opens on January of this year
    pub highest_year: i32,
    /// Carried for the host's benefit; submissions always use `DD/MM/YYYY`
    pub date_format: String,
}

impl PanelConfig {
    /// Returns true if `height` lies within the configured bounds.
    pub fn accepts_height(&self, height: i64) -> bool {
        (i64::from(self.min_height)..=i64::from(self.max_height)).contains(&height)
    }

    /// Maximum name length as a character count.
    pub fn name_limit(&self) -> usize {
        self.max_name_length as usize
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
            lowest_year: DEFAULT_LOWEST_YEAR,
            highest_year: DEFAULT_HIGHEST_YEAR,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}
