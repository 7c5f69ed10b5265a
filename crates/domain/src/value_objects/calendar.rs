//! Calendar arithmetic for the date-of-birth picker
//!
//! Key types:
//! - `CalendarCursor` - the (year, month) the picker is showing, month 0-based
//! - `YearRange` - the years offered by the year picker
//! - `DayGrid` - the day view of one month, ready to render
//!
//! Months are 0-based throughout (January = 0) to match the picker's month
//! buttons; conversion to chrono's 1-based months happens at the edges.

use chrono::{Datelike, NaiveDate};

/// Month names in display order
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday header labels, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (0-based) of `year`, Gregorian rules.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Weekday index of the 1st of `month` (0-based), 0 = Sunday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// ISO `YYYY-MM-DD`, the form the date of birth is stored in.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a stored ISO date. Returns `None` for anything that is not a real date.
pub fn parse_iso(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `DD/MM/YYYY`, the form the identity backend expects.
pub fn format_dmy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Long display form, e.g. `May 14, 2000`.
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

// ============================================================================
// CalendarCursor
// ============================================================================

/// The month currently displayed by the picker.
///
/// Independent of the selected date: navigating never changes the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarCursor {
    year: i32,
    month: u32,
}

impl CalendarCursor {
    /// Create a cursor. Months outside 0..=11 roll over into adjacent years.
    #[cfg(test)]
    pub fn new(year: i32, month: i32) -> Self {
        Self { year, month: 0 }.shift(month)
    }

    /// January of `year`.
    pub fn start_of(year: i32) -> Self {
        Self { year, month: 0 }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 0-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize % 12]
    }

    /// Move by `months`, rolling over year boundaries.
    pub fn shift(self, months: i32) -> Self {
        let total = i64::from(self.year) * 12 + i64::from(self.month) + i64::from(months);
        Self {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32,
        }
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    pub fn prev(self) -> Self {
        self.shift(-1)
    }

    /// Same year, different month (0-based, clamped to December).
    pub fn with_month(self, month: u32) -> Self {
        Self {
            month: month.min(11),
            ..self
        }
    }

    /// Same month, different year.
    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn first_weekday(&self) -> u32 {
        first_weekday(self.year, self.month)
    }

    /// The date for `day` of this month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day)
    }

    /// Returns true if `date` falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }
}

// ============================================================================
// YearRange
// ============================================================================

/// Years offered by the year picker, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Every year from `end` down to `start`.
    pub fn descending(&self) -> impl Iterator<Item = i32> {
        (self.start..=self.end).rev()
    }
}

// ============================================================================
// DayGrid
// ============================================================================

/// One selectable day in the day view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub is_today: bool,
    pub is_selected: bool,
}

/// The day view of a month: blank cells then one cell per day, 7 columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrid {
    /// Blank cells before the 1st, equal to its weekday index (0 = Sunday)
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
}

impl DayGrid {
    /// Lay out `cursor`'s month.
    ///
    /// "Today" and "selected" compare calendar fields only.
    pub fn build(cursor: CalendarCursor, selected: Option<NaiveDate>, today: NaiveDate) -> Self {
        let matches = |date: NaiveDate, day: u32| cursor.contains(date) && date.day() == day;

        let cells = (1..=cursor.days_in_month())
            .map(|day| DayCell {
                day,
                is_today: matches(today, day),
                is_selected: selected.is_some_and(|s| matches(s, day)),
            })
            .collect();

        Self {
            leading_blanks: cursor.first_weekday(),
            cells,
        }
    }
}
