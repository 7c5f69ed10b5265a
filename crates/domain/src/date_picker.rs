//! Date-of-birth picker state machine
//!
//! The picker shows exactly one of three views. `PickerView` being a plain
//! enum makes "month and year grid open at once" unrepresentable.
//!
//! ```text
//!            toggle_month            toggle_year
//!   Month <--------------- Day ---------------> Year
//!     |  choose_month /      ^    choose_year /   |
//!     |  toggle_month        |    toggle_year     |
//!     +----------------------+--------------------+
//! ```
//!
//! Month navigation (`next_month` / `prev_month`) only applies in the day view.

use chrono::NaiveDate;

use crate::config::PanelConfig;
use crate::value_objects::{CalendarCursor, DayGrid, YearRange};

/// Which grid the picker is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickerView {
    #[default]
    Day,
    Month,
    Year,
}

/// Calendar/month/year picker state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    cursor: CalendarCursor,
    years: YearRange,
    view: PickerView,
    open: bool,
    selected: Option<NaiveDate>,
}

impl DatePicker {
    /// A closed picker on January of the configured highest year.
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            cursor: CalendarCursor::start_of(config.highest_year),
            years: YearRange::new(config.lowest_year, config.highest_year),
            view: PickerView::Day,
            open: false,
            selected: None,
        }
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn years(&self) -> YearRange {
        self.years
    }

    pub fn view(&self) -> PickerView {
        self.view
    }

    /// Whether the dropdown overlay is expanded.
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn next_month(&mut self) {
        if self.view == PickerView::Day {
            self.cursor = self.cursor.next();
        }
    }

    pub fn prev_month(&mut self) {
        if self.view == PickerView::Day {
            self.cursor = self.cursor.prev();
        }
    }

    /// Open the month grid, or return to the day grid if it is already open.
    pub fn toggle_month_view(&mut self) {
        self.view = match self.view {
            PickerView::Month => PickerView::Day,
            PickerView::Day | PickerView::Year => PickerView::Month,
        };
    }

    /// Open the year grid, or return to the day grid if it is already open.
    pub fn toggle_year_view(&mut self) {
        self.view = match self.view {
            PickerView::Year => PickerView::Day,
            PickerView::Day | PickerView::Month => PickerView::Year,
        };
    }

    /// Jump to `month` (0-based) of the cursor year and go back to the day grid.
    pub fn choose_month(&mut self, month: u32) {
        self.cursor = self.cursor.with_month(month);
        self.view = PickerView::Day;
    }

    /// Jump to `year`, keeping the cursor month, and go back to the day grid.
    pub fn choose_year(&mut self, year: i32) {
        self.cursor = self.cursor.with_year(year);
        self.view = PickerView::Day;
    }

    /// Select `day` of the cursor month and close the overlay.
    ///
    /// Returns the selected date, or `None` (leaving state untouched) if the
    /// day does not exist in that month.
    pub fn select_day(&mut self, day: u32) -> Option<NaiveDate> {
        let date = self.cursor.date(day)?;
        self.selected = Some(date);
        self.open = false;
        Some(date)
    }

    /// Re-anchor the cursor and year window on new bounds. Keeps the selection.
    pub fn reconfigure(&mut self, config: &PanelConfig) {
        self.cursor = CalendarCursor::start_of(config.highest_year);
        self.years = YearRange::new(config.lowest_year, config.highest_year);
    }

    /// Back to the initial state for `config`: selection cleared, day view, closed.
    pub fn reset(&mut self, config: &PanelConfig) {
        *self = Self::new(config);
    }

    pub fn is_cursor_month(&self, month: u32) -> bool {
        self.cursor.month() == month
    }

    pub fn is_cursor_year(&self, year: i32) -> bool {
        self.cursor.year() == year
    }

    /// The day view for the cursor month.
    pub fn day_grid(&self, today: NaiveDate) -> DayGrid {
        DayGrid::build(self.cursor, self.selected, today)
    }
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new(&PanelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> DatePicker {
        DatePicker::new(&PanelConfig::default())
    }

    #[test]
    fn starts_closed_on_january_of_highest_year() {
        let p = picker();
        assert_eq!(p.cursor(), CalendarCursor::start_of(2005));
        assert_eq!(p.view(), PickerView::Day);
        assert!(!p.is_open());
        assert_eq!(p.selected(), None);
        assert_eq!(p.years(), YearRange::new(1900, 2005));
    }

    #[test]
    fn month_and_year_views_are_exclusive() {
        let mut p = picker();
        p.toggle_month_view();
        assert_eq!(p.view(), PickerView::Month);
        p.toggle_year_view();
        assert_eq!(p.view(), PickerView::Year);
        p.toggle_month_view();
        assert_eq!(p.view(), PickerView::Month);
    }

    #[test]
    fn toggling_open_view_returns_to_day() {
        let mut p = picker();
        p.toggle_year_view();
        p.toggle_year_view();
        assert_eq!(p.view(), PickerView::Day);

        p.toggle_month_view();
        p.toggle_month_view();
        assert_eq!(p.view(), PickerView::Day);
    }

    #[test]
    fn choosing_month_keeps_year_and_selection() {
        let mut p = picker();
        p.select_day(3);
        let selected = p.selected();

        p.toggle_month_view();
        p.choose_month(6);
        assert_eq!(p.cursor(), CalendarCursor::new(2005, 6));
        assert_eq!(p.view(), PickerView::Day);
        assert_eq!(p.selected(), selected);
    }

    #[test]
    fn choosing_year_keeps_month() {
        let mut p = picker();
        p.choose_month(4);
        p.toggle_year_view();
        p.choose_year(1987);
        assert_eq!(p.cursor(), CalendarCursor::new(1987, 4));
        assert_eq!(p.view(), PickerView::Day);
    }

    #[test]
    fn navigation_only_in_day_view() {
        let mut p = picker();
        p.toggle_month_view();
        p.next_month();
        p.prev_month();
        p.prev_month();
        assert_eq!(p.cursor(), CalendarCursor::start_of(2005));

        p.toggle_month_view();
        p.prev_month();
        assert_eq!(p.cursor(), CalendarCursor::new(2004, 11));
        p.next_month();
        p.next_month();
        assert_eq!(p.cursor(), CalendarCursor::new(2005, 1));
    }

    #[test]
    fn selecting_a_day_closes_overlay() {
        let mut p = picker();
        p.choose_year(2000);
        p.choose_month(4);
        p.set_open(true);

        let date = p.select_day(14);
        assert_eq!(date, NaiveDate::from_ymd_opt(2000, 5, 14));
        assert_eq!(p.selected(), date);
        assert!(!p.is_open());
    }

    #[test]
    fn selecting_missing_day_is_ignored() {
        let mut p = picker();
        p.choose_month(1);
        p.set_open(true);
        assert_eq!(p.select_day(30), None);
        assert_eq!(p.selected(), None);
        assert!(p.is_open());
    }

    #[test]
    fn reconfigure_moves_cursor_and_window() {
        let mut p = picker();
        p.next_month();
        p.select_day(1);

        let config = PanelConfig {
            lowest_year: 1950,
            highest_year: 2008,
            ..PanelConfig::default()
        };
        p.reconfigure(&config);
        assert_eq!(p.cursor(), CalendarCursor::start_of(2008));
        assert_eq!(p.years(), YearRange::new(1950, 2008));
        assert!(p.selected().is_some());
    }

    #[test]
    fn reset_clears_everything() {
        let mut p = picker();
        p.choose_year(1990);
        p.set_open(true);
        p.select_day(2);
        p.toggle_year_view();

        p.reset(&PanelConfig::default());
        assert_eq!(p, picker());
    }

    #[test]
    fn highlights_follow_cursor() {
        let mut p = picker();
        p.choose_month(8);
        assert!(p.is_cursor_month(8));
        assert!(!p.is_cursor_month(0));
        assert!(p.is_cursor_year(2005));
        assert!(!p.is_cursor_year(2004));
    }
}
