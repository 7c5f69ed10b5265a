//! Root state of the registration panel
//!
//! `RegistrationPanel` owns visibility, the host-supplied configuration, the
//! form fields, and the date picker. The UI holds one instance and calls these
//! reducers from its event handlers; host messages map onto `set_visible` and
//! `apply_config`.

use chrono::NaiveDate;

use crate::config::PanelConfig;
use crate::date_picker::DatePicker;
use crate::error::RegistrationError;
use crate::registration::{validate, FormState, Registration};
use crate::value_objects::{format_iso, Gender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPanel {
    visible: bool,
    config: PanelConfig,
    form: FormState,
    picker: DatePicker,
}

impl RegistrationPanel {
    /// A hidden, empty panel.
    pub fn new(config: PanelConfig) -> Self {
        let picker = DatePicker::new(&config);
        Self {
            visible: false,
            config,
            form: FormState::default(),
            picker,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    /// Picker navigation (month/year views, prev/next, overlay open state).
    pub fn picker_mut(&mut self) -> &mut DatePicker {
        &mut self.picker
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.picker.selected()
    }

    // -------------------------------------------------------------------------
    // Host-driven transitions
    // -------------------------------------------------------------------------

    /// Show or hide the panel.
    ///
    /// Hiding wipes the form and selection and puts the picker back on
    /// January of the highest configured year, in the day view, closed.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.form.clear();
            self.picker.reset(&self.config);
        }
    }

    /// Replace the configuration and re-anchor the calendar on its bounds.
    pub fn apply_config(&mut self, config: PanelConfig) {
        self.config = config;
        self.picker.reconfigure(&self.config);
    }

    // -------------------------------------------------------------------------
    // Form edits
    // -------------------------------------------------------------------------

    pub fn edit_first_name(&mut self, raw: &str) {
        self.form.set_first_name(raw, &self.config);
    }

    pub fn edit_last_name(&mut self, raw: &str) {
        self.form.set_last_name(raw, &self.config);
    }

    pub fn edit_height(&mut self, raw: &str) {
        self.form.set_height(raw);
    }

    pub fn choose_gender(&mut self, gender: Gender) {
        self.form.set_gender(gender);
    }

    /// Pick `day` of the displayed month as the date of birth and close the picker.
    pub fn select_day(&mut self, day: u32) {
        if let Some(date) = self.picker.select_day(day) {
            self.form.date_of_birth = format_iso(date);
        }
    }

    // -------------------------------------------------------------------------
    // Submit
    // -------------------------------------------------------------------------

    /// Validate the form for submission.
    ///
    /// # Errors
    ///
    /// `RegistrationError::NotVisible` while hidden, otherwise whatever
    /// [`validate`] reports.
    pub fn submit(&self) -> Result<Registration, RegistrationError> {
        if !self.visible {
            return Err(RegistrationError::NotVisible);
        }
        validate(&self.form, &self.config)
    }
}

impl Default for RegistrationPanel {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_picker::PickerView;
    use crate::value_objects::CalendarCursor;

    fn visible_panel() -> RegistrationPanel {
        let mut panel = RegistrationPanel::default();
        panel.set_visible(true);
        panel
    }

    fn pick_date(panel: &mut RegistrationPanel, year: i32, month: u32, day: u32) {
        let picker = panel.picker_mut();
        picker.set_open(true);
        picker.toggle_year_view();
        picker.choose_year(year);
        picker.toggle_month_view();
        picker.choose_month(month);
        panel.select_day(day);
    }

    #[test]
    fn starts_hidden() {
        let panel = RegistrationPanel::default();
        assert!(!panel.is_visible());
        assert!(panel.form().is_empty());
        assert_eq!(panel.submit(), Err(RegistrationError::NotVisible));
    }

    #[test]
    fn full_registration_scenario() {
        let mut panel = visible_panel();
        panel.edit_first_name("J0hn!!");
        panel.edit_last_name("Doe");
        pick_date(&mut panel, 2000, 4, 14);
        panel.edit_height("180");
        panel.choose_gender(Gender::Male);

        assert_eq!(panel.form().first_name, "Jhn");
        assert_eq!(panel.form().date_of_birth, "2000-05-14");

        let registration = panel.submit().unwrap();
        assert_eq!(registration.first_name, "Jhn");
        assert_eq!(registration.last_name, "Doe");
        assert_eq!(registration.date_of_birth_dmy(), "14/05/2000");
        assert_eq!(registration.height, 180);
        assert_eq!(registration.gender.code(), "m");
    }

    #[test]
    fn oversized_height_is_refused() {
        let mut panel = visible_panel();
        panel.edit_first_name("John");
        panel.edit_last_name("Doe");
        pick_date(&mut panel, 2000, 4, 14);
        panel.edit_height("500");
        panel.choose_gender(Gender::Male);

        assert!(matches!(
            panel.submit(),
            Err(RegistrationError::HeightOutOfRange { height: 500, .. })
        ));
    }

    #[test]
    fn selecting_day_writes_iso_and_closes() {
        let mut panel = visible_panel();
        panel.picker_mut().set_open(true);
        panel.select_day(9);

        assert_eq!(panel.form().date_of_birth, "2005-01-09");
        assert_eq!(panel.selected_date(), NaiveDate::from_ymd_opt(2005, 1, 9));
        assert!(!panel.picker().is_open());
    }

    #[test]
    fn hiding_resets_form_and_picker() {
        let mut panel = visible_panel();
        panel.edit_first_name("Jane");
        pick_date(&mut panel, 1990, 2, 3);
        panel.picker_mut().next_month();
        panel.picker_mut().toggle_year_view();
        panel.picker_mut().set_open(true);

        panel.set_visible(false);
        assert!(!panel.is_visible());
        assert!(panel.form().is_empty());
        assert_eq!(panel.selected_date(), None);
        assert_eq!(panel.picker().cursor(), CalendarCursor::start_of(2005));
        assert_eq!(panel.picker().view(), PickerView::Day);
        assert!(!panel.picker().is_open());
    }

    #[test]
    fn hide_resets_cursor_to_current_config() {
        let mut panel = visible_panel();
        panel.apply_config(PanelConfig {
            highest_year: 2010,
            ..PanelConfig::default()
        });
        panel.picker_mut().prev_month();
        panel.set_visible(false);
        assert_eq!(panel.picker().cursor(), CalendarCursor::start_of(2010));
    }

    #[test]
    fn showing_keeps_state() {
        let mut panel = visible_panel();
        panel.edit_first_name("Jane");
        panel.set_visible(true);
        assert_eq!(panel.form().first_name, "Jane");
    }

    #[test]
    fn config_survives_hide() {
        let config = PanelConfig {
            max_name_length: 8,
            ..PanelConfig::default()
        };
        let mut panel = visible_panel();
        panel.apply_config(config.clone());
        panel.set_visible(false);
        panel.set_visible(true);
        assert_eq!(panel.config(), &config);
    }

    #[test]
    fn config_reanchors_calendar() {
        let mut panel = visible_panel();
        panel.picker_mut().next_month();
        panel.apply_config(PanelConfig {
            lowest_year: 1960,
            highest_year: 2000,
            ..PanelConfig::default()
        });
        assert_eq!(panel.picker().cursor(), CalendarCursor::start_of(2000));
        assert_eq!(panel.picker().years().start, 1960);
        assert_eq!(panel.picker().years().end, 2000);
    }

    #[test]
    fn name_limit_follows_config() {
        let mut panel = visible_panel();
        panel.apply_config(PanelConfig {
            max_name_length: 3,
            ..PanelConfig::default()
        });
        panel.edit_first_name("Johnny");
        assert_eq!(panel.form().first_name, "Joh");
    }

    #[test]
    fn height_bounds_follow_config() {
        let mut panel = visible_panel();
        panel.apply_config(PanelConfig {
            min_height: 150,
            max_height: 160,
            ..PanelConfig::default()
        });
        panel.edit_first_name("John");
        panel.edit_last_name("Doe");
        panel.select_day(1);
        panel.choose_gender(Gender::Female);

        panel.edit_height("150");
        assert!(panel.submit().is_ok());
        panel.edit_height("160");
        assert!(panel.submit().is_ok());
        panel.edit_height("161");
        assert!(panel.submit().is_err());
        panel.edit_height("149");
        assert!(panel.submit().is_err());
    }
}
