//! Host message handler
//!
//! Maps each inbound host message onto the panel reducer. Runs synchronously
//! in arrival order.

use identity_domain::RegistrationPanel;
use identity_shared::HostMessage;

/// Apply one host message to the panel
pub fn apply_host_message(panel: &mut RegistrationPanel, message: HostMessage) {
    match message {
        HostMessage::EnableUi { enable } => {
            tracing::debug!(enable, "Host toggled panel visibility");
            panel.set_visible(enable);
        }
        HostMessage::SetConfig { config } => {
            tracing::debug!(?config, "Host replaced panel configuration");
            panel.apply_config(config);
        }
        HostMessage::Unknown => {
            tracing::debug!("Ignoring host message of unknown type");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use identity_domain::{CalendarCursor, Gender, PanelConfig};

    #[test]
    fn enableui_shows_panel() {
        let mut panel = RegistrationPanel::default();
        apply_host_message(&mut panel, HostMessage::EnableUi { enable: true });
        assert!(panel.is_visible());
    }

    #[test]
    fn hiding_clears_entered_data() {
        let mut panel = RegistrationPanel::default();
        apply_host_message(&mut panel, HostMessage::EnableUi { enable: true });
        panel.edit_first_name("Jane");
        panel.edit_height("170");
        panel.choose_gender(Gender::Female);
        panel.select_day(12);
        assert!(panel.selected_date().is_some());

        apply_host_message(&mut panel, HostMessage::EnableUi { enable: false });
        assert!(!panel.is_visible());
        assert!(panel.form().is_empty());
        assert_eq!(panel.selected_date(), None);
    }

    #[test]
    fn set_config_replaces_bounds() {
        let mut panel = RegistrationPanel::default();
        let config = PanelConfig {
            max_name_length: 10,
            min_height: 130,
            max_height: 200,
            lowest_year: 1940,
            highest_year: 2004,
            date_format: "DD/MM/YYYY".to_string(),
        };
        apply_host_message(
            &mut panel,
            HostMessage::SetConfig {
                config: config.clone(),
            },
        );
        assert_eq!(panel.config(), &config);
        assert_eq!(panel.picker().cursor(), CalendarCursor::start_of(2004));
    }

    #[test]
    fn unknown_messages_change_nothing() {
        let mut panel = RegistrationPanel::default();
        apply_host_message(&mut panel, HostMessage::EnableUi { enable: true });
        panel.edit_last_name("Doe");
        let before = panel.clone();

        apply_host_message(&mut panel, HostMessage::Unknown);
        assert_eq!(panel, before);
    }

    #[test]
    fn decoded_messages_apply_in_order() {
        let mut panel = RegistrationPanel::default();
        let lines = [
            r#"{"type":"setConfig","config":{"maxNameLength":4,"minHeight":120,"maxHeight":220,"lowestYear":1900,"highestYear":2001,"dateFormat":"DD/MM/YYYY"}}"#,
            r#"{"type":"enableui","enable":true}"#,
        ];
        for line in lines {
            apply_host_message(&mut panel, HostMessage::from_json(line).unwrap());
        }
        panel.edit_first_name("Johnny");
        assert!(panel.is_visible());
        assert_eq!(panel.form().first_name, "John");
        assert_eq!(panel.picker().cursor(), CalendarCursor::start_of(2001));
    }
}
