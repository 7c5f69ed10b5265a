use crate::ui::presentation::Services;

/// Configuration types for the panel runner.
pub mod config {
    use identity_shared::DEFAULT_RESOURCE_NAME;

    /// Environment variable naming the identity backend resource
    pub const RESOURCE_ENV: &str = "IDENTITY_RESOURCE";
    /// Environment variable overriding the full backend base URL
    pub const BASE_URL_ENV: &str = "IDENTITY_BASE_URL";

    /// Process-level settings. The form's validation bounds are not here;
    /// they arrive from the host at runtime.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct PanelSettings {
        /// Resource the game client routes `https://<resource>/...` calls to
        pub resource_name: String,
        /// Full base URL, replacing `https://<resource>/` when set
        pub base_url: Option<String>,
    }

    impl PanelSettings {
        /// Load settings for the current target.
        ///
        /// Desktop reads the process environment (after loading `.env`);
        /// WASM bakes the values in at compile time.
        pub fn from_env() -> Self {
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = dotenvy::dotenv();
                Self::from_lookup(|key| std::env::var(key).ok())
            }

            #[cfg(target_arch = "wasm32")]
            {
                Self::from_lookup(|key| match key {
                    RESOURCE_ENV => option_env!("IDENTITY_RESOURCE").map(str::to_string),
                    BASE_URL_ENV => option_env!("IDENTITY_BASE_URL").map(str::to_string),
                    _ => None,
                })
            }
        }

        /// Build settings from a key lookup; blank values count as unset.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let get = |key: &str| {
                lookup(key)
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
            };

            Self {
                resource_name: get(RESOURCE_ENV)
                    .unwrap_or_else(|| DEFAULT_RESOURCE_NAME.to_string()),
                base_url: get(BASE_URL_ENV),
            }
        }

        /// Base URL the identity endpoints hang off.
        pub fn identity_base_url(&self) -> String {
            self.base_url
                .clone()
                .unwrap_or_else(|| format!("https://{}/", self.resource_name))
        }
    }

    impl Default for PanelSettings {
        fn default() -> Self {
            Self::from_lookup(|_| None)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        #[test]
        fn defaults_to_esx_identity() {
            let settings = PanelSettings::default();
            assert_eq!(settings.resource_name, "esx_identity");
            assert_eq!(settings.identity_base_url(), "https://esx_identity/");
        }

        #[test]
        fn resource_name_from_lookup() {
            let env = HashMap::from([(RESOURCE_ENV, "my_identity")]);
            let settings = PanelSettings::from_lookup(|k| env.get(k).map(|v| v.to_string()));
            assert_eq!(settings.identity_base_url(), "https://my_identity/");
        }

        #[test]
        fn base_url_overrides_resource() {
            let env = HashMap::from([
                (RESOURCE_ENV, "my_identity"),
                (BASE_URL_ENV, " http://localhost:8080/ "),
            ]);
            let settings = PanelSettings::from_lookup(|k| env.get(k).map(|v| v.to_string()));
            assert_eq!(settings.identity_base_url(), "http://localhost:8080/");
        }

        #[test]
        fn blank_values_are_ignored() {
            let env = HashMap::from([(RESOURCE_ENV, "  "), (BASE_URL_ENV, "")]);
            let settings = PanelSettings::from_lookup(|k| env.get(k).map(|v| v.to_string()));
            assert_eq!(settings, PanelSettings::default());
        }
    }
}

pub struct RunnerDeps {
    pub services: Services,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps { services } = deps;

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("Character Registration");
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder.with_context(services).launch(crate::ui::app);
}
