//! Identity Panel - composition root binary.

use std::sync::Arc;

use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use identity_panel::application::services::RegistrationService;
use identity_panel::infrastructure::IdentityHttpClient;
use identity_panel::ports::outbound::IdentityBackendPort;
use identity_panel::presentation::Services;
use identity_panel::runner::{self, config::PanelSettings, RunnerDeps};

fn main() -> anyhow::Result<()> {
    let settings = PanelSettings::from_env();

    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity_panel=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let base_url = settings.identity_base_url();
    tracing::info!(base_url = %base_url, "Starting Identity Panel");

    // HTTP
    let backend = IdentityHttpClient::new(&base_url)
        .with_context(|| format!("invalid identity backend URL: {base_url}"))?;
    let backend: Arc<dyn IdentityBackendPort> = Arc::new(backend);

    runner::run(RunnerDeps {
        services: Services::new(RegistrationService::new(backend)),
    });

    Ok(())
}
