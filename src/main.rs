// Rust Countdown Application
// Main entry point

use anyhow::{anyhow, Result};

use rust_countdown::models::settings::Settings;
use rust_countdown::services::countdown::{ticker, CountdownService};
use rust_countdown::services::settings::SettingsService;
use rust_countdown::ui::{make_renderer, LabelSet, RendererKind};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Countdown Application");

    let settings_service = SettingsService::from_default_location();
    let settings = load_settings_or_default(&settings_service);

    let target = settings.target_instant()?;
    let kind = RendererKind::from_name(&settings.renderer)
        .ok_or_else(|| anyhow!("unknown renderer '{}'", settings.renderer))?;
    let labels = LabelSet::by_name(&settings.labels)
        .ok_or_else(|| anyhow!("unknown label preset '{}'", settings.labels))?;

    log::info!(
        "Counting down to {} (renderer: {}, labels: {}, every {} ms)",
        target,
        kind.name(),
        labels.name,
        settings.tick_interval_ms
    );

    let mut service = CountdownService::new(target);
    let mut renderer = make_renderer(kind, labels, target);
    ticker::run_until_ctrl_c(&mut service, &mut renderer, settings.tick_period()).await?;

    log::info!("Countdown stopped");
    Ok(())
}

fn load_settings_or_default(service: &SettingsService) -> Settings {
    match service.load() {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Failed to load settings: {err:#}; using defaults");
            Settings::default()
        }
    }
}
