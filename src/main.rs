use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use skycast_core::App;
use skycast_ui::controller::SUBMIT_KEY;
use skycast_ui::{ControllerOptions, InputEvent, SearchController, TerminalView};
use skycast_weather::{ClientConfig, OpenWeatherClient};

/// Overrides the default config file location
const CONFIG_ENV: &str = "SKYCAST_CONFIG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    skycast_core::init()?;

    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let mut app = App::with_config_path(config_path.as_deref()).inspect_err(|e| {
        tracing::error!("{}", e.user_message());
    })?;
    let config = app.config_handle();

    let client = OpenWeatherClient::new(
        ClientConfig::new(config.weather.resolved_api_key())
            .with_base_url(config.weather.base_url.clone()),
    );
    let view = TerminalView::new(std::io::stdout(), &config.weather.icon_url_template);
    let mut controller =
        SearchController::new(client, view, ControllerOptions::from_config(&config));

    tracing::info!("SkyCast started");

    // Each line is the city input followed by the Enter key
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read city input")?
    {
        controller
            .handle_event(InputEvent::Key(SUBMIT_KEY.to_string()), &line)
            .await;
    }

    app.shutdown()?;
    Ok(())
}
