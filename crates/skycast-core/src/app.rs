use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::{AppError, Config};

/// Application state and lifecycle manager.
///
/// Created once at startup; owns the validated configuration that the
/// weather client and search controller are built from.
pub struct App {
    config: Arc<Config>,
}

impl App {
    /// Create a new application instance from the default config location
    pub fn new() -> Result<Self, AppError> {
        Self::with_config_path(None)
    }

    /// Create a new application instance, optionally from an explicit config file
    pub fn with_config_path(config_path: Option<&Path>) -> Result<Self, AppError> {
        let (config, validation) =
            Config::load_validated(config_path).map_err(AppError::classify)?;
        tracing::info!(
            "Configuration loaded ({} warnings)",
            validation.warnings.len()
        );

        Ok(Self::from_config(config))
    }

    /// Wrap an already-loaded configuration
    pub fn from_config(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared handle to the application config
    pub fn config_handle(&self) -> Arc<Config> {
        self.config.clone()
    }
}
