use anyhow::{Context as AnyhowContext, Result};
use register_core::{AppointmentStore, RegisterConfig};
use std::path::Path;

/// Application context that gets passed to command handlers
///
/// Holds the validated configuration and knows where the store is loaded
/// from and persisted to. The store itself is owned by `main` and lent to
/// each handler.
pub struct Context {
    config: RegisterConfig,
}

impl Context {
    /// Create a context, rejecting configuration that could never work
    pub fn new(config: RegisterConfig) -> Result<Self> {
        config.validate().context("Invalid configuration")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RegisterConfig {
        &self.config
    }

    pub fn data_file(&self) -> &Path {
        self.config.data_file()
    }

    /// Load the store from the configured data file
    pub fn load_store(&self) -> Result<AppointmentStore> {
        AppointmentStore::load(self.data_file()).with_context(|| {
            format!(
                "Failed to load appointments from {}",
                self.data_file().display()
            )
        })
    }

    /// Write the store back to the configured data file
    pub fn persist(&self, store: &AppointmentStore) -> Result<()> {
        store
            .save(self.data_file())
            .context("Failed to save appointments")
    }
}
