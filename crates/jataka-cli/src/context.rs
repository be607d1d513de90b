//! Shared state for command execution

use std::path::Path;
use std::sync::Arc;

use jataka_data::{DataConfig, DataMode, Loader};

use crate::error::{CliError, Result};

/// Configuration resolved once per invocation plus the `--mode` override.
pub struct Context {
    pub loader: Loader,
    /// Per-invocation override; the resolved configuration is left untouched.
    pub mode_override: Option<DataMode>,
}

impl Context {
    pub fn load(base_dir: &Path, mode_override: Option<DataMode>) -> Result<Self> {
        let base_dir = dunce::canonicalize(base_dir).map_err(|e| {
            CliError::user(format!(
                "Base directory {} is not accessible: {e}",
                base_dir.display()
            ))
        })?;
        let config = DataConfig::load(base_dir)?;
        tracing::debug!(
            base_dir = ?config.base_dir(),
            mode = %config.mode(),
            ?mode_override,
            "Loaded configuration"
        );

        Ok(Self {
            loader: Loader::new(Arc::new(config)),
            mode_override,
        })
    }

    pub fn config(&self) -> &DataConfig {
        self.loader.config()
    }

    /// Mode that loads in this invocation actually use.
    pub fn effective_mode(&self) -> DataMode {
        self.mode_override.unwrap_or(self.config().mode())
    }
}
