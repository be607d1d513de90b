//! Configuration resolution
//!
//! Settings are read once and frozen into a [`DataConfig`]. Sources are
//! merged per key, later sources overriding earlier ones:
//!
//! 1. **Built-in defaults** - adaptive mode, 64 MiB read limit
//! 2. **Project settings** - `<base>/dashboard.toml`, `[data]` table
//! 3. **Environment** - `DATA_MODE`, `USE_MOCKUP`
//!
//! # Example
//!
//! ```ignore
//! use jataka_data::ConfigResolver;
//!
//! let config = ConfigResolver::new("/srv/dashboard").resolve()?;
//! println!("mode: {} (from {})", config.mode(), config.mode_origin());
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::mode::{DATA_MODE_VAR, DataMode, ModeOrigin, ModeSettings, USE_MOCKUP_VAR, resolve_mode};
use crate::resolver::DataLayout;

/// Project settings file, relative to the base directory.
pub const SETTINGS_FILE: &str = "dashboard.toml";

/// Default cap on bytes read from one candidate file.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 64 * 1024 * 1024;

/// Immutable data-layer configuration shared by every consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    base_dir: PathBuf,
    layout: DataLayout,
    mode: DataMode,
    mode_origin: ModeOrigin,
    max_file_bytes: u64,
}

impl DataConfig {
    /// Configuration with an explicitly chosen mode.
    pub fn new(base_dir: impl Into<PathBuf>, mode: DataMode) -> Self {
        let base_dir = base_dir.into();
        Self {
            layout: DataLayout::new(&base_dir),
            base_dir,
            mode,
            mode_origin: ModeOrigin::Explicit,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }

    /// Settings file plus process environment, read once.
    pub fn load(base_dir: impl Into<PathBuf>) -> Result<Self> {
        ConfigResolver::new(base_dir).resolve()
    }

    pub fn with_max_file_bytes(mut self, max_file_bytes: u64) -> Self {
        self.max_file_bytes = max_file_bytes;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    /// Process-wide mode.
    pub fn mode(&self) -> DataMode {
        self.mode
    }

    pub fn mode_origin(&self) -> ModeOrigin {
        self.mode_origin
    }

    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_bytes
    }
}

/// A frozen copy of the environment variables the data layer reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the relevant variables from the process environment.
    pub fn capture() -> Self {
        let vars = [DATA_MODE_VAR, USE_MOCKUP_VAR]
            .into_iter()
            .filter_map(|name| std::env::var(name).ok().map(|v| (name.to_string(), v)))
            .collect();
        Self { vars }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    fn mode_settings(&self) -> ModeSettings {
        ModeSettings::new(self.get(DATA_MODE_VAR), self.get(USE_MOCKUP_VAR))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    data: DataSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DataSection {
    mode: Option<String>,
    use_mockup: Option<bool>,
    max_file_bytes: Option<u64>,
}

impl DataSection {
    fn mode_settings(&self) -> ModeSettings {
        let use_mockup = self.use_mockup.map(|flag| flag.to_string());
        ModeSettings::from_file(self.mode.as_deref(), use_mockup.as_deref())
    }
}

/// Resolves a [`DataConfig`] from the settings file and an environment snapshot.
pub struct ConfigResolver {
    base_dir: PathBuf,
    env: EnvSnapshot,
}

impl ConfigResolver {
    /// Resolver over the current process environment.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_env(base_dir, EnvSnapshot::capture())
    }

    /// Resolver over a given environment snapshot (used by tests).
    pub fn with_env(base_dir: impl Into<PathBuf>, env: EnvSnapshot) -> Self {
        Self {
            base_dir: base_dir.into(),
            env,
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    pub fn has_settings_file(&self) -> bool {
        self.settings_path().is_file()
    }

    /// Merge all layers and resolve the mode.
    ///
    /// A missing settings file is skipped. Invalid TOML or an unrecognized
    /// mode value is an error; nothing is guessed.
    pub fn resolve(&self) -> Result<DataConfig> {
        let mut mode_settings = ModeSettings::default();
        let mut max_file_bytes = DEFAULT_MAX_FILE_BYTES;

        let settings_path = self.settings_path();
        if settings_path.is_file() {
            tracing::debug!(?settings_path, "Loading project settings");
            let section = read_settings(&settings_path)?.data;
            mode_settings.merge(section.mode_settings());
            if let Some(limit) = section.max_file_bytes {
                max_file_bytes = limit;
            }
        } else {
            tracing::debug!(?settings_path, "No project settings found, skipping");
        }

        mode_settings.merge(self.env.mode_settings());

        let (mode, mode_origin) = resolve_mode(&mode_settings)?;
        tracing::debug!(%mode, %mode_origin, max_file_bytes, "Resolved data configuration");

        Ok(DataConfig {
            layout: DataLayout::new(&self.base_dir),
            base_dir: self.base_dir.clone(),
            mode,
            mode_origin,
            max_file_bytes,
        })
    }
}

fn read_settings(path: &Path) -> Result<SettingsFile> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    toml::from_str(&content).map_err(|e| Error::SettingsParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::SettingKey;
    use tempfile::TempDir;

    fn resolve_with(dir: &TempDir, env: &[(&str, &str)]) -> Result<DataConfig> {
        ConfigResolver::with_env(dir.path(), EnvSnapshot::from_pairs(env.iter().copied())).resolve()
    }

    #[test]
    fn defaults_without_settings_or_env() {
        let temp = TempDir::new().unwrap();
        let config = resolve_with(&temp, &[]).unwrap();

        assert_eq!(config.mode(), DataMode::Adaptive);
        assert_eq!(config.mode_origin(), ModeOrigin::Default);
        assert_eq!(config.max_file_bytes(), DEFAULT_MAX_FILE_BYTES);
        assert_eq!(config.layout().real_root(), temp.path().join("data"));
        assert_eq!(config.layout().mockup_root(), temp.path().join("data/mockup"));
    }

    #[test]
    fn settings_file_supplies_mode_and_limit() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SETTINGS_FILE),
            "[data]\nmode = \"real\"\nmax_file_bytes = 1024\n",
        )
        .unwrap();

        let config = resolve_with(&temp, &[]).unwrap();
        assert_eq!(config.mode(), DataMode::Real);
        assert_eq!(config.mode_origin(), ModeOrigin::Primary(SettingKey::FileMode));
        assert_eq!(config.max_file_bytes(), 1024);
    }

    #[test]
    fn environment_overrides_settings_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE), "[data]\nmode = \"real\"\n").unwrap();

        let config = resolve_with(&temp, &[(DATA_MODE_VAR, "mockup")]).unwrap();
        assert_eq!(config.mode(), DataMode::Mockup);
    }

    #[test]
    fn settings_legacy_flag_yields_to_env_primary() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE), "[data]\nuse_mockup = true\n").unwrap();

        let config = resolve_with(&temp, &[]).unwrap();
        assert_eq!(config.mode(), DataMode::Mockup);
        assert_eq!(config.mode_origin(), ModeOrigin::LegacyFlag(SettingKey::FileUseMockup));

        let config = resolve_with(&temp, &[(DATA_MODE_VAR, "adaptive")]).unwrap();
        assert_eq!(config.mode(), DataMode::Adaptive);
        assert_eq!(config.mode_origin(), ModeOrigin::Primary(SettingKey::DataModeVar));
    }

    #[test]
    fn invalid_toml_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE), "[data\nmode = ").unwrap();

        let err = resolve_with(&temp, &[]).unwrap_err();
        assert!(matches!(err, Error::SettingsParse { .. }), "got: {err}");
    }

    #[test]
    fn unknown_settings_key_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE), "[data]\nmood = \"real\"\n").unwrap();

        let err = resolve_with(&temp, &[]).unwrap_err();
        assert!(matches!(err, Error::SettingsParse { .. }), "got: {err}");
    }

    #[test]
    fn invalid_env_mode_fails_fast() {
        let temp = TempDir::new().unwrap();
        let err = resolve_with(&temp, &[(DATA_MODE_VAR, "production")]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn explicit_config_records_its_origin() {
        let config = DataConfig::new("/project", DataMode::Real).with_max_file_bytes(10);
        assert_eq!(config.mode_origin(), ModeOrigin::Explicit);
        assert_eq!(config.max_file_bytes(), 10);
        assert_eq!(config.base_dir(), Path::new("/project"));
    }

    #[test]
    fn snapshot_returns_only_captured_pairs() {
        let snapshot = EnvSnapshot::from_pairs([(DATA_MODE_VAR, "real")]);
        assert_eq!(snapshot.get(DATA_MODE_VAR), Some("real"));
        assert_eq!(snapshot.get(USE_MOCKUP_VAR), None);
    }
}
