//! Data mode and its resolution from settings
//!
//! The effective mode decides which data roots a load may read from:
//!
//! - `real` reads only from `data/`
//! - `mockup` reads only from `data/mockup/`
//! - `adaptive` prefers `data/` and falls back to `data/mockup/` when the
//!   real file does not exist
//!
//! [`resolve_mode`] is a pure function of a [`ModeSettings`] snapshot. It is
//! called once when a [`DataConfig`](crate::DataConfig) is built, never per load.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the primary mode variable.
pub const DATA_MODE_VAR: &str = "DATA_MODE";

/// Name of the legacy boolean mockup flag.
pub const USE_MOCKUP_VAR: &str = "USE_MOCKUP";

/// Which data roots a load is allowed to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    /// Production CSVs only.
    Real,
    /// Placeholder CSVs only.
    Mockup,
    /// Real first, mockup when the real file is absent.
    #[default]
    Adaptive,
}

impl DataMode {
    /// Every mode, in declaration order.
    pub const ALL: [DataMode; 3] = [DataMode::Real, DataMode::Mockup, DataMode::Adaptive];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataMode::Real => "real",
            DataMode::Mockup => "mockup",
            DataMode::Adaptive => "adaptive",
        }
    }
}

impl FromStr for DataMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "real" => Ok(DataMode::Real),
            "mockup" => Ok(DataMode::Mockup),
            "adaptive" => Ok(DataMode::Adaptive),
            _ => Err(Error::InvalidConfiguration {
                variable: "mode".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A settings key that can carry a mode input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    /// `DATA_MODE` environment variable
    DataModeVar,
    /// `USE_MOCKUP` environment variable
    UseMockupVar,
    /// `mode` in the settings file `[data]` table
    FileMode,
    /// `use_mockup` in the settings file `[data]` table
    FileUseMockup,
}

impl SettingKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::DataModeVar => DATA_MODE_VAR,
            SettingKey::UseMockupVar => USE_MOCKUP_VAR,
            SettingKey::FileMode => "dashboard.toml [data].mode",
            SettingKey::FileUseMockup => "dashboard.toml [data].use_mockup",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the effective mode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeOrigin {
    /// A primary mode value under the given key
    Primary(SettingKey),
    /// A legacy flag of `true` with no primary value
    LegacyFlag(SettingKey),
    /// Nothing set
    Default,
    /// Chosen in code rather than read from settings
    Explicit,
}

impl fmt::Display for ModeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeOrigin::Primary(key) | ModeOrigin::LegacyFlag(key) => write!(f, "{key}"),
            ModeOrigin::Default => write!(f, "default"),
            ModeOrigin::Explicit => write!(f, "explicit"),
        }
    }
}

/// One raw setting value and the key it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub value: String,
    pub key: SettingKey,
}

impl Setting {
    fn new(value: &str, key: SettingKey) -> Self {
        Self {
            value: value.to_string(),
            key,
        }
    }
}

/// Raw, unvalidated mode inputs captured from the settings layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeSettings {
    /// Primary mode value, e.g. `"adaptive"`.
    pub data_mode: Option<Setting>,
    /// Legacy flag value, e.g. `"true"`.
    pub use_mockup: Option<Setting>,
}

impl ModeSettings {
    /// Values read from the `DATA_MODE` and `USE_MOCKUP` variables.
    pub fn new(data_mode: Option<&str>, use_mockup: Option<&str>) -> Self {
        Self {
            data_mode: data_mode.map(|v| Setting::new(v, SettingKey::DataModeVar)),
            use_mockup: use_mockup.map(|v| Setting::new(v, SettingKey::UseMockupVar)),
        }
    }

    /// Values read from the settings file `[data]` table.
    pub fn from_file(mode: Option<&str>, use_mockup: Option<&str>) -> Self {
        Self {
            data_mode: mode.map(|v| Setting::new(v, SettingKey::FileMode)),
            use_mockup: use_mockup.map(|v| Setting::new(v, SettingKey::FileUseMockup)),
        }
    }

    /// Overlay `other` on top of `self`; values present in `other` win.
    pub fn merge(&mut self, other: ModeSettings) {
        if other.data_mode.is_some() {
            self.data_mode = other.data_mode;
        }
        if other.use_mockup.is_some() {
            self.use_mockup = other.use_mockup;
        }
    }
}

/// Determine the effective mode.
///
/// A non-empty primary value always wins and must name a known mode. Without
/// one, a legacy flag of `true` selects [`DataMode::Mockup`]; anything else
/// leaves the default [`DataMode::Adaptive`]. Errors and the returned origin
/// name the key the deciding value was read from.
pub fn resolve_mode(settings: &ModeSettings) -> Result<(DataMode, ModeOrigin)> {
    if let Some(primary) = settings
        .data_mode
        .as_ref()
        .filter(|s| !s.value.trim().is_empty())
    {
        let mode = primary
            .value
            .parse::<DataMode>()
            .map_err(|_| Error::InvalidConfiguration {
                variable: primary.key.to_string(),
                value: primary.value.clone(),
            })?;
        tracing::debug!(%mode, key = %primary.key, "Mode taken from primary setting");
        return Ok((mode, ModeOrigin::Primary(primary.key)));
    }

    if let Some(flag) = settings
        .use_mockup
        .as_ref()
        .filter(|s| legacy_flag_is_true(&s.value))
    {
        tracing::debug!(key = %flag.key, "Legacy mockup flag set with no primary mode; using mockup");
        return Ok((DataMode::Mockup, ModeOrigin::LegacyFlag(flag.key)));
    }

    tracing::debug!("No mode configured; using {}", DataMode::default());
    Ok((DataMode::default(), ModeOrigin::Default))
}

fn legacy_flag_is_true(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
