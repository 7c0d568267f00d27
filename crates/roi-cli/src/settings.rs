//! User settings stored as JSON in the config directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// What to do with inputs outside their range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfRangePolicy {
    /// Clamp into range and warn.
    Clamp,
    /// Fail the command.
    Reject,
}

/// Settings keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    /// Default output format
    DefaultFormat,
    /// Profile used when none is given
    DefaultProfile,
    /// Out-of-range input policy
    OutOfRange,
}

impl SettingKey {
    /// Parses a key, accepting short aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default_format" | "format" => Some(Self::DefaultFormat),
            "default_profile" | "profile" => Some(Self::DefaultProfile),
            "out_of_range" | "range" => Some(Self::OutOfRange),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::DefaultProfile => "default_profile",
            Self::OutOfRange => "out_of_range",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::DefaultProfile => "Profile used when --profile is not given",
            Self::OutOfRange => "Out-of-range inputs: clamp to the range or reject (clamp, reject)",
        }
    }

    pub fn default_value(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "table",
            Self::DefaultProfile => "DEFAULT",
            Self::OutOfRange => "clamp",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::DefaultFormat, Self::DefaultProfile, Self::OutOfRange]
    }

    /// Checks a value before it is stored.
    pub fn validate(&self, value: &str) -> CliResult<()> {
        let ok = match self {
            Self::DefaultFormat => OutputFormat::parse(value).is_some(),
            Self::DefaultProfile => !value.trim().is_empty(),
            Self::OutOfRange => matches!(value.to_lowercase().as_str(), "clamp" | "reject"),
        };
        if ok {
            Ok(())
        } else {
            Err(CliError::InvalidSetting {
                key: self.as_str(),
                value: value.to_string(),
                expected: self.description(),
            })
        }
    }
}

/// Settings file contents.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    values: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from `dir`, or empty settings if the file does not exist.
    pub fn load(dir: &Path) -> CliResult<Self> {
        let path = settings_path(dir);
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, dir: &Path) -> CliResult<()> {
        let path = settings_path(dir);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Returns the stored value, or the key's default.
    pub fn value(&self, key: SettingKey) -> &str {
        self.values
            .get(key.as_str())
            .map_or(key.default_value(), String::as_str)
    }

    pub fn is_set(&self, key: SettingKey) -> bool {
        self.values.contains_key(key.as_str())
    }

    pub fn set(&mut self, key: SettingKey, value: String) {
        self.values.insert(key.as_str().to_string(), value);
    }

    pub fn remove(&mut self, key: SettingKey) {
        self.values.remove(key.as_str());
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn format(&self) -> OutputFormat {
        OutputFormat::parse(self.value(SettingKey::DefaultFormat)).unwrap_or_default()
    }

    pub fn default_profile(&self) -> &str {
        self.value(SettingKey::DefaultProfile)
    }

    pub fn out_of_range(&self) -> OutOfRangePolicy {
        if self.value(SettingKey::OutOfRange).eq_ignore_ascii_case("reject") {
            OutOfRangePolicy::Reject
        } else {
            OutOfRangePolicy::Clamp
        }
    }
}

/// Resolves the config directory: explicit override first, then the platform
/// config dir, then the home directory.
pub fn config_dir(explicit: Option<PathBuf>) -> CliResult<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|base| base.join("roi"))
        .ok_or(CliError::NoConfigDir)
}

/// Location of the settings file inside `dir`.
pub fn settings_path(dir: &Path) -> PathBuf {
    dir.join("config.json")
}

/// Directory of saved profiles inside `dir`.
pub fn profiles_dir(dir: &Path) -> PathBuf {
    dir.join("profiles")
}
