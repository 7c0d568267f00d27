//! Profile manager.
//!
//! Keeps the registry of named estimator profiles and loads profile files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{ConfigError, ConfigResult, Validate};
use crate::profile::EstimatorProfile;

// =============================================================================
// PROFILE FILE FORMAT
// =============================================================================

/// On-disk format of a profile file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileFormat {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
}

impl ProfileFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parses a profile from text.
    pub fn parse(&self, content: &str) -> ConfigResult<EstimatorProfile> {
        match self {
            Self::Toml => Ok(toml::from_str(content)?),
            Self::Json => Ok(serde_json::from_str(content)?),
        }
    }

    /// Renders a profile as text.
    pub fn render(&self, profile: &EstimatorProfile) -> ConfigResult<String> {
        match self {
            Self::Toml => Ok(toml::to_string_pretty(profile)?),
            Self::Json => Ok(serde_json::to_string_pretty(profile)?),
        }
    }
}

// =============================================================================
// PROFILE MANAGER
// =============================================================================

/// Central registry of estimator profiles.
///
/// Starts with the read-only `DEFAULT` profile. Every profile is validated
/// before it is registered.
///
/// # Example
///
/// ```rust
/// use roi_config::{EstimatorProfile, ProfileManager};
///
/// let manager = ProfileManager::new();
/// let profile = manager.get("DEFAULT").unwrap();
/// assert!(profile.read_only);
///
/// manager.register(EstimatorProfile::new("PROSPECT.ACME")).unwrap();
/// assert_eq!(manager.list(), vec!["DEFAULT", "PROSPECT.ACME"]);
/// ```
pub struct ProfileManager {
    profiles: RwLock<HashMap<String, EstimatorProfile>>,
}

impl Default for ProfileManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileManager {
    /// Creates a manager holding the built-in profile.
    pub fn new() -> Self {
        let mut profiles = HashMap::new();
        let standard = EstimatorProfile::standard();
        profiles.insert(standard.name.clone(), standard);
        Self {
            profiles: RwLock::new(profiles),
        }
    }

    /// Registers a profile, replacing any writable profile of the same name.
    pub fn register(&self, profile: EstimatorProfile) -> ConfigResult<()> {
        profile.validate_or_error()?;

        let mut profiles = self.write()?;
        if let Some(existing) = profiles.get(&profile.name) {
            if existing.read_only {
                return Err(ConfigError::ReadOnly {
                    key: profile.name.clone(),
                });
            }
        }

        log::debug!("registered profile {}", profile.name);
        profiles.insert(profile.name.clone(), profile);
        Ok(())
    }

    /// Gets a profile by name.
    pub fn get(&self, name: &str) -> ConfigResult<EstimatorProfile> {
        self.read()?
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::NotFound {
                key: name.to_string(),
            })
    }

    /// Returns true if a profile with `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.read().map(|p| p.contains_key(name)).unwrap_or(false)
    }

    /// Lists profile names in sorted order.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .read()
            .map(|p| p.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Removes a writable profile.
    pub fn remove(&self, name: &str) -> ConfigResult<EstimatorProfile> {
        let mut profiles = self.write()?;
        match profiles.get(name) {
            None => Err(ConfigError::NotFound {
                key: name.to_string(),
            }),
            Some(p) if p.read_only => Err(ConfigError::ReadOnly {
                key: name.to_string(),
            }),
            Some(_) => profiles.remove(name).ok_or_else(|| ConfigError::NotFound {
                key: name.to_string(),
            }),
        }
    }

    /// Loads a `.toml` or `.json` profile file and registers it.
    ///
    /// Returns the name of the loaded profile.
    pub fn load_file(&self, path: impl AsRef<Path>) -> ConfigResult<String> {
        let path = path.as_ref();
        let format = ProfileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let mut profile = format.parse(&content)?;
        // Profiles loaded from disk are always writable.
        profile.read_only = false;

        let name = profile.name.clone();
        self.register(profile)?;
        log::info!("loaded profile {} from {}", name, path.display());
        Ok(name)
    }

    /// Loads every `.toml` and `.json` profile in `dir`, in file name order.
    ///
    /// A missing directory loads nothing. Files that fail to parse or
    /// validate are skipped with a warning. Returns the loaded names.
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> ConfigResult<Vec<String>> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && ProfileFormat::from_path(path).is_ok())
            .collect();
        paths.sort();

        let mut names = Vec::with_capacity(paths.len());
        for path in paths {
            match self.load_file(&path) {
                Ok(name) => names.push(name),
                Err(e) => log::warn!("skipping profile {}: {}", path.display(), e),
            }
        }
        Ok(names)
    }

    /// Writes a registered profile to `path`, choosing the format by extension.
    pub fn save_file(&self, name: &str, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let format = ProfileFormat::from_path(path)?;
        let profile = self.get(name)?;
        std::fs::write(path, format.render(&profile)?)?;
        Ok(())
    }

    fn read(
        &self,
    ) -> ConfigResult<std::sync::RwLockReadGuard<'_, HashMap<String, EstimatorProfile>>> {
        self.profiles
            .read()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {}", e)))
    }

    fn write(
        &self,
    ) -> ConfigResult<std::sync::RwLockWriteGuard<'_, HashMap<String, EstimatorProfile>>> {
        self.profiles
            .write()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roi_core::InputField;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_default_profile_is_registered() {
        let manager = ProfileManager::new();
        assert!(manager.contains("DEFAULT"));
        assert_eq!(manager.list(), vec!["DEFAULT"]);
    }

    #[test]
    fn test_default_profile_cannot_be_overwritten() {
        let manager = ProfileManager::new();
        let err = manager.register(EstimatorProfile::new("DEFAULT")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadOnly { .. }));
        let err = manager.remove("DEFAULT").unwrap_err();
        assert!(matches!(err, ConfigError::ReadOnly { .. }));
    }

    #[test]
    fn test_register_get_remove() {
        let manager = ProfileManager::new();
        let profile = EstimatorProfile::new("MID").with_input(InputField::CostPerCall, dec!(8));
        manager.register(profile.clone()).unwrap();
        assert_eq!(manager.get("MID").unwrap(), profile);

        let replacement = profile.with_input(InputField::CostPerCall, dec!(10));
        manager.register(replacement).unwrap();
        assert_eq!(manager.get("MID").unwrap().inputs.cost_per_call, dec!(10));

        manager.remove("MID").unwrap();
        assert!(matches!(
            manager.get("MID").unwrap_err(),
            ConfigError::NotFound { .. }
        ));
    }

    #[test]
    fn test_register_rejects_invalid_profile() {
        let manager = ProfileManager::new();
        let bad = EstimatorProfile::new("BAD").with_input(InputField::CostPerCall, dec!(100));
        assert!(matches!(
            manager.register(bad).unwrap_err(),
            ConfigError::Validation { .. }
        ));
        assert!(!manager.contains("BAD"));
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regional.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
name = "REGIONAL"
description = "Regional servicer"
read_only = true

[inputs]
portfolio_size = 400000
cost_per_call = 9

[assumptions]
collection_calls_per_delinquent_loan = 6
"#
        )
        .unwrap();

        let manager = ProfileManager::new();
        let name = manager.load_file(&path).unwrap();
        assert_eq!(name, "REGIONAL");

        let profile = manager.get("REGIONAL").unwrap();
        assert!(!profile.read_only);
        assert_eq!(profile.inputs.portfolio_size, dec!(400000));
        assert_eq!(profile.inputs.cost_per_call, dec!(9));
        assert_eq!(profile.inputs.calls_per_loan_per_year, dec!(2.5));
        assert_eq!(profile.assumptions.collection_calls_per_delinquent_loan, dec!(6));
        assert_eq!(profile.assumptions.automation_cost_factor, dec!(0.3));
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.json");
        std::fs::write(
            &path,
            r#"{"name": "SMALL", "inputs": {"portfolio_size": 20000, "delinquency_rate_percent": 2}}"#,
        )
        .unwrap();

        let manager = ProfileManager::new();
        manager.load_file(&path).unwrap();
        let profile = manager.get("SMALL").unwrap();
        assert_eq!(profile.inputs.portfolio_size, dec!(20000));
        assert_eq!(profile.inputs.delinquency_rate_percent, dec!(2));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let manager = ProfileManager::new();
        let err = manager.load_file("profile.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = ").unwrap();
        let err = ProfileManager::new().load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }

    #[test]
    fn test_load_dir_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("b.toml"),
            "name = \"MID\"\n[inputs]\ncost_per_call = 8\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("a.json"),
            r#"{"name": "SMALL", "inputs": {"portfolio_size": 20000}}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("c.toml"), "name = ").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a profile").unwrap();
        std::fs::write(dir.path().join("d.toml"), "name = \"DEFAULT\"\n").unwrap();

        let manager = ProfileManager::new();
        let names = manager.load_dir(dir.path()).unwrap();
        assert_eq!(names, vec!["SMALL", "MID"]);
        assert_eq!(manager.list(), vec!["DEFAULT", "MID", "SMALL"]);
        assert!(manager.get("DEFAULT").unwrap().read_only);
    }

    #[test]
    fn test_load_dir_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let names = ProfileManager::new()
            .load_dir(dir.path().join("profiles"))
            .unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");

        let manager = ProfileManager::new();
        manager
            .register(
                EstimatorProfile::new("SAVED")
                    .with_description("round trip")
                    .with_input(InputField::DelinquencyRate, dec!(6.5)),
            )
            .unwrap();
        manager.save_file("SAVED", &path).unwrap();

        let fresh = ProfileManager::new();
        fresh.load_file(&path).unwrap();
        let profile = fresh.get("SAVED").unwrap();
        assert_eq!(profile.inputs.delinquency_rate_percent, dec!(6.5));
        assert_eq!(profile.description.as_deref(), Some("round trip"));
    }
}
