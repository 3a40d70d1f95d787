//!
//! This module defines the configuration structures and loading logic for mdsimplify.
//! Configuration is a small TOML file naming the directory pairs to process and a few settings.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Heading level every heading is rewritten to unless configured otherwise
pub const DEFAULT_HEADING_LEVEL: u8 = 3;

pub const DEFAULT_ENCODING: &str = "utf-8";

/// File names tried, in order, when no config path is given
pub const CONFIG_FILES: &[&str] = &[".mdsimplify.toml", "mdsimplify.toml"];

const SPLIT_SOURCE_SUFFIX: &str = "_source";
const SPLIT_TARGET_SUFFIX: &str = "_target";
const SIMPLIFY_SOURCE_SUFFIX: &str = "_simplify_source";
const SIMPLIFY_TARGET_SUFFIX: &str = "_simplify_target";

/// Errors that can occur when loading or creating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write the configuration file
    #[error("Failed to access config file at {path}: {source}")]
    Io { source: io::Error, path: String },

    /// The file is not valid TOML or does not match the expected layout
    #[error("Failed to parse config file at {path}: {message}")]
    Parse { path: String, message: String },

    /// Configuration file already exists
    #[error("Configuration file already exists at {path}")]
    FileExists { path: String },

    /// No configuration file was found during auto-discovery
    #[error("No configuration file found (looked for {})", searched.join(", "))]
    Missing { searched: Vec<String> },

    /// A setting has a value outside its allowed range
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// The complete configuration loaded from `.mdsimplify.toml`
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory keys: `<name>_source`/`<name>_target` for splitting,
    /// `<name>_simplify_source`/`<name>_simplify_target` for simplifying
    pub directories: BTreeMap<String, String>,

    pub settings: Settings,
}

/// General settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Text encoding of source and output files
    pub encoding: String,

    /// Level all headings are normalized to (1-6)
    pub heading_level: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            heading_level: DEFAULT_HEADING_LEVEL,
        }
    }
}

/// A source directory and the directory its output goes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPair {
    /// Key name shared by the source and target entries
    pub name: String,
    pub source: PathBuf,
    pub target: PathBuf,
}

impl DirectoryPair {
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(content: &str, path: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path.display().to_string();
        log::debug!("[mdsimplify-config] Loading config file: {path_str}");
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            source: e,
            path: path_str.clone(),
        })?;
        Self::from_toml_str(&content, &path_str)
    }

    /// Load configuration: the explicit path if given, otherwise the first
    /// config file found in the current directory.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_discovery(path, Path::new("."))
    }

    /// Like [`Config::load`], but discovers config files in `dir`
    pub fn load_with_discovery(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match discover_config_file(dir) {
            Some(found) => Self::from_file(&found),
            None => Err(ConfigError::Missing {
                searched: CONFIG_FILES
                    .iter()
                    .map(|name| dir.join(name).display().to_string())
                    .collect(),
            }),
        }
    }

    /// Check settings that serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=6).contains(&self.settings.heading_level) {
            return Err(ConfigError::InvalidValue {
                key: "settings.heading-level".to_string(),
                message: format!("expected 1 to 6, got {}", self.settings.heading_level),
            });
        }
        if self.settings.encoding.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "settings.encoding".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Directory pairs for splitting, in key order
    pub fn split_pairs(&self) -> Vec<DirectoryPair> {
        self.pairs(SPLIT_SOURCE_SUFFIX, SPLIT_TARGET_SUFFIX, false)
    }

    /// Directory pairs for simplifying, in key order
    pub fn simplify_pairs(&self) -> Vec<DirectoryPair> {
        self.pairs(SIMPLIFY_SOURCE_SUFFIX, SIMPLIFY_TARGET_SUFFIX, true)
    }

    fn pairs(&self, source_suffix: &str, target_suffix: &str, simplify: bool) -> Vec<DirectoryPair> {
        let in_kind = |key: &str| is_simplify_key(key) == simplify;
        let mut pairs = Vec::new();

        for (key, source) in &self.directories {
            let Some(name) = key.strip_suffix(source_suffix) else {
                continue;
            };
            if !in_kind(key) {
                continue;
            }
            match self.directories.get(&format!("{name}{target_suffix}")) {
                Some(target) => pairs.push(DirectoryPair::new(name, source, target)),
                None => log::warn!("[mdsimplify-config] '{key}' has no matching '{name}{target_suffix}', ignoring"),
            }
        }

        for key in self.directories.keys() {
            if let Some(name) = key.strip_suffix(target_suffix)
                && in_kind(key)
                && !self.directories.contains_key(&format!("{name}{source_suffix}"))
            {
                log::warn!("[mdsimplify-config] '{key}' has no matching '{name}{source_suffix}', ignoring");
            }
        }

        pairs
    }
}

fn is_simplify_key(key: &str) -> bool {
    key.ends_with(SIMPLIFY_SOURCE_SUFFIX) || key.ends_with(SIMPLIFY_TARGET_SUFFIX)
}

/// Find the first known config file in `dir`
pub fn discover_config_file(dir: &Path) -> Option<PathBuf> {
    for filename in CONFIG_FILES {
        let candidate = dir.join(filename);
        if candidate.is_file() {
            log::debug!("[mdsimplify-config] Found {}", candidate.display());
            return Some(candidate);
        }
        log::debug!("[mdsimplify-config] {} not found", candidate.display());
    }
    None
}

const DEFAULT_CONFIG: &str = r#"# mdsimplify configuration file

[directories]
# Pairs for `mdsimplify split`: <name>_source / <name>_target
# base_source = "Src/Base"
# base_target = "Src/Base/detailed"

# Pairs for `mdsimplify simplify`: <name>_simplify_source / <name>_simplify_target
# course_simplify_source = "Course/Sections"
# course_simplify_target = "Course/Simplified"

[settings]
# Encoding of source and output files (only UTF-8 is supported)
encoding = "utf-8"

# Level every heading is rewritten to
heading-level = 3
"#;

/// Create a default configuration file at the specified path
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::FileExists {
            path: path.display().to_string(),
        });
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::Io {
        source: e,
        path: path.display().to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.settings.encoding, "utf-8");
        assert_eq!(config.settings.heading_level, 3);
        assert!(config.split_pairs().is_empty());
    }

    #[test]
    fn test_pairs_separated_by_kind() {
        let content = r#"
[directories]
base_source = "Src/Base"
base_target = "Src/Base/detailed"
course_simplify_source = "Course/Sections"
course_simplify_target = "Course/Simplified"
"#;
        let config = Config::from_toml_str(content, "test.toml").unwrap();

        assert_eq!(
            config.split_pairs(),
            vec![DirectoryPair::new("base", "Src/Base", "Src/Base/detailed")]
        );
        assert_eq!(
            config.simplify_pairs(),
            vec![DirectoryPair::new("course", "Course/Sections", "Course/Simplified")]
        );
    }

    #[test]
    fn test_pairs_in_key_order() {
        let content = r#"
[directories]
b_source = "b"
b_target = "bt"
a_source = "a"
a_target = "at"
"#;
        let config = Config::from_toml_str(content, "test.toml").unwrap();
        let names: Vec<String> = config.split_pairs().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_unpaired_keys_ignored() {
        let content = r#"
[directories]
lonely_source = "x"
orphan_target = "y"
half_simplify_source = "z"
"#;
        let config = Config::from_toml_str(content, "test.toml").unwrap();
        assert!(config.split_pairs().is_empty());
        assert!(config.simplify_pairs().is_empty());
    }

    #[test]
    fn test_settings_parsed() {
        let content = r#"
[settings]
encoding = "UTF-8"
heading-level = 2
"#;
        let config = Config::from_toml_str(content, "test.toml").unwrap();
        assert_eq!(config.settings.encoding, "UTF-8");
        assert_eq!(config.settings.heading_level, 2);
    }

    #[test]
    fn test_heading_level_out_of_range() {
        let result = Config::from_toml_str("[settings]\nheading-level = 7\n", "test.toml");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml_str("[directories\n", "bad.toml");
        match result {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, "bad.toml"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_discovery_prefers_dotfile() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("mdsimplify.toml"), "[settings]\nheading-level = 4\n").unwrap();
        fs::write(temp_dir.path().join(".mdsimplify.toml"), "[settings]\nheading-level = 2\n").unwrap();

        let config = Config::load_with_discovery(None, temp_dir.path()).unwrap();
        assert_eq!(config.settings.heading_level, 2);
    }

    #[test]
    fn test_explicit_path_wins() {
        let temp_dir = tempdir().unwrap();
        let explicit = temp_dir.path().join("custom.toml");
        fs::write(&explicit, "[settings]\nheading-level = 5\n").unwrap();
        fs::write(temp_dir.path().join(".mdsimplify.toml"), "[settings]\nheading-level = 2\n").unwrap();

        let config = Config::load_with_discovery(Some(&explicit), temp_dir.path()).unwrap();
        assert_eq!(config.settings.heading_level, 5);
    }

    #[test]
    fn test_missing_config() {
        let temp_dir = tempdir().unwrap();
        let result = Config::load_with_discovery(None, temp_dir.path());
        match result {
            Err(ConfigError::Missing { searched }) => assert_eq!(searched.len(), 2),
            other => panic!("expected missing config, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_path_missing_is_io_error() {
        let temp_dir = tempdir().unwrap();
        let result = Config::load_with_discovery(Some(&temp_dir.path().join("nope.toml")), temp_dir.path());
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_create_default_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(".mdsimplify.toml");

        create_default_config(&path).unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.settings, Settings::default());

        let again = create_default_config(&path);
        assert!(matches!(again, Err(ConfigError::FileExists { .. })));
    }
}
