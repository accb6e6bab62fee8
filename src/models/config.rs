use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the root directory
pub const CONFIG_FILE_NAME: &str = "vidclean.toml";

/// Fields whose values are erased when no config overrides them.
///
/// `external_video_url` is deliberately absent.
pub const DEFAULT_VIDEO_FIELDS: &[&str] = &[
    "video",
    "video_url",
    "video_mp4",
    "video_webm",
    "video_ogg",
    "video_src",
    "video_file",
    "background_video",
    "hero_video",
    "banner_video",
];

/// Configuration loaded from vidclean.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fields: FieldsConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Target Field Set configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldsConfig {
    /// Field names checked on each line, in priority order
    #[serde(default = "default_field_names")]
    pub names: Vec<String>,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            names: default_field_names(),
        }
    }
}

fn default_field_names() -> Vec<String> {
    DEFAULT_VIDEO_FIELDS.iter().map(|s| s.to_string()).collect()
}

/// File discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Case-sensitive file name suffix of candidate files
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    ".json".to_string()
}

/// Behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Copy the original to `<file>.backup` before rewriting it
    #[serde(default)]
    pub backup: bool,
    /// Ask for confirmation before any file is written
    #[serde(default = "default_confirm")]
    pub confirm: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            backup: false,
            confirm: default_confirm(),
        }
    }
}

fn default_confirm() -> bool {
    true
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from vidclean.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(
        mut self,
        fields: Option<Vec<String>>,
        extension: Option<String>,
        backup: bool,
        assume_yes: bool,
    ) -> Self {
        if let Some(f) = fields {
            self.fields.names = f;
        }
        if let Some(e) = extension {
            self.scan.extension = e;
        }
        if backup {
            self.behavior.backup = true;
        }
        if assume_yes {
            self.behavior.confirm = false;
        }
        self
    }

    /// Reject configurations that cannot produce a meaningful run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fields.names.is_empty() {
            return Err(ConfigError::NoFields);
        }
        for name in &self.fields.names {
            if name.is_empty() || name.contains('"') {
                return Err(ConfigError::InvalidField(name.clone()));
            }
        }
        if self.scan.extension.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
    #[error("No target fields configured")]
    NoFields,
    #[error("Invalid target field name: {0:?}")]
    InvalidField(String),
    #[error("File extension must not be empty")]
    EmptyExtension,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.fields.names.len(), 10);
        assert_eq!(config.fields.names[0], "video");
        assert_eq!(config.fields.names[9], "banner_video");
        assert!(!config.fields.names.iter().any(|f| f == "external_video_url"));
        assert_eq!(config.scan.extension, ".json");
        assert!(!config.behavior.backup);
        assert!(config.behavior.confirm);
    }

    #[test]
    fn test_config_with_overrides() {
        let config = Config::default().with_overrides(
            Some(vec!["clip".to_string()]),
            Some(".jsonc".to_string()),
            true,
            true,
        );
        assert_eq!(config.fields.names, vec!["clip".to_string()]);
        assert_eq!(config.scan.extension, ".jsonc");
        assert!(config.behavior.backup);
        assert!(!config.behavior.confirm);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[fields]
names = ["promo_video", "video"]

[behavior]
backup = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fields.names, vec!["promo_video", "video"]);
        assert_eq!(config.scan.extension, ".json"); // default
        assert!(config.behavior.backup);
        assert!(config.behavior.confirm); // default
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut config = Config::default();
        config.fields.names.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoFields)));

        config.fields.names = vec!["ok".to_string(), "bad\"name".to_string()];
        assert!(matches!(config.validate(), Err(ConfigError::InvalidField(_))));

        config.fields.names = vec![String::new()];
        assert!(matches!(config.validate(), Err(ConfigError::InvalidField(_))));
    }

    #[test]
    fn test_validate_rejects_empty_extension() {
        let mut config = Config::default();
        config.scan.extension.clear();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyExtension)));
        assert!(Config::default().validate().is_ok());
    }
}
