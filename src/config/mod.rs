//! Configuration management for `glowgrid.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `[input]`    | Entries JSON from the content collection       |
//! | `[output]`   | Generated activity data path                   |
//! | `[grid]`     | Calendar layout strategy                       |
//! | `[viewport]` | Mobile/desktop breakpoint                      |
//! | `[preview]`  | Hover preview card geometry                    |
//!
//! # Example
//!
//! ```toml
//! [input]
//! entries = "content/entries.json"
//!
//! [output]
//! activity = "public/_data/activity.json"
//!
//! [grid]
//! layout = "month-block"
//!
//! [viewport]
//! mobile_breakpoint = 768.0
//! ```

pub mod defaults;
mod error;
mod sections;

pub use error::ConfigError;
pub use sections::{GridSection, InputConfig, OutputConfig, PreviewConfig, ViewportConfig};

use crate::interact::{ControllerSettings, Size};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing glowgrid.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Entries input settings
    #[serde(default)]
    pub input: InputConfig,

    /// Activity data output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Grid layout settings
    #[serde(default)]
    pub grid: GridSection,

    /// Device classification settings
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// Preview card geometry
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl GridConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: GridConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = Self::normalize_path(path);
        Ok(config)
    }

    /// Apply CLI path overrides, then anchor all paths at `root`.
    pub fn update_with_overrides(
        &mut self,
        root: &Path,
        entries: Option<&Path>,
        activity: Option<&Path>,
    ) {
        if let Some(path) = entries {
            self.input.entries = path.to_path_buf();
        }
        if let Some(path) = activity {
            self.output.activity = path.to_path_buf();
        }

        let root = Self::normalize_path(root);
        self.input.entries = Self::normalize_path(&root.join(&self.input.entries));
        self.output.activity = Self::normalize_path(&root.join(&self.output.activity));
    }

    /// Validate configuration before running a command
    pub fn validate(&self) -> Result<()> {
        if !self.input.entries.exists() {
            bail!(ConfigError::Validation(format!(
                "[input.entries] not found: {}",
                self.input.entries.display()
            )));
        }

        if self.viewport.mobile_breakpoint <= 0. {
            bail!(ConfigError::Validation(
                "[viewport.mobile_breakpoint] must be positive".into()
            ));
        }

        if self.preview.width <= 0. || self.preview.height <= 0. {
            bail!(ConfigError::Validation(
                "[preview] width and height must be positive".into()
            ));
        }

        if self.preview.offset < 0. {
            bail!(ConfigError::Validation(
                "[preview.offset] must not be negative".into()
            ));
        }

        Ok(())
    }

    /// Interaction settings derived from `[viewport]` and `[preview]`.
    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            mobile_breakpoint: self.viewport.mobile_breakpoint,
            preview: Size {
                width: self.preview.width,
                height: self.preview.height,
            },
            offset: self.preview.offset,
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_str_empty_is_all_defaults() {
        let config = GridConfig::from_str("").unwrap();
        assert_eq!(config.viewport.mobile_breakpoint, 768.);
        assert_eq!(config.preview.width, 350.);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = GridConfig::from_str(
            r#"
            [input
            entries = "x.json"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let result = GridConfig::from_str(
            r#"
            [search]
            enable = true
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [input]
            entries = "posts.json"

            [viewport]
            mobile_breakpoint = 600.0
        "#
        )
        .unwrap();

        let config = GridConfig::from_path(file.path()).unwrap();
        assert_eq!(config.input.entries, PathBuf::from("posts.json"));
        assert_eq!(config.viewport.mobile_breakpoint, 600.);
        assert!(config.config_path.is_absolute());
    }

    #[test]
    fn test_update_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GridConfig::default();

        config.update_with_overrides(dir.path(), Some(Path::new("custom.json")), None);

        assert!(config.input.entries.is_absolute());
        assert!(config.input.entries.ends_with("custom.json"));
        assert!(config.output.activity.ends_with("public/_data/activity.json"));
    }

    #[test]
    fn test_validate_missing_entries() {
        let mut config = GridConfig::default();
        config.input.entries = PathBuf::from("/nonexistent/entries.json");

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[input.entries] not found"));
    }

    #[test]
    fn test_validate_bad_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let entries = dir.path().join("entries.json");
        std::fs::write(&entries, "[]").unwrap();

        let mut config = GridConfig::default();
        config.input.entries = entries.clone();
        config.preview.width = 0.;
        assert!(config.validate().is_err());

        let mut config = GridConfig::default();
        config.input.entries = entries.clone();
        config.preview.offset = -1.;
        assert!(config.validate().is_err());

        let mut config = GridConfig::default();
        config.input.entries = entries;
        config.viewport.mobile_breakpoint = 0.;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_controller_settings() {
        let config = GridConfig::from_str(
            r#"
            [viewport]
            mobile_breakpoint = 640.0

            [preview]
            width = 300.0
            height = 180.0
            offset = 16.0
        "#,
        )
        .unwrap();

        let settings = config.controller_settings();
        assert_eq!(settings.mobile_breakpoint, 640.);
        assert_eq!(settings.preview.width, 300.);
        assert_eq!(settings.preview.height, 180.);
        assert_eq!(settings.offset, 16.);
    }
}
