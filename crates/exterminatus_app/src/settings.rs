// SPDX-License-Identifier: MIT OR Apache-2.0
//! User settings for analysis, attribute generation and layout.
//!
//! Settings live in a RON file. Every field has a default, so a settings
//! file only needs the values it changes:
//!
//! ```ron
//! (
//!     analysis: (include_attribute_sources: false),
//!     layout: (columns: 4, margin: 600.0),
//! )
//! ```

use exterminatus_graph::{AnalysisConfig, AttributeConfig, LayoutConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file looked up in the working directory
pub const SETTINGS_FILE_NAME: &str = "exterminatus.ron";

/// All user-tunable settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Analysis options
    pub analysis: AnalysisConfig,
    /// Generated attribute nodes
    pub attribute: AttributeConfig,
    /// Quarantine layout
    pub layout: LayoutConfig,
}

impl Settings {
    /// Load settings from a RON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let settings = ron::from_str(&content)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load `path` if given, else `exterminatus.ron` if present, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let local = Path::new(SETTINGS_FILE_NAME);
                if local.exists() {
                    Self::load(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save settings to a RON file
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let config = ron::ser::PrettyConfig::default().depth_limit(3);
        let content = ron::ser::to_string_pretty(self, config)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Error loading or saving settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// File could not be read or written
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid settings RON
    #[error("Invalid settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Settings could not be serialized
    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use exterminatus_graph::{AttributeChannel, NoOutputPolicy};

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(
            &path,
            "(analysis: (no_output_policy: ReportAll), attribute: (channel: Vector), layout: (columns: 4))",
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.analysis.no_output_policy, NoOutputPolicy::ReportAll);
        assert!(settings.analysis.include_attribute_sources);
        assert_eq!(settings.attribute.channel, AttributeChannel::Vector);
        assert_eq!(settings.attribute.text, "unused");
        assert_eq!(settings.layout.columns, 4);
        assert_eq!(settings.layout.gap_x, 120.0);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.ron");
        let mut settings = Settings::default();
        settings.layout.margin = 650.0;
        settings.attribute.text = "dead".to_string();

        settings.save(&path).unwrap();
        assert_eq!(Settings::load_or_default(Some(&path)).unwrap(), settings);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ron");
        std::fs::write(&path, "(layout: (columns: \"many\"))").unwrap();
        assert!(matches!(Settings::load(&path), Err(SettingsError::Parse(_))));
        assert!(matches!(
            Settings::load(&dir.path().join("missing.ron")),
            Err(SettingsError::Io(_))
        ));
    }
}
