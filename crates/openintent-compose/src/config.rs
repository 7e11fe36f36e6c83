//! Composer configuration.
//!
//! Reads the `[composer]` table of a TOML file.  Every field has a default, so
//! a missing file section, or a section with only some keys, is valid.
//!
//! ```toml
//! [composer]
//! sender_name = "Smart Agent System"
//! organization = "Multi-Platform Services"
//! seed = 42
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ComposeError, Result};

/// Settings that shape signatures, the fallback subject, and variant choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// First line under the sign-off in every signature.
    pub sender_name: String,
    /// Organization line in every signature.
    pub organization: String,
    /// Contact lines, shown only in the formal signature.
    pub contact_email: String,
    pub contact_phone: String,
    pub website: String,
    /// Subject used by the fallback path when the instruction has none.
    pub fallback_subject: String,
    /// Fixed seed for template variant selection.  `None` uses entropy.
    pub seed: Option<u64>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            sender_name: "Smart Agent System".into(),
            organization: "Multi-Platform Services".into(),
            contact_email: "smartagent@multiplatformservices.com".into(),
            contact_phone: "+1 (555) 123-4567".into(),
            website: "www.multiplatformservices.com".into(),
            fallback_subject: "Message from Smart Agent".into(),
            seed: None,
        }
    }
}

/// Top-level shape of a config file; other tables are ignored.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    composer: ComposerConfig,
}

impl ComposerConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.composer)
    }

    /// Load a config from a TOML file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ComposeError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), seeded = config.seed.is_some(), "composer config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ComposerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ComposerConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = ComposerConfig::from_toml_str(
            r#"
            [composer]
            sender_name = "Dispatch Bot"
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.sender_name, "Dispatch Bot");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.organization, "Multi-Platform Services");
    }

    #[test]
    fn unrelated_tables_are_ignored() {
        let config = ComposerConfig::from_toml_str("[bot]\nhistory_window = 20\n").unwrap();
        assert_eq!(config, ComposerConfig::default());
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = ComposerConfig::from_toml_str("[composer]\nseed = \"abc\"\n");
        assert!(matches!(result, Err(ComposeError::Toml(_))));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compose.toml");
        std::fs::write(&path, "[composer]\nfallback_subject = \"Note\"\n").unwrap();

        let config = ComposerConfig::load(&path).unwrap();
        assert_eq!(config.fallback_subject, "Note");
    }

    #[test]
    fn load_missing_file_fails() {
        let result = ComposerConfig::load("/definitely/not/here.toml");
        match result {
            Err(ComposeError::Config { path, .. }) => assert!(path.ends_with("here.toml")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
