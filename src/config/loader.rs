//! Configuration loading with defaults

use std::path::Path;

use crate::errors::Result;
use crate::fs;
use crate::schemas::{Config, Locale};

/// Load configuration for a project, falling back to defaults.
///
/// If `.repairflow/config.json` exists it is read and merged with defaults.
/// A locale given on the command line wins over the file.
pub fn load_config(root: &Path, locale_override: Option<Locale>) -> Result<Config> {
    let mut config = fs::read_config(root)?;
    if let Some(locale) = locale_override {
        config.locale = locale;
    }
    tracing::debug!(locale = %config.locale, "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults() {
        let temp = TempDir::new().unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.locale, Locale::Th);
        assert!(!config.show_descriptions);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".repairflow");
        std_fs::create_dir(&dir).unwrap();
        std_fs::write(dir.join("config.json"), r#"{"show_descriptions": true}"#).unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert!(config.show_descriptions);
        // Default for unspecified field
        assert_eq!(config.locale, Locale::Th);
    }

    #[test]
    fn test_locale_override_wins() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".repairflow");
        std_fs::create_dir(&dir).unwrap();
        std_fs::write(dir.join("config.json"), r#"{"locale": "th"}"#).unwrap();

        let config = load_config(temp.path(), Some(Locale::En)).unwrap();
        assert_eq!(config.locale, Locale::En);
    }
}
