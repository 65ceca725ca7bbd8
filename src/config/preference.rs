//! Saved language preference (`<config_dir>/rtag/config`).

use crate::error::{ConfigError, Result};
use crate::i18n::Language;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the preference file, if the platform has a config dir
pub fn preference_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rtag").join("config"))
}

/// Read the saved language. Missing, unreadable or unknown values yield `None`.
pub fn load_language(path: &Path) -> Option<Language> {
    let contents = fs::read_to_string(path).ok()?;
    let language = Language::from_code(&contents);
    if language.is_none() {
        log::warn!(
            "Ignoring unknown language '{}' in {}",
            contents.trim(),
            path.display()
        );
    }
    language
}

/// Save `language` to `path`, creating parent directories
pub fn save_language(path: &Path, language: Language) -> Result<()> {
    let save_failed = |source: std::io::Error| ConfigError::SaveFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(save_failed)?;
    }
    fs::write(path, language.code()).map_err(save_failed)?;

    log::info!("Saved language '{}' to {}", language, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("rtag").join("config");

        save_language(&path, Language::Fr).expect("save");

        assert_eq!(fs::read_to_string(&path).expect("read"), "fr");
        assert_eq!(load_language(&path), Some(Language::Fr));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        assert_eq!(load_language(&temp_dir.path().join("config")), None);
    }

    #[test]
    fn test_load_ignores_unknown_language() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config");
        fs::write(&path, "klingon\n").expect("seed");

        assert_eq!(load_language(&path), None);
    }

    #[test]
    fn test_load_tolerates_trailing_newline() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config");
        fs::write(&path, "zh\n").expect("seed");

        assert_eq!(load_language(&path), Some(Language::Zh));
    }
}
