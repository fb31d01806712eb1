//! File access for anchor: the settings file and CSV files on disk.

use std::fs::{self, File};
use std::path::Path;

use log::debug;

use crate::config::Settings;
use crate::error::{Error, Result};

/// Opens `path` for reading, describing it as `file_description` on error.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened.
pub fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Creates (or truncates) `path` for writing.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created.
pub fn get_writer(file_description: &str, path: &str) -> Result<File> {
    File::create(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Loads settings from the YAML file at `config_path`.
///
/// A missing or empty file gives [`Settings::default`].
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid
/// settings YAML.
pub fn get_settings(config_path: &str) -> Result<Settings> {
    if !Path::exists(Path::new(config_path)) {
        debug!("No settings file at `{config_path}`, using defaults");
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(config_path)
        .map_err(|e| Error::io_error("settings file".to_string(), config_path.to_string(), e))?;

    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(&contents).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            config_path.to_string(),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_settings_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");

        let settings = get_settings(path.to_str().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_empty_settings_file_gives_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        let settings = get_settings(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_file_overrides() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "clipboard_command: [\"xclip\", \"-selection\", \"clipboard\"]\nopen_command: [\"xdg-open\"]\n"
        )
        .unwrap();

        let settings = get_settings(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            settings.clipboard_command,
            vec!["xclip", "-selection", "clipboard"]
        );
        assert_eq!(settings.open_command, vec!["xdg-open"]);
        assert!(settings.open_after_copy);
    }

    #[test]
    fn test_malformed_settings_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "open_after_copy: [not, a, bool]").unwrap();

        let result = get_settings(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_get_reader_missing_file() {
        let result = get_reader("CSV file", "/definitely/not/here.csv");
        match result {
            Err(Error::Io {
                description, path, ..
            }) => {
                assert_eq!(description, "CSV file");
                assert_eq!(path, "/definitely/not/here.csv");
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
