//! Configuration paths and settings for anchor.
//!
//! This module resolves the database and settings file paths, expanding `~`,
//! and defines the [`Settings`] read from the optional settings YAML.

use serde::{Deserialize, Serialize};

/// Default path for the anchors database
const DEFAULT_DATABASE_PATH: &str = "~/.config/anchor/local.db";
/// Default path for the settings file
const DEFAULT_CONFIG_PATH: &str = "~/.config/anchor/config.yml";

/// Default command receiving resolved values on stdin
pub const DEFAULT_CLIPBOARD_COMMAND: &str = "pbcopy";
/// Default command receiving resolved values as its last argument
pub const DEFAULT_OPEN_COMMAND: &str = "open";

/// Resolves the database file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// database path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use anchor_core::config::get_database_path;
///
/// let custom_path = get_database_path(&Some("/tmp/anchors.db".to_string()));
/// assert_eq!(custom_path, "/tmp/anchors.db");
/// ```
pub fn get_database_path(database_path_arg: &Option<String>) -> String {
    let database_path = match database_path_arg {
        Some(database_path) => database_path,
        None => DEFAULT_DATABASE_PATH,
    };

    shellexpand::tilde(database_path).to_string()
}

/// Resolves the settings file path, the same way as [`get_database_path`].
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

fn default_clipboard_command() -> Vec<String> {
    vec![DEFAULT_CLIPBOARD_COMMAND.to_string()]
}

fn default_open_command() -> Vec<String> {
    vec![DEFAULT_OPEN_COMMAND.to_string()]
}

fn default_open_after_copy() -> bool {
    true
}

/// User settings, all optional in the YAML file.
///
/// ```yaml
/// clipboard_command: ["xclip", "-selection", "clipboard"]
/// open_command: ["xdg-open"]
/// open_after_copy: false
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Program and arguments that receive the resolved value on stdin.
    #[serde(default = "default_clipboard_command")]
    pub clipboard_command: Vec<String>,

    /// Program and arguments that receive the resolved value as a final
    /// argument.
    #[serde(default = "default_open_command")]
    pub open_command: Vec<String>,

    /// Whether to run the open command after copying.
    #[serde(default = "default_open_after_copy")]
    pub open_after_copy: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clipboard_command: default_clipboard_command(),
            open_command: default_open_command(),
            open_after_copy: default_open_after_copy(),
        }
    }
}
