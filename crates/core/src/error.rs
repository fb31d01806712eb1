use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Anchor `{}` expects {} argument(s) but {} were given: {}={:?}",
        .key,
        .expected,
        .supplied,
        .key,
        .template
    )]
    Arity {
        key: String,
        template: String,
        expected: usize,
        supplied: usize,
    },

    #[error("Invalid format `{}`. Use: key='value'", .0)]
    Format(String),

    #[error("No anchor was found with key `{}`", .0)]
    NotFound(String),

    #[error("An anchor with key `{}` already exists", .0)]
    Uniqueness(String),

    #[error("Database error: {}", .0)]
    Database(#[from] rusqlite::Error),

    #[error("IO error with {} at path `{}`: {}", .description, .path, .original)]
    Io {
        description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Error reading CSV from {}: {}", .source_name, .original)]
    Csv {
        source_name: String,
        original: csv::Error,
    },

    #[error("Error fetching `{}`: {}", .url, .reason)]
    Http { url: String, reason: String },

    #[error("No valid anchors were found in {}", .0)]
    EmptyImport(String),

    #[error("A valid path or url is required to import anchors")]
    MissingImportSource,

    #[error("The sub process `{}` exited with non-success code.", .0)]
    SubProcessExit(String),

    #[error("The clipboard and open commands may not be empty")]
    EmptySinkCommand,

    #[error("Error with sub process: {}", .0)]
    SubProcess(#[from] std::io::Error),
}

impl Error {
    pub fn arity(key: &str, template: &str, expected: usize, supplied: usize) -> Self {
        Self::Arity {
            key: key.to_string(),
            template: template.to_string(),
            expected,
            supplied,
        }
    }

    pub fn io_error(description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            description,
            path,
            original,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn csv_error(source_name: String, original: csv::Error) -> Self {
        Self::Csv {
            source_name,
            original,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_message_names_counts() {
        let error = Error::arity("gh", "https://github.com/$1", 1, 0);
        let message = error.to_string();
        assert!(message.contains("`gh`"));
        assert!(message.contains("expects 1 argument(s) but 0 were given"));
        assert!(message.contains("https://github.com/$1"));
    }

    #[test]
    fn test_not_found_message() {
        let error = Error::NotFound("docs".to_string());
        assert_eq!(error.to_string(), "No anchor was found with key `docs`");
    }
}
