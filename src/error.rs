use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillGistError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required configuration: {}", names.join(", "))]
    MissingConfig { names: Vec<String> },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Failed to fetch stats: {0}")]
    Fetch(String),

    #[error("Failed to publish chart: {0}")]
    Publish(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl SkillGistError {
    /// Short category name used as the `✖ <type>:` prefix of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::MissingConfig { .. } | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Http(_) => "HTTP",
            Self::Fetch(_) => "Fetch",
            Self::Publish(_) => "Publish",
            Self::Io(_) => "IO",
        }
    }

    /// The human readable message without the type prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::Http(msg) | Self::Fetch(msg) | Self::Publish(msg) => {
                msg.clone()
            }
            Self::MissingConfig { names } => {
                format!("missing required values: {}", names.join(", "))
            }
            Self::FileRead { path, .. } => path.display().to_string(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => e
                .span()
                .map(|span| format!("at bytes {}..{}", span.start, span.end)),
            _ => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format and the environment variables")
            }
            Self::MissingConfig { .. } => Some(
                "Set the missing values as environment variables (or repository secrets) or in .skill-gist.toml",
            ),
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check the file permissions"),
                _ => None,
            },
            Self::Fetch(_) => {
                Some("Check that the LeetCode username exists and is spelled correctly")
            }
            Self::Publish(_) => {
                Some("Check that GH_TOKEN has the gist scope and GIST_ID is correct")
            }
            Self::Http(_) => Some("Check your network connection"),
            Self::Io(_) => None,
        }
    }

    /// Whether this error belongs to configuration rather than a failed run.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::MissingConfig { .. }
                | Self::TomlParse(_)
                | Self::FileRead { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SkillGistError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
