//! Error types for simpletags

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for simpletags
///
/// Tag scanning itself never fails; these cover configuration and file intake.
#[derive(Debug, Error)]
pub enum SimpletagsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimpletagsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SimpletagsError::Config(_) => 2,
            SimpletagsError::Data(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SimpletagsError::Config(msg) if msg.contains("delimiter") => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Delimiters must be non-empty (defaults: '{{' and '}}')\n\
                    • The left delimiter needs at least one symbol, not only letters or digits\n\
                    • Pass both --left and --right together\n\
                    • Example: simpletags render page.txt --left '[[' --right ']]'",
                    self
                )
            }
            SimpletagsError::Data(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Data files are TOML documents (e.g. [user] name = \"Ada\")\n\
                    • Tag paths map to nested tables: {{tag:user:name}}",
                    self
                )
            }
            SimpletagsError::FileNotFound(path) => {
                format!(
                    "File not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path is spelled correctly\n\
                    • Relative paths are resolved from the current directory",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SimpletagsError
pub type Result<T> = std::result::Result<T, SimpletagsError>;
