// Common error types for projkit

use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Filesystem failure, with the operation and path it happened on
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// The embedded project template violates its layout rules
    #[error("Template error: {0}")]
    Template(String),

    /// The project name could not be read
    #[error("Input error: {0}")]
    Input(String),
}

impl ToolError {
    /// Wrap an I/O error with the action and path that produced it
    pub fn io(action: &str, path: &Path, source: io::Error) -> Self {
        ToolError::Io {
            context: format!("Failed to {} {}", action, path.display()),
            source,
        }
    }

    /// Underlying OS error kind, if this is a filesystem failure
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            ToolError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;

/// Error as presented to the person running a binary
#[derive(Debug)]
pub struct UserError {
    pub message: String,
    pub causes: Vec<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        Self {
            message: err.to_string(),
            causes: err.chain().skip(1).map(ToString::to_string).collect(),
            exit_code: 1,
        }
    }

    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if !self.causes.is_empty() {
            eprintln!();
            eprintln!("Caused by:");
            for (i, cause) in self.causes.iter().enumerate() {
                eprintln!("    {}: {}", i, cause);
            }
        }
    }
}
