//! Error handling for the cmdgen scaffolder.
//!
//! This module defines the main error type `ScaffoldError` used throughout the
//! library, along with a convenient `Result` type alias. Every variant maps to
//! a process exit status through [`ScaffoldError::exit_code`], so the binary is
//! the only place that terminates the process.
//!
//! # Examples
//!
//! ```
//! use cmdgen::core::error::{Result, ScaffoldError};
//!
//! fn needs_names(names: &[String]) -> Result<()> {
//!     if names.is_empty() {
//!         return Err(ScaffoldError::MissingNames);
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(needs_names(&[]).unwrap_err().exit_code(), 2);
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Exit status for file creation or write failures
pub const EXIT_FILE_CREATE: i32 = 1;
/// Exit status for invalid or unresolvable invocation options
pub const EXIT_USAGE: i32 = 2;
/// Exit status when a target file exists and overwrite was not requested
pub const EXIT_FILE_CONFLICT: i32 = 3;
/// Exit status for a malformed or incomplete template set
pub const EXIT_TEMPLATE_LOAD: i32 = 4;

/// Main error type for scaffolding operations
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// No target names were supplied
    #[error("Name(s) required")]
    MissingNames,

    /// A target name is not identifier-like or is a keyword
    #[error(
        "Invalid name '{0}': names must match [A-Za-z_][A-Za-z0-9_]*, contain a letter or digit and not be a Rust keyword"
    )]
    InvalidName(String),

    /// The parent path is not a relative path of identifier-like segments
    #[error("Invalid parent path '{path}': {reason}")]
    InvalidParent { path: String, reason: String },

    /// The running executable's location could not be determined
    #[error("could not get executable's path: {0}")]
    ExecutablePath(#[source] io::Error),

    /// The template set could not be compiled
    #[error("Template error: {0}")]
    TemplateLoad(String),

    /// A target directory could not be created
    #[error("could not create directory '{}': {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A target file already exists and overwrite was not requested
    #[error("file already exists: {}", path.display())]
    FileConflict { path: PathBuf },

    /// A target file could not be created or written
    #[error("could not create file '{}': {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template failed while executing against its context
    #[error("template exec error: {0}")]
    Render(String),

    /// Progress or snippet output could not be written
    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
}

impl ScaffoldError {
    /// Create a new template load error
    pub fn template_load<S: Into<String>>(msg: S) -> Self {
        Self::TemplateLoad(msg.into())
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(msg: S) -> Self {
        Self::Render(msg.into())
    }

    /// Process exit status the binary uses for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingNames
            | Self::InvalidName(_)
            | Self::InvalidParent { .. }
            | Self::ExecutablePath(_) => EXIT_USAGE,
            Self::TemplateLoad(_) => EXIT_TEMPLATE_LOAD,
            Self::FileConflict { .. } => EXIT_FILE_CONFLICT,
            Self::DirectoryCreate { .. }
            | Self::FileCreate { .. }
            | Self::Render(_)
            | Self::Output(_) => EXIT_FILE_CREATE,
        }
    }

    /// Whether the scaffolder records this error and keeps going
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DirectoryCreate { .. } | Self::Render(_))
    }
}

impl From<tera::Error> for ScaffoldError {
    fn from(err: tera::Error) -> Self {
        Self::Render(error_chain(&err))
    }
}

/// Joins an error with its sources; tera keeps the useful detail there.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        msg.push_str(": ");
        msg.push_str(&inner.to_string());
        source = inner.source();
    }
    msg
}
