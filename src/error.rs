//! Error handling for stackforge.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// All errors that can abort project generation.
///
/// Validation errors are raised before any filesystem effect; I/O and
/// subprocess errors surface as a single user-facing message with a
/// non-zero exit. Nothing is retried automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failure during materialization. The partially written
    /// tree is left in place for inspection.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Project name failed the package-name rules.
    #[error("Invalid project name: {0}")]
    InvalidProjectName(String),

    /// Configuration fields are inconsistent (e.g. a testing framework
    /// that does not exist for the chosen stack).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Stack identifier is not one of the known stacks.
    #[error("Unknown stack: '{0}'")]
    UnknownStack(String),

    /// The target directory (or a file at its path) already exists.
    /// Generation never merges into an existing project.
    #[error("Directory '{path}' already exists")]
    DirectoryExists { path: String },

    /// The registry has no template for a known stack.
    #[error("No template registered for stack '{stack}'")]
    TemplateNotFound { stack: String },

    /// An external command could not be spawned or exited non-zero.
    #[error("Command '{program}' failed: {detail}")]
    CommandFailed { program: String, detail: String },

    /// Dependency installation failed. The generated project tree stays
    /// on disk so the user can install manually.
    #[error("Failed to install dependencies: {0}")]
    DependencyInstallFailed(String),

    /// Interactive prompting failed or was interrupted.
    #[error("Prompt error: {0}")]
    PromptError(String),
}

/// Convenience type alias for results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program
/// with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
