//! Error handling for modulegen.
//! Defines the error type and result alias used throughout the generator.

use std::io;
use thiserror::Error;

/// Errors that can occur while generating an example module.
///
/// Every variant bubbles up to `main`, which reports it and exits non-zero.
/// Nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// The example name or title is empty or contains non-alphabetic characters.
    #[error("invalid {field}: '{value}'. Only alphabetical characters are allowed")]
    ValidationError { field: &'static str, value: String },

    /// The example name collides with a page or module the project already owns.
    #[error("invalid name: '{0}' is reserved")]
    ReservedName(String),

    /// A manifest could not be read or parsed.
    #[error("could not read '{path}': {reason}")]
    ConfigReadError { path: String, reason: String },

    /// A manifest could not be serialized or written back.
    #[error("could not write '{path}': {reason}")]
    ConfigWriteError { path: String, reason: String },

    /// A manifest lacks the pinned entries or sections it must always carry.
    #[error("unexpected manifest structure: {0}")]
    StructuralPrecondition(String),

    /// Directory or file creation failed, or a template could not be read.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Template rendering failed.
    #[error("Template rendering error: {0}")]
    MinijinjaError(#[from] minijinja::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that reports the error and exits the program.
///
/// The message goes to stdout, prefixed the same way as every other
/// generator failure, and the process exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    println!(">> error generating the example: {err}");
    std::process::exit(1);
}
