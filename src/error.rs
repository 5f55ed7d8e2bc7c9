use miette::Diagnostic;
use thiserror::Error;

/// Main error type for appicon operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error: {0}")]
    #[diagnostic(code(appicon::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(appicon::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(appicon::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(appicon::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Geometry error: {message}")]
    #[diagnostic(code(appicon::geometry))]
    Geometry {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Resample error: {message}")]
    #[diagnostic(code(appicon::resample))]
    Resample {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;
