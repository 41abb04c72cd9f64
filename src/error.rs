use miette::Diagnostic;
use thiserror::Error;

/// Main error type for qrtool operations
#[derive(Error, Diagnostic, Debug)]
pub enum QrError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(qrtool::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(qrtool::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(qrtool::encode))]
    Encode {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Logo could not be read. Callers treat this as a degraded result.
    #[error("Logo error with {path}: {message}")]
    #[diagnostic(code(qrtool::logo))]
    Logo {
        path: std::path::PathBuf,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, QrError>;
