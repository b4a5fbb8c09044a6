use miette::Diagnostic;
use thiserror::Error;

/// Main error type for iconset operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconsetError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(iconset::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(iconset::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Export error: {message}")]
    #[diagnostic(code(iconset::export))]
    Export {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, IconsetError>;
