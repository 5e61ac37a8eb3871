use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dab operations
#[derive(Error, Diagnostic, Debug)]
pub enum DabError {
    #[error("IO error: {0}")]
    #[diagnostic(code(dab::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(dab::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(dab::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Coordinate ({x}, {y}) is outside the {width}x{height} buffer")]
    #[diagnostic(code(dab::bounds), help("Coordinates must lie in 0..width and 0..height"))]
    Bounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

pub type Result<T> = std::result::Result<T, DabError>;
