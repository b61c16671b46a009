use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    #[error("Missing Argument: {0}")]
    MissingArgument(String),

    #[error("Output file '{}' already exists. Choose a different name or location.", .0.display())]
    OutputExists(PathBuf),

    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("TOML Parsing Error: {0}")]
    TomlParse(String),

    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Root directory '{}' does not exist or is not a directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("File Read Error: Path '{path}', Error: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File Write Error: Path '{path}', Error: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("WalkDir Error: {0}")]
    WalkDir(String),
}

impl AppError {
    /// Validation failures are reported before anything touches the disk.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::MissingArgument(_) | AppError::OutputExists(_) | AppError::InvalidArgument(_)
        )
    }
}

impl From<walkdir::Error> for AppError {
    fn from(err: walkdir::Error) -> Self {
        AppError::WalkDir(err.to_string())
    }
}
