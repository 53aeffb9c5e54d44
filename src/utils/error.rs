use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{} does not match the bundled stylesheet", .path.display())]
    Mismatch { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code used by the CLI for this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AssetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AssetError::WriteError { .. } | AssetError::ReadError { .. } => ErrorCategory::Io,
            AssetError::TomlError(_)
            | AssetError::ConfigError { .. }
            | AssetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AssetError::Mismatch { .. } => ErrorCategory::Content,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AssetError::Mismatch { .. } => ErrorSeverity::High,
            AssetError::TomlError(_)
            | AssetError::ConfigError { .. }
            | AssetError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            AssetError::WriteError { source, .. } | AssetError::ReadError { source, .. } => {
                io_severity(source)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AssetError::WriteError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!(
                    "Create the directory for {} first, or pass --create-dirs",
                    path.display()
                ),
                std::io::ErrorKind::PermissionDenied => {
                    format!("Check write permissions on {}", path.display())
                }
                _ => "Check that the output location is a writable file path".to_string(),
            },
            AssetError::ReadError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!(
                    "{} does not exist; check the path passed to --config",
                    path.display()
                ),
                std::io::ErrorKind::PermissionDenied => {
                    format!("Check read permissions on {}", path.display())
                }
                _ => format!("Check that {} is a readable file", path.display()),
            },
            AssetError::TomlError(_) => "Fix the syntax of the configuration file".to_string(),
            AssetError::ConfigError { .. }
            | AssetError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the configuration file".to_string()
            }
            AssetError::Mismatch { .. } => {
                "Run without --check to regenerate the stylesheet".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AssetError::WriteError { path, .. } => {
                format!("Could not write {}", path.display())
            }
            AssetError::ReadError { path, .. } => {
                format!("Could not read {}", path.display())
            }
            AssetError::Mismatch { path } => format!("{} is out of date", path.display()),
            other => other.to_string(),
        }
    }
}

fn io_severity(e: &std::io::Error) -> ErrorSeverity {
    match e.kind() {
        std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock => ErrorSeverity::Medium,
        std::io::ErrorKind::OutOfMemory => ErrorSeverity::Critical,
        _ => ErrorSeverity::High,
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
