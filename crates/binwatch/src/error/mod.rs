use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the binwatch binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// The running platform has no supported trash facility.
    #[error("Unsupported platform: {reason} {location}")]
    UnsupportedPlatform {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading, saving or validation error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// An icon asset is missing or could not be decoded.
    #[error("Icon asset error: {reason} {location}")]
    AssetError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Tray icon or menu construction failed.
    #[error("Tray error: {reason} {location}")]
    TrayError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// An off-loop platform call did not finish in time.
    #[error("'{operation}' timed out after {timeout_ms} ms {location}")]
    Timeout {
        /// Operation that timed out.
        operation: &'static str,
        /// Timeout that elapsed.
        timeout_ms: u128,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// A previous call of the same operation is still running.
    #[error("'{operation}' is already in progress {location}")]
    Busy {
        /// Operation that was dropped.
        operation: &'static str,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// A platform call failed.
    #[error("Platform call failed: {reason} {location}")]
    PlatformError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From<io::Error> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl AppError {
    /// Short description without the location suffix, for user-facing text.
    pub fn detail(&self) -> String {
        match self {
            AppError::UnsupportedPlatform { reason, .. }
            | AppError::ConfigError { reason, .. }
            | AppError::AssetError { reason, .. }
            | AppError::TrayError { reason, .. }
            | AppError::PlatformError { reason, .. } => reason.clone(),
            AppError::Timeout {
                operation,
                timeout_ms,
                ..
            } => format!("{} timed out after {} ms", operation, timeout_ms),
            AppError::Busy { operation, .. } => format!("{} is already in progress", operation),
            AppError::IoError { source, .. } => source.to_string(),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
