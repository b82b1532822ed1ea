use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Bin monitor errors with source location tracking.
///
/// Both variants are downgraded to user notifications by the monitor.
/// Startup configuration faults belong to the binary.
#[derive(Error, Debug)]
pub enum BinError {
    /// Querying the bin state failed or was unavailable.
    #[error("Bin query failed: {reason} {location}")]
    QueryFailed {
        /// Description of the query failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// An action against the bin (empty, open, autostart) raised a fault.
    #[error("Bin action '{action}' failed: {reason} {location}")]
    ActionFailed {
        /// Name of the action that failed.
        action: &'static str,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl BinError {
    /// Build a [`BinError::QueryFailed`] at the caller's location.
    #[track_caller]
    pub fn query_failed(reason: impl Into<String>) -> Self {
        BinError::QueryFailed {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Build a [`BinError::ActionFailed`] at the caller's location.
    #[track_caller]
    pub fn action_failed(action: &'static str, reason: impl Into<String>) -> Self {
        BinError::ActionFailed {
            action,
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The most specific human-readable detail, without the location suffix.
    ///
    /// Used as the body of user notifications.
    pub fn detail(&self) -> &str {
        match self {
            BinError::QueryFailed { reason, .. } | BinError::ActionFailed { reason, .. } => reason,
        }
    }
}

/// Result type alias using [`BinError`].
pub type Result<T> = std::result::Result<T, BinError>;
