//! freedesktop.org trash.

use crate::{AppError, AppResult, platform::xdg_autostart::XdgAutostart};

use std::panic::Location;

use binwatch_core::{ActionResult, ResultCode};
use error_location::ErrorLocation;
use trash::os_limited::{list, purge_all};
use tracing::info;

pub(crate) const BIN_VIEW_URI: &str = "trash:///";

pub(crate) type SystemAutostart = XdgAutostart;

#[track_caller]
pub(crate) fn ensure_supported() -> AppResult<()> {
    list().map(|_| ()).map_err(|e| AppError::UnsupportedPlatform {
        reason: format!("freedesktop trash is not accessible: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn item_count() -> AppResult<u64> {
    let items = list().map_err(|e| AppError::PlatformError {
        reason: format!("Failed to list trash: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(items.len() as u64)
}

#[track_caller]
pub(crate) fn empty_bin() -> AppResult<ResultCode> {
    let items = list().map_err(|e| AppError::PlatformError {
        reason: format!("Failed to list trash: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if items.is_empty() {
        return Ok(ActionResult::ALREADY_EMPTY);
    }

    let count = items.len();
    purge_all(items).map_err(|e| AppError::PlatformError {
        reason: format!("Failed to purge trash: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    info!(count, "Purged trash items");

    Ok(ActionResult::SUCCESS)
}
