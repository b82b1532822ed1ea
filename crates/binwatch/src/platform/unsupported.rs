use crate::{AppError, AppResult};

use std::panic::Location;

use binwatch_core::{AutostartController, ResultCode};
use error_location::ErrorLocation;

pub(crate) const BIN_VIEW_URI: &str = "";

#[track_caller]
pub(crate) fn ensure_supported() -> AppResult<()> {
    Err(unsupported())
}

#[track_caller]
pub(crate) fn item_count() -> AppResult<u64> {
    Err(unsupported())
}

#[track_caller]
pub(crate) fn empty_bin() -> AppResult<ResultCode> {
    Err(unsupported())
}

#[track_caller]
fn unsupported() -> AppError {
    AppError::UnsupportedPlatform {
        reason: format!(
            "{} has no supported recycle bin; binwatch runs on Windows and Linux",
            std::env::consts::OS
        ),
        location: ErrorLocation::from(Location::caller()),
    }
}

pub(crate) struct SystemAutostart;

impl SystemAutostart {
    pub(crate) fn new() -> AppResult<Self> {
        Err(unsupported())
    }
}

impl AutostartController for SystemAutostart {
    fn is_registered(&self) -> bool {
        false
    }

    fn enable(&self) -> bool {
        false
    }

    fn disable(&self) -> bool {
        false
    }
}
