//! Windows shell recycle bin and `HKCU\...\Run` autostart.

use crate::{AppError, AppResult};

use std::{ffi::OsStr, os::windows::ffi::OsStrExt, panic::Location, path::PathBuf};

use binwatch_core::{ActionResult, AutostartController, ResultCode};
use error_location::ErrorLocation;
use tracing::{error, info, instrument};
use windows::{
    Win32::{
        Foundation::HWND,
        System::Registry::{
            HKEY, HKEY_CURRENT_USER, KEY_QUERY_VALUE, KEY_SET_VALUE, REG_SAM_FLAGS, REG_SZ,
            RegCloseKey, RegDeleteValueW, RegOpenKeyExW, RegQueryValueExW, RegSetValueExW,
        },
        UI::Shell::{SHEmptyRecycleBinW, SHQUERYRBINFO, SHQueryRecycleBinW},
    },
    core::{PCWSTR, w},
};

pub(crate) const BIN_VIEW_URI: &str = "shell:RecycleBinFolder";

// SHERB_NOCONFIRMATION
const EMPTY_FLAGS: u32 = 0x0000_0001;

pub(crate) fn ensure_supported() -> AppResult<()> {
    Ok(())
}

#[track_caller]
pub(crate) fn item_count() -> AppResult<u64> {
    let mut info = SHQUERYRBINFO {
        cbSize: std::mem::size_of::<SHQUERYRBINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: `info` is a properly sized, writable SHQUERYRBINFO.
    unsafe { SHQueryRecycleBinW(PCWSTR::null(), &mut info) }.map_err(|e| {
        AppError::PlatformError {
            reason: format!("SHQueryRecycleBinW failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    Ok(info.i64NumItems.max(0) as u64)
}

/// Empty every drive's bin and return the raw HRESULT.
pub(crate) fn empty_bin() -> AppResult<ResultCode> {
    // SAFETY: null root path means all drives; no window owns the call.
    match unsafe { SHEmptyRecycleBinW(HWND::default(), PCWSTR::null(), EMPTY_FLAGS) } {
        Ok(()) => Ok(ActionResult::SUCCESS),
        Err(e) => Ok(e.code().0),
    }
}

/// Open `HKCU\Software\Microsoft\Windows\CurrentVersion\Run`, closed on drop.
struct RunKey(HKEY);

impl RunKey {
    #[track_caller]
    fn open(access: REG_SAM_FLAGS) -> AppResult<Self> {
        let mut hkey = HKEY::default();
        // SAFETY: `hkey` receives the opened handle and is closed in Drop.
        unsafe {
            RegOpenKeyExW(
                HKEY_CURRENT_USER,
                w!("Software\\Microsoft\\Windows\\CurrentVersion\\Run"),
                0,
                access,
                &mut hkey,
            )
        }
        .ok()
        .map_err(|e| AppError::PlatformError {
            reason: format!("Failed to open Run key: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self(hkey))
    }
}

impl Drop for RunKey {
    fn drop(&mut self) {
        // SAFETY: handle came from a successful RegOpenKeyExW.
        let _ = unsafe { RegCloseKey(self.0) };
    }
}

/// Autostart through a `Binwatch` value under the user's Run key.
pub(crate) struct SystemAutostart {
    exec: PathBuf,
}

impl SystemAutostart {
    #[track_caller]
    pub(crate) fn new() -> AppResult<Self> {
        Ok(Self {
            exec: std::env::current_exe()?,
        })
    }

    #[track_caller]
    fn write_value(&self) -> AppResult<()> {
        let key = RunKey::open(KEY_SET_VALUE)?;

        let command = format!("\"{}\"", self.exec.display());
        let data: Vec<u8> = OsStr::new(&command)
            .encode_wide()
            .chain(std::iter::once(0))
            .flat_map(u16::to_le_bytes)
            .collect();

        // SAFETY: `data` is a NUL-terminated UTF-16 string as REG_SZ requires.
        unsafe { RegSetValueExW(key.0, w!("Binwatch"), 0, REG_SZ, Some(&data)) }
            .ok()
            .map_err(|e| AppError::PlatformError {
                reason: format!("Failed to set Run value: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn delete_value(&self) -> AppResult<()> {
        let key = RunKey::open(KEY_SET_VALUE)?;

        // SAFETY: valid open key handle and static value name.
        let status = unsafe { RegDeleteValueW(key.0, w!("Binwatch")) };
        if status.0 == 2 {
            // ERROR_FILE_NOT_FOUND: already unregistered
            return Ok(());
        }
        status.ok().map_err(|e| AppError::PlatformError {
            reason: format!("Failed to delete Run value: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl AutostartController for SystemAutostart {
    fn is_registered(&self) -> bool {
        let Ok(key) = RunKey::open(KEY_QUERY_VALUE) else {
            return false;
        };

        // SAFETY: only queries for existence, no output buffers.
        unsafe { RegQueryValueExW(key.0, w!("Binwatch"), None, None, None, None) }
            .ok()
            .is_ok()
    }

    #[instrument(skip(self))]
    fn enable(&self) -> bool {
        match self.write_value() {
            Ok(()) => {
                info!("Autostart Run value written");
                true
            }
            Err(e) => {
                error!(error = ?e, "Failed to register autostart");
                false
            }
        }
    }

    #[instrument(skip(self))]
    fn disable(&self) -> bool {
        match self.delete_value() {
            Ok(()) => {
                info!("Autostart Run value removed");
                true
            }
            Err(e) => {
                error!(error = ?e, "Failed to unregister autostart");
                false
            }
        }
    }
}
