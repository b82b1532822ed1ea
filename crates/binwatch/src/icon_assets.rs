//! Icon files for the tray and for notifications.
//!
//! Every asset is verified and decoded once at startup. A missing or broken
//! file is fatal before the event loop starts.

use crate::{AppError, AppResult};

use std::{
    collections::HashMap,
    panic::Location,
    path::{Path, PathBuf},
};

use binwatch_core::IconAsset;
use error_location::ErrorLocation;
use tracing::{debug, info, instrument};
use tray_icon::Icon;

const BUNDLED_ICONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/icons");

/// Decoded tray icons plus the on-disk paths notifications refer to.
pub struct IconAssets {
    dir: PathBuf,
    icons: HashMap<IconAsset, Icon>,
}

impl IconAssets {
    /// Pick the icons directory: configured, then `icons/` next to the
    /// executable, then the bundled resources.
    pub fn resolve_dir(configured: Option<&Path>) -> PathBuf {
        if let Some(dir) = configured {
            return dir.to_path_buf();
        }

        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.join("icons")));

        match beside_exe {
            Some(dir) if dir.is_dir() => dir,
            _ => PathBuf::from(BUNDLED_ICONS_DIR),
        }
    }

    /// Verify and decode every asset in `dir`.
    #[track_caller]
    #[instrument]
    pub fn load(dir: &Path) -> AppResult<Self> {
        let mut icons = HashMap::with_capacity(IconAsset::ALL.len());

        for asset in IconAsset::ALL {
            let path = dir.join(asset.file_name());
            if !path.is_file() {
                return Err(AppError::AssetError {
                    reason: format!("Icon '{}' not found at {:?}", asset.tag(), path),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            let icon = Self::decode(&path)?;
            debug!(asset = asset.tag(), path = ?path, "Icon loaded");
            icons.insert(asset, icon);
        }

        info!(dir = ?dir, count = icons.len(), "Icon assets verified");

        Ok(Self {
            dir: dir.to_path_buf(),
            icons,
        })
    }

    /// Decoded tray icon for `asset`.
    #[track_caller]
    pub fn icon(&self, asset: IconAsset) -> AppResult<Icon> {
        self.icons
            .get(&asset)
            .cloned()
            .ok_or_else(|| AppError::AssetError {
                reason: format!("Icon '{}' was not loaded", asset.tag()),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// File path of `asset`, for notification backends that take a path.
    pub fn path(&self, asset: IconAsset) -> PathBuf {
        self.dir.join(asset.file_name())
    }

    #[track_caller]
    fn decode(path: &Path) -> AppResult<Icon> {
        let img = image::open(path).map_err(|e| AppError::AssetError {
            reason: format!("Failed to decode icon {:?}: {}", path, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::AssetError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
