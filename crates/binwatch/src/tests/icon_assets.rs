use crate::{AppError, IconAssets};

use std::path::{Path, PathBuf};

use binwatch_core::IconAsset;
use tempfile::TempDir;

fn bundled_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/icons")
}

/// WHAT: Bundled icons all verify and decode
/// WHY: A release without an icon would fail at startup
#[test]
#[allow(clippy::unwrap_used)]
fn given_bundled_dir_when_loading_then_every_asset_available() {
    let assets = IconAssets::load(&bundled_dir()).unwrap();

    for asset in IconAsset::ALL {
        assert!(assets.icon(asset).is_ok());
        assert!(assets.path(asset).is_file());
    }
}

/// WHAT: A missing icon is an asset error naming the file
/// WHY: Missing resources are fatal before the event loop starts
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_icon_when_loading_then_asset_error() {
    // Given: Directory with every icon except the full-bin one
    let dir = TempDir::new().unwrap();
    for asset in IconAsset::ALL {
        if asset != IconAsset::Full {
            std::fs::copy(
                bundled_dir().join(asset.file_name()),
                dir.path().join(asset.file_name()),
            )
            .unwrap();
        }
    }

    // When: Loading
    let result = IconAssets::load(dir.path());

    // Then: Asset error mentioning the missing file
    match result {
        Err(AppError::AssetError { reason, .. }) => assert!(reason.contains("bin-full.png")),
        _ => unreachable!("expected asset error"),
    }
}

/// WHAT: A corrupt icon is an asset error
/// WHY: Files that exist but cannot be decoded are just as fatal
#[test]
#[allow(clippy::unwrap_used)]
fn given_corrupt_icon_when_loading_then_asset_error() {
    let dir = TempDir::new().unwrap();
    for asset in IconAsset::ALL {
        std::fs::write(dir.path().join(asset.file_name()), b"not a png").unwrap();
    }

    let result = IconAssets::load(dir.path());

    assert!(matches!(result, Err(AppError::AssetError { .. })));
}

/// WHAT: A configured directory wins over every fallback
/// WHY: Users can point the app at custom icons
#[test]
fn given_configured_dir_when_resolving_then_configured_dir_used() {
    let configured = Path::new("/opt/icons");

    assert_eq!(IconAssets::resolve_dir(Some(configured)), configured);
}
