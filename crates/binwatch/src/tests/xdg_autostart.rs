use crate::platform::xdg_autostart::XdgAutostart;

use std::{fs, path::PathBuf};

use binwatch_core::AutostartController;
use tempfile::TempDir;

/// WHAT: Enable writes a desktop entry, disable removes it
/// WHY: Registration state is the presence of the entry
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_autostart_dir_when_toggling_then_entry_follows() {
    // Given: No autostart directory yet
    let dir = TempDir::new().unwrap();
    let autostart = XdgAutostart::with_paths(
        dir.path().join("autostart"),
        PathBuf::from("/usr/bin/binwatch"),
    );
    assert!(!autostart.is_registered());

    // When: Enabling
    assert!(autostart.enable());

    // Then: Entry exists and launches the executable
    assert!(autostart.is_registered());
    let entry = fs::read_to_string(autostart.entry_path()).unwrap();
    assert!(entry.starts_with("[Desktop Entry]\n"));
    assert!(entry.contains("Exec=/usr/bin/binwatch\n"));

    // When: Disabling twice
    assert!(autostart.disable());
    assert!(autostart.disable());

    // Then: Entry gone, second disable still succeeded
    assert!(!autostart.is_registered());
}

/// WHAT: Executables with spaces are quoted in the Exec line
/// WHY: Unquoted paths would be split into arguments
#[test]
#[allow(clippy::unwrap_used)]
fn given_path_with_spaces_when_enabling_then_exec_quoted() {
    let dir = TempDir::new().unwrap();
    let autostart = XdgAutostart::with_paths(
        dir.path().to_path_buf(),
        PathBuf::from("/opt/my apps/binwatch"),
    );

    assert!(autostart.enable());

    let entry = fs::read_to_string(autostart.entry_path()).unwrap();
    assert!(entry.contains("Exec=\"/opt/my apps/binwatch\"\n"));
}

/// WHAT: Enable fails when the directory cannot be created
/// WHY: The toggle must report failure so the UI rolls back
#[test]
#[allow(clippy::unwrap_used)]
fn given_blocked_dir_when_enabling_then_false() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("autostart");
    fs::write(&blocker, "file, not a dir").unwrap();
    let autostart = XdgAutostart::with_paths(blocker, PathBuf::from("/usr/bin/binwatch"));

    assert!(!autostart.enable());
    assert!(!autostart.is_registered());
}

/// WHAT: Dollar and percent in the path are escaped in the Exec line
/// WHY: `$` is special inside quotes and `%u` would be read as a field code
#[test]
#[allow(clippy::unwrap_used)]
fn given_path_with_dollar_and_percent_when_enabling_then_exec_escaped() {
    // Given: A path needing quotes, a quoted-escape and a percent escape
    let dir = TempDir::new().unwrap();
    let autostart = XdgAutostart::with_paths(
        dir.path().to_path_buf(),
        PathBuf::from("/opt/my apps/bin$x%u/binwatch"),
    );

    // When: Enabling
    assert!(autostart.enable());

    // Then: `$` is backslash-escaped (doubled at string level), `%` doubled
    let entry = fs::read_to_string(autostart.entry_path()).unwrap();
    assert!(entry.contains("Exec=\"/opt/my apps/bin\\\\$x%%u/binwatch\"\n"));
}

/// WHAT: A percent sign alone does not force quoting
/// WHY: Only reserved characters need quotes, field codes are a separate escape
#[test]
#[allow(clippy::unwrap_used)]
fn given_unquoted_path_with_percent_when_enabling_then_percent_doubled() {
    let dir = TempDir::new().unwrap();
    let autostart =
        XdgAutostart::with_paths(dir.path().to_path_buf(), PathBuf::from("/opt/100%/binwatch"));

    assert!(autostart.enable());

    let entry = fs::read_to_string(autostart.entry_path()).unwrap();
    assert!(entry.contains("Exec=/opt/100%%/binwatch\n"));
}
