//! Login autostart through an XDG autostart desktop entry.

use crate::{AppError, AppResult};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use binwatch_core::AutostartController;
use directories::BaseDirs;
use error_location::ErrorLocation;
use tracing::{error, info, instrument};

const ENTRY_FILE: &str = "binwatch.desktop";

/// Characters that force an `Exec` argument into double quotes.
const RESERVED: &[char] = &[
    '"', '\'', '\\', '>', '<', '~', '|', '&', ';', '$', '*', '?', '#', '(', ')', '`',
];

/// Manages `~/.config/autostart/binwatch.desktop`.
pub struct XdgAutostart {
    entry_path: PathBuf,
    exec: PathBuf,
}

impl XdgAutostart {
    /// Entry in the user's autostart directory launching the current executable.
    #[track_caller]
    pub fn new() -> AppResult<Self> {
        let base = BaseDirs::new().ok_or_else(|| AppError::ConfigError {
            reason: "Failed to get user config directory".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let exec = std::env::current_exe()?;

        Ok(Self::with_paths(base.config_dir().join("autostart"), exec))
    }

    /// Entry inside `autostart_dir` launching `exec`.
    pub fn with_paths(autostart_dir: PathBuf, exec: PathBuf) -> Self {
        Self {
            entry_path: autostart_dir.join(ENTRY_FILE),
            exec,
        }
    }

    /// Location of the desktop entry.
    pub fn entry_path(&self) -> &Path {
        &self.entry_path
    }

    fn desktop_entry(&self) -> String {
        let exec = exec_field(&self.exec.to_string_lossy());

        format!(
            "[Desktop Entry]\n\
             Type=Application\n\
             Name=Binwatch\n\
             Comment=Recycle bin tray monitor\n\
             Exec={}\n\
             Terminal=false\n\
             X-GNOME-Autostart-enabled=true\n",
            exec
        )
    }

    #[track_caller]
    fn write_entry(&self) -> AppResult<()> {
        if let Some(dir) = self.entry_path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.entry_path, self.desktop_entry())?;
        Ok(())
    }

    #[track_caller]
    fn remove_entry(&self) -> AppResult<()> {
        match fs::remove_file(&self.entry_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Encode a program path as a Desktop Entry `Exec` value.
///
/// Quoted arguments escape `"`, `` ` ``, `$` and `\` with a backslash. The
/// value is then string-escaped (backslashes doubled) and `%` is doubled so
/// launchers do not read it as a field code.
fn exec_field(program: &str) -> String {
    let needs_quotes = program
        .chars()
        .any(|c| c.is_whitespace() || RESERVED.contains(&c));

    let arg = if needs_quotes {
        let mut quoted = String::with_capacity(program.len() + 2);
        quoted.push('"');
        for c in program.chars() {
            if matches!(c, '"' | '`' | '$' | '\\') {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        quoted.push('"');
        quoted
    } else {
        program.to_string()
    };

    arg.replace('\\', "\\\\").replace('%', "%%")
}

impl AutostartController for XdgAutostart {
    fn is_registered(&self) -> bool {
        self.entry_path().is_file()
    }

    #[instrument(skip(self), fields(entry = ?self.entry_path()))]
    fn enable(&self) -> bool {
        match self.write_entry() {
            Ok(()) => {
                info!("Autostart entry written");
                true
            }
            Err(e) => {
                error!(error = ?e, "Failed to write autostart entry");
                false
            }
        }
    }

    #[instrument(skip(self), fields(entry = ?self.entry_path()))]
    fn disable(&self) -> bool {
        match self.remove_entry() {
            Ok(()) => {
                info!("Autostart entry removed");
                true
            }
            Err(e) => {
                error!(error = ?e, "Failed to remove autostart entry");
                false
            }
        }
    }
}
