use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Icon asset location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding the icon files (None = next to the executable,
    /// then the bundled resources).
    #[serde(default)]
    pub icons_dir: Option<PathBuf>,
}
