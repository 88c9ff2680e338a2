//! Planning store configuration from TOML (`[store]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory name under the platform data directory.
const APP_DIR: &str = "bloc-supervision";

/// Planning store configuration from TOML.
///
/// # Example
///
/// ```toml
/// [store]
/// data_dir = "/var/lib/bloc/plannings"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Directory holding one `YYYY-MM-DD.json` file per planned date
    pub data_dir: Option<PathBuf>,
}

impl FileStoreConfig {
    /// The configured directory, or `<data dir>/bloc-supervision/plannings`.
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR).join("plannings")))
    }
}
