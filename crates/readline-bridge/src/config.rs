//! History file location via environment variables
//!
//! The bridge itself never opens the history file implicitly — embedders
//! decide which path to pass to the load/save operations. This module gives
//! them the conventional answer.

use std::env;
use std::path::PathBuf;

/// Embedder configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Custom history file path (READLINE_BRIDGE_HISTORY_FILE=/path/to/file)
    pub history_file: Option<PathBuf>,
    /// Disable history persistence (READLINE_BRIDGE_NO_HISTORY=1)
    pub no_history: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            history_file: env::var("READLINE_BRIDGE_HISTORY_FILE")
                .ok()
                .map(PathBuf::from),
            no_history: env::var("READLINE_BRIDGE_NO_HISTORY").is_ok(),
        }
    }

    /// Get the history file path
    ///
    /// Returns:
    /// 1. READLINE_BRIDGE_HISTORY_FILE if set
    /// 2. ~/.readline-bridge/history if home directory exists
    /// 3. None otherwise
    pub fn history_path(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.history_file {
            return Some(path.clone());
        }
        dirs::home_dir().map(|home| home.join(".readline-bridge").join("history"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
