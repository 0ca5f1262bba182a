//! Server settings
//!
//! The server has no config file; clients pass settings through
//! `initializationOptions`. Absent or malformed options fall back to
//! defaults, which reproduce the stock behavior exactly.

use serde::Deserialize;
use serde_json::Value;

/// Behavior knobs a client may pass at `initialize` time.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Prompt before overwriting an existing file. When disabled a
    /// collision cancels the rename; it never overwrites silently.
    pub confirm_overwrite: bool,

    /// Open the renamed file in the editor after a successful move.
    pub open_after_rename: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            confirm_overwrite: true,
            open_after_rename: true,
        }
    }
}

impl Settings {
    pub fn from_initialization_options(options: Option<Value>) -> Self {
        options
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }
}
