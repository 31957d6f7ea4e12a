use serde::{Deserialize, Serialize};

/// The limit used when the editor doesn't tell us otherwise.
pub const DEFAULT_MAX_DIAGNOSTICS: usize = 1000;

/// Per-document options, as found in the `karel` section of the editor's
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(
        rename = "maxNumberOfProblems",
        alias = "maxDiagnostics",
        default = "default_max_diagnostics"
    )]
    pub max_diagnostics: usize,
}

fn default_max_diagnostics() -> usize {
    DEFAULT_MAX_DIAGNOSTICS
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_diagnostics: DEFAULT_MAX_DIAGNOSTICS,
        }
    }
}

impl Settings {
    pub fn with_limit(max_diagnostics: usize) -> Self {
        Settings { max_diagnostics }
    }

    /// Interpret a configuration payload sent by the client. Anything that
    /// doesn't look like our section (`null`, a string, a negative limit)
    /// yields the defaults.
    pub fn from_json(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}
