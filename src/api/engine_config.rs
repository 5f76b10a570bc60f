use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::state::EntryPolicy;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load calculator
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcEngineConfig {
    #[serde(default)]
    pub entry_policy: EntryPolicy,
    /// Present the default-state snapshot to the sink during construction,
    /// the way the reference widget paints its display on load.
    #[serde(default = "default_present_initial_snapshot")]
    pub present_initial_snapshot: bool,
}

impl Default for CalcEngineConfig {
    fn default() -> Self {
        Self {
            entry_policy: EntryPolicy::default(),
            present_initial_snapshot: default_present_initial_snapshot(),
        }
    }
}

fn default_present_initial_snapshot() -> bool {
    true
}

impl CalcEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry_policy(mut self, policy: EntryPolicy) -> Self {
        self.entry_policy = policy;
        self
    }

    pub fn to_json_pretty(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CalcError::InvalidData(format!("failed to serialize config json: {e}")))
    }

    pub fn from_json_str(input: &str) -> CalcResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| CalcError::InvalidData(format!("failed to parse config json: {e}")))
    }
}
