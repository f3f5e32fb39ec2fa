use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// When the reconciler consults the remote directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Fetch only while the local store is empty; afterwards the cache is
    /// authoritative and remote changes are not observed.
    #[default]
    WhenEmpty,
    /// Fetch on every reconcile, falling back to the cache on failure.
    Always,
}

impl RefreshPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshPolicy::WhenEmpty => "when_empty",
            RefreshPolicy::Always => "always",
        }
    }
}

impl fmt::Display for RefreshPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefreshPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "when_empty" => Ok(RefreshPolicy::WhenEmpty),
            "always" => Ok(RefreshPolicy::Always),
            other => Err(format!("unknown refresh policy '{}'", other)),
        }
    }
}
