//! Broken-link policy shared by `on_broken_links` and `on_broken_markdown_links`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// How the build reacts to a link that does not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Abort the build, listing every broken link.
    Throw,
    /// Log the broken links and continue.
    Warn,
    /// Say nothing.
    Ignore,
}

impl BrokenLinkPolicy {
    pub const ALL: [Self; 3] = [Self::Throw, Self::Warn, Self::Ignore];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Throw => "throw",
            Self::Warn => "warn",
            Self::Ignore => "ignore",
        }
    }
}

impl fmt::Display for BrokenLinkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrokenLinkPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "unrecognized broken-link policy `{s}`, expected one of: throw, warn, ignore"
                ))
            })
    }
}
