//! Configuration types for botledger.
//!
//! `LedgerConfig` represents the top-level `config.toml` in the data
//! directory. Today it only carries the key-derivation options.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Top-level configuration, loaded from `~/.botledger/config.toml`.
/// All fields have defaults; an empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub keys: KeyOptions,
}

/// How composite primary keys are built from key-field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyOptions {
    #[serde(default)]
    pub encoding: KeyEncoding,

    /// Reject object and array values in key fields. When false, they are
    /// rendered the way the legacy writer stringified them.
    #[serde(default = "default_scalar_only")]
    pub scalar_only: bool,
}

fn default_scalar_only() -> bool {
    true
}

impl Default for KeyOptions {
    fn default() -> Self {
        Self {
            encoding: KeyEncoding::default(),
            scalar_only: default_scalar_only(),
        }
    }
}

/// Joining scheme for key-field values.
///
/// - Joined: values joined with `_`, byte-compatible with existing keys
/// - Escaped: `\` and `_` inside each value are backslash-escaped first,
///   so distinct field combinations never collide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEncoding {
    Joined,
    Escaped,
}

impl Default for KeyEncoding {
    fn default() -> Self {
        KeyEncoding::Joined
    }
}

impl fmt::Display for KeyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyEncoding::Joined => write!(f, "joined"),
            KeyEncoding::Escaped => write!(f, "escaped"),
        }
    }
}

impl FromStr for KeyEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "joined" => Ok(KeyEncoding::Joined),
            "escaped" => Ok(KeyEncoding::Escaped),
            other => Err(format!("invalid key encoding: '{other}'")),
        }
    }
}
