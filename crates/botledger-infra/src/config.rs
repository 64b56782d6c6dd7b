//! Configuration loader for botledger.
//!
//! Reads `config.toml` from the data directory (`~/.botledger/` by default)
//! and deserializes it into [`LedgerConfig`]. Falls back to defaults when
//! the file is missing or malformed.

use std::path::Path;

use botledger_types::config::{KeyEncoding, KeyOptions, LedgerConfig};

/// File name of the configuration inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`LedgerConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
/// - Otherwise returns the parsed config.
pub fn load_config(data_dir: &Path) -> LedgerConfig {
    let config_path = data_dir.join(CONFIG_FILE);

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return LedgerConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return LedgerConfig::default();
        }
    };

    match toml::from_str::<LedgerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            LedgerConfig::default()
        }
    }
}

/// Resolve the key options for one invocation.
///
/// Command-line overrides win over `config.toml`: an explicit encoding
/// replaces the configured one, and `permissive` turns `scalar_only` off.
pub fn resolve_key_options(
    config: &LedgerConfig,
    encoding_override: Option<KeyEncoding>,
    permissive: bool,
) -> KeyOptions {
    KeyOptions {
        encoding: encoding_override.unwrap_or(config.keys.encoding),
        scalar_only: config.keys.scalar_only && !permissive,
    }
}
