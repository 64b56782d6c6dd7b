//! Shared state for CLI command handlers.

use std::path::PathBuf;

use tracing::field;

use botledger_core::KeyDeriver;
use botledger_infra::config::{load_config, resolve_key_options};
use botledger_infra::filesystem::resolve_data_dir;
use botledger_observe::attrs;
use botledger_types::config::{KeyEncoding, LedgerConfig};

/// Resolved data directory and configuration.
pub struct AppState {
    pub data_dir: PathBuf,
    pub config: LedgerConfig,
}

impl AppState {
    /// Resolve the data directory and load `config.toml` from it.
    ///
    /// Nothing is created on disk; a missing directory just means defaults.
    pub fn init() -> Self {
        let data_dir = resolve_data_dir();
        let config = load_config(&data_dir);
        tracing::debug!(
            { attrs::DATA_DIR } = field::display(data_dir.display()),
            { attrs::KEY_ENCODING } = field::display(config.keys.encoding),
            { attrs::SCALAR_ONLY } = config.keys.scalar_only,
            "loaded configuration"
        );
        Self { data_dir, config }
    }

    /// A key deriver with command-line overrides applied on top of the config.
    pub fn deriver(&self, escaped: bool, permissive: bool) -> KeyDeriver {
        let encoding = escaped.then_some(KeyEncoding::Escaped);
        KeyDeriver::new(resolve_key_options(&self.config, encoding, permissive))
    }
}
