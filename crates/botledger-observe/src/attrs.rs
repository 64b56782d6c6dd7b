//! Structured field names for botledger log events and spans.
//!
//! Use these as `tracing` field names (`{ attrs::COLLECTION } = ...`) so the
//! same attribute reads the same in the fmt output and in exported spans.

// --- Key derivation ---

/// Collection token the document was keyed in (e.g., "Bot_Execution").
pub const COLLECTION: &str = "botledger.collection";

/// The derived primary key.
pub const PRIMARY_KEY: &str = "botledger.key";

/// Number of key fields the collection declares.
pub const KEY_FIELD_COUNT: &str = "botledger.key.field_count";

/// Key encoding in effect ("joined" or "escaped").
pub const KEY_ENCODING: &str = "botledger.key.encoding";

/// Whether key fields are restricted to scalars.
pub const SCALAR_ONLY: &str = "botledger.key.scalar_only";

/// Display text of a derivation failure.
pub const ERROR: &str = "botledger.error";

// --- Configuration ---

/// Resolved data directory.
pub const DATA_DIR: &str = "botledger.data_dir";
