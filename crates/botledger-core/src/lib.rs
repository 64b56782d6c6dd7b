//! Key derivation and document validation for botledger.
//!
//! Everything here is pure and synchronous: the registry is built once and
//! read-only afterwards, so derivation can be called from any thread
//! without coordination. Hashing is behind the [`hash::PayloadHasher`]
//! trait; the SHA-256 adapter lives in `botledger-infra`.

pub mod document;
pub mod encoding;
pub mod hash;
pub mod keyed;
pub mod registry;

pub use registry::{get_primary_key, KeyDeriver, KeyRegistry};
