//! Infrastructure layer for botledger.
//!
//! Contains implementations of the traits defined in `botledger-core`
//! (SHA-256 payload hashing) and the filesystem side of configuration:
//! data directory resolution and `config.toml` loading.

pub mod config;
pub mod crypto;
pub mod filesystem;
