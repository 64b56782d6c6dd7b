//! Cryptographic operations for botledger.
//!
//! - `hash`: SHA-256 payload hashing for `GitHub_Event` keys

pub mod hash;
