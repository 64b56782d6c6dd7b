//! Document schema types for botledger.
//!
//! This crate describes the records the document store keeps about
//! automation-bot executions: bots, executions, queue snapshots, errors,
//! triggers, actions, and the GitHub metadata they touch. It also owns the
//! closed set of collection identifiers and the ordered key-field table
//! that defines document identity per collection.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod action;
pub mod bot;
pub mod collection;
pub mod config;
pub mod error;
pub mod github;
pub mod key;
