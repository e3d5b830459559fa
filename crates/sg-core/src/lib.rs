//! # sg-core
//!
//! Core types for singleton-rs.
//!
//! This crate provides the [`LazySingletonHolder`] (a lazily-initialised,
//! thread-safe holder of exactly one value), the [`Singleton`] trait with its
//! [`define_singleton!`] macro, holder configuration, identity helpers, and
//! the error type shared by the rest of the workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Holder configuration (`InitPolicy`, `HolderConfig`).
pub mod config;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Instance identity (`InstanceId`, `same_instance`).
pub mod identity;

/// Design patterns: singleton.
pub mod patterns;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use config::{HolderConfig, InitPolicy};
pub use errors::{Error, Result};
pub use identity::{same_instance, InstanceId};
pub use patterns::singleton::{HolderState, LazySingletonHolder, Singleton};
