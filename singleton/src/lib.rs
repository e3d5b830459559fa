//! # singleton
//!
//! Lazily-initialised, thread-safe singletons.
//!
//! This crate is a **façade** over the workspace crates.  Application code
//! should depend on this crate rather than on the individual `sg-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use singleton::core::LazySingletonHolder;
//!
//! static GREETING: LazySingletonHolder<String> =
//!     LazySingletonHolder::new(|| "hello".to_string());
//!
//! assert_eq!(GREETING.get_instance(), "hello");
//! assert!(std::ptr::eq(GREETING.get_instance(), GREETING.get_instance()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Holder, trait, configuration, identity, and error definitions.
pub use sg_core as core;

/// Counter, marker, and logger singletons.
pub use sg_demos as demos;

pub use sg_core::{define_singleton, LazySingletonHolder, Singleton};
