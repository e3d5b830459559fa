//! # sg-demos
//!
//! Three singletons built on `sg-core`, each with a console demo binary:
//!
//! * [`GlobalCounter`] – a shared integer counter (`counter_demo`);
//! * [`Marker`] – an empty marker type (`marker_demo`);
//! * [`Logger`] – a timestamped stdout logger (`logger_demo`).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Process-wide counter.
pub mod counter;

/// Timestamped logger.
pub mod logger;

/// Empty marker type.
pub mod marker;

/// Tracing subscriber set-up for the binaries.
pub mod telemetry;

pub use counter::GlobalCounter;
pub use logger::Logger;
pub use marker::Marker;
