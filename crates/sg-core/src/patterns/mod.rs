//! Patterns sub-module: the lazy singleton holder.

pub mod singleton;
