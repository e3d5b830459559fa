//! Holder configuration.
//!
//! [`HolderConfig`] decides what a [`LazySingletonHolder`] does after a
//! construction attempt fails, either by the initializer returning an error or
//! by it panicking.
//!
//! [`LazySingletonHolder`]: crate::patterns::singleton::LazySingletonHolder

/// What a holder does after a failed construction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InitPolicy {
    /// Leave the holder empty so that the next access runs the initializer
    /// again.
    #[default]
    Retry,
    /// Refuse every later access with [`Error::Poisoned`] and never run the
    /// initializer again.
    ///
    /// [`Error::Poisoned`]: crate::errors::Error::Poisoned
    Poison,
}

impl std::fmt::Display for InitPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitPolicy::Retry => write!(f, "retry"),
            InitPolicy::Poison => write!(f, "poison"),
        }
    }
}

/// Construction-time settings of a holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolderConfig {
    /// Behaviour after a failed construction attempt.
    pub policy: InitPolicy,
}

impl HolderConfig {
    /// The default configuration ([`InitPolicy::Retry`]), usable in statics.
    pub const fn new() -> Self {
        Self {
            policy: InitPolicy::Retry,
        }
    }

    /// Return a copy of this configuration using `policy`.
    pub const fn with_policy(self, policy: InitPolicy) -> Self {
        Self { policy }
    }
}

impl Default for HolderConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_retry() {
        assert_eq!(HolderConfig::default().policy, InitPolicy::Retry);
        assert_eq!(HolderConfig::new(), HolderConfig::default());
    }

    #[test]
    fn with_policy_overrides() {
        let config = HolderConfig::new().with_policy(InitPolicy::Poison);
        assert_eq!(config.policy, InitPolicy::Poison);
        assert_eq!(config.policy.to_string(), "poison");
    }
}
