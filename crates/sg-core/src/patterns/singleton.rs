//! Lazily-initialised singleton holder.
//!
//! [`LazySingletonHolder`] owns at most one value of `T`.  The value is built
//! on first access by an initializer supplied when the holder is created, and
//! every later access, from any thread, returns a reference to that same
//! value.
//!
//! Access uses double-checked locking:
//!
//! 1. read the slot without locking and return the value if it is present;
//! 2. otherwise take the guard and read the slot again, since another thread
//!    may have finished initialising in the meantime;
//! 3. if it is still empty, run the initializer and publish the result.
//!
//! The slot is a [`OnceLock`], so publication is release/acquire ordered and
//! no reader can observe a partially-built value.  The guard serialises
//! construction and remembers failed attempts for [`InitPolicy::Poison`].
//!
//! Holders are ordinary values: keep one in a `static` for a process-wide
//! singleton (see [`define_singleton!`]), or create a fresh one and pass it by
//! reference where isolation matters, e.g. in tests.

use std::convert::Infallible;
use std::fmt;
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::config::{HolderConfig, InitPolicy};
use crate::errors::{Error, Result};

/// Observable state of a holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolderState {
    /// No value has been built yet.
    Absent,
    /// The value exists; the holder will never change again.
    Present,
    /// A construction attempt failed under [`InitPolicy::Poison`].
    Poisoned,
}

#[derive(Debug)]
struct GuardState {
    attempts: usize,
    poisoned: bool,
}

/// A holder producing one shared instance of `T` on demand.
///
/// `F` is the initializer.  Holders whose initializer is `Fn() -> T` are
/// accessed with [`get_instance`](Self::get_instance); holders whose
/// initializer is `Fn() -> Result<T, E>` with
/// [`try_get_instance`](Self::try_get_instance).
///
/// # Example
/// ```
/// use sg_core::patterns::singleton::LazySingletonHolder;
///
/// static NAMES: LazySingletonHolder<Vec<&'static str>> =
///     LazySingletonHolder::new(|| vec!["alpha", "beta"]);
///
/// let a = NAMES.get_instance();
/// let b = NAMES.get_instance();
/// assert!(std::ptr::eq(a, b));
/// assert_eq!(a.len(), 2);
/// ```
pub struct LazySingletonHolder<T, F = fn() -> T> {
    slot: OnceLock<T>,
    guard: Mutex<GuardState>,
    init: F,
    config: HolderConfig,
}

impl<T, F> LazySingletonHolder<T, F> {
    /// Create an empty holder with the default [`HolderConfig`].
    pub const fn new(init: F) -> Self {
        Self::with_config(init, HolderConfig::new())
    }

    /// Create an empty holder with an explicit configuration.
    pub const fn with_config(init: F, config: HolderConfig) -> Self {
        Self {
            slot: OnceLock::new(),
            guard: Mutex::new(GuardState {
                attempts: 0,
                poisoned: false,
            }),
            init,
            config,
        }
    }

    /// Return the instance if it has already been built, without building it.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Return `true` once the instance exists.
    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Current state of the holder.
    pub fn state(&self) -> HolderState {
        if self.is_initialized() {
            return HolderState::Present;
        }
        if self.lock_guard().poisoned {
            HolderState::Poisoned
        } else {
            HolderState::Absent
        }
    }

    /// The configuration this holder was created with.
    pub fn config(&self) -> HolderConfig {
        self.config
    }

    /// Shorthand for `self.config().policy`.
    pub fn policy(&self) -> InitPolicy {
        self.config.policy
    }

    /// Number of construction attempts started so far.
    ///
    /// This is 1 after a successful first access and only grows past that
    /// when earlier attempts failed under [`InitPolicy::Retry`].
    pub fn attempts(&self) -> usize {
        self.lock_guard().attempts
    }

    fn lock_guard(&self) -> MutexGuard<'_, GuardState> {
        match self.guard.lock() {
            Ok(guard) => guard,
            // An initializer panicked while the guard was held.
            Err(poisoned) => {
                let mut state = poisoned.into_inner();
                if self.config.policy == InitPolicy::Poison && !state.poisoned {
                    tracing::warn!("singleton initializer panicked; holder poisoned");
                    state.poisoned = true;
                }
                state
            }
        }
    }

    fn initialize<E, C>(&self, construct: C) -> Result<&T>
    where
        E: fmt::Display,
        C: FnOnce() -> std::result::Result<T, E>,
    {
        if let Some(value) = self.slot.get() {
            return Ok(value);
        }

        let mut state = self.lock_guard();
        if let Some(value) = self.slot.get() {
            tracing::debug!("singleton was initialised by a concurrent caller");
            return Ok(value);
        }
        if state.poisoned {
            return Err(Error::Poisoned);
        }

        state.attempts += 1;
        tracing::debug!(attempt = state.attempts, "constructing singleton instance");
        match construct() {
            // The guard is held and the slot is empty, so this stores `value`.
            Ok(value) => Ok(self.slot.get_or_init(|| value)),
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(
                    attempt = state.attempts,
                    policy = %self.config.policy,
                    "singleton construction failed: {message}"
                );
                if self.config.policy == InitPolicy::Poison {
                    state.poisoned = true;
                }
                Err(Error::Construction(message))
            }
        }
    }
}

impl<T, F> LazySingletonHolder<T, F>
where
    F: Fn() -> T,
{
    /// Return the shared instance, building it on first access.
    ///
    /// # Panics
    ///
    /// Panics if the holder is poisoned (see [`InitPolicy::Poison`]), and
    /// propagates any panic raised by the initializer itself.
    pub fn get_instance(&self) -> &T {
        match self.try_instance() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`get_instance`](Self::get_instance), but report a poisoned holder
    /// as [`Error::Poisoned`] instead of panicking.
    pub fn try_instance(&self) -> Result<&T> {
        self.initialize(|| Ok::<T, Infallible>((self.init)()))
    }
}

impl<T, E, F> LazySingletonHolder<T, F>
where
    E: fmt::Display,
    F: Fn() -> std::result::Result<T, E>,
{
    /// Return the shared instance, building it on first access with a
    /// fallible initializer.
    ///
    /// On failure returns [`Error::Construction`]; whether the next call
    /// tries again depends on the holder's [`InitPolicy`].
    pub fn try_get_instance(&self) -> Result<&T> {
        self.initialize(|| (self.init)())
    }
}

impl<T: fmt::Debug, F> fmt::Debug for LazySingletonHolder<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => write!(f, "LazySingletonHolder({value:?})"),
            None => write!(f, "LazySingletonHolder(<{:?}>)", self.state()),
        }
    }
}

/// A type with exactly one process-wide instance.
///
/// Implement it with [`define_singleton!`]; the constructor handed to the
/// macro can stay private, leaving [`instance`](Self::instance) as the only
/// public way to obtain a value.
pub trait Singleton: Sized + Send + Sync + 'static {
    /// The process-wide holder for this type.
    fn holder() -> &'static LazySingletonHolder<Self>;

    /// Return the shared instance, building it on first access.
    fn instance() -> &'static Self {
        Self::holder().get_instance()
    }
}

/// Implement [`Singleton`] for `$ty` backed by a function-local static
/// holder.
///
/// `$init` is any `fn() -> $ty` (or non-capturing closure).  An optional
/// third argument supplies a [`HolderConfig`].
///
/// # Example
/// ```
/// use sg_core::define_singleton;
/// use sg_core::patterns::singleton::Singleton;
///
/// pub struct Registry {
///     data: Vec<String>,
/// }
///
/// impl Registry {
///     fn create() -> Self {
///         Registry { data: Vec::new() }
///     }
/// }
///
/// define_singleton!(Registry, Registry::create);
///
/// assert!(Registry::instance().data.is_empty());
/// assert!(std::ptr::eq(Registry::instance(), Registry::instance()));
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($ty:ty, $init:expr) => {
        $crate::define_singleton!($ty, $init, $crate::config::HolderConfig::new());
    };
    ($ty:ty, $init:expr, $config:expr) => {
        impl $crate::patterns::singleton::Singleton for $ty {
            fn holder() -> &'static $crate::patterns::singleton::LazySingletonHolder<$ty> {
                static HOLDER: $crate::patterns::singleton::LazySingletonHolder<$ty> =
                    $crate::patterns::singleton::LazySingletonHolder::with_config(
                        $init, $config,
                    );
                &HOLDER
            }
        }
    };
}
