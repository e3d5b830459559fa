//! Process-wide counter singleton.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use sg_core::define_singleton;

/// A counter with exactly one instance per process.
///
/// Obtain it with [`Singleton::instance`](sg_core::Singleton::instance); there
/// is no public constructor.  The count itself is atomic but the holder does
/// not serialise calls to [`increment`](Self::increment), so concurrent
/// callers see each other's increments in no particular order.
pub struct GlobalCounter {
    count: AtomicI64,
}

impl GlobalCounter {
    fn create() -> Self {
        tracing::info!("GlobalCounter instance created");
        Self {
            count: AtomicI64::new(0),
        }
    }

    /// Add one and return the new value.
    pub fn increment(&self) -> i64 {
        let count = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(count, "counter incremented");
        count
    }

    /// Current value.
    pub fn count(&self) -> i64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Human-readable report of the current value.
    pub fn show(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GlobalCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "current counter value: {}", self.count())
    }
}

define_singleton!(GlobalCounter, GlobalCounter::create);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sg_core::LazySingletonHolder;

    fn fresh() -> LazySingletonHolder<GlobalCounter> {
        LazySingletonHolder::new(GlobalCounter::create)
    }

    #[test]
    fn starts_at_zero() {
        let holder = fresh();
        assert_eq!(holder.get_instance().count(), 0);
        assert_eq!(holder.get_instance().show(), "current counter value: 0");
    }

    #[test]
    fn increments_visible_through_other_reference() {
        let holder = fresh();
        let a = holder.get_instance();
        assert_eq!(a.increment(), 1);
        assert_eq!(a.increment(), 2);

        let b = holder.get_instance();
        assert_eq!(b.show(), "current counter value: 2");
        assert_eq!(b.increment(), 3);
        assert_eq!(a.count(), 3);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let holder = fresh();
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..250 {
                        holder.get_instance().increment();
                    }
                });
            }
        });
        assert_eq!(holder.get_instance().count(), 2000);
        assert_eq!(holder.attempts(), 1);
    }

    proptest! {
        #[test]
        fn interleaved_references_agree(steps in proptest::collection::vec(any::<bool>(), 0..64)) {
            let holder = fresh();
            let a = holder.get_instance();
            let b = holder.get_instance();
            for &via_a in &steps {
                if via_a { a.increment(); } else { b.increment(); }
            }
            prop_assert_eq!(a.count(), steps.len() as i64);
            prop_assert_eq!(b.count(), a.count());
        }
    }
}
