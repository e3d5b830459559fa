//! Process-wide behaviour of the demo singletons.
//!
//! Only `counter_from_many_threads` touches the global counter's value, so its
//! deltas are exact even though tests in this file run concurrently.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use sg_core::{same_instance, InstanceId, Singleton};
use sg_demos::{GlobalCounter, Logger, Marker};

#[test]
fn counter_from_many_threads() {
    let before = GlobalCounter::instance().count();
    let barrier = Arc::new(Barrier::new(100));

    let ids: HashSet<InstanceId> = (0..100)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let counter = GlobalCounter::instance();
                counter.increment();
                InstanceId::of(counter)
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().expect("counter thread panicked"))
        .collect();

    assert_eq!(ids.len(), 1);
    assert_eq!(GlobalCounter::instance().count(), before + 100);
    assert_eq!(GlobalCounter::holder().attempts(), 1);
}

#[test]
fn logger_accesses_share_identity() {
    let a = Logger::instance();
    let b = thread::spawn(|| Logger::instance().id())
        .join()
        .expect("logger thread panicked");
    assert_eq!(a.id(), b);
    assert!(same_instance(a, Logger::instance()));
    assert_eq!(Logger::holder().attempts(), 1);
}

#[test]
fn marker_accesses_share_identity() {
    let ids: HashSet<InstanceId> = (0..8)
        .map(|_| thread::spawn(|| Marker::instance().id()))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().expect("marker thread panicked"))
        .collect();
    assert_eq!(ids.len(), 1);
    assert!(Marker::holder().is_initialized());
}
