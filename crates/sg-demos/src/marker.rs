//! Empty marker singleton.

use sg_core::{define_singleton, InstanceId};

/// A stateless type with exactly one instance per process.
#[derive(Debug)]
pub struct Marker {
    _private: (),
}

impl Marker {
    fn create() -> Self {
        tracing::info!("Marker instance created");
        Self { _private: () }
    }

    /// Identity code of this instance.
    pub fn id(&self) -> InstanceId {
        InstanceId::of(self)
    }
}

define_singleton!(Marker, Marker::create);
