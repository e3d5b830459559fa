//! Instance identity.
//!
//! Two references denote the same singleton exactly when they point at the
//! same address.  [`InstanceId`] captures that address so it can be printed
//! and compared after the references themselves are gone.

use std::fmt;

/// The address of a value, used as its identity code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(usize);

impl InstanceId {
    /// Identity of the value behind `value`.
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self(value as *const T as *const () as usize)
    }

    /// Raw address.
    pub fn addr(&self) -> usize {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Return `true` if `a` and `b` refer to the same value.
///
/// Zero-sized values may share an address with unrelated values, so this is
/// only meaningful for references obtained from the same holder.
pub fn same_instance<T: ?Sized>(a: &T, b: &T) -> bool {
    std::ptr::eq(a as *const T as *const (), b as *const T as *const ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_reference_same_id() {
        let value = 7_u64;
        let a = &value;
        let b = &value;
        assert!(same_instance(a, b));
        assert_eq!(InstanceId::of(a), InstanceId::of(b));
    }

    #[test]
    fn distinct_values_distinct_ids() {
        let x = 1_u64;
        let y = 1_u64;
        assert!(!same_instance(&x, &y));
        assert_ne!(InstanceId::of(&x), InstanceId::of(&y));
    }

    #[test]
    fn display_is_hex() {
        let value = 0_u32;
        let id = InstanceId::of(&value);
        assert_eq!(id.to_string(), format!("{:#x}", id.addr()));
        assert!(id.to_string().starts_with("0x"));
    }
}
