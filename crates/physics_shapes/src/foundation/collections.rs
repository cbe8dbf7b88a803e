//! Specialized collection types

pub use slotmap::{Key, SlotMap};

slotmap::new_key_type! {
    /// Stable, generational handle to a shape stored in a
    /// [`ShapeRegistry`](crate::physics::registry::ShapeRegistry).
    ///
    /// A handle to a removed shape never resolves again, even if its slot is
    /// reused.
    pub struct ShapeHandle;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<K, T> = SlotMap<K, T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_handle_does_not_resolve_after_reuse() {
        let mut map: HandleMap<ShapeHandle, u32> = HandleMap::with_key();
        let first = map.insert(1);
        map.remove(first);
        let second = map.insert(2);

        assert!(map.get(first).is_none());
        assert_eq!(map.get(second), Some(&2));
        assert_ne!(first, second);
    }

    #[test]
    fn test_default_handle_is_null() {
        assert!(ShapeHandle::default().is_null());
    }
}
