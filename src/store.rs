//! Producer-owned arena of property slots.
//!
//! The evaluation engine owns one [`PropertyStore`] and writes computed
//! values into it; everything else in this crate holds plain slot handles and
//! borrows read views out of the store. Handles are cheap copyable indices,
//! valid for the lifetime of the store that issued them.

use instant::Instant;
use serde::{Deserialize, Serialize};

use crate::error::TrackError;
use crate::path::{PathProperty, PathPropertyMut, PathSlot};
use crate::property::{ValueProperty, ValueSlot};
use crate::time::TimeUnit;
use crate::value::{TrackValue, ValueKind};
use crate::Result;

/// Handle to a value property slot inside a [`PropertyStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValuePropertyHandle(u32);

impl ValuePropertyHandle {
    /// Slot index inside the issuing store.
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Handle to a path property slot inside a [`PropertyStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathPropertyHandle(u32);

impl PathPropertyHandle {
    /// Slot index inside the issuing store.
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Arena holding every value and path property slot, plus the clock that
/// stamps producer writes.
///
/// All access is single-threaded; the store is not safe for concurrent use
/// without external synchronization.
#[derive(Debug)]
pub struct PropertyStore {
    epoch: Instant,
    values: Vec<ValueSlot>,
    paths: Vec<PathSlot>,
}

impl PropertyStore {
    /// Create an empty store. Timestamps are measured from this moment.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            values: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// Current store time: elapsed since the store was created.
    #[inline]
    pub fn now(&self) -> TimeUnit {
        TimeUnit::from(self.epoch.elapsed())
    }

    /// Allocate a value property slot of the given kind. Producer side.
    pub fn create_value_property(&mut self, kind: ValueKind) -> ValuePropertyHandle {
        let handle = ValuePropertyHandle(self.values.len() as u32);
        self.values.push(ValueSlot::new(kind));
        log::trace!("created value property {:?} ({})", handle, kind.name());
        handle
    }

    /// Allocate a path property slot of the given kind. Producer side.
    pub fn create_path_property(&mut self, kind: ValueKind) -> PathPropertyHandle {
        let handle = PathPropertyHandle(self.paths.len() as u32);
        self.paths.push(PathSlot::new(kind));
        log::trace!("created path property {:?} ({})", handle, kind.name());
        handle
    }

    /// Borrow the read view of a value property.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not issued by this store. Reading through an
    /// unbound handle is a programming error, not a recoverable condition.
    pub fn value_property(&self, handle: ValuePropertyHandle) -> ValueProperty<'_> {
        let slot = self
            .values
            .get(handle.index())
            .unwrap_or_else(|| panic!("value property handle #{} is not bound to this store", handle.0));
        ValueProperty::new(slot)
    }

    /// Borrow the read view of a path property.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not issued by this store.
    pub fn path_property(&self, handle: PathPropertyHandle) -> PathProperty<'_> {
        let slot = self
            .paths
            .get(handle.index())
            .unwrap_or_else(|| panic!("path property handle #{} is not bound to this store", handle.0));
        PathProperty::new(slot)
    }

    /// Borrow the mutable view of a path property (playhead, init, finish).
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not issued by this store.
    pub fn path_property_mut(&mut self, handle: PathPropertyHandle) -> PathPropertyMut<'_> {
        let slot = self
            .paths
            .get_mut(handle.index())
            .unwrap_or_else(|| panic!("path property handle #{} is not bound to this store", handle.0));
        PathPropertyMut::new(slot)
    }

    /// Producer write: store a new value, stamped with the store clock.
    ///
    /// The stamp is clamped so `last_updated` never regresses, keeping the
    /// timestamp monotonically non-decreasing across the slot's lifetime.
    /// Returns the stamp actually recorded.
    pub fn write_value(&mut self, handle: ValuePropertyHandle, value: TrackValue) -> Result<TimeUnit> {
        let now = self.now();
        self.write_value_at(handle, value, now)
    }

    /// Producer write with an explicit timestamp, for deterministic callers.
    ///
    /// A `time` earlier than the slot's current `last_updated` is clamped up
    /// to it; the recorded stamp is returned.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not issued by this store.
    pub fn write_value_at(
        &mut self,
        handle: ValuePropertyHandle,
        value: TrackValue,
        time: TimeUnit,
    ) -> Result<TimeUnit> {
        let slot = self
            .values
            .get_mut(handle.index())
            .unwrap_or_else(|| panic!("value property handle #{} is not bound to this store", handle.0));

        if value.kind() != slot.kind {
            return Err(TrackError::ValueKindMismatch {
                expected: slot.kind,
                actual: value.kind(),
            });
        }

        let stamp = time.max(slot.last_updated);
        slot.current = Some(value);
        slot.last_updated = stamp;
        Ok(stamp)
    }

    /// Number of value property slots.
    #[inline]
    pub fn value_property_count(&self) -> usize {
        self.values.len()
    }

    /// Number of path property slots.
    #[inline]
    pub fn path_property_count(&self) -> usize {
        self.paths.len()
    }
}

impl Default for PropertyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Vector3;

    #[test]
    fn test_write_and_read_back() {
        let mut store = PropertyStore::new();
        let handle = store.create_value_property(ValueKind::Vec3);

        let stamp = store
            .write_value_at(handle, Vector3::new(1.0, 2.0, 3.0).into(), TimeUnit::new(1, 0))
            .unwrap();
        assert_eq!(stamp, TimeUnit::new(1, 0));

        let prop = store.value_property(handle);
        assert_eq!(prop.kind(), ValueKind::Vec3);
        assert_eq!(prop.last_updated(), TimeUnit::new(1, 0));
    }

    #[test]
    fn test_write_kind_mismatch() {
        let mut store = PropertyStore::new();
        let handle = store.create_value_property(ValueKind::Float);

        let err = store
            .write_value(handle, Vector3::zero().into())
            .unwrap_err();
        assert_eq!(
            err,
            TrackError::ValueKindMismatch {
                expected: ValueKind::Float,
                actual: ValueKind::Vec3,
            }
        );
    }

    #[test]
    fn test_timestamps_never_regress() {
        let mut store = PropertyStore::new();
        let handle = store.create_value_property(ValueKind::Float);

        store
            .write_value_at(handle, 1.0.into(), TimeUnit::new(5, 0))
            .unwrap();
        // A write stamped in the past is clamped to the previous stamp.
        let stamp = store
            .write_value_at(handle, 2.0.into(), TimeUnit::new(3, 0))
            .unwrap();
        assert_eq!(stamp, TimeUnit::new(5, 0));
        assert_eq!(store.value_property(handle).last_updated(), TimeUnit::new(5, 0));
    }

    #[test]
    #[should_panic(expected = "not bound to this store")]
    fn test_unbound_handle_panics() {
        let mut store = PropertyStore::new();
        let handle = store.create_value_property(ValueKind::Float);

        let other = PropertyStore::new();
        let _ = other.value_property(handle);
    }
}
