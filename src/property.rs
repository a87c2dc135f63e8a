//! Read access to a single animatable attribute with a timestamped value.
//!
//! Many independent consumers poll the same property at different cadences.
//! Each one keeps the timestamp from its previous successful read and passes
//! it back as `last_checked`; the freshness gate in [`ValueSnapshot`] then
//! admits only genuinely new data, so no consumer misses or duplicates an
//! update.

use serde::{Deserialize, Serialize};

use crate::time::TimeUnit;
use crate::value::{Quaternion, TrackValue, ValueKind, Vector3, Vector4};

/// Storage for one value property inside the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ValueSlot {
    pub(crate) kind: ValueKind,
    pub(crate) current: Option<TrackValue>,
    pub(crate) last_updated: TimeUnit,
}

impl ValueSlot {
    pub(crate) fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            current: None,
            last_updated: TimeUnit::sentinel(),
        }
    }
}

/// One coherent read of a value property: the optional value together with
/// the timestamp of the write that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueSnapshot {
    pub value: Option<TrackValue>,
    pub last_updated: TimeUnit,
}

impl ValueSnapshot {
    /// The freshness gate every typed getter routes through.
    ///
    /// True iff `last_checked` is the sentinel (no prior check, so anything
    /// counts as new) or this snapshot was produced at or after it.
    #[inline]
    pub fn has_updated(&self, last_checked: TimeUnit) -> bool {
        last_checked.is_sentinel() || self.last_updated >= last_checked
    }
}

/// Read view over a value property slot.
///
/// Obtained from [`PropertyStore::value_property`]; borrows the store, so it
/// is valid for the current tick only.
///
/// [`PropertyStore::value_property`]: crate::store::PropertyStore::value_property
#[derive(Debug, Clone, Copy)]
pub struct ValueProperty<'a> {
    slot: &'a ValueSlot,
}

impl<'a> ValueProperty<'a> {
    pub(crate) fn new(slot: &'a ValueSlot) -> Self {
        Self { slot }
    }

    /// The declared payload kind of this property.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.slot.kind
    }

    /// Snapshot of the current value and its timestamp.
    #[inline]
    pub fn value(&self) -> ValueSnapshot {
        ValueSnapshot {
            value: self.slot.current,
            last_updated: self.slot.last_updated,
        }
    }

    /// Timestamp of the most recent producer write.
    #[inline]
    pub fn last_updated(&self) -> TimeUnit {
        self.slot.last_updated
    }

    /// Whether the current value is new relative to `last_checked`.
    #[inline]
    pub fn has_updated(&self, last_checked: TimeUnit) -> bool {
        self.value().has_updated(last_checked)
    }

    /// Scalar payload, if present, fresh, and actually a `Float`.
    ///
    /// Absence, staleness, and a mismatched discriminant all surface
    /// uniformly as `None`; the caller simply polls again next tick.
    pub fn get_float(&self, last_checked: TimeUnit) -> Option<f32> {
        let snapshot = self.value();
        if !snapshot.has_updated(last_checked) {
            return None;
        }
        snapshot.value?.as_float()
    }

    /// 3D vector payload, if present, fresh, and actually a `Vec3`.
    pub fn get_vec3(&self, last_checked: TimeUnit) -> Option<Vector3> {
        let snapshot = self.value();
        if !snapshot.has_updated(last_checked) {
            return None;
        }
        snapshot.value?.as_vec3()
    }

    /// 4D vector payload, if present, fresh, and actually a `Vec4`.
    pub fn get_vec4(&self, last_checked: TimeUnit) -> Option<Vector4> {
        let snapshot = self.value();
        if !snapshot.has_updated(last_checked) {
            return None;
        }
        snapshot.value?.as_vec4()
    }

    /// Rotation payload, if present, fresh, and actually a `Quat`.
    pub fn get_quat(&self, last_checked: TimeUnit) -> Option<Quaternion> {
        let snapshot = self.value();
        if !snapshot.has_updated(last_checked) {
            return None;
        }
        snapshot.value?.as_quat()
    }
}
