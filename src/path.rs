//! Continuously sampled attributes driven by authored point data.
//!
//! The actual curve math lives in the evaluation engine behind the
//! [`PointData`] trait; this layer keeps the playhead, forwards sampling
//! requests, and interprets the tagged result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::{Quaternion, TrackValue, ValueKind, Vector3, Vector4};

/// One sample produced by the evaluation engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSample {
    /// Interpolated value at the requested time.
    pub value: TrackValue,
    /// True once the requested time is at or past the path's final keyframe.
    /// Latches: stays true for every later sample, so the caller may stop
    /// advancing this property.
    pub reached_end: bool,
}

/// Boundary to the out-of-scope curve evaluation engine.
///
/// Implementations hold the authored interpolation source (keyframes, easing,
/// whatever the engine uses) and compute samples from it. `sample` must be
/// synchronous and non-blocking, and `reached_end` must stay true for every
/// time at or past the final defined keyframe.
pub trait PointData {
    /// Discriminant of the values this source produces.
    fn kind(&self) -> ValueKind;

    /// Sample the path at `time`.
    fn sample(&self, time: f32) -> PathSample;

    /// End-of-pass cleanup hook. Called at most once per sampling pass; the
    /// next `init` starts a new pass.
    fn finish(&mut self) {}
}

/// Storage for one path property inside the store.
pub(crate) struct PathSlot {
    pub(crate) kind: ValueKind,
    pub(crate) point_data: Option<Box<dyn PointData>>,
    pub(crate) time: f32,
    pub(crate) finished: bool,
}

impl PathSlot {
    pub(crate) fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            point_data: None,
            time: 0.0,
            finished: false,
        }
    }
}

impl fmt::Debug for PathSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathSlot")
            .field("kind", &self.kind)
            .field("has_point_data", &self.point_data.is_some())
            .field("time", &self.time)
            .field("finished", &self.finished)
            .finish()
    }
}

/// Read view over a path property slot.
#[derive(Debug, Clone, Copy)]
pub struct PathProperty<'a> {
    slot: &'a PathSlot,
}

impl<'a> PathProperty<'a> {
    pub(crate) fn new(slot: &'a PathSlot) -> Self {
        Self { slot }
    }

    /// The declared payload kind of this property.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.slot.kind
    }

    /// Current playhead position.
    #[inline]
    pub fn time(&self) -> f32 {
        self.slot.time
    }

    /// Whether point data has been loaded via `init`.
    #[inline]
    pub fn has_point_data(&self) -> bool {
        self.slot.point_data.is_some()
    }

    /// Sample the path at `time`.
    ///
    /// Returns `None` when no point data has been loaded; `init` is a
    /// precondition for meaningful output.
    pub fn interpolate(&self, time: f32) -> Option<PathSample> {
        self.slot.point_data.as_ref().map(|data| data.sample(time))
    }

    /// Scalar sample, checked against the source's discriminant.
    pub fn interpolate_float(&self, time: f32) -> Option<(f32, bool)> {
        let sample = self.interpolate(time)?;
        Some((sample.value.as_float()?, sample.reached_end))
    }

    /// 3D vector sample, checked against the source's discriminant.
    pub fn interpolate_vec3(&self, time: f32) -> Option<(Vector3, bool)> {
        let sample = self.interpolate(time)?;
        Some((sample.value.as_vec3()?, sample.reached_end))
    }

    /// 4D vector sample, checked against the source's discriminant.
    pub fn interpolate_vec4(&self, time: f32) -> Option<(Vector4, bool)> {
        let sample = self.interpolate(time)?;
        Some((sample.value.as_vec4()?, sample.reached_end))
    }

    /// Rotation sample, checked against the source's discriminant.
    pub fn interpolate_quat(&self, time: f32) -> Option<(Quaternion, bool)> {
        let sample = self.interpolate(time)?;
        Some((sample.value.as_quat()?, sample.reached_end))
    }
}

/// Mutable view over a path property slot: playhead writes, source loading
/// and end-of-pass cleanup.
#[derive(Debug)]
pub struct PathPropertyMut<'a> {
    slot: &'a mut PathSlot,
}

impl<'a> PathPropertyMut<'a> {
    pub(crate) fn new(slot: &'a mut PathSlot) -> Self {
        Self { slot }
    }

    /// The declared payload kind of this property.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.slot.kind
    }

    /// Current playhead position.
    #[inline]
    pub fn time(&self) -> f32 {
        self.slot.time
    }

    /// Move the playhead.
    #[inline]
    pub fn set_time(&mut self, time: f32) {
        self.slot.time = time;
    }

    /// (Re)load the interpolation source and start a new sampling pass.
    /// Passing `None` clears it.
    pub fn init(&mut self, point_data: Option<Box<dyn PointData>>) {
        self.slot.point_data = point_data;
        self.slot.finished = false;
    }

    /// End the current sampling pass, forwarding cleanup to the source.
    /// Idempotent: repeated calls without an intervening `init` do nothing.
    pub fn finish(&mut self) {
        if self.slot.finished {
            return;
        }
        self.slot.finished = true;
        if let Some(data) = self.slot.point_data.as_mut() {
            data.finish();
        }
    }

    /// Downgrade to the read view.
    #[inline]
    pub fn as_read(&self) -> PathProperty<'_> {
        PathProperty::new(self.slot)
    }
}
