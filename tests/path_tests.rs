use approx::assert_relative_eq;
use tracks_core::{PathSample, PointData, PropertyStore, TrackValue, ValueKind, Vector3};

/// Minimal stand-in for the evaluation engine: linear interpolation over
/// keyframes of a single kind. The real curve math lives outside this crate.
struct LinearPath {
    keys: Vec<(f32, TrackValue)>,
}

impl LinearPath {
    fn new(keys: Vec<(f32, TrackValue)>) -> Self {
        assert!(!keys.is_empty());
        Self { keys }
    }

    fn floats(keys: &[(f32, f32)]) -> Self {
        Self::new(
            keys.iter()
                .map(|&(t, v)| (t, TrackValue::Float(v)))
                .collect(),
        )
    }
}

impl PointData for LinearPath {
    fn kind(&self) -> ValueKind {
        self.keys[0].1.kind()
    }

    fn sample(&self, time: f32) -> PathSample {
        let (last_time, last_value) = *self.keys.last().unwrap();
        if time >= last_time {
            return PathSample {
                value: last_value,
                reached_end: true,
            };
        }
        let (first_time, first_value) = self.keys[0];
        if time <= first_time {
            return PathSample {
                value: first_value,
                reached_end: false,
            };
        }

        let idx = self
            .keys
            .windows(2)
            .position(|w| time < w[1].0)
            .unwrap_or(self.keys.len() - 2);
        let (t0, v0) = self.keys[idx];
        let (t1, v1) = self.keys[idx + 1];
        let alpha = (time - t0) / (t1 - t0);

        let value = match (v0, v1) {
            (TrackValue::Float(a), TrackValue::Float(b)) => TrackValue::Float(a + (b - a) * alpha),
            (TrackValue::Vec3(a), TrackValue::Vec3(b)) => TrackValue::Vec3(a + (b - a) * alpha),
            (TrackValue::Vec4(a), TrackValue::Vec4(b)) => TrackValue::Vec4(a + (b - a) * alpha),
            _ => v0,
        };
        PathSample {
            value,
            reached_end: false,
        }
    }
}

#[test]
fn test_sample_at_path_start() {
    let mut store = PropertyStore::new();
    let handle = store.create_path_property(ValueKind::Float);

    let mut prop = store.path_property_mut(handle);
    prop.init(Some(Box::new(LinearPath::floats(&[
        (0.0, 1.0),
        (2.0, 5.0),
    ]))));
    prop.set_time(0.0);

    let prop = store.path_property(handle);
    let sample = prop.interpolate(0.0).unwrap();
    assert_eq!(sample.value, TrackValue::Float(1.0));
    assert!(!sample.reached_end);
}

#[test]
fn test_linear_midpoint() {
    let mut store = PropertyStore::new();
    let handle = store.create_path_property(ValueKind::Float);
    store
        .path_property_mut(handle)
        .init(Some(Box::new(LinearPath::floats(&[
            (0.0, 1.0),
            (2.0, 5.0),
        ]))));

    let (value, reached_end) = store
        .path_property(handle)
        .interpolate_float(1.0)
        .unwrap();
    assert_relative_eq!(value, 3.0);
    assert!(!reached_end);
}

#[test]
fn test_reached_end_latches() {
    let mut store = PropertyStore::new();
    let handle = store.create_path_property(ValueKind::Float);
    store
        .path_property_mut(handle)
        .init(Some(Box::new(LinearPath::floats(&[
            (0.0, 1.0),
            (2.0, 5.0),
        ]))));

    let prop = store.path_property(handle);
    assert!(!prop.interpolate(1.999).unwrap().reached_end);
    // At the final keyframe and everywhere past it the flag stays set.
    assert!(prop.interpolate(2.0).unwrap().reached_end);
    assert!(prop.interpolate(2.5).unwrap().reached_end);
    assert!(prop.interpolate(100.0).unwrap().reached_end);
}

#[test]
fn test_zero_duration_path_ends_immediately() {
    let mut store = PropertyStore::new();
    let handle = store.create_path_property(ValueKind::Float);
    store
        .path_property_mut(handle)
        .init(Some(Box::new(LinearPath::floats(&[(0.0, 7.0)]))));

    let sample = store.path_property(handle).interpolate(0.0).unwrap();
    assert_eq!(sample.value, TrackValue::Float(7.0));
    assert!(sample.reached_end);
}

#[test]
fn test_interpolate_without_init_is_empty() {
    let mut store = PropertyStore::new();
    let handle = store.create_path_property(ValueKind::Vec3);

    let prop = store.path_property(handle);
    assert!(!prop.has_point_data());
    assert!(prop.interpolate(0.0).is_none());
    assert!(prop.interpolate_vec3(0.0).is_none());
}

#[test]
fn test_init_none_clears_point_data() {
    let mut store = PropertyStore::new();
    let handle = store.create_path_property(ValueKind::Float);

    store
        .path_property_mut(handle)
        .init(Some(Box::new(LinearPath::floats(&[(0.0, 1.0), (1.0, 2.0)]))));
    assert!(store.path_property(handle).interpolate(0.5).is_some());

    store.path_property_mut(handle).init(None);
    assert!(store.path_property(handle).interpolate(0.5).is_none());
}

#[test]
fn test_playhead_is_read_write() {
    let mut store = PropertyStore::new();
    let handle = store.create_path_property(ValueKind::Float);

    assert_eq!(store.path_property(handle).time(), 0.0);
    store.path_property_mut(handle).set_time(1.25);
    assert_eq!(store.path_property(handle).time(), 1.25);
}

#[test]
fn test_vec3_path_through_typed_wrapper() {
    let mut store = PropertyStore::new();
    let handle = store.create_path_property(ValueKind::Vec3);
    store
        .path_property_mut(handle)
        .init(Some(Box::new(LinearPath::new(vec![
            (0.0, TrackValue::Vec3(Vector3::zero())),
            (1.0, TrackValue::Vec3(Vector3::new(2.0, 4.0, 6.0))),
        ]))));

    let prop = store.path_property(handle);
    let (mid, reached_end) = prop.interpolate_vec3(0.5).unwrap();
    assert_relative_eq!(mid.x, 1.0);
    assert_relative_eq!(mid.y, 2.0);
    assert_relative_eq!(mid.z, 3.0);
    assert!(!reached_end);

    // Wrong-kind wrappers miss instead of misreading the payload.
    assert!(prop.interpolate_float(0.5).is_none());
    assert!(prop.interpolate_quat(0.5).is_none());
}
