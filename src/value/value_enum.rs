use crate::value::quaternion::Quaternion;
use crate::value::vector3::Vector3;
use crate::value::vector4::Vector4;
use serde::{Deserialize, Serialize};

/// Enum representing the type of a `TrackValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Float,
    Vec3,
    Vec4,
    Quat,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Float => "Float",
            ValueKind::Vec3 => "Vec3",
            ValueKind::Vec4 => "Vec4",
            ValueKind::Quat => "Quat",
        }
    }
}

/// Tagged value produced for an animatable attribute.
///
/// Consumers must check the discriminant (via [`TrackValue::kind`] or the
/// checked accessors) before reading a specific payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrackValue {
    /// Scalar attribute (dissolve amount, time, ...)
    Float(f32),
    /// 3D vector (position, scale, ...)
    Vec3(Vector3),
    /// 4D vector (color, ...)
    Vec4(Vector4),
    /// Rotation
    Quat(Quaternion),
}

impl TrackValue {
    /// Get the discriminant of this value as a `ValueKind`.
    pub fn kind(&self) -> ValueKind {
        match self {
            TrackValue::Float(_) => ValueKind::Float,
            TrackValue::Vec3(_) => ValueKind::Vec3,
            TrackValue::Vec4(_) => ValueKind::Vec4,
            TrackValue::Quat(_) => ValueKind::Quat,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        if let Self::Float(f) = self {
            Some(*f)
        } else {
            None
        }
    }

    pub fn as_vec3(&self) -> Option<Vector3> {
        if let Self::Vec3(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    pub fn as_vec4(&self) -> Option<Vector4> {
        if let Self::Vec4(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    pub fn as_quat(&self) -> Option<Quaternion> {
        if let Self::Quat(q) = self {
            Some(*q)
        } else {
            None
        }
    }
}

impl From<f32> for TrackValue {
    fn from(value: f32) -> Self {
        TrackValue::Float(value)
    }
}

impl From<Vector3> for TrackValue {
    fn from(value: Vector3) -> Self {
        TrackValue::Vec3(value)
    }
}

impl From<Vector4> for TrackValue {
    fn from(value: Vector4) -> Self {
        TrackValue::Vec4(value)
    }
}

impl From<Quaternion> for TrackValue {
    fn from(value: Quaternion) -> Self {
        TrackValue::Quat(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_payload() {
        assert_eq!(TrackValue::Float(1.0).kind(), ValueKind::Float);
        assert_eq!(TrackValue::Vec3(Vector3::zero()).kind(), ValueKind::Vec3);
        assert_eq!(TrackValue::Vec4(Vector4::one()).kind(), ValueKind::Vec4);
        assert_eq!(
            TrackValue::Quat(Quaternion::identity()).kind(),
            ValueKind::Quat
        );
    }

    #[test]
    fn test_checked_accessors() {
        let v = TrackValue::Vec3(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v.as_vec3(), Some(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(v.as_float(), None);
        assert_eq!(v.as_vec4(), None);
        assert_eq!(v.as_quat(), None);
    }

    #[test]
    fn test_serialization_round_trip() {
        let v = TrackValue::Quat(Quaternion::new(0.0, 0.5, 0.0, 0.5));
        let serialized = serde_json::to_string(&v).unwrap();
        let deserialized: TrackValue = serde_json::from_str(&serialized).unwrap();
        assert_eq!(v, deserialized);
    }
}
