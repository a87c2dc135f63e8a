//! Payload types for animatable attributes.

pub mod quaternion;
pub mod value_enum;
pub mod vector3;
pub mod vector4;

pub use quaternion::Quaternion;
pub use value_enum::{TrackValue, ValueKind};
pub use vector3::Vector3;
pub use vector4::Vector4;
