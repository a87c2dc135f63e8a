//! Tracks Core
//!
//! Time-stamped property and path-animation binding layer. A producer (the
//! curve evaluation engine, out of scope here) writes tagged values and
//! timestamps into a [`PropertyStore`]; consumers poll properties once per
//! tick, passing their previous check-time so only genuinely new data comes
//! back, and pull continuous values from path properties at arbitrary time
//! offsets. [`Track`]s name the properties, record which renderable objects
//! they currently drive, and notify subscribers on binding changes.
//!
//! Everything is single-threaded and synchronous: no locks, no atomics,
//! nothing blocks. Reading through an unbound store handle is a programming
//! error and panics; absence, staleness and kind mismatches are ordinary
//! conditions and surface as `None`.

pub mod error;
pub mod ids;
pub mod path;
pub mod property;
pub mod store;
pub mod time;
pub mod track;
pub mod value;

// Re-export common types for convenience
pub use error::TrackError;
pub use ids::{CallbackId, GameObjectId};
pub use path::{PathProperty, PathPropertyMut, PathSample, PointData};
pub use property::{ValueProperty, ValueSnapshot};
pub use store::{PathPropertyHandle, PropertyStore, ValuePropertyHandle};
pub use time::TimeUnit;
pub use track::{PropertyName, Track};
pub use value::{Quaternion, TrackValue, ValueKind, Vector3, Vector4};

/// Tracks result type
pub type Result<T> = core::result::Result<T, TrackError>;
