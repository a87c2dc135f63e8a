use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a game-object callback subscription on a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallbackId(Uuid);

impl CallbackId {
    /// Generate a new callback ID
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    #[inline]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CallbackId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CallbackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to a renderable object owned by the host engine.
///
/// This layer never creates or destroys the object behind the handle; it only
/// records which objects a track currently drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameObjectId(u64);

impl GameObjectId {
    #[inline]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The host engine's raw identifier.
    #[inline]
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for GameObjectId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for GameObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GameObject({})", self.0)
    }
}
