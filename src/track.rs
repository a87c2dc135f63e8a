//! Named aggregate of properties plus the renderable objects it drives.

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::ids::{CallbackId, GameObjectId};
use crate::store::{PathPropertyHandle, ValuePropertyHandle};

/// Closed enumeration of well-known property names.
///
/// Lookups by well-known name resolve to the canonical string at the call
/// site, so each property class keeps a single string-keyed mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyName {
    Position,
    LocalPosition,
    Rotation,
    LocalRotation,
    Scale,
    Dissolve,
    DissolveArrow,
    Time,
    Interactable,
    Color,
}

impl PropertyName {
    /// Canonical string id for this well-known name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyName::Position => "position",
            PropertyName::LocalPosition => "localPosition",
            PropertyName::Rotation => "rotation",
            PropertyName::LocalRotation => "localRotation",
            PropertyName::Scale => "scale",
            PropertyName::Dissolve => "dissolve",
            PropertyName::DissolveArrow => "dissolveArrow",
            PropertyName::Time => "time",
            PropertyName::Interactable => "interactable",
            PropertyName::Color => "color",
        }
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type GameObjectCallback = Box<dyn FnMut(GameObjectId, bool)>;

/// A named track: registered value and path properties, the set of
/// renderable objects it currently drives, and the subscribers notified when
/// that binding set changes.
///
/// The track owns every registered callback closure; dropping the track
/// releases all outstanding subscriptions.
pub struct Track {
    name: String,
    properties: HashMap<String, ValuePropertyHandle>,
    path_properties: HashMap<String, PathPropertyHandle>,
    game_objects: Vec<GameObjectId>,
    callbacks: HashMap<CallbackId, GameObjectCallback>,
}

impl Track {
    /// Create an empty track with the given name. Names are not required to
    /// be unique; uniqueness, if needed, is enforced by an external registry.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: HashMap::new(),
            path_properties: HashMap::new(),
            game_objects: Vec::new(),
            callbacks: HashMap::new(),
        }
    }

    /// Track name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the track.
    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Look up a value property by string id. Unregistered ids yield `None`;
    /// callers must check before reading through the handle.
    #[inline]
    pub fn property(&self, id: &str) -> Option<ValuePropertyHandle> {
        self.properties.get(id).copied()
    }

    /// Look up a value property by well-known name.
    #[inline]
    pub fn property_named(&self, name: PropertyName) -> Option<ValuePropertyHandle> {
        self.property(name.as_str())
    }

    /// Look up a path property by string id.
    #[inline]
    pub fn path_property(&self, id: &str) -> Option<PathPropertyHandle> {
        self.path_properties.get(id).copied()
    }

    /// Look up a path property by well-known name.
    #[inline]
    pub fn path_property_named(&self, name: PropertyName) -> Option<PathPropertyHandle> {
        self.path_property(name.as_str())
    }

    /// Register a value property under `id`. Re-registering an id replaces
    /// the previous entry; last write wins.
    pub fn register_property(&mut self, id: impl Into<String>, handle: ValuePropertyHandle) {
        let id = id.into();
        trace!("track '{}': register value property '{}'", self.name, id);
        self.properties.insert(id, handle);
    }

    /// Register a path property under `id`. Last write wins.
    pub fn register_path_property(&mut self, id: impl Into<String>, handle: PathPropertyHandle) {
        let id = id.into();
        trace!("track '{}': register path property '{}'", self.name, id);
        self.path_properties.insert(id, handle);
    }

    /// All registered value properties, keyed by id.
    #[inline]
    pub fn properties_map(&self) -> &HashMap<String, ValuePropertyHandle> {
        &self.properties
    }

    /// All registered path properties, keyed by id.
    #[inline]
    pub fn path_properties_map(&self) -> &HashMap<String, PathPropertyHandle> {
        &self.path_properties
    }

    /// Bind a renderable object to this track.
    ///
    /// Every subscribed callback fires synchronously, in this call, with
    /// `is_new == true` the first time `object` is bound and `false` on
    /// re-registration. Re-registration does not duplicate the object in the
    /// bound set, and there is no unbind operation in this layer.
    pub fn register_game_object(&mut self, object: GameObjectId) {
        let is_new = !self.game_objects.contains(&object);
        if is_new {
            self.game_objects.push(object);
        }
        debug!(
            "track '{}': bound {} (is_new: {})",
            self.name, object, is_new
        );
        for callback in self.callbacks.values_mut() {
            callback(object, is_new);
        }
    }

    /// Subscribe to binding events on this track.
    ///
    /// The callback is invoked once per (re)binding with `(object, is_new)`.
    /// The track owns the closure: it is released either by
    /// [`remove_game_object_callback`](Self::remove_game_object_callback) or
    /// when the track is dropped.
    pub fn register_game_object_callback(
        &mut self,
        callback: impl FnMut(GameObjectId, bool) + 'static,
    ) -> CallbackId {
        let id = CallbackId::new();
        self.callbacks.insert(id, Box::new(callback));
        trace!("track '{}': registered callback {}", self.name, id);
        id
    }

    /// Unsubscribe a callback. Unknown or already-removed ids are a no-op;
    /// returns whether a subscription was actually removed.
    pub fn remove_game_object_callback(&mut self, id: CallbackId) -> bool {
        let removed = self.callbacks.remove(&id).is_some();
        if removed {
            trace!("track '{}': removed callback {}", self.name, id);
        }
        removed
    }

    /// Number of live callback subscriptions.
    #[inline]
    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    /// Renderable objects currently driven by this track. Read-only view,
    /// valid until the next binding mutation; insertion order carries no
    /// meaning.
    #[inline]
    pub fn game_objects(&self) -> &[GameObjectId] {
        &self.game_objects
    }
}

impl fmt::Debug for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Track")
            .field("name", &self.name)
            .field("properties", &self.properties)
            .field("path_properties", &self.path_properties)
            .field("game_objects", &self.game_objects)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_name_strings() {
        assert_eq!(PropertyName::Position.as_str(), "position");
        assert_eq!(PropertyName::LocalRotation.as_str(), "localRotation");
        assert_eq!(PropertyName::DissolveArrow.as_str(), "dissolveArrow");
        assert_eq!(PropertyName::Scale.to_string(), "scale");
    }

    #[test]
    fn test_name_accessors() {
        let mut track = Track::new("root");
        assert_eq!(track.name(), "root");
        track.set_name("player0");
        assert_eq!(track.name(), "player0");
    }
}
