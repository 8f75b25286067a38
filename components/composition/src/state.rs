//! Switching between several entities by key.

use alloc::{boxed::Box, collections::BTreeMap, vec::Vec};
use core::fmt::Debug;
use qlayout_core::{ItemId, LayoutItem, Rect, Size};

use crate::entity::{AnyEntity, Entity};

/// Holds one entity per key and forwards everything to the entity of the
/// current key.
///
/// With no current key, or a key without an entity, the state behaves like
/// [`Empty`](crate::Empty).
///
/// ```ignore
/// let state = State::new()
///     .with(Phase::Loading, spinner)
///     .with(Phase::Loaded, content)
///     .select(Phase::Loading);
/// ```
#[derive(Debug)]
pub struct State<K: Ord + Debug> {
    current: Option<K>,
    entities: BTreeMap<K, AnyEntity>,
}

impl<K: Ord + Debug> Default for State<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Debug> State<K> {
    /// Creates a state without entities or current key.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            entities: BTreeMap::new(),
        }
    }

    /// Registers `entity` for `key`.
    #[must_use]
    pub fn with(mut self, key: K, entity: impl Entity + 'static) -> Self {
        self.insert(key, entity);
        self
    }

    /// Selects `key` as the current state.
    #[must_use]
    pub fn select(mut self, key: K) -> Self {
        self.set_current(Some(key));
        self
    }

    /// Registers `entity` for `key`, returning the entity it replaces.
    pub fn insert(&mut self, key: K, entity: impl Entity + 'static) -> Option<AnyEntity> {
        self.entities.insert(key, Box::new(entity))
    }

    /// Removes the entity registered for `key`.
    pub fn remove(&mut self, key: &K) -> Option<AnyEntity> {
        self.entities.remove(key)
    }

    /// The current key.
    #[must_use]
    pub const fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Switches to `key`. Returns `true` if the current key changed.
    pub fn set_current(&mut self, key: Option<K>) -> bool {
        if self.current == key {
            return false;
        }
        self.current = key;
        true
    }

    fn active(&self) -> Option<&AnyEntity> {
        self.current.as_ref().and_then(|key| self.entities.get(key))
    }

    fn active_mut(&mut self) -> Option<&mut AnyEntity> {
        self.current
            .as_ref()
            .and_then(|key| self.entities.get_mut(key))
    }
}

impl<K: Ord + Debug> Entity for State<K> {
    fn size(&self, available: Size) -> Size {
        self.active()
            .map_or_else(Size::zero, |entity| entity.size(available))
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        self.active_mut()
            .map_or_else(Size::zero, |entity| entity.layout(bounds))
    }

    fn items(&self, bounds: Rect) -> Vec<&LayoutItem> {
        self.active()
            .map(|entity| entity.items(bounds))
            .unwrap_or_default()
    }

    fn invalidate(&mut self) {
        for entity in self.entities.values_mut() {
            entity.invalidate();
        }
    }

    fn invalidate_item(&mut self, item: ItemId) -> bool {
        self.entities
            .values_mut()
            .any(|entity| entity.invalidate_item(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixed;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Phase {
        Loading,
        Loaded,
    }

    #[test]
    fn test_forwards_to_current_entity() {
        let mut state = State::new()
            .with(Phase::Loading, fixed(10.0, 10.0))
            .with(Phase::Loaded, fixed(100.0, 40.0))
            .select(Phase::Loading);

        assert_eq!(state.size(Size::INFINITY), Size::new(10.0, 10.0));
        assert!(state.set_current(Some(Phase::Loaded)));
        assert!(!state.set_current(Some(Phase::Loaded)));
        assert_eq!(state.size(Size::INFINITY), Size::new(100.0, 40.0));
    }

    #[test]
    fn test_unknown_key_is_empty() {
        let mut state = State::new().with(Phase::Loaded, fixed(100.0, 40.0));

        assert_eq!(state.size(Size::INFINITY), Size::zero());
        state.set_current(Some(Phase::Loading));
        assert_eq!(state.layout(Rect::from_xywh(0.0, 0.0, 50.0, 50.0)), Size::zero());
        assert!(state.items(Rect::from_xywh(0.0, 0.0, 50.0, 50.0)).is_empty());
    }
}
