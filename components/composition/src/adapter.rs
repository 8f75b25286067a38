//! Embedding a stateful [`Layout`] inside a composition.

use alloc::vec::Vec;
use qlayout_core::{ItemId, Layout, LayoutItem, Rect, Size};

use crate::entity::Entity;

/// Exposes a nested [`Layout`] (for example a list) as a single entity.
///
/// The layout keeps its own caches and delegate; the entity only forwards the
/// measure and placement passes.
#[derive(Debug)]
pub struct LayoutEntity<L: Layout> {
    inner: L,
}

impl<L: Layout> LayoutEntity<L> {
    /// Wraps `layout`.
    pub const fn new(layout: L) -> Self {
        Self { inner: layout }
    }

    /// The wrapped layout.
    pub const fn inner(&self) -> &L {
        &self.inner
    }

    /// The wrapped layout, mutably.
    pub const fn inner_mut(&mut self) -> &mut L {
        &mut self.inner
    }

    /// Unwraps the layout.
    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: Layout> Entity for LayoutEntity<L> {
    fn size(&self, available: Size) -> Size {
        self.inner.size(available)
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        self.inner.layout(bounds)
    }

    fn items(&self, bounds: Rect) -> Vec<&LayoutItem> {
        self.inner.items(bounds)
    }

    fn invalidate(&mut self) {
        self.inner.invalidate();
    }

    fn invalidate_item(&mut self, item: ItemId) -> bool {
        self.inner.invalidate_item(item)
    }
}
