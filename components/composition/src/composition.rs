//! The stateful layout hosting a composition tree.

use alloc::{boxed::Box, rc::Rc, vec::Vec};
use core::fmt;
use qlayout_core::{ItemId, Layout, LayoutDelegate, LayoutItem, Rect, Size};

use crate::entity::{AnyEntity, Entity, Empty};

/// Owns a root [`Entity`] and drives it through the [`Layout`] contract.
///
/// Invalidation and root replacement are reported to the delegate so the
/// host re-measures.
pub struct CompositionLayout {
    root: AnyEntity,
    delegate: Option<Rc<dyn LayoutDelegate>>,
}

impl fmt::Debug for CompositionLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositionLayout")
            .field("root", &self.root)
            .field("delegate", &self.delegate.is_some())
            .finish()
    }
}

impl Default for CompositionLayout {
    fn default() -> Self {
        Self::new(Empty)
    }
}

impl CompositionLayout {
    /// Creates a layout around `root`.
    pub fn new(root: impl Entity + 'static) -> Self {
        Self {
            root: Box::new(root),
            delegate: None,
        }
    }

    /// The root entity.
    #[must_use]
    pub fn root(&self) -> &dyn Entity {
        &*self.root
    }

    /// The root entity, mutably. Call [`Layout::invalidate`] afterwards if the
    /// change affects measurement.
    pub fn root_mut(&mut self) -> &mut dyn Entity {
        &mut *self.root
    }

    /// Replaces the root entity and asks the host to re-measure.
    pub fn set_root(&mut self, root: impl Entity + 'static) {
        self.root = Box::new(root);
        self.notify();
    }

    fn notify(&self) {
        if let Some(delegate) = &self.delegate {
            delegate.set_need_update();
        }
    }
}

impl Layout for CompositionLayout {
    fn size(&self, available: Size) -> Size {
        self.root.size(available)
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        self.root.layout(bounds)
    }

    fn items(&self, bounds: Rect) -> Vec<&LayoutItem> {
        self.root.items(bounds)
    }

    fn invalidate(&mut self) {
        self.root.invalidate();
        self.notify();
    }

    fn invalidate_item(&mut self, item: ItemId) -> bool {
        let found = self.root.invalidate_item(item);
        if found {
            self.notify();
        }
        found
    }

    fn set_delegate(&mut self, delegate: Option<Rc<dyn LayoutDelegate>>) {
        self.delegate = delegate;
    }
}
