//! Leaf entity wrapping a single [`LayoutItem`].

use alloc::{vec, vec::Vec};
use qlayout_core::{ItemId, LayoutItem, Rect, Size, View};

use crate::entity::Entity;

/// The leaf of every layout tree: one host view and its frame.
#[derive(Debug)]
pub struct Item {
    item: LayoutItem,
}

impl Item {
    /// Wraps `view` in a fresh [`LayoutItem`].
    pub fn new(view: impl View + 'static) -> Self {
        Self {
            item: LayoutItem::new(view),
        }
    }

    /// Wraps an existing [`LayoutItem`].
    #[must_use]
    pub const fn from_item(item: LayoutItem) -> Self {
        Self { item }
    }

    /// The wrapped item.
    #[must_use]
    pub const fn item(&self) -> &LayoutItem {
        &self.item
    }

    /// The wrapped item, mutably.
    pub const fn item_mut(&mut self) -> &mut LayoutItem {
        &mut self.item
    }
}

impl Entity for Item {
    fn size(&self, available: Size) -> Size {
        self.item.size(available)
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        self.item.set_frame(bounds);
        self.item.reset_need_force_update();
        bounds.size()
    }

    fn items(&self, bounds: Rect) -> Vec<&LayoutItem> {
        if bounds.is_intersecting(&self.item.frame()) {
            vec![&self.item]
        } else {
            Vec::new()
        }
    }

    fn invalidate(&mut self) {
        self.item.set_need_force_update();
    }

    fn invalidate_item(&mut self, item: ItemId) -> bool {
        if self.item.id() == item {
            self.item.set_need_force_update();
            true
        } else {
            false
        }
    }
}

/// Convenience constructor for an [`Item`].
pub fn item(view: impl View + 'static) -> Item {
    Item::new(view)
}
