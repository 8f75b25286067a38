//! Anchored placement of a single entity.

use alloc::{boxed::Box, vec::Vec};
use qlayout_core::{Anchor, ItemId, LayoutItem, Rect, Size};

use crate::entity::{AnyEntity, Entity};

/// Places its child at one of nine anchor points inside the bounds.
///
/// On a finite axis the entity consumes the whole bounds; on an infinite axis
/// it shrinks to the child, which is then placed at the leading edge.
#[derive(Debug)]
pub struct Position {
    anchor: Anchor,
    entity: AnyEntity,
}

impl Position {
    /// Anchors `entity` at `anchor`.
    pub fn new(anchor: Anchor, entity: impl Entity + 'static) -> Self {
        Self {
            anchor,
            entity: Box::new(entity),
        }
    }

    /// Returns the current anchor.
    #[must_use]
    pub const fn anchor(&self) -> Anchor {
        self.anchor
    }
}

impl Entity for Position {
    fn size(&self, available: Size) -> Size {
        self.entity.size(available)
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        let size = self.entity.size(bounds.size());
        let container = Size::new(
            if bounds.width().is_finite() {
                bounds.width()
            } else {
                size.width
            },
            if bounds.height().is_finite() {
                bounds.height()
            } else {
                size.height
            },
        );
        let frame = Rect::new(bounds.origin(), container).anchored(self.anchor, size);
        self.entity.layout(frame);
        container
    }

    fn items(&self, bounds: Rect) -> Vec<&LayoutItem> {
        self.entity.items(bounds)
    }

    fn invalidate(&mut self) {
        self.entity.invalidate();
    }

    fn invalidate_item(&mut self, item: ItemId) -> bool {
        self.entity.invalidate_item(item)
    }
}
