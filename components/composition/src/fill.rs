//! Forces a child to the available extent.

use alloc::{boxed::Box, vec::Vec};
use qlayout_core::{Axes, Axis, ItemId, LayoutItem, Rect, Size};

use crate::entity::{AnyEntity, Entity};

/// Replaces the child's size with the available extent on the chosen axes.
///
/// An infinite available extent cannot be filled; the child's own size is kept
/// on such an axis.
#[derive(Debug)]
pub struct Fill {
    axes: Axes,
    entity: AnyEntity,
}

impl Fill {
    /// Fills `axes` with `entity`.
    pub fn new(axes: Axes, entity: impl Entity + 'static) -> Self {
        Self {
            axes,
            entity: Box::new(entity),
        }
    }
}

impl Entity for Fill {
    fn size(&self, available: Size) -> Size {
        let mut size = self.entity.size(available);
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let extent = available.main(axis);
            if self.axes.has(axis) && extent.is_finite() {
                size = size.with_main(axis, extent);
            }
        }
        size
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        let size = self.size(bounds.size());
        self.entity.layout(Rect::new(bounds.origin(), size));
        size
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
