//! Overlay stack for multiple layers.

use alloc::vec::Vec;
use qlayout_core::{Axes, Axis, ItemId, LayoutItem, Rect, Size};

use crate::entity::{AnyEntity, Entity, collect_items, invalidate_all, invalidate_any};

/// Layers every child in the same rectangle.
///
/// The stack's size is the component-wise maximum of its children. Axes listed
/// in [`pinned`](Self::pinned) are additionally floored to the available
/// extent when it is finite. Every child is placed at the stack's origin with
/// that shared size.
#[derive(Debug)]
pub struct ZStack {
    pinned: Axes,
    entities: Vec<AnyEntity>,
}

impl ZStack {
    /// Creates an overlay stack.
    #[must_use]
    pub const fn new(entities: Vec<AnyEntity>) -> Self {
        Self {
            pinned: Axes::empty(),
            entities,
        }
    }

    /// Floors the reported size to the available extent on `axes`.
    #[must_use]
    pub const fn pinned(mut self, axes: Axes) -> Self {
        self.pinned = axes;
        self
    }
}

impl Entity for ZStack {
    fn size(&self, available: Size) -> Size {
        let mut size = self
            .entities
            .iter()
            .map(|entity| entity.size(available))
            .fold(Size::zero(), Size::max);

        for axis in [Axis::Horizontal, Axis::Vertical] {
            let extent = available.main(axis);
            if self.pinned.has(axis) && extent.is_finite() {
                size = size.with_main(axis, size.main(axis).max(extent));
            }
        }
        size
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        let size = self.size(bounds.size());
        let frame = Rect::new(bounds.origin(), size);
        for entity in &mut self.entities {
            entity.layout(frame);
        }
        size
    }

    fn items(&self, bounds: Rect) -> Vec<&LayoutItem> {
        collect_items(&self.entities, bounds)
    }

    fn invalidate(&mut self) {
        invalidate_all(&mut self.entities);
    }

    fn invalidate_item(&mut self, item: ItemId) -> bool {
        invalidate_any(&mut self.entities, item)
    }
}

/// Convenience constructor for an unpinned [`ZStack`].
#[must_use]
pub const fn zstack(entities: Vec<AnyEntity>) -> ZStack {
    ZStack::new(entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{fixed, recorded};

    #[test]
    fn test_size_is_componentwise_max() {
        let stack = zstack(crate::entities![fixed(30.0, 10.0), fixed(10.0, 40.0)]);
        assert_eq!(stack.size(Size::new(100.0, 100.0)), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_pinned_axis_floors_to_available() {
        let stack = zstack(crate::entities![fixed(30.0, 10.0)]).pinned(Axes::HORIZONTAL);
        assert_eq!(stack.size(Size::new(100.0, 100.0)), Size::new(100.0, 10.0));
        // Unbounded extent cannot pin.
        assert_eq!(stack.size(Size::INFINITY), Size::new(30.0, 10.0));
    }

    #[test]
    fn test_children_share_origin_and_size() {
        let (a, a_frame) = recorded(30.0, 10.0);
        let (b, b_frame) = recorded(10.0, 40.0);
        let mut stack = zstack(crate::entities![a, b]);

        let used = stack.layout(Rect::from_xywh(5.0, 5.0, 100.0, 100.0));

        assert_eq!(used, Size::new(30.0, 40.0));
        assert_eq!(a_frame.get(), Rect::from_xywh(5.0, 5.0, 30.0, 40.0));
        assert_eq!(b_frame.get(), a_frame.get());
    }
}
