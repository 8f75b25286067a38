//! Horizontal and vertical stacks.

use alloc::vec::Vec;
use qlayout_core::{Axis, ItemId, LayoutItem, Rect, Size};

use crate::{
    entity::{AnyEntity, Entity, collect_items, invalidate_all, invalidate_any},
    stack::{StackAlignment, place_run, run_size},
};

/// Arranges children one after another along an axis.
///
/// Children are measured with an unbounded main axis and the available cross
/// extent. A child measuring zero along the main axis is collapsed: it does
/// not occupy space and no spacing is inserted for it.
///
/// ```ignore
/// vstack(entities![title, subtitle])
///     .alignment(StackAlignment::Fill)
///     .spacing(8.0)
/// ```
#[derive(Debug)]
pub struct Stack {
    axis: Axis,
    alignment: StackAlignment,
    spacing: f32,
    entities: Vec<AnyEntity>,
}

impl Stack {
    /// Creates a stack along `axis`.
    #[must_use]
    pub const fn new(
        axis: Axis,
        alignment: StackAlignment,
        spacing: f32,
        entities: Vec<AnyEntity>,
    ) -> Self {
        Self {
            axis,
            alignment,
            spacing,
            entities,
        }
    }

    /// A left-to-right stack.
    #[must_use]
    pub const fn horizontal(
        alignment: StackAlignment,
        spacing: f32,
        entities: Vec<AnyEntity>,
    ) -> Self {
        Self::new(Axis::Horizontal, alignment, spacing, entities)
    }

    /// A top-to-bottom stack.
    #[must_use]
    pub const fn vertical(
        alignment: StackAlignment,
        spacing: f32,
        entities: Vec<AnyEntity>,
    ) -> Self {
        Self::new(Axis::Vertical, alignment, spacing, entities)
    }

    /// Sets the cross-axis alignment of children.
    #[must_use]
    pub const fn alignment(mut self, alignment: StackAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the spacing between non-collapsed children.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// The stacked children.
    #[must_use]
    pub fn entities(&self) -> &[AnyEntity] {
        &self.entities
    }

    /// The stacked children, mutably.
    pub fn entities_mut(&mut self) -> &mut Vec<AnyEntity> {
        &mut self.entities
    }

    fn measure(&self, available: Size) -> Vec<Size> {
        let proposal = Size::from_axes(self.axis, f32::INFINITY, available.cross(self.axis));
        self.entities
            .iter()
            .map(|entity| entity.size(proposal))
            .collect()
    }
}

impl Entity for Stack {
    fn size(&self, available: Size) -> Size {
        if self.entities.is_empty() {
            return Size::zero();
        }
        let sizes = self.measure(available);
        run_size(self.axis, self.alignment, self.spacing, available, &sizes)
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        if self.entities.is_empty() {
            return Size::zero();
        }
        let sizes = self.measure(bounds.size());
        place_run(
            self.axis,
            self.alignment,
            self.spacing,
            bounds,
            &mut self.entities,
            &sizes,
        )
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

/// Convenience constructor: a centered horizontal stack without spacing.
#[must_use]
pub const fn hstack(entities: Vec<AnyEntity>) -> Stack {
    Stack::horizontal(StackAlignment::Center, 0.0, entities)
}

/// Convenience constructor: a centered vertical stack without spacing.
#[must_use]
pub const fn vstack(entities: Vec<AnyEntity>) -> Stack {
    Stack::vertical(StackAlignment::Center, 0.0, entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{fixed, recorded};

    #[test]
    fn test_hstack_size_sums_main_axis() {
        let stack = Stack::horizontal(
            StackAlignment::Center,
            10.0,
            crate::entities![fixed(30.0, 20.0), fixed(40.0, 50.0)],
        );

        let size = stack.size(Size::new(500.0, 500.0));
        assert_eq!(size, Size::new(80.0, 50.0));
    }

    #[test]
    fn test_collapsed_child_takes_no_spacing() {
        let stack = Stack::horizontal(
            StackAlignment::Leading,
            5.0,
            crate::entities![fixed(10.0, 10.0), fixed(0.0, 10.0), fixed(10.0, 10.0)],
        );

        assert_eq!(stack.size(Size::INFINITY).width, 25.0);
    }

    #[test]
    fn test_hstack_trailing_alignment() {
        let (short, short_frame) = recorded(30.0, 20.0);
        let (tall, tall_frame) = recorded(30.0, 50.0);
        let mut stack =
            Stack::horizontal(StackAlignment::Trailing, 10.0, crate::entities![short, tall]);

        let used = stack.layout(Rect::from_xywh(10.0, 10.0, 100.0, 60.0));

        assert_eq!(used, Size::new(70.0, 60.0));
        assert_eq!(short_frame.get(), Rect::from_xywh(10.0, 50.0, 30.0, 20.0));
        assert_eq!(tall_frame.get(), Rect::from_xywh(50.0, 20.0, 30.0, 50.0));
    }

    #[test]
    fn test_empty_stack() {
        let mut stack = vstack(Vec::new());
        assert_eq!(stack.size(Size::INFINITY), Size::zero());
        assert_eq!(stack.layout(Rect::from_xywh(0.0, 0.0, 10.0, 10.0)), Size::zero());
    }
}
