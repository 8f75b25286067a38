//! Stacks that split the available main-axis extent between their children.

use alloc::{vec, vec::Vec};
use qlayout_core::{Axis, ItemId, LayoutItem, Rect, Size};

use crate::{
    entity::{AnyEntity, Entity, collect_items, invalidate_all, invalidate_any},
    stack::{StackAlignment, place_run, run_size, total_spacing},
};

/// How a [`SplitStack`] hands out its main-axis extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SplitBehaviour {
    /// Children smaller than their equal share keep their natural size and the
    /// freed space goes to the others.
    #[default]
    Content,
    /// Every child receives exactly the equal share.
    Fill,
}

/// Splits the available main-axis extent between children.
///
/// With [`SplitBehaviour::Content`] the split runs exactly two passes: every
/// child is measured against an equal share, children below their share are
/// fixed at their natural extent, and the freed slack is spread evenly over
/// the remaining children, which are measured once more. Slack left over
/// after the second pass stays unused. Children that measure zero along the
/// main axis at their natural size are collapsed beforehand and take neither a
/// share nor spacing.
#[derive(Debug)]
pub struct SplitStack {
    axis: Axis,
    alignment: StackAlignment,
    behaviour: SplitBehaviour,
    spacing: f32,
    entities: Vec<AnyEntity>,
}

impl SplitStack {
    /// Creates a split stack along `axis`.
    #[must_use]
    pub const fn new(axis: Axis, spacing: f32, entities: Vec<AnyEntity>) -> Self {
        Self {
            axis,
            alignment: StackAlignment::Fill,
            behaviour: SplitBehaviour::Content,
            spacing,
            entities,
        }
    }

    /// Sets the cross-axis alignment of children.
    #[must_use]
    pub const fn alignment(mut self, alignment: StackAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets how the main-axis extent is shared.
    #[must_use]
    pub const fn behaviour(mut self, behaviour: SplitBehaviour) -> Self {
        self.behaviour = behaviour;
        self
    }

    /// Sets the spacing between children.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    #[allow(clippy::cast_precision_loss)]
    fn distribute(&self, available: Size) -> Vec<Size> {
        let axis = self.axis;
        let count = self.entities.len();
        let cross = available.cross(axis);
        let main = available.main(axis);

        let natural_proposal = Size::from_axes(axis, f32::INFINITY, cross);
        let natural: Vec<Size> = self
            .entities
            .iter()
            .map(|e| e.size(natural_proposal))
            .collect();
        if !main.is_finite() {
            return natural;
        }

        // Collapsed children take neither a share nor spacing.
        let mut fixed: Vec<bool> = natural.iter().map(|size| size.main(axis) <= 0.0).collect();
        let visible = fixed.iter().filter(|is_fixed| !**is_fixed).count();
        if visible == 0 {
            return vec![Size::zero(); count];
        }

        let share = ((main - total_spacing(visible, self.spacing)) / visible as f32).max(0.0);
        let proposal = Size::from_axes(axis, share, cross);
        let mut sizes: Vec<Size> = self
            .entities
            .iter()
            .zip(&fixed)
            .map(|(e, collapsed)| if *collapsed { Size::zero() } else { e.size(proposal) })
            .collect();

        if self.behaviour == SplitBehaviour::Fill {
            for (size, collapsed) in sizes.iter_mut().zip(&fixed) {
                if !collapsed {
                    *size = size.with_main(axis, share);
                }
            }
            return sizes;
        }

        // First pass: children below their share keep their natural extent.
        let mut slack = 0.0;
        for (index, size) in sizes.iter_mut().enumerate() {
            if fixed[index] {
                continue;
            }
            let natural = size.main(axis);
            if natural < share {
                fixed[index] = true;
                slack += share - natural;
            } else {
                *size = size.with_main(axis, share);
            }
        }

        let rest = fixed.iter().filter(|is_fixed| !**is_fixed).count();
        if rest == 0 || slack <= 0.0 {
            return sizes;
        }

        // Second and last pass over the children that were not fixed.
        let widened = share + slack / rest as f32;
        let proposal = Size::from_axes(axis, widened, cross);
        for (index, entity) in self.entities.iter().enumerate() {
            if fixed[index] {
                continue;
            }
            let size = entity.size(proposal);
            sizes[index] = size.with_main(axis, size.main(axis).min(widened));
        }
        sizes
    }
}

impl Entity for SplitStack {
    fn size(&self, available: Size) -> Size {
        if self.entities.is_empty() {
            return Size::zero();
        }
        let sizes = self.distribute(available);
        run_size(self.axis, self.alignment, self.spacing, available, &sizes)
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        if self.entities.is_empty() {
            return Size::zero();
        }
        let sizes = self.distribute(bounds.size());
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

/// A horizontal [`SplitStack`].
#[must_use]
pub const fn hsplit_stack(spacing: f32, entities: Vec<AnyEntity>) -> SplitStack {
    SplitStack::new(Axis::Horizontal, spacing, entities)
}

/// A vertical [`SplitStack`].
#[must_use]
pub const fn vsplit_stack(spacing: f32, entities: Vec<AnyEntity>) -> SplitStack {
    SplitStack::new(Axis::Vertical, spacing, entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{TextView, fixed, recorded};
    use crate::item::Item;

    #[test]
    fn test_small_child_frees_slack_for_others() {
        // share = 300 / 3 = 100, the 40pt child frees 60 for the other two
        let (a, a_frame) = recorded(40.0, 10.0);
        let b = Item::new(TextView::new(500.0, 10.0));
        let c = Item::new(TextView::new(500.0, 10.0));
        let mut stack = hsplit_stack(0.0, crate::entities![a, b, c]);

        let used = stack.layout(Rect::from_xywh(0.0, 0.0, 300.0, 50.0));

        assert_eq!(a_frame.get().width(), 40.0);
        assert_eq!(used.width, 300.0);
        let frames: Vec<Rect> = stack
            .items(Rect::from_xywh(0.0, 0.0, 300.0, 50.0))
            .iter()
            .map(|item| item.frame())
            .collect();
        assert_eq!(frames[1].width(), 130.0);
        assert_eq!(frames[2].x(), 170.0);
    }

    #[test]
    fn test_second_pass_is_not_iterated() {
        // share = 100; first child fixed at 20 freeing 80, widened share = 140.
        // The 110pt child keeps 110 in the second pass and its 30 of slack is
        // not handed on to the third child.
        let stack = hsplit_stack(
            0.0,
            crate::entities![
                fixed(20.0, 10.0),
                Item::new(TextView::new(110.0, 10.0)),
                Item::new(TextView::new(400.0, 10.0)),
            ],
        );

        let size = stack.size(Size::new(300.0, 10.0));
        assert_eq!(size.width, 20.0 + 110.0 + 140.0);
    }

    #[test]
    fn test_fill_behaviour_uses_equal_shares() {
        let stack = hsplit_stack(10.0, crate::entities![fixed(5.0, 10.0), fixed(500.0, 10.0)])
            .behaviour(SplitBehaviour::Fill);

        assert_eq!(stack.size(Size::new(210.0, 10.0)), Size::new(210.0, 10.0));
    }

    #[test]
    fn test_collapsed_child_leaves_no_gap() {
        // two visible children share (300 - 10) / 2 = 145
        let mut stack = hsplit_stack(
            10.0,
            crate::entities![
                Item::new(TextView::new(500.0, 10.0)),
                crate::entity::Empty,
                Item::new(TextView::new(500.0, 10.0)),
            ],
        );

        assert_eq!(stack.size(Size::new(300.0, 10.0)), Size::new(300.0, 10.0));
        let used = stack.layout(Rect::from_xywh(0.0, 0.0, 300.0, 10.0));
        assert_eq!(used.width, 300.0);

        let frames: Vec<Rect> = stack
            .items(Rect::from_xywh(0.0, 0.0, 300.0, 10.0))
            .iter()
            .map(|item| item.frame())
            .collect();
        assert_eq!(frames[0], Rect::from_xywh(0.0, 0.0, 145.0, 10.0));
        assert_eq!(frames[1], Rect::from_xywh(155.0, 0.0, 145.0, 10.0));
    }
}
