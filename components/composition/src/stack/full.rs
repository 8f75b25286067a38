//! Stacks that give every child an identical extent.

use alloc::vec::Vec;
use qlayout_core::{Axis, ItemId, LayoutItem, Rect, Size};

use crate::{
    entity::{AnyEntity, Entity, collect_items, invalidate_all, invalidate_any},
    stack::{StackAlignment, place_run, total_spacing},
};

/// Divides the available extent evenly between children.
///
/// Every non-collapsed child receives `(available - spacing * (n - 1)) / n`
/// along the stacking axis and the whole extent of the other axis. Natural
/// sizes are only consulted to decide which children are collapsed.
#[derive(Debug)]
pub struct FullStack {
    axis: Axis,
    spacing: f32,
    entities: Vec<AnyEntity>,
}

impl FullStack {
    /// Creates a full stack along `axis`.
    #[must_use]
    pub const fn new(axis: Axis, spacing: f32, entities: Vec<AnyEntity>) -> Self {
        Self {
            axis,
            spacing,
            entities,
        }
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
        let natural: Vec<Size> = self.entities.iter().map(|e| e.size(available)).collect();
        let visible: Vec<&Size> = natural.iter().filter(|s| s.main(axis) > 0.0).collect();
        let count = visible.len();
        if count == 0 {
            return natural.iter().map(|_| Size::zero()).collect();
        }

        let main = available.main(axis);
        let share = if main.is_finite() {
            ((main - total_spacing(count, self.spacing)) / count as f32).max(0.0)
        } else {
            visible.iter().map(|s| s.main(axis)).fold(0.0, f32::max)
        };
        let cross = available.cross(axis);
        let cross = if cross.is_finite() {
            cross
        } else {
            visible.iter().map(|s| s.cross(axis)).fold(0.0, f32::max)
        };

        natural
            .iter()
            .map(|size| {
                if size.main(axis) > 0.0 {
                    Size::from_axes(axis, share, cross)
                } else {
                    Size::zero()
                }
            })
            .collect()
    }
}

impl Entity for FullStack {
    fn size(&self, available: Size) -> Size {
        let sizes = self.distribute(available);
        let visible = sizes.iter().filter(|s| s.main(self.axis) > 0.0);
        let count = visible.clone().count();
        if count == 0 {
            return Size::zero();
        }
        let main: f32 = visible.clone().map(|s| s.main(self.axis)).sum();
        let cross = visible.map(|s| s.cross(self.axis)).fold(0.0, f32::max);
        Size::from_axes(self.axis, main + total_spacing(count, self.spacing), cross)
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        let sizes = self.distribute(bounds.size());
        place_run(
            self.axis,
            StackAlignment::Fill,
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

/// A horizontal [`FullStack`].
#[must_use]
pub const fn hfull_stack(spacing: f32, entities: Vec<AnyEntity>) -> FullStack {
    FullStack::new(Axis::Horizontal, spacing, entities)
}

/// A vertical [`FullStack`].
#[must_use]
pub const fn vfull_stack(spacing: f32, entities: Vec<AnyEntity>) -> FullStack {
    FullStack::new(Axis::Vertical, spacing, entities)
}
