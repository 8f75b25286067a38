//! Stack entities: linear, split, full and overlay stacks.
//!
//! Linear, split and full stacks share the same placement run: children are
//! laid out one after another along the main axis, children with a zero
//! main-axis extent are collapsed (they take no space and no spacing), and
//! the cross-axis position follows a [`StackAlignment`].

mod full;
mod linear;
mod split;
mod zstack;

pub use full::{FullStack, hfull_stack, vfull_stack};
pub use linear::{Stack, hstack, vstack};
pub use split::{SplitBehaviour, SplitStack, hsplit_stack, vsplit_stack};
pub use zstack::{ZStack, zstack};

use qlayout_core::{Axis, Rect, Size};

use crate::entity::AnyEntity;

/// Cross-axis placement of stack children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StackAlignment {
    /// Align to the leading cross edge (left or top).
    Leading,
    /// Center on the cross axis.
    #[default]
    Center,
    /// Align to the trailing cross edge (right or bottom).
    Trailing,
    /// Stretch to the full cross extent.
    Fill,
}

/// Main-axis extent of `count` children separated by `spacing`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn total_spacing(count: usize, spacing: f32) -> f32 {
    if count > 1 {
        (count - 1) as f32 * spacing
    } else {
        0.0
    }
}

/// Cross extent used to align children: the bounds when finite, otherwise
/// the widest child.
pub(crate) fn container_cross(axis: Axis, bounds: Rect, sizes: &[Size]) -> f32 {
    let cross = bounds.size().cross(axis);
    if cross.is_finite() {
        cross
    } else {
        sizes
            .iter()
            .filter(|size| size.main(axis) > 0.0)
            .map(|size| size.cross(axis))
            .fold(0.0, f32::max)
    }
}

/// Places `entities` with pre-computed `sizes` one after another inside
/// `bounds` and returns the consumed size. A run without a visible child
/// consumes nothing.
pub(crate) fn place_run(
    axis: Axis,
    alignment: StackAlignment,
    spacing: f32,
    bounds: Rect,
    entities: &mut [AnyEntity],
    sizes: &[Size],
) -> Size {
    let container = container_cross(axis, bounds, sizes);
    let start = bounds.main_min(axis);
    let cross_start = bounds.cross_min(axis);
    let mut cursor = start;
    let mut placed = false;

    for (entity, size) in entities.iter_mut().zip(sizes) {
        let main = size.main(axis);
        if main <= 0.0 {
            entity.layout(Rect::from_axes(axis, cursor, cross_start, 0.0, 0.0));
            continue;
        }
        if placed {
            cursor += spacing;
        }

        let cross = match alignment {
            StackAlignment::Fill => container,
            _ => size.cross(axis),
        };
        let offset = match alignment {
            StackAlignment::Leading | StackAlignment::Fill => 0.0,
            StackAlignment::Center => (container - cross) / 2.0,
            StackAlignment::Trailing => container - cross,
        };

        entity.layout(Rect::from_axes(
            axis,
            cursor,
            cross_start + offset,
            main,
            cross,
        ));
        cursor += main;
        placed = true;
    }

    if !placed {
        return Size::zero();
    }
    Size::from_axes(axis, cursor - start, container)
}

/// Main and cross extent reported by a stack for already measured children.
pub(crate) fn run_size(
    axis: Axis,
    alignment: StackAlignment,
    spacing: f32,
    available: Size,
    sizes: &[Size],
) -> Size {
    let visible = sizes.iter().filter(|size| size.main(axis) > 0.0);
    let count = visible.clone().count();
    if count == 0 {
        return Size::zero();
    }
    let main: f32 = visible.clone().map(|size| size.main(axis)).sum();
    let cross = visible.map(|size| size.cross(axis)).fold(0.0, f32::max);

    let available_cross = available.cross(axis);
    let cross = if alignment == StackAlignment::Fill && available_cross.is_finite() {
        available_cross
    } else {
        cross
    };

    Size::from_axes(axis, main + total_spacing(count, spacing), cross)
}
