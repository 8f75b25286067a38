//! Fixed gaps used by stacks and other containers.

use alloc::vec::Vec;
use qlayout_core::{Axis, LayoutItem, Rect, Size};

use crate::entity::Entity;

/// An empty placeholder with a fixed extent along one axis.
///
/// ```ignore
/// vstack(entities![header, Space::vertical(16.0), body])
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Space {
    axis: Axis,
    extent: f32,
}

impl Space {
    /// Creates a gap of `extent` along `axis`.
    #[must_use]
    pub const fn new(axis: Axis, extent: f32) -> Self {
        Self { axis, extent }
    }

    /// A horizontal gap of `width` points.
    #[must_use]
    pub const fn horizontal(width: f32) -> Self {
        Self::new(Axis::Horizontal, width)
    }

    /// A vertical gap of `height` points.
    #[must_use]
    pub const fn vertical(height: f32) -> Self {
        Self::new(Axis::Vertical, height)
    }
}

impl Entity for Space {
    fn size(&self, _available: Size) -> Size {
        Size::from_axes(self.axis, self.extent, 0.0)
    }

    fn layout(&mut self, _bounds: Rect) -> Size {
        Size::from_axes(self.axis, self.extent, 0.0)
    }

    fn items(&self, _bounds: Rect) -> Vec<&LayoutItem> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        stack::{StackAlignment, Stack},
        tests::fixed,
    };

    #[test]
    fn test_space_in_stack() {
        let stack = Stack::vertical(
            StackAlignment::Leading,
            0.0,
            crate::entities![fixed(10.0, 10.0), Space::vertical(16.0), fixed(10.0, 10.0)],
        );
        assert_eq!(stack.size(Size::INFINITY), Size::new(10.0, 36.0));
    }

    #[test]
    fn test_cross_axis_space_collapses() {
        let stack = Stack::vertical(
            StackAlignment::Leading,
            8.0,
            crate::entities![fixed(10.0, 10.0), Space::horizontal(16.0), fixed(10.0, 10.0)],
        );
        // The horizontal gap has no height, so it collapses in a vertical stack.
        assert_eq!(stack.size(Size::INFINITY), Size::new(10.0, 28.0));
    }
}
