//! Flow layouts that wrap children onto several lines.

use alloc::vec::Vec;
use core::ops::Range;
use qlayout_core::{Axis, ItemId, LayoutItem, Rect, Size};

use crate::{
    entity::{AnyEntity, Entity, collect_items, invalidate_all, invalidate_any},
    stack::total_spacing,
};

/// Placement of children inside one line of a [`Flow`].
///
/// Alignment never influences where lines break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowAlignment {
    /// Pack lines against the leading edge.
    #[default]
    Leading,
    /// Center each line.
    Center,
    /// Pack lines against the trailing edge.
    Trailing,
}

#[derive(Debug, Clone, PartialEq)]
struct Line {
    range: Range<usize>,
    main: f32,
    cross: f32,
}

/// Wraps children onto lines.
///
/// Children are laid out along `line_axis` until the next one would not fit
/// into the available extent, then a new line is started after
/// `line_spacing`. Line breaking is greedy. A child without extent along
/// the line axis is collapsed and never starts or ends a line.
#[derive(Debug)]
pub struct Flow {
    line_axis: Axis,
    alignment: FlowAlignment,
    line_spacing: f32,
    entity_spacing: f32,
    entities: Vec<AnyEntity>,
}

impl Flow {
    /// Creates a flow whose lines run along `line_axis`.
    #[must_use]
    pub const fn new(line_axis: Axis, entities: Vec<AnyEntity>) -> Self {
        Self {
            line_axis,
            alignment: FlowAlignment::Leading,
            line_spacing: 0.0,
            entity_spacing: 0.0,
            entities,
        }
    }

    /// Sets the placement of children inside their line.
    #[must_use]
    pub const fn alignment(mut self, alignment: FlowAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the gap between consecutive lines.
    #[must_use]
    pub const fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Sets the gap between children of the same line.
    #[must_use]
    pub const fn entity_spacing(mut self, spacing: f32) -> Self {
        self.entity_spacing = spacing;
        self
    }

    fn measure(&self, available: Size) -> Vec<Size> {
        let axis = self.line_axis;
        let proposal = Size::from_axes(axis, available.main(axis), f32::INFINITY);
        self.entities
            .iter()
            .map(|entity| entity.size(proposal))
            .collect()
    }

    fn break_lines(&self, limit: f32, sizes: &[Size]) -> Vec<Line> {
        let axis = self.line_axis;
        let mut lines = Vec::new();
        let mut current: Option<Line> = None;

        for (index, size) in sizes.iter().enumerate() {
            let main = size.main(axis);
            if main <= 0.0 {
                continue;
            }
            let cross = size.cross(axis);

            current = Some(match current.take() {
                Some(mut line) if line.main + self.entity_spacing + main <= limit => {
                    line.main += self.entity_spacing + main;
                    line.cross = line.cross.max(cross);
                    line.range.end = index + 1;
                    line
                }
                previous => {
                    lines.extend(previous);
                    Line {
                        range: index..index + 1,
                        main,
                        cross,
                    }
                }
            });
        }
        lines.extend(current);
        lines
    }

    fn content_size(&self, lines: &[Line]) -> Size {
        if lines.is_empty() {
            return Size::zero();
        }
        let main = lines.iter().map(|line| line.main).fold(0.0, f32::max);
        let cross: f32 = lines.iter().map(|line| line.cross).sum();
        Size::from_axes(
            self.line_axis,
            main,
            cross + total_spacing(lines.len(), self.line_spacing),
        )
    }
}

impl Entity for Flow {
    fn size(&self, available: Size) -> Size {
        let sizes = self.measure(available);
        let lines = self.break_lines(available.main(self.line_axis), &sizes);
        self.content_size(&lines)
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        let axis = self.line_axis;
        let sizes = self.measure(bounds.size());
        let lines = self.break_lines(bounds.size().main(axis), &sizes);
        let content = self.content_size(&lines);

        let extent = if bounds.size().main(axis).is_finite() {
            bounds.size().main(axis)
        } else {
            content.main(axis)
        };

        let mut line_cursor = bounds.cross_min(axis);
        let mut next = 0;
        for line in &lines {
            // collapsed children before this line
            for index in next..line.range.start {
                self.entities[index].layout(Rect::from_axes(
                    axis,
                    bounds.main_min(axis),
                    line_cursor,
                    0.0,
                    0.0,
                ));
            }

            let offset = match self.alignment {
                FlowAlignment::Leading => 0.0,
                FlowAlignment::Center => (extent - line.main) / 2.0,
                FlowAlignment::Trailing => extent - line.main,
            };
            let mut cursor = bounds.main_min(axis) + offset;
            let mut placed = false;
            for index in line.range.clone() {
                let size = sizes[index];
                if size.main(axis) <= 0.0 {
                    self.entities[index].layout(Rect::from_axes(
                        axis,
                        cursor,
                        line_cursor,
                        0.0,
                        0.0,
                    ));
                    continue;
                }
                if placed {
                    cursor += self.entity_spacing;
                }
                self.entities[index].layout(Rect::from_axes(
                    axis,
                    cursor,
                    line_cursor,
                    size.main(axis),
                    size.cross(axis),
                ));
                cursor += size.main(axis);
                placed = true;
            }

            line_cursor += line.cross + self.line_spacing;
            next = line.range.end;
        }

        for entity in &mut self.entities[next..] {
            entity.layout(Rect::from_axes(
                axis,
                bounds.main_min(axis),
                bounds.cross_min(axis),
                0.0,
                0.0,
            ));
        }
        content
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

/// A flow with horizontal lines stacked top to bottom.
#[must_use]
pub const fn vflow(entities: Vec<AnyEntity>) -> Flow {
    Flow::new(Axis::Horizontal, entities)
}

/// A flow with vertical lines stacked left to right.
#[must_use]
pub const fn hflow(entities: Vec<AnyEntity>) -> Flow {
    Flow::new(Axis::Vertical, entities)
}
