//! A two-dimensional layout that arranges entities in columns and rows.

use alloc::vec::Vec;
use core::num::NonZeroUsize;
use qlayout_core::{Axis, ItemId, LayoutItem, Rect, Size};

use crate::{
    entity::{AnyEntity, Entity, collect_items, invalidate_all, invalidate_any},
    stack::total_spacing,
};

/// Fixed-column grid.
///
/// Children are consumed row-major. A row is flushed once it holds `columns`
/// children or the children run out, and its extent is the largest extent of
/// the children it holds. Rows advance along `axis`; columns run along the
/// other axis and share the available extent evenly.
#[derive(Debug)]
pub struct Grid {
    axis: Axis,
    columns: NonZeroUsize,
    column_spacing: f32,
    row_spacing: f32,
    entities: Vec<AnyEntity>,
}

impl Grid {
    /// Creates a grid whose rows advance along `axis`.
    #[must_use]
    pub const fn new(axis: Axis, columns: NonZeroUsize, entities: Vec<AnyEntity>) -> Self {
        Self {
            axis,
            columns,
            column_spacing: 0.0,
            row_spacing: 0.0,
            entities,
        }
    }

    /// Sets the gap between columns.
    #[must_use]
    pub const fn column_spacing(mut self, spacing: f32) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// Sets the gap between rows.
    #[must_use]
    pub const fn row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns.get()
    }

    #[allow(clippy::cast_precision_loss)]
    fn column_extent(&self, available: Size) -> Option<f32> {
        let extent = available.cross(self.axis);
        extent.is_finite().then(|| {
            let columns = self.columns.get();
            ((extent - total_spacing(columns, self.column_spacing)) / columns as f32).max(0.0)
        })
    }

    /// Column extent and per-row extents for `available`.
    fn measure(&self, available: Size) -> (f32, Vec<f32>) {
        let axis = self.axis;
        let column = self.column_extent(available);
        let proposal = Size::from_axes(axis, f32::INFINITY, column.unwrap_or(f32::INFINITY));
        let sizes: Vec<Size> = self.entities.iter().map(|e| e.size(proposal)).collect();

        let column = column.unwrap_or_else(|| {
            sizes
                .iter()
                .map(|size| size.cross(axis))
                .filter(|extent| extent.is_finite())
                .fold(0.0, f32::max)
        });
        let rows = sizes
            .chunks(self.columns.get())
            .map(|row| {
                row.iter()
                    .map(|size| size.main(axis))
                    .filter(|extent| extent.is_finite())
                    .fold(0.0, f32::max)
            })
            .collect();
        (column, rows)
    }

    fn extent(&self, column: f32, rows: &[f32]) -> Size {
        let columns = self.columns.get().min(self.entities.len());
        #[allow(clippy::cast_precision_loss)]
        let cross = column * columns as f32 + total_spacing(columns, self.column_spacing);
        let main = rows.iter().sum::<f32>() + total_spacing(rows.len(), self.row_spacing);
        Size::from_axes(self.axis, main, cross)
    }
}

impl Entity for Grid {
    fn size(&self, available: Size) -> Size {
        if self.entities.is_empty() {
            return Size::zero();
        }
        let (column, rows) = self.measure(available);
        self.extent(column, &rows)
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        if self.entities.is_empty() {
            return Size::zero();
        }
        let axis = self.axis;
        let (column, rows) = self.measure(bounds.size());
        let columns = self.columns.get();

        let mut row_cursor = bounds.main_min(axis);
        for (row, entities) in rows.iter().zip(self.entities.chunks_mut(columns)) {
            let mut column_cursor = bounds.cross_min(axis);
            for entity in entities {
                entity.layout(Rect::from_axes(axis, row_cursor, column_cursor, *row, column));
                column_cursor += column + self.column_spacing;
            }
            row_cursor += row + self.row_spacing;
        }

        self.extent(column, &rows)
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

/// A grid whose rows stack top to bottom.
#[must_use]
pub const fn vgrid(columns: NonZeroUsize, entities: Vec<AnyEntity>) -> Grid {
    Grid::new(Axis::Vertical, columns, entities)
}

/// A grid whose rows stack left to right.
#[must_use]
pub const fn hgrid(columns: NonZeroUsize, entities: Vec<AnyEntity>) -> Grid {
    Grid::new(Axis::Horizontal, columns, entities)
}
