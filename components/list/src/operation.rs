//! In-flight structural changes of a list.

use std::collections::BTreeSet;

use qlayout_core::{Axis, Size};

/// Direction of an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Items grow from nothing to their natural size.
    Insert,
    /// Items shrink from their natural size to nothing and are then removed.
    Delete,
}

/// Items being inserted or deleted under an animation.
///
/// The operation scales the main-axis extent of its items by a factor derived
/// from `progress`: `progress` for inserts, `1 - progress` for deletes.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    kind: OperationKind,
    indices: BTreeSet<usize>,
    progress: f32,
}

impl Operation {
    /// Creates an operation at progress `0`.
    #[must_use]
    pub const fn new(kind: OperationKind, indices: BTreeSet<usize>) -> Self {
        Self {
            kind,
            indices,
            progress: 0.0,
        }
    }

    /// An insert of `indices`.
    pub fn insert(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::new(OperationKind::Insert, indices.into_iter().collect())
    }

    /// A delete of `indices`.
    pub fn delete(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::new(OperationKind::Delete, indices.into_iter().collect())
    }

    /// The kind of change.
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Affected item indices.
    #[must_use]
    pub const fn indices(&self) -> &BTreeSet<usize> {
        &self.indices
    }

    /// Current progress in `0..=1`.
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Sets the progress, clamped to `0..=1`.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, 1.0);
    }

    /// Whether `index` is affected.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Multiplier applied to an affected item's main-axis extent.
    #[must_use]
    pub const fn factor(&self) -> f32 {
        match self.kind {
            OperationKind::Insert => self.progress,
            OperationKind::Delete => 1.0 - self.progress,
        }
    }

    /// Scales `size` along `axis` if `index` is affected.
    #[must_use]
    pub fn scale(&self, index: usize, axis: Axis, size: Size) -> Size {
        if self.contains(index) {
            size.with_main(axis, size.main(axis) * self.factor())
        } else {
            size
        }
    }

    /// Moves every index at or after `from` by `count`, following an insertion.
    pub fn shift(&mut self, from: usize, count: usize) {
        let moved = self.indices.split_off(&from);
        self.indices
            .extend(moved.into_iter().map(|index| index + count));
    }
}
