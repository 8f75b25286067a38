//! Padding that insets a child by fixed edge distances.

use alloc::{boxed::Box, vec::Vec};
use qlayout_core::{Inset, ItemId, LayoutItem, Rect, Size};

use crate::entity::{AnyEntity, Entity};

/// Shrinks the available space by an [`Inset`] before delegating, and grows
/// the child's answer back by the same amount.
///
/// A child reporting a zero size stays zero: an empty optional child takes its
/// margin with it.
#[derive(Debug)]
pub struct Padding {
    inset: Inset,
    entity: AnyEntity,
}

impl Padding {
    /// Wraps `entity` with `inset`.
    pub fn new(inset: Inset, entity: impl Entity + 'static) -> Self {
        Self {
            inset,
            entity: Box::new(entity),
        }
    }

    /// Returns the configured inset.
    #[must_use]
    pub const fn inset(&self) -> Inset {
        self.inset
    }
}

impl Entity for Padding {
    fn size(&self, available: Size) -> Size {
        let size = self.entity.size(available.apply(self.inset));
        if size.is_zero() {
            return size;
        }
        size.inset(self.inset)
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        let inner = bounds.apply(self.inset);
        let inner = Rect::new(inner.origin(), inner.size().max(Size::zero()));
        if self.entity.size(inner.size()).is_zero() {
            self.entity.layout(Rect::new(bounds.origin(), Size::zero()));
            return Size::zero();
        }
        self.entity.layout(inner).inset(self.inset)
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
