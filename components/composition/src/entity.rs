//! The entity contract and the modifiers shared by every entity.

use core::fmt::Debug;

use alloc::{boxed::Box, vec::Vec};
use qlayout_core::{Anchor, Axes, Inset, ItemId, LayoutItem, Rect, Size};

use crate::{bubble::Bubble, fill::Fill, inset::Padding, position::Position};

/// A node of the declarative layout tree.
///
/// Entities follow the two-pass protocol: [`size`](Self::size) is a pure
/// measurement that may be called any number of times, [`layout`](Self::layout)
/// is the only operation allowed to assign frames. A composite may assume that
/// `layout` is called with bounds produced from an earlier `size` call on an
/// ancestor.
pub trait Entity: Debug {
    /// Desired size for `available`. Idempotent, never touches frames.
    fn size(&self, available: Size) -> Size;

    /// Places this entity and its children inside `bounds`, returning the
    /// size actually consumed.
    fn layout(&mut self, bounds: Rect) -> Size;

    /// Items whose frame intersects `bounds`.
    fn items(&self, bounds: Rect) -> Vec<&LayoutItem>;

    /// Marks every item below this entity as needing a fresh measurement.
    fn invalidate(&mut self) {}

    /// Marks one item as needing a fresh measurement. Returns `false` if it
    /// is not part of this subtree.
    fn invalidate_item(&mut self, item: ItemId) -> bool {
        let _ = item;
        false
    }
}

impl<E: Entity + ?Sized> Entity for Box<E> {
    fn size(&self, available: Size) -> Size {
        (**self).size(available)
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        (**self).layout(bounds)
    }

    fn items(&self, bounds: Rect) -> Vec<&LayoutItem> {
        (**self).items(bounds)
    }

    fn invalidate(&mut self) {
        (**self).invalidate();
    }

    fn invalidate_item(&mut self, item: ItemId) -> bool {
        (**self).invalidate_item(item)
    }
}

/// A boxed, type-erased entity.
pub type AnyEntity = Box<dyn Entity>;

/// Builder-style modifiers available on every entity.
pub trait EntityExt: Entity + Sized + 'static {
    /// Erases the entity's type.
    fn boxed(self) -> AnyEntity {
        Box::new(self)
    }

    /// Surrounds the entity with `inset`.
    fn padding(self, inset: impl Into<Inset>) -> Padding {
        Padding::new(inset.into(), self)
    }

    /// Pins the entity to `anchor` inside its bounds.
    fn position(self, anchor: Anchor) -> Position {
        Position::new(anchor, self)
    }

    /// Stretches the entity to the available extent on `axes`.
    fn fill(self, axes: Axes) -> Fill {
        Fill::new(axes, self)
    }

    /// Lays `bubble` out behind this entity whenever it is non-empty.
    fn bubble(self, bubble: impl Entity + 'static) -> Bubble {
        Bubble::new(self, bubble)
    }
}

impl<E: Entity + 'static> EntityExt for E {}

/// Collects the visible items of several children, in child order.
pub(crate) fn collect_items<'a>(
    entities: impl IntoIterator<Item = &'a AnyEntity>,
    bounds: Rect,
) -> Vec<&'a LayoutItem> {
    entities
        .into_iter()
        .flat_map(|entity| entity.items(bounds))
        .collect()
}

pub(crate) fn invalidate_all(entities: &mut [AnyEntity]) {
    for entity in entities {
        entity.invalidate();
    }
}

pub(crate) fn invalidate_any(entities: &mut [AnyEntity], item: ItemId) -> bool {
    entities
        .iter_mut()
        .any(|entity| entity.invalidate_item(item))
}

/// An entity that occupies no space and places nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl Entity for Empty {
    fn size(&self, _available: Size) -> Size {
        Size::zero()
    }

    fn layout(&mut self, _bounds: Rect) -> Size {
        Size::zero()
    }

    fn items(&self, _bounds: Rect) -> Vec<&LayoutItem> {
        Vec::new()
    }
}

/// Builds a `Vec<AnyEntity>` from a list of entities of mixed types.
///
/// ```ignore
/// let children = entities![item(a), Space::vertical(8.0), item(b)];
/// ```
#[macro_export]
macro_rules! entities {
    ($($entity:expr),* $(,)?) => {
        $crate::__private::vec![$($crate::EntityExt::boxed($entity)),*]
    };
}
