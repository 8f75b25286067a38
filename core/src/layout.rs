//! The contract shared by every stateful layout.
//!
//! Layout follows a two-pass protocol. During the *measure* pass a host asks
//! for [`Layout::size`] given the space it can offer; once the host has chosen
//! final bounds it calls [`Layout::layout`], which assigns every item's frame
//! top-down. [`Layout::items`] then answers which items intersect a visible
//! rectangle so the host only materializes what is on screen.

use core::fmt::Debug;

use alloc::{rc::Rc, vec::Vec};

use crate::{
    geometry::{Rect, Size},
    item::{ItemId, LayoutItem},
};

/// Upward notification channel from a layout to the container hosting it.
///
/// All methods take `&self`; hosts keep whatever state they need in cells.
pub trait LayoutDelegate {
    /// The layout's desired size may have changed; the host must re-measure
    /// before the next placement.
    fn set_need_update(&self);

    /// The layout wants its frames refreshed now, typically once per
    /// animation frame.
    fn update_if_needed(&self);
}

/// A stateful layout owning a set of [`LayoutItem`]s.
pub trait Layout: Debug {
    /// Desired size for the given available space. Must not mutate frames;
    /// implementations may memoize measurements internally.
    fn size(&self, available: Size) -> Size;

    /// Places every item inside `bounds` and returns the size actually used,
    /// which may be smaller than `bounds` when the content is.
    fn layout(&mut self, bounds: Rect) -> Size;

    /// Items whose frame intersects `bounds`.
    fn items(&self, bounds: Rect) -> Vec<&LayoutItem>;

    /// Drops every cached measurement.
    fn invalidate(&mut self);

    /// Drops the cached measurement of one item. Returns `false` if the item
    /// does not belong to this layout.
    fn invalidate_item(&mut self, item: ItemId) -> bool;

    /// Installs or removes the host delegate.
    fn set_delegate(&mut self, delegate: Option<Rc<dyn LayoutDelegate>>);
}
