//! Layout items: the unit every layout operates on.
//!
//! A [`LayoutItem`] owns exactly one [`View`] (the measurable, placeable thing
//! supplied by the host) together with the frame assigned by the last
//! placement pass and a single "needs forced update" bit.

use core::fmt::Debug;
use core::sync::atomic::{AtomicU64, Ordering};

use alloc::boxed::Box;

use crate::geometry::{Rect, Size};

/// Stable identity of a [`LayoutItem`].
///
/// Views receive it through [`View::attach`] and can use it to find their
/// item again; it is a lookup key, not a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A child that can be measured and placed.
///
/// This is the boundary to the host's view system. Only [`size`](Self::size)
/// is required; the remaining hooks default to no-ops.
pub trait View: Debug {
    /// Reports the size this view wants for the given available space.
    ///
    /// Either component of `available` may be infinite.
    fn size(&self, available: Size) -> Size;

    /// Receives the frame chosen by the placement pass.
    fn set_frame(&mut self, frame: Rect) {
        let _ = frame;
    }

    /// Called once when the view is wrapped by a [`LayoutItem`].
    fn attach(&mut self, item: ItemId) {
        let _ = item;
    }

    /// Called when the owning [`LayoutItem`] is destroyed.
    fn detach(&mut self) {}
}

/// Wraps a single [`View`] with its placement state.
#[derive(Debug)]
pub struct LayoutItem {
    id: ItemId,
    view: Box<dyn View>,
    frame: Rect,
    need_force_update: bool,
}

impl LayoutItem {
    /// Wraps `view`, attaching it to the new item.
    pub fn new(view: impl View + 'static) -> Self {
        Self::from_box(Box::new(view))
    }

    /// Wraps an already boxed view.
    #[must_use]
    pub fn from_box(mut view: Box<dyn View>) -> Self {
        let id = ItemId::next();
        view.attach(id);
        Self {
            id,
            view,
            frame: Rect::default(),
            need_force_update: false,
        }
    }

    /// The item's identity.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// The wrapped view.
    #[must_use]
    pub fn view(&self) -> &dyn View {
        self.view.as_ref()
    }

    /// The wrapped view, mutably.
    pub fn view_mut(&mut self) -> &mut dyn View {
        self.view.as_mut()
    }

    /// Measures the view. No caching happens at this level.
    #[must_use]
    pub fn size(&self, available: Size) -> Size {
        self.view.size(available)
    }

    /// Frame assigned by the last placement.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// Assigns a new frame and forwards it to the view.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.view.set_frame(frame);
    }

    /// Whether a cached measurement of this item must be discarded.
    #[must_use]
    pub const fn is_need_force_update(&self) -> bool {
        self.need_force_update
    }

    /// Marks the item dirty. Repeated calls collapse into one pending update.
    pub const fn set_need_force_update(&mut self) {
        self.need_force_update = true;
    }

    /// Clears the dirty bit.
    pub const fn reset_need_force_update(&mut self) {
        self.need_force_update = false;
    }
}

impl Drop for LayoutItem {
    fn drop(&mut self) {
        self.view.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[derive(Debug)]
    struct Probe {
        attached: Rc<Cell<Option<ItemId>>>,
        frame: Rc<Cell<Rect>>,
    }

    impl View for Probe {
        fn size(&self, _available: Size) -> Size {
            Size::new(10.0, 20.0)
        }

        fn set_frame(&mut self, frame: Rect) {
            self.frame.set(frame);
        }

        fn attach(&mut self, item: ItemId) {
            self.attached.set(Some(item));
        }

        fn detach(&mut self) {
            self.attached.set(None);
        }
    }

    #[test]
    fn test_attach_and_detach() {
        let attached = Rc::new(Cell::new(None));
        let frame = Rc::new(Cell::new(Rect::default()));
        let item = LayoutItem::new(Probe {
            attached: attached.clone(),
            frame: frame.clone(),
        });

        assert_eq!(attached.get(), Some(item.id()));
        drop(item);
        assert_eq!(attached.get(), None);
    }

    #[test]
    fn test_frame_forwarded_to_view() {
        let frame = Rc::new(Cell::new(Rect::default()));
        let mut item = LayoutItem::new(Probe {
            attached: Rc::new(Cell::new(None)),
            frame: frame.clone(),
        });

        let target = Rect::from_xywh(1.0, 2.0, 3.0, 4.0);
        item.set_frame(target);
        assert_eq!(item.frame(), target);
        assert_eq!(frame.get(), target);
        assert_eq!(item.size(Size::INFINITY), Size::new(10.0, 20.0));
    }

    #[test]
    fn test_force_update_is_a_single_bit() {
        let mut item = LayoutItem::new(Probe {
            attached: Rc::new(Cell::new(None)),
            frame: Rc::new(Cell::new(Rect::default())),
        });

        item.set_need_force_update();
        item.set_need_force_update();
        assert!(item.is_need_force_update());
        item.reset_need_force_update();
        assert!(!item.is_need_force_update());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = LayoutItem::new(Probe {
            attached: Rc::new(Cell::new(None)),
            frame: Rc::new(Cell::new(Rect::default())),
        });
        let b = LayoutItem::new(Probe {
            attached: Rc::new(Cell::new(None)),
            frame: Rc::new(Cell::new(Rect::default())),
        });
        assert_ne!(a.id(), b.id());
    }
}
