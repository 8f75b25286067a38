//! Decorations laid out behind content only when the content exists.
//!
//! A bubble mirrors a two-child overlay, but the container's dimensions are
//! locked to the content child. This makes it the right tool for backgrounds,
//! badges and highlights that must disappear with an empty child.

use alloc::{boxed::Box, vec::Vec};
use qlayout_core::{ItemId, LayoutItem, Rect, Size};

use crate::entity::{AnyEntity, Entity};

/// Lays `bubble` out in the frame of `content`, and only when `content` has a
/// non-zero size.
#[derive(Debug)]
pub struct Bubble {
    content: AnyEntity,
    bubble: AnyEntity,
    bubble_visible: bool,
}

impl Bubble {
    /// Creates a bubble around `content`.
    pub fn new(content: impl Entity + 'static, bubble: impl Entity + 'static) -> Self {
        Self {
            content: Box::new(content),
            bubble: Box::new(bubble),
            bubble_visible: false,
        }
    }

    /// Whether the last placement laid the bubble out.
    #[must_use]
    pub const fn is_bubble_visible(&self) -> bool {
        self.bubble_visible
    }
}

impl Entity for Bubble {
    fn size(&self, available: Size) -> Size {
        self.content.size(available)
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        let size = self.content.layout(bounds);
        self.bubble_visible = !size.is_zero();
        if self.bubble_visible {
            self.bubble.layout(Rect::new(bounds.origin(), size));
        }
        size
    }

    fn items(&self, bounds: Rect) -> Vec<&LayoutItem> {
        let mut items = Vec::new();
        if self.bubble_visible {
            items.extend(self.bubble.items(bounds));
        }
        items.extend(self.content.items(bounds));
        items
    }

    fn invalidate(&mut self) {
        self.content.invalidate();
        self.bubble.invalidate();
    }

    fn invalidate_item(&mut self, item: ItemId) -> bool {
        self.content.invalidate_item(item) || self.bubble.invalidate_item(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntityExt, entity::Empty, stack::vstack, tests::recorded};

    #[test]
    fn test_bubble_follows_content() {
        let (content, content_frame) = recorded(40.0, 20.0);
        let (background, background_frame) = recorded(1.0, 1.0);
        let mut entity = content.padding(5.0).bubble(background);

        let bounds = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let used = entity.size(bounds.size());
        let placed = entity.layout(Rect::new(bounds.origin(), used));

        assert_eq!(placed, Size::new(50.0, 30.0));
        assert_eq!(content_frame.get(), Rect::from_xywh(5.0, 5.0, 40.0, 20.0));
        assert_eq!(background_frame.get(), Rect::from_xywh(0.0, 0.0, 50.0, 30.0));
        assert!(entity.is_bubble_visible());
        assert_eq!(entity.items(bounds).len(), 2);
    }

    #[test]
    fn test_empty_content_suppresses_bubble() {
        let (background, background_frame) = recorded(1.0, 1.0);
        let mut entity = Bubble::new(vstack(crate::entities![Empty]), background);

        let placed = entity.layout(Rect::from_xywh(0.0, 0.0, 100.0, 100.0));

        assert_eq!(placed, Size::zero());
        assert!(!entity.is_bubble_visible());
        assert_eq!(background_frame.get(), Rect::default());
        assert!(entity.items(Rect::from_xywh(0.0, 0.0, 100.0, 100.0)).is_empty());
    }
}
