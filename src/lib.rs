#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod debug;

pub mod prelude {
    //! Commonly used types, traits and constructors in one import.
    //!
    //! ```rust
    //! use qlayout::prelude::*;
    //!
    //! let column = vstack(entities![Space::vertical(20.0).padding(4.0), Empty]).spacing(8.0);
    //! assert_eq!(column.size(Size::INFINITY), Size::new(8.0, 28.0));
    //! ```
    pub use qlayout_composition::{
        AnyEntity, Bubble, CompositionLayout, Empty, Entity, EntityExt, Fill, Flow,
        FlowAlignment, FullStack, Grid, Item, LayoutEntity, Padding, Position, Space,
        SplitBehaviour, SplitStack, Stack, StackAlignment, State, ZStack, entities, hflow,
        hfull_stack, hgrid, hsplit_stack, hstack, item, vflow, vfull_stack, vgrid,
        vsplit_stack, vstack, zstack,
    };
    pub use qlayout_core::{
        Anchor, Axes, Axis, Inset, ItemId, Layout, LayoutDelegate, LayoutItem, Point, Rect,
        Size, View,
    };
    pub use qlayout_list::{Animation, Ease, ListAlignment, ListConfig, ListError, ListLayout};
}

#[doc(inline)]
pub use qlayout_core::{geometry, item, layout};
#[doc(inline)]
pub use qlayout_core::{Layout, LayoutDelegate, LayoutItem, View};

pub use qlayout_composition as composition;
pub use qlayout_list as list;
