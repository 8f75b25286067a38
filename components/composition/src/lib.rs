#![no_std]
//! Composable layout entities for `qlayout`.
//!
//! A composition is a tree of [`Entity`] values: stacks, flows, grids and
//! modifiers, with [`Item`] leaves wrapping host views. Measurement
//! ([`Entity::size`]) and placement ([`Entity::layout`]) are separate passes.
//! The tree is hosted by a [`CompositionLayout`], which implements the
//! stateful [`Layout`](qlayout_core::Layout) contract.
//!
//! # Example
//!
//! ```rust,ignore
//! use qlayout_composition::{entities, item, stack::vstack, EntityExt, Space};
//!
//! let card = vstack(entities![
//!     item(title),
//!     Space::vertical(4.0),
//!     item(subtitle),
//! ])
//! .spacing(8.0)
//! .padding(16.0)
//! .bubble(item(background));
//! ```
//!
//! Children measuring zero along a stack's axis are collapsed: they take no
//! space and no spacing, and a modifier around them disappears with them.

extern crate alloc;

pub mod adapter;
pub mod bubble;
pub mod composition;
pub mod entity;
pub mod fill;
pub mod flow;
pub mod grid;
pub mod inset;
pub mod item;
pub mod position;
pub mod space;
pub mod stack;
pub mod state;

pub use adapter::LayoutEntity;
pub use bubble::Bubble;
pub use composition::CompositionLayout;
pub use entity::{AnyEntity, Empty, Entity, EntityExt};
pub use fill::Fill;
pub use flow::{Flow, FlowAlignment, hflow, vflow};
pub use grid::{Grid, hgrid, vgrid};
pub use inset::Padding;
pub use item::{Item, item};
pub use position::Position;
pub use space::Space;
pub use stack::{
    FullStack, SplitBehaviour, SplitStack, Stack, StackAlignment, ZStack, hfull_stack,
    hsplit_stack, hstack, vfull_stack, vsplit_stack, vstack, zstack,
};
pub use state::State;

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec;
}
