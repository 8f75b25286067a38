#![no_std]
//! Core types for `qlayout`.
//!
//! This crate holds everything the layout crates agree on:
//!
//! - value geometry ([`Point`], [`Size`], [`Rect`], [`Inset`]) with main/cross
//!   axis accessors,
//! - the [`View`] boundary to the host and the [`LayoutItem`] wrapping it,
//! - the stateful [`Layout`] contract and its [`LayoutDelegate`].
//!
//! # Logical Pixels (Points)
//!
//! All values are logical points. Nothing in the workspace rounds or snaps
//! to physical pixels; that is the host's job.

extern crate alloc;

pub mod geometry;
pub mod item;
pub mod layout;

pub use geometry::{Anchor, Axes, Axis, Inset, Point, Rect, Size};
pub use item::{ItemId, LayoutItem, View};
pub use layout::{Layout, LayoutDelegate};
