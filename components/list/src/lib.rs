//! Animated list layout for `qlayout`.
//!
//! [`ListLayout`] arranges [`LayoutItem`](qlayout_core::LayoutItem)s along one
//! axis with optional elastic spacing and uniform item sizing, caches
//! measurements, animates insertions and deletions, and answers which items
//! intersect a viewport without scanning the whole list.
//!
//! The solver itself lives in [`Helper`] so it can be used without the
//! container state.
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use qlayout_list::{Animation, ListLayout};
//!
//! let mut list = ListLayout::new().spacing(8.0).max_spacing(24.0);
//! list.append(rows);
//!
//! list.animate(
//!     Animation::new(Duration::from_millis(250)).preparing(|list| {
//!         list.delete(0..1).ok();
//!     }),
//! );
//! while list.tick(frame_time) {
//!     host.render(&list);
//! }
//! ```

pub mod animation;
pub mod error;
pub mod helper;
pub mod list;
pub mod operation;

pub use animation::{Animation, Ease};
pub use error::ListError;
pub use helper::{Helper, ListAlignment, ListConfig, Pass, SizePass};
pub use list::ListLayout;
pub use operation::{Operation, OperationKind};

#[cfg(test)]
mod tests;
