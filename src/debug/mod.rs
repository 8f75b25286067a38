//! Development helpers.
//!
//! The layout crates emit `tracing` events for list mutations, animation
//! lifecycle and cache invalidation. Nothing is printed until a subscriber is
//! installed; [`logging::init`] installs a console one.

pub mod logging;
