//! The list solver: measurement, elastic redistribution and placement.
//!
//! A list lays its items out one after another along `direction`. Solving
//! always runs in the same order:
//!
//! 1. **Measure.** Every item is measured against an unbounded main axis and
//!    the available cross extent minus the inset. Raw measurements are cached;
//!    the main-axis extent is then scaled by every [`Operation`] touching the
//!    item.
//! 2. **Redistribute.** Only when the available main extent is finite. A
//!    configured `min_size`/`max_size` gives every item the same clamped share
//!    of the available space. Afterwards `max_spacing` lets spacing grow while
//!    content underfills and `min_spacing` lets it shrink while content
//!    overflows, never crossing the available extent.
//! 3. **Place.** Items are placed from the inset start; the cross position
//!    follows [`ListAlignment`]. Items with an empty main extent are collapsed.
//!
//! No rounding happens here.

use qlayout_core::{Axis, Inset, LayoutItem, Rect, Size};

use crate::operation::Operation;

/// Cross-axis placement of list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListAlignment {
    /// Leading cross edge (left or top).
    #[default]
    Leading,
    /// Centered on the cross axis.
    Center,
    /// Trailing cross edge (right or bottom).
    Trailing,
    /// Stretched to the available cross extent.
    Fill,
}

/// Parameters of a list solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListConfig {
    /// Axis along which items follow each other.
    pub direction: Axis,
    /// Cross-axis placement.
    pub alignment: ListAlignment,
    /// Space around the content.
    pub inset: Inset,
    /// Base gap between visible items.
    pub spacing: f32,
    /// Lower bound spacing may shrink to when content overflows.
    pub min_spacing: Option<f32>,
    /// Upper bound spacing may grow to when content underfills.
    pub max_spacing: Option<f32>,
    /// Lower bound of the uniform item extent.
    pub min_size: Option<f32>,
    /// Upper bound of the uniform item extent.
    pub max_size: Option<f32>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            direction: Axis::Vertical,
            alignment: ListAlignment::Leading,
            inset: Inset::ZERO,
            spacing: 0.0,
            min_spacing: None,
            max_spacing: None,
            min_size: None,
            max_size: None,
        }
    }
}

impl ListConfig {
    const fn has_size_constraint(&self) -> bool {
        self.min_size.is_some() || self.max_size.is_some()
    }

    fn clamp_size(&self, extent: f32) -> f32 {
        let extent = self.min_size.map_or(extent, |min| extent.max(min));
        self.max_size.map_or(extent, |max| extent.min(max))
    }
}

/// Result of the measure phase.
#[derive(Debug, Clone, PartialEq)]
pub struct SizePass {
    /// Component-wise sum of all scaled sizes.
    pub full: Size,
    /// Component-wise maximum of all scaled sizes.
    pub max: Size,
    /// Scaled size of every item.
    pub sizes: Vec<Size>,
    factors: Vec<f32>,
}

/// Result of the redistribution phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Pass {
    /// Extent of the whole list including inset and spacing.
    pub full: Size,
    /// Gap between consecutive visible items.
    pub spacing: f32,
    /// Final size of every item.
    pub sizes: Vec<Size>,
}

#[allow(clippy::cast_precision_loss)]
fn gaps(visible: usize, spacing: f32) -> f32 {
    visible.saturating_sub(1) as f32 * spacing
}

/// Stateless list solver over a [`ListConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Helper {
    config: ListConfig,
}

impl Helper {
    /// Creates a solver for `config`.
    #[must_use]
    pub const fn new(config: ListConfig) -> Self {
        Self { config }
    }

    /// The solver's parameters.
    #[must_use]
    pub const fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Measures `items`, reusing and filling `cache`, and applies the
    /// progress of `operations`.
    ///
    /// # Panics
    ///
    /// Panics if `cache` is shorter than `items`.
    pub fn pass_size(
        &self,
        available: Size,
        items: &[LayoutItem],
        cache: &mut [Option<Size>],
        operations: &[Operation],
    ) -> SizePass {
        let axis = self.config.direction;
        let cross = available.cross(axis) - self.config.inset.cross(axis);
        let proposal = Size::from_axes(axis, f32::INFINITY, cross.max(0.0));

        let mut full = Size::zero();
        let mut max = Size::zero();
        let mut sizes = Vec::with_capacity(items.len());
        let mut factors = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let measured = match cache[index] {
                Some(size) if !item.is_need_force_update() => size,
                _ => {
                    let size = item.size(proposal);
                    cache[index] = Some(size);
                    size
                }
            };

            let factor: f32 = operations
                .iter()
                .filter(|operation| operation.contains(index))
                .map(Operation::factor)
                .product();
            let size = measured.with_main(axis, measured.main(axis) * factor);

            full = Size::new(full.width + size.width, full.height + size.height);
            max = max.max(size);
            sizes.push(size);
            factors.push(factor);
        }

        SizePass {
            full,
            max,
            sizes,
            factors,
        }
    }

    /// Redistributes sizes and spacing inside `available`.
    #[allow(clippy::cast_precision_loss)]
    pub fn pass(&self, available: Size, size_pass: SizePass) -> Pass {
        let config = &self.config;
        let axis = config.direction;
        let inset_main = config.inset.main(axis);
        let SizePass {
            mut sizes, factors, ..
        } = size_pass;

        let visible = sizes.iter().filter(|size| size.main(axis) > 0.0).count();
        let content = |sizes: &[Size]| sizes.iter().map(|size| size.main(axis)).sum::<f32>();
        let mut spacing = config.spacing;
        let extent = available.main(axis);

        if extent.is_finite() && visible > 0 {
            if config.has_size_constraint() {
                let share = (extent - inset_main - gaps(visible, spacing)) / visible as f32;
                let share = config.clamp_size(share);
                for (size, factor) in sizes.iter_mut().zip(&factors) {
                    if size.main(axis) > 0.0 {
                        *size = size.with_main(axis, share * factor);
                    }
                }
            }

            if visible > 1 {
                let full = content(&sizes) + gaps(visible, spacing) + inset_main;
                let slots = (visible - 1) as f32;
                match (config.max_spacing, config.min_spacing) {
                    (Some(max_spacing), _) if full < extent => {
                        let grown = spacing + (extent - full) / slots;
                        spacing = grown.min(max_spacing).max(spacing);
                    }
                    (_, Some(min_spacing)) if full > extent => {
                        let shrunk = spacing - (full - extent) / slots;
                        spacing = shrunk.max(min_spacing).min(spacing);
                    }
                    _ => {}
                }
            }
        }

        let cross = sizes
            .iter()
            .filter(|size| size.main(axis) > 0.0)
            .map(|size| size.cross(axis))
            .fold(0.0, f32::max);

        Pass {
            full: Size::from_axes(
                axis,
                content(&sizes) + gaps(visible, spacing) + inset_main,
                cross + config.inset.cross(axis),
            ),
            spacing,
            sizes,
        }
    }

    /// Size the list wants for `available`.
    pub fn size(
        &self,
        available: Size,
        items: &[LayoutItem],
        cache: &mut [Option<Size>],
        operations: &[Operation],
    ) -> Size {
        let pass = self.pass(available, self.pass_size(available, items, cache, operations));
        self.reported(available, &pass)
    }

    /// Places `items` inside `bounds` and returns the used size.
    pub fn layout(
        &self,
        bounds: Rect,
        items: &mut [LayoutItem],
        cache: &mut [Option<Size>],
        operations: &[Operation],
    ) -> Size {
        let config = &self.config;
        let axis = config.direction;
        let available = bounds.size();
        let pass = self.pass(available, self.pass_size(available, items, cache, operations));

        let cross_start = bounds.cross_min(axis) + config.inset.cross_start(axis);
        let container = {
            let cross = available.cross(axis) - config.inset.cross(axis);
            if cross.is_finite() {
                cross.max(0.0)
            } else {
                pass.full.cross(axis) - config.inset.cross(axis)
            }
        };

        let mut cursor = bounds.main_min(axis) + config.inset.main_start(axis);
        let mut placed = false;
        for (item, size) in items.iter_mut().zip(&pass.sizes) {
            let main = size.main(axis);
            if main <= 0.0 {
                item.set_frame(Rect::from_axes(axis, cursor, cross_start, 0.0, 0.0));
                item.reset_need_force_update();
                continue;
            }
            if placed {
                cursor += pass.spacing;
            }

            let cross = match config.alignment {
                ListAlignment::Fill => container,
                _ => size.cross(axis),
            };
            let offset = match config.alignment {
                ListAlignment::Leading | ListAlignment::Fill => 0.0,
                ListAlignment::Center => (container - cross) / 2.0,
                ListAlignment::Trailing => container - cross,
            };
            item.set_frame(Rect::from_axes(axis, cursor, cross_start + offset, main, cross));
            item.reset_need_force_update();

            cursor += main;
            placed = true;
        }

        self.reported(available, &pass)
    }

    fn reported(&self, available: Size, pass: &Pass) -> Size {
        let axis = self.config.direction;
        let cross = available.cross(axis);
        if self.config.alignment == ListAlignment::Fill && cross.is_finite() {
            pass.full.with_cross(axis, cross)
        } else {
            pass.full
        }
    }
}
