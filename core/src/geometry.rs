//! Geometry primitives shared by every layout in the workspace.
//!
//! All values are logical points expressed as `f32`. A [`Size`] component may
//! be [`f32::INFINITY`] to signal "unbounded available space"; the helpers in
//! this module let such values flow through arithmetic unchanged instead of
//! rejecting them. No rounding or pixel snapping is ever performed here.

use alloc::vec::Vec;

// ============================================================================
// Axis
// ============================================================================

/// One of the two layout axes.
///
/// Stacks and lists are written once in terms of a *main* axis (the one they
/// arrange children along) and a *cross* axis; `Axis` selects which concrete
/// component of a [`Size`], [`Point`] or [`Rect`] plays which role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    #[default]
    Vertical,
}

impl Axis {
    /// Returns the perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

bitflags::bitflags! {
    /// A set of axes, used to opt individual axes into a behaviour
    /// (for example pinning a `ZStack` to the available extent).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Axes: u8 {
        /// The horizontal axis.
        const HORIZONTAL = 0b01;
        /// The vertical axis.
        const VERTICAL = 0b10;
        /// Both axes.
        const ALL = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl Axes {
    /// Returns true if the set contains `axis`.
    #[must_use]
    pub const fn has(self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.contains(Self::HORIZONTAL),
            Axis::Vertical => self.contains(Self::VERTICAL),
        }
    }
}

impl From<Axis> for Axes {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::HORIZONTAL,
            Axis::Vertical => Self::VERTICAL,
        }
    }
}

/// One of the nine anchor points of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Anchor {
    TopLeading,
    Top,
    TopTrailing,
    Leading,
    #[default]
    Center,
    Trailing,
    BottomLeading,
    Bottom,
    BottomTrailing,
}

impl Anchor {
    /// Fractional position of the anchor along x and y (`0`, `0.5` or `1`).
    #[must_use]
    pub const fn factors(self) -> (f32, f32) {
        match self {
            Self::TopLeading => (0.0, 0.0),
            Self::Top => (0.5, 0.0),
            Self::TopTrailing => (1.0, 0.0),
            Self::Leading => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::Trailing => (1.0, 0.5),
            Self::BottomLeading => (0.0, 1.0),
            Self::Bottom => (0.5, 1.0),
            Self::BottomTrailing => (1.0, 1.0),
        }
    }
}

#[inline]
fn lerp(from: f32, to: f32, progress: f32) -> f32 {
    from + (to - from) * progress
}

// ============================================================================
// Point
// ============================================================================

/// Absolute coordinate relative to a parent layout's origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate in points.
    pub x: f32,
    /// The y-coordinate in points.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Builds a point from its main-axis and cross-axis components.
    #[must_use]
    pub const fn from_axes(axis: Axis, main: f32, cross: f32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    /// Component along `axis`.
    #[must_use]
    pub const fn main(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Component perpendicular to `axis`.
    #[must_use]
    pub const fn cross(&self, axis: Axis) -> f32 {
        self.main(axis.cross())
    }

    /// Returns the point moved by `dx`, `dy`.
    #[must_use]
    pub const fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Linear interpolation towards `to`.
    #[must_use]
    pub fn lerp(self, to: Self, progress: f32) -> Self {
        Self::new(lerp(self.x, to.x, progress), lerp(self.y, to.y, progress))
    }
}

// ============================================================================
// Size
// ============================================================================

/// Two-dimensional size expressed in points.
///
/// Either component may be infinite to describe unbounded available space.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width in points.
    pub width: f32,
    /// The height in points.
    pub height: f32,
}

impl Size {
    /// Unbounded in both directions.
    pub const INFINITY: Self = Self::new(f32::INFINITY, f32::INFINITY);

    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Builds a size from its main-axis and cross-axis extents.
    #[must_use]
    pub const fn from_axes(axis: Axis, main: f32, cross: f32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    /// Extent along `axis`.
    #[must_use]
    pub const fn main(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Extent perpendicular to `axis`.
    #[must_use]
    pub const fn cross(&self, axis: Axis) -> f32 {
        self.main(axis.cross())
    }

    /// Returns a copy with the extent along `axis` replaced.
    #[must_use]
    pub const fn with_main(self, axis: Axis, main: f32) -> Self {
        Self::from_axes(axis, main, self.cross(axis))
    }

    /// Returns a copy with the extent perpendicular to `axis` replaced.
    #[must_use]
    pub const fn with_cross(self, axis: Axis, cross: f32) -> Self {
        Self::from_axes(axis, self.main(axis), cross)
    }

    /// Returns true if both dimensions are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns true if either dimension is infinite.
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        self.width.is_infinite() || self.height.is_infinite()
    }

    /// Shrinks the size by `inset`. Infinite dimensions stay infinite.
    #[must_use]
    pub fn apply(self, inset: Inset) -> Self {
        let width = if self.width.is_infinite() {
            self.width
        } else {
            self.width - inset.horizontal()
        };
        let height = if self.height.is_infinite() {
            self.height
        } else {
            self.height - inset.vertical()
        };
        Self::new(width, height)
    }

    /// Grows the size by `inset`, the inverse of [`apply`](Self::apply).
    #[must_use]
    pub fn inset(self, inset: Inset) -> Self {
        Self::new(
            self.width + inset.horizontal(),
            self.height + inset.vertical(),
        )
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Component-wise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Linear interpolation towards `to`.
    #[must_use]
    pub fn lerp(self, to: Self, progress: f32) -> Self {
        Self::new(
            lerp(self.width, to.width, progress),
            lerp(self.height, to.height, progress),
        )
    }

    /// Scales this size to fit inside `bounds`, preserving the aspect ratio.
    ///
    /// A zero component produces `NaN` or an infinite result, following plain
    /// IEEE-754 division.
    #[must_use]
    pub fn aspect_fit(self, bounds: Self) -> Self {
        let scale = (bounds.width / self.width).min(bounds.height / self.height);
        Self::new(self.width * scale, self.height * scale)
    }

    /// Scales this size to cover `bounds`, preserving the aspect ratio.
    ///
    /// A zero component produces `NaN` or an infinite result, following plain
    /// IEEE-754 division.
    #[must_use]
    pub fn aspect_fill(self, bounds: Self) -> Self {
        let scale = (bounds.width / self.width).max(bounds.height / self.height);
        Self::new(self.width * scale, self.height * scale)
    }
}

// ============================================================================
// Inset
// ============================================================================

/// Distances applied to the four edges of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inset {
    /// Top edge.
    pub top: f32,
    /// Left edge.
    pub left: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Inset {
    /// No inset on any edge.
    pub const ZERO: Self = Self::all(0.0);

    /// Creates an [`Inset`] value with explicit edges.
    #[must_use]
    pub const fn new(top: f32, left: f32, right: f32, bottom: f32) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Returns equal insets on every edge.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns symmetric vertical and horizontal insets.
    #[must_use]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, horizontal, vertical)
    }

    /// Sum of the left and right edges.
    #[must_use]
    pub const fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom edges.
    #[must_use]
    pub const fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Total inset along `axis`.
    #[must_use]
    pub const fn main(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal(),
            Axis::Vertical => self.vertical(),
        }
    }

    /// Total inset perpendicular to `axis`.
    #[must_use]
    pub const fn cross(&self, axis: Axis) -> f32 {
        self.main(axis.cross())
    }

    /// The leading edge along `axis` (left or top).
    #[must_use]
    pub const fn main_start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// The trailing edge along `axis` (right or bottom).
    #[must_use]
    pub const fn main_end(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// The leading edge perpendicular to `axis`.
    #[must_use]
    pub const fn cross_start(&self, axis: Axis) -> f32 {
        self.main_start(axis.cross())
    }

    /// The trailing edge perpendicular to `axis`.
    #[must_use]
    pub const fn cross_end(&self, axis: Axis) -> f32 {
        self.main_end(axis.cross())
    }
}

impl From<f32> for Inset {
    fn from(value: f32) -> Self {
        Self::all(value)
    }
}

// ============================================================================
// Rect
// ============================================================================

/// Axis-aligned rectangle relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent from the origin.
    pub size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from raw components.
    #[must_use]
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// Creates a rectangle from origin (0, 0) with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Builds a rectangle from main-axis and cross-axis components.
    #[must_use]
    pub const fn from_axes(
        axis: Axis,
        main: f32,
        cross: f32,
        main_extent: f32,
        cross_extent: f32,
    ) -> Self {
        Self::new(
            Point::from_axes(axis, main, cross),
            Size::from_axes(axis, main_extent, cross_extent),
        )
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the rectangle's x-coordinate (left edge).
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the rectangle's y-coordinate (top edge).
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Returns the minimum x-coordinate (left edge).
    #[must_use]
    pub const fn min_x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the minimum y-coordinate (top edge).
    #[must_use]
    pub const fn min_y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the maximum x-coordinate (right edge).
    #[must_use]
    pub const fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the maximum y-coordinate (bottom edge).
    #[must_use]
    pub const fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns the midpoint x-coordinate.
    #[must_use]
    pub const fn mid_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    /// Returns the midpoint y-coordinate.
    #[must_use]
    pub const fn mid_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }

    /// Returns the center point of the rectangle.
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Leading edge along `axis`.
    #[must_use]
    pub const fn main_min(&self, axis: Axis) -> f32 {
        self.origin.main(axis)
    }

    /// Trailing edge along `axis`.
    #[must_use]
    pub const fn main_max(&self, axis: Axis) -> f32 {
        self.origin.main(axis) + self.size.main(axis)
    }

    /// Leading edge perpendicular to `axis`.
    #[must_use]
    pub const fn cross_min(&self, axis: Axis) -> f32 {
        self.origin.cross(axis)
    }

    /// Trailing edge perpendicular to `axis`.
    #[must_use]
    pub const fn cross_max(&self, axis: Axis) -> f32 {
        self.origin.cross(axis) + self.size.cross(axis)
    }

    /// Returns true if the rectangle has no area.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Shrinks the rectangle by `inset`.
    #[must_use]
    pub fn apply(&self, inset: Inset) -> Self {
        Self::new(
            self.origin.offset(inset.left, inset.top),
            self.size.apply(inset),
        )
    }

    /// Places a rectangle of `size` at `anchor` inside this one.
    #[must_use]
    pub fn anchored(&self, anchor: Anchor, size: Size) -> Self {
        let (fx, fy) = anchor.factors();
        Self::new(
            Point::new(
                self.x() + (self.width() - size.width) * fx,
                self.y() + (self.height() - size.height) * fy,
            ),
            size,
        )
    }

    /// Cuts `amount` off the left edge: `(left, rest)`.
    #[must_use]
    pub const fn split_left(&self, amount: f32) -> (Self, Self) {
        (
            Self::from_xywh(self.x(), self.y(), amount, self.height()),
            Self::from_xywh(
                self.x() + amount,
                self.y(),
                self.width() - amount,
                self.height(),
            ),
        )
    }

    /// Cuts `amount` off the right edge: `(rest, right)`.
    #[must_use]
    pub const fn split_right(&self, amount: f32) -> (Self, Self) {
        (
            Self::from_xywh(self.x(), self.y(), self.width() - amount, self.height()),
            Self::from_xywh(self.max_x() - amount, self.y(), amount, self.height()),
        )
    }

    /// Cuts `amount` off the top edge: `(top, rest)`.
    #[must_use]
    pub const fn split_top(&self, amount: f32) -> (Self, Self) {
        (
            Self::from_xywh(self.x(), self.y(), self.width(), amount),
            Self::from_xywh(
                self.x(),
                self.y() + amount,
                self.width(),
                self.height() - amount,
            ),
        )
    }

    /// Cuts `amount` off the bottom edge: `(rest, bottom)`.
    #[must_use]
    pub const fn split_bottom(&self, amount: f32) -> (Self, Self) {
        (
            Self::from_xywh(self.x(), self.y(), self.width(), self.height() - amount),
            Self::from_xywh(self.x(), self.max_y() - amount, self.width(), amount),
        )
    }

    /// Cuts both horizontal edges: `(left, middle, right)`.
    #[must_use]
    pub const fn split_horizontal(&self, left: f32, right: f32) -> (Self, Self, Self) {
        let (head, rest) = self.split_left(left);
        let (middle, tail) = rest.split_right(right);
        (head, middle, tail)
    }

    /// Cuts both vertical edges: `(top, middle, bottom)`.
    #[must_use]
    pub const fn split_vertical(&self, top: f32, bottom: f32) -> (Self, Self, Self) {
        let (head, rest) = self.split_top(top);
        let (middle, tail) = rest.split_bottom(bottom);
        (head, middle, tail)
    }

    /// Smallest rectangle containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Self::from_xywh(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Overlapping area of both rectangles, if any.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.is_intersecting(other) {
            return None;
        }
        let min_x = self.min_x().max(other.min_x());
        let min_y = self.min_y().max(other.min_y());
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());
        Some(Self::from_xywh(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Returns true if both rectangles share a region of non-zero area.
    #[must_use]
    pub fn is_intersecting(&self, other: &Self) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }

    /// Returns true if `point` lies inside or on the edge of the rectangle.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// Returns true if `other` lies entirely inside the rectangle.
    #[must_use]
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Linear interpolation of origin and size towards `to`.
    #[must_use]
    pub fn lerp(&self, to: &Self, progress: f32) -> Self {
        Self::new(
            self.origin.lerp(to.origin, progress),
            self.size.lerp(to.size, progress),
        )
    }

    /// Splits the rectangle into a `rows` x `columns` grid, row-major.
    ///
    /// The cell extent along an axis is
    /// `(extent - spacing * (count - 1)) / (count - 1)` whenever `count > 1`,
    /// which spaces cell *anchors* rather than producing `count` equal cells.
    /// A single row or column spans the whole extent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn grid(&self, rows: usize, columns: usize, spacing: Point) -> Vec<Self> {
        if rows == 0 || columns == 0 {
            return Vec::new();
        }
        let width = if columns > 1 {
            (self.width() - spacing.x * (columns - 1) as f32) / (columns - 1) as f32
        } else {
            self.width()
        };
        let height = if rows > 1 {
            (self.height() - spacing.y * (rows - 1) as f32) / (rows - 1) as f32
        } else {
            self.height()
        };
        let mut result = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                result.push(Self::from_xywh(
                    self.x() + (width + spacing.x) * column as f32,
                    self.y() + (height + spacing.y) * row as f32,
                    width,
                    height,
                ));
            }
        }
        result
    }
}

// ============================================================================
// Tests
// ============================================================================
