//! Geometry primitives shared by the division engine and the skin
//!
//! Everything here works in already-resolved logical pixels. Rectangles are
//! half-open: a point on the right or bottom edge is outside.

use serde::{Deserialize, Serialize};

// ============================================================================
// Sides and Axes
// ============================================================================

/// One edge of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// All sides, in ordinal order
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Stable index of this side, usable as an array index
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Left and right edges run vertically
    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }

    /// Whether two sides meet at a corner (one horizontal, one vertical)
    #[inline]
    pub const fn is_orthogonal_to(self, other: Side) -> bool {
        self.is_vertical() != other.is_vertical()
    }

    /// Axis along which a strip docked on this side is sized.
    ///
    /// Left/right strips have a width, top/bottom strips have a height.
    #[inline]
    pub const fn sizing_axis(self) -> Axis {
        if self.is_vertical() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Top and left come first in reading order
    #[inline]
    pub const fn is_leading(self) -> bool {
        matches!(self, Side::Top | Side::Left)
    }

    /// Lowercase name, also used as a style state name by renderers
    pub const fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Axis of measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along x (widths)
    Horizontal,
    /// Along y (heights)
    Vertical,
}

impl Axis {
    /// Pick the coordinate of a point that lies on this axis
    #[inline]
    pub fn coord(self, x: f32, y: f32) -> f32 {
        match self {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }
}

// ============================================================================
// Rect / Size / Insets
// ============================================================================

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Zero-sized rectangle at the origin
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from its four edge coordinates.
    ///
    /// Inverted edges collapse to a zero extent instead of going negative.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: (right - left).max(0.0),
            height: (bottom - top).max(0.0),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Whether `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether the two rectangles share a region of positive area.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Clip this rectangle to `bounds`
    pub fn clip_to(&self, bounds: &Rect) -> Rect {
        Rect::from_edges(
            self.x.max(bounds.x),
            self.y.max(bounds.y),
            self.right().min(bounds.right()),
            self.bottom().min(bounds.bottom()),
        )
    }

    /// Shrink by the given insets
    pub fn inset(&self, insets: &Insets) -> Rect {
        Rect::from_edges(
            self.x + insets.left,
            self.y + insets.top,
            self.right() - insets.right,
            self.bottom() - insets.bottom,
        )
    }

    /// Extent along an axis
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Width/height pair, used for preferred sizes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Insets (padding) on each side of a region
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    /// No insets
    pub const NONE: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Create uniform insets
    pub const fn all(size: f32) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }

    /// Create horizontal/vertical insets
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Left + right
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Top + bottom
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Insets with every side rounded to whole pixels
    pub fn snapped(&self, snap_to_pixel: bool) -> Insets {
        Insets {
            top: snap(self.top, snap_to_pixel),
            right: snap(self.right, snap_to_pixel),
            bottom: snap(self.bottom, snap_to_pixel),
            left: snap(self.left, snap_to_pixel),
        }
    }
}

// ============================================================================
// Pixel Snapping
// ============================================================================

/// Round a coordinate to the nearest whole pixel when snapping is enabled.
///
/// Snap edge coordinates, never sizes: a size is always the difference of
/// two snapped edges so neighbours never gain a gap or an overlap.
#[inline]
pub fn snap(value: f32, snap_to_pixel: bool) -> f32 {
    if snap_to_pixel {
        value.round()
    } else {
        value
    }
}

/// Snap a size, rounding up so content is never clipped
#[inline]
pub fn snap_size(value: f32, snap_to_pixel: bool) -> f32 {
    if snap_to_pixel {
        value.ceil()
    } else {
        value
    }
}
