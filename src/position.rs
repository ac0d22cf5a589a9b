//! Slot and divider positions around the center region
//!
//! An [`EightPos`] names one of the eight peripheral slots as a pair of a
//! primary edge (the side the slot docks to) and an orthogonal secondary edge
//! (which end of that side it occupies). A [`DividerPos`] names one of the
//! draggable boundaries between those slots and the center.

use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, Side};

/// One of the eight peripheral slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EightPos {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
}

impl EightPos {
    /// Number of slots
    pub const COUNT: usize = 8;

    /// All slots, in ordinal order
    pub const ALL: [EightPos; 8] = [
        EightPos::TopLeft,
        EightPos::TopRight,
        EightPos::BottomLeft,
        EightPos::BottomRight,
        EightPos::LeftTop,
        EightPos::LeftBottom,
        EightPos::RightTop,
        EightPos::RightBottom,
    ];

    /// Side this slot docks to
    pub const fn primary(self) -> Side {
        match self {
            EightPos::TopLeft | EightPos::TopRight => Side::Top,
            EightPos::BottomLeft | EightPos::BottomRight => Side::Bottom,
            EightPos::LeftTop | EightPos::LeftBottom => Side::Left,
            EightPos::RightTop | EightPos::RightBottom => Side::Right,
        }
    }

    /// End of the primary side this slot occupies
    pub const fn secondary(self) -> Side {
        match self {
            EightPos::LeftTop | EightPos::RightTop => Side::Top,
            EightPos::LeftBottom | EightPos::RightBottom => Side::Bottom,
            EightPos::TopLeft | EightPos::BottomLeft => Side::Left,
            EightPos::TopRight | EightPos::BottomRight => Side::Right,
        }
    }

    /// Stable index of this slot, usable as an array index
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Slot for an ordinal.
    ///
    /// # Panics
    ///
    /// Panics if `ordinal >= 8`.
    pub fn from_ordinal(ordinal: usize) -> Self {
        match Self::ALL.get(ordinal) {
            Some(pos) => *pos,
            None => panic!("slot ordinal {} out of range 0..{}", ordinal, Self::COUNT),
        }
    }

    /// Slot for a (primary, secondary) pair.
    ///
    /// # Panics
    ///
    /// Panics if `secondary` is not orthogonal to `primary`.
    pub fn from_sides(primary: Side, secondary: Side) -> Self {
        match (primary, secondary) {
            (Side::Top, Side::Left) => EightPos::TopLeft,
            (Side::Top, Side::Right) => EightPos::TopRight,
            (Side::Bottom, Side::Left) => EightPos::BottomLeft,
            (Side::Bottom, Side::Right) => EightPos::BottomRight,
            (Side::Left, Side::Top) => EightPos::LeftTop,
            (Side::Left, Side::Bottom) => EightPos::LeftBottom,
            (Side::Right, Side::Top) => EightPos::RightTop,
            (Side::Right, Side::Bottom) => EightPos::RightBottom,
            _ => panic!(
                "secondary side {:?} is not orthogonal to primary side {:?}",
                secondary, primary
            ),
        }
    }

    /// Whether this slot sits at the top/left end of its side
    #[inline]
    pub const fn is_leading(self) -> bool {
        self.secondary().is_leading()
    }

    /// The other slot docked to the same side
    pub const fn sibling(self) -> EightPos {
        match self {
            EightPos::TopLeft => EightPos::TopRight,
            EightPos::TopRight => EightPos::TopLeft,
            EightPos::BottomLeft => EightPos::BottomRight,
            EightPos::BottomRight => EightPos::BottomLeft,
            EightPos::LeftTop => EightPos::LeftBottom,
            EightPos::LeftBottom => EightPos::LeftTop,
            EightPos::RightTop => EightPos::RightBottom,
            EightPos::RightBottom => EightPos::RightTop,
        }
    }

    /// The (leading, trailing) slots docked to `side`
    pub const fn on_side(side: Side) -> [EightPos; 2] {
        match side {
            Side::Top => [EightPos::TopLeft, EightPos::TopRight],
            Side::Bottom => [EightPos::BottomLeft, EightPos::BottomRight],
            Side::Left => [EightPos::LeftTop, EightPos::LeftBottom],
            Side::Right => [EightPos::RightTop, EightPos::RightBottom],
        }
    }
}

/// A region the division area lays out: a peripheral slot or the center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Position(EightPos),
    Center,
}

/// One of the draggable boundaries of the division area.
///
/// Each side owns two dividers: one between its strip and the center, and
/// one between the two slots sharing the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DividerPos {
    Top,
    Left,
    Bottom,
    Right,
    TopSplit,
    LeftSplit,
    BottomSplit,
    RightSplit,
}

impl DividerPos {
    /// Number of dividers
    pub const COUNT: usize = 8;

    /// All dividers, in ordinal order
    pub const ALL: [DividerPos; 8] = [
        DividerPos::Top,
        DividerPos::Left,
        DividerPos::Bottom,
        DividerPos::Right,
        DividerPos::TopSplit,
        DividerPos::LeftSplit,
        DividerPos::BottomSplit,
        DividerPos::RightSplit,
    ];

    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// # Panics
    ///
    /// Panics if `ordinal >= 8`.
    pub fn from_ordinal(ordinal: usize) -> Self {
        match Self::ALL.get(ordinal) {
            Some(pos) => *pos,
            None => panic!(
                "divider ordinal {} out of range 0..{}",
                ordinal,
                Self::COUNT
            ),
        }
    }

    /// Divider between the strip on `side` and the center
    pub const fn edge(side: Side) -> Self {
        match side {
            Side::Top => DividerPos::Top,
            Side::Left => DividerPos::Left,
            Side::Bottom => DividerPos::Bottom,
            Side::Right => DividerPos::Right,
        }
    }

    /// Divider between the two slots sharing the strip on `side`
    pub const fn split(side: Side) -> Self {
        match side {
            Side::Top => DividerPos::TopSplit,
            Side::Left => DividerPos::LeftSplit,
            Side::Bottom => DividerPos::BottomSplit,
            Side::Right => DividerPos::RightSplit,
        }
    }

    /// Divider separating `pos` from its neighbour.
    ///
    /// `None` means the center. A peripheral neighbour must be the other slot
    /// docked to the same side.
    ///
    /// # Panics
    ///
    /// Panics if `neighbour` is `pos` itself or docks to a different side.
    pub fn between(pos: EightPos, neighbour: Option<EightPos>) -> Self {
        match neighbour {
            None => Self::edge(pos.primary()),
            Some(other) => {
                assert!(
                    other == pos.sibling(),
                    "{:?} and {:?} are not adjacent slots on one side",
                    pos,
                    other
                );
                Self::split(pos.primary())
            }
        }
    }

    /// Side whose strip this divider belongs to
    pub const fn side(self) -> Side {
        match self {
            DividerPos::Top | DividerPos::TopSplit => Side::Top,
            DividerPos::Left | DividerPos::LeftSplit => Side::Left,
            DividerPos::Bottom | DividerPos::BottomSplit => Side::Bottom,
            DividerPos::Right | DividerPos::RightSplit => Side::Right,
        }
    }

    #[inline]
    pub const fn is_split(self) -> bool {
        matches!(
            self,
            DividerPos::TopSplit
                | DividerPos::LeftSplit
                | DividerPos::BottomSplit
                | DividerPos::RightSplit
        )
    }

    /// Axis the pointer moves along when dragging this divider
    pub const fn drag_axis(self) -> Axis {
        let side_axis = self.side().sizing_axis();
        if self.is_split() {
            match side_axis {
                Axis::Horizontal => Axis::Vertical,
                Axis::Vertical => Axis::Horizontal,
            }
        } else {
            side_axis
        }
    }

    /// +1 when moving the pointer forward along the drag axis grows the
    /// controlled value, -1 when it shrinks it.
    ///
    /// Bottom and right strips grow towards the origin.
    pub const fn growth_sign(self) -> f32 {
        match self {
            DividerPos::Bottom | DividerPos::Right => -1.0,
            _ => 1.0,
        }
    }

    /// Slots on this divider's side, (leading, trailing)
    #[inline]
    pub const fn positions(self) -> [EightPos; 2] {
        EightPos::on_side(self.side())
    }
}
