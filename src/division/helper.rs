//! The division-layout engine
//!
//! [`DivisionHelper`] turns a content rectangle, the enabled flags of the
//! eight slots and their stored sizes into one rectangle per slot, one for the
//! center and one per live divider.
//!
//! # Layout
//!
//! Sides are consumed in the order top, left, bottom, right. Each side's strip
//! spans the whole remaining rectangle along that side, so the four strips and
//! the center tile the content rectangle exactly:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ top                                  │
//! ├──────┬────────────────────────┬──────┤
//! │ left │                        │right │
//! │      │         center         │      │
//! │      ├────────────────────────┴──────┤
//! │      │ bottom                        │
//! └──────┴───────────────────────────────┘
//! ```
//!
//! A strip's thickness is the largest stored extent among its enabled slots,
//! cut down so the center keeps `min_center` on that axis. When both slots of
//! a side are enabled the strip's length is split between them by the side's
//! stored split fraction.

use crate::config::LayoutConfig;
use crate::geometry::{snap, Axis, Rect, Side};
use crate::position::{DividerPos, EightPos};

/// Order in which sides consume the content rectangle
pub const EDGE_ORDER: [Side; 4] = [Side::Top, Side::Left, Side::Bottom, Side::Right];

/// Computed rectangle for one slot
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bound {
    pub rect: Rect,
    /// Whether the slot takes part in layout
    pub enabled: bool,
}

/// Proportional size state and computed bounds for one division area
#[derive(Debug, Clone)]
pub struct DivisionHelper {
    /// One bound per slot, indexed by [`EightPos::ordinal`]
    pub bounds: [Bound; 8],
    /// Residual rectangle after all strips are subtracted
    pub center: Rect,
    /// One rectangle per live divider, indexed by [`DividerPos::ordinal`]
    pub dividers: [Option<Rect>; 8],

    /// Stored extent of each slot perpendicular to its side
    extents: [f32; 8],
    /// Share of each side's strip length given to its leading slot,
    /// indexed by [`Side::ordinal`]
    splits: [f32; 4],
    /// Strip rectangle of each side from the last pass
    strips: [Rect; 4],
    /// Content rectangle of the last pass
    content: Rect,

    divider_thickness: f32,
    min_center: f32,
    min_region: f32,
}

impl Default for DivisionHelper {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl DivisionHelper {
    /// Create an engine with every slot disabled and sizes taken from config
    pub fn new(config: &LayoutConfig) -> Self {
        let extents = EightPos::ALL.map(|pos| config.default_extent.get(pos.primary()).max(0.0));
        Self {
            bounds: [Bound::default(); 8],
            center: Rect::ZERO,
            dividers: [None; 8],
            extents,
            splits: [config.default_split; 4],
            strips: [Rect::ZERO; 4],
            content: Rect::ZERO,
            divider_thickness: config.divider_thickness.max(0.0),
            min_center: config.min_center.max(0.0),
            min_region: config.min_region.max(0.0),
        }
    }

    // =========================================================================
    // Slot state
    // =========================================================================

    #[inline]
    pub fn bound(&self, pos: EightPos) -> &Bound {
        &self.bounds[pos.ordinal()]
    }

    #[inline]
    pub fn is_enabled(&self, pos: EightPos) -> bool {
        self.bounds[pos.ordinal()].enabled
    }

    /// Enable or disable a slot. The stored extent is kept either way.
    pub fn set_enabled(&mut self, pos: EightPos, enabled: bool) {
        self.bounds[pos.ordinal()].enabled = enabled;
    }

    /// Stored extent of a slot, whether or not it is enabled
    #[inline]
    pub fn extent(&self, pos: EightPos) -> f32 {
        self.extents[pos.ordinal()]
    }

    pub fn set_extent(&mut self, pos: EightPos, extent: f32) {
        self.extents[pos.ordinal()] = extent.max(0.0);
    }

    /// Stored split fraction of a side
    #[inline]
    pub fn split(&self, side: Side) -> f32 {
        self.splits[side.ordinal()]
    }

    /// Set a side's split fraction. Values are kept strictly inside (0, 1).
    pub fn set_split(&mut self, side: Side, split: f32) {
        if split.is_finite() {
            self.splits[side.ordinal()] = split.clamp(f32::EPSILON, 1.0 - f32::EPSILON);
        }
    }

    #[inline]
    pub fn min_center(&self) -> f32 {
        self.min_center
    }

    #[inline]
    pub fn min_region(&self) -> f32 {
        self.min_region
    }

    #[inline]
    pub fn divider_thickness(&self) -> f32 {
        self.divider_thickness
    }

    /// Content rectangle used by the last pass
    #[inline]
    pub fn content(&self) -> Rect {
        self.content
    }

    /// Strip of a side from the last pass (zero-sized when unoccupied)
    #[inline]
    pub fn strip(&self, side: Side) -> Rect {
        self.strips[side.ordinal()]
    }

    /// Computed rectangle of a divider, if it is live
    #[inline]
    pub fn divider(&self, pos: DividerPos) -> Option<Rect> {
        self.dividers[pos.ordinal()]
    }

    /// Whether a side has at least one enabled slot
    pub fn is_side_occupied(&self, side: Side) -> bool {
        EightPos::on_side(side)
            .iter()
            .any(|pos| self.is_enabled(*pos))
    }

    /// Whether both regions joined by a divider are enabled.
    ///
    /// The center is always enabled, so an edge divider is live while its
    /// side is occupied; a split divider needs both slots of its side.
    pub fn joins_enabled_regions(&self, divider: DividerPos) -> bool {
        let [leading, trailing] = divider.positions();
        if divider.is_split() {
            self.is_enabled(leading) && self.is_enabled(trailing)
        } else {
            self.is_enabled(leading) || self.is_enabled(trailing)
        }
    }

    /// Thickness a side asks for before clamping
    fn requested_thickness(&self, side: Side) -> f32 {
        EightPos::on_side(side)
            .iter()
            .filter(|pos| self.is_enabled(**pos))
            .map(|pos| self.extent(*pos))
            .fold(0.0, f32::max)
    }

    // =========================================================================
    // Layout pass
    // =========================================================================

    /// Recompute every bound for the content rectangle `(x, y, width, height)`.
    ///
    /// Pure function of the arguments and the stored state: calling it twice
    /// with the same input yields identical bounds.
    pub fn update(&mut self, x: f32, y: f32, width: f32, height: f32, snap_to_pixel: bool) {
        let mut left = snap(x, snap_to_pixel);
        let mut top = snap(y, snap_to_pixel);
        let mut right = snap(x + width.max(0.0), snap_to_pixel).max(left);
        let mut bottom = snap(y + height.max(0.0), snap_to_pixel).max(top);
        self.content = Rect::from_edges(left, top, right, bottom);

        for side in EDGE_ORDER {
            let remaining = match side.sizing_axis() {
                Axis::Horizontal => right - left,
                Axis::Vertical => bottom - top,
            };
            let available = (remaining - self.min_center).max(0.0);
            let mut thickness = self.requested_thickness(side).min(available);
            if snap_to_pixel {
                // Edges are whole pixels here, so a whole thickness keeps them whole
                thickness = thickness.round().min(available.floor());
            }

            let strip = match side {
                Side::Top => {
                    let strip = Rect::from_edges(left, top, right, top + thickness);
                    top += thickness;
                    strip
                }
                Side::Left => {
                    let strip = Rect::from_edges(left, top, left + thickness, bottom);
                    left += thickness;
                    strip
                }
                Side::Bottom => {
                    let strip = Rect::from_edges(left, bottom - thickness, right, bottom);
                    bottom -= thickness;
                    strip
                }
                Side::Right => {
                    let strip = Rect::from_edges(right - thickness, top, right, bottom);
                    right -= thickness;
                    strip
                }
            };

            self.strips[side.ordinal()] = if self.is_side_occupied(side) {
                strip
            } else {
                Rect::ZERO
            };
            self.split_strip(side, strip, snap_to_pixel);
        }

        self.center = Rect::from_edges(left, top, right, bottom);
        self.place_dividers(snap_to_pixel);

        tracing::trace!(
            content = ?self.content,
            center = ?self.center,
            "division layout pass"
        );
    }

    /// Assign a side's strip to its enabled slots
    fn split_strip(&mut self, side: Side, strip: Rect, snap_to_pixel: bool) {
        let [leading, trailing] = EightPos::on_side(side);
        let leading_on = self.is_enabled(leading);
        let trailing_on = self.is_enabled(trailing);

        let (leading_rect, trailing_rect) = match (leading_on, trailing_on) {
            (true, true) => {
                let boundary = snap(
                    self.split_boundary(side, strip),
                    snap_to_pixel,
                );
                if side.is_vertical() {
                    (
                        Rect::from_edges(strip.x, strip.y, strip.right(), boundary),
                        Rect::from_edges(strip.x, boundary, strip.right(), strip.bottom()),
                    )
                } else {
                    (
                        Rect::from_edges(strip.x, strip.y, boundary, strip.bottom()),
                        Rect::from_edges(boundary, strip.y, strip.right(), strip.bottom()),
                    )
                }
            }
            (true, false) => (strip, Rect::ZERO),
            (false, true) => (Rect::ZERO, strip),
            (false, false) => (Rect::ZERO, Rect::ZERO),
        };

        self.bounds[leading.ordinal()].rect = leading_rect;
        self.bounds[trailing.ordinal()].rect = trailing_rect;
    }

    /// Coordinate where the leading slot of a split strip ends
    fn split_boundary(&self, side: Side, strip: Rect) -> f32 {
        // Left/right strips are split top to bottom, top/bottom strips left to right
        let (start, length) = if side.is_vertical() {
            (strip.y, strip.height)
        } else {
            (strip.x, strip.width)
        };
        start + self.clamp_leading(length * self.split(side), length)
    }

    /// Clamp a leading length so both slots keep `min_region` when possible
    fn clamp_leading(&self, leading: f32, length: f32) -> f32 {
        if length >= 2.0 * self.min_region {
            leading.clamp(self.min_region, length - self.min_region)
        } else {
            leading.clamp(0.0, length)
        }
    }

    /// Place every live divider on the boundary it controls
    fn place_dividers(&mut self, snap_to_pixel: bool) {
        let half = self.divider_thickness / 2.0;

        for divider in DividerPos::ALL {
            if !self.joins_enabled_regions(divider) {
                self.dividers[divider.ordinal()] = None;
                continue;
            }

            let side = divider.side();
            let strip = self.strips[side.ordinal()];
            let [leading, _] = divider.positions();

            let rect = if divider.is_split() {
                let leading_rect = self.bounds[leading.ordinal()].rect;
                if side.is_vertical() {
                    let y = leading_rect.bottom();
                    Rect::from_edges(
                        strip.x,
                        snap(y - half, snap_to_pixel),
                        strip.right(),
                        snap(y + half, snap_to_pixel),
                    )
                } else {
                    let x = leading_rect.right();
                    Rect::from_edges(
                        snap(x - half, snap_to_pixel),
                        strip.y,
                        snap(x + half, snap_to_pixel),
                        strip.bottom(),
                    )
                }
            } else {
                match side {
                    Side::Top => {
                        let y = strip.bottom();
                        Rect::from_edges(
                            strip.x,
                            snap(y - half, snap_to_pixel),
                            strip.right(),
                            snap(y + half, snap_to_pixel),
                        )
                    }
                    Side::Bottom => {
                        let y = strip.y;
                        Rect::from_edges(
                            strip.x,
                            snap(y - half, snap_to_pixel),
                            strip.right(),
                            snap(y + half, snap_to_pixel),
                        )
                    }
                    Side::Left => {
                        let x = strip.right();
                        Rect::from_edges(
                            snap(x - half, snap_to_pixel),
                            strip.y,
                            snap(x + half, snap_to_pixel),
                            strip.bottom(),
                        )
                    }
                    Side::Right => {
                        let x = strip.x;
                        Rect::from_edges(
                            snap(x - half, snap_to_pixel),
                            strip.y,
                            snap(x + half, snap_to_pixel),
                            strip.bottom(),
                        )
                    }
                }
            };

            self.dividers[divider.ordinal()] = Some(rect.clip_to(&self.content));
        }
    }

    // =========================================================================
    // Divider values
    // =========================================================================

    /// Current value a divider controls: the strip thickness for an edge
    /// divider, the leading slot's length for a split divider.
    ///
    /// # Panics
    ///
    /// Panics if the divider does not join two enabled regions.
    pub fn divider_value(&self, divider: DividerPos) -> f32 {
        self.assert_live(divider);
        let side = divider.side();
        let strip = self.strips[side.ordinal()];
        if divider.is_split() {
            let [leading, _] = divider.positions();
            self.bounds[leading.ordinal()].rect.extent(split_axis(side))
        } else {
            strip.extent(side.sizing_axis())
        }
    }

    /// Store a new value for a divider, clamped so no region inverts.
    ///
    /// Edge dividers move the strip to `value`, bounded below by
    /// `min_region` and above by what the center can give up without
    /// dropping under `min_center`. Every enabled slot on the side shifts
    /// by the same amount, so slots thinner than the strip keep their
    /// difference. When the bounds leave no room for `min_region` the
    /// stored extents are left alone. Split dividers set the side's split
    /// fraction. Returns the resulting value.
    ///
    /// # Panics
    ///
    /// Panics if the divider does not join two enabled regions.
    pub fn apply_divider_value(&mut self, divider: DividerPos, value: f32) -> f32 {
        self.assert_live(divider);
        let side = divider.side();
        let strip = self.strips[side.ordinal()];

        if divider.is_split() {
            let length = strip.extent(split_axis(side));
            if length <= 0.0 {
                return 0.0;
            }
            let leading = self.clamp_leading(value, length);
            self.set_split(side, leading / length);
            leading
        } else {
            let axis = side.sizing_axis();
            let slack = (self.center.extent(axis) - self.min_center).max(0.0);
            let max = strip.extent(axis) + slack;
            let enabled: Vec<EightPos> = EightPos::on_side(side)
                .into_iter()
                .filter(|pos| self.is_enabled(*pos))
                .collect();
            let current = enabled
                .iter()
                .map(|pos| self.extent(*pos))
                .fold(0.0, f32::max)
                .min(max);
            if max < self.min_region {
                return current;
            }

            let target = value.clamp(self.min_region, max);
            let delta = target - current;
            if delta == 0.0 {
                return current;
            }
            for pos in enabled {
                let shifted = self.extent(pos).min(current) + delta;
                self.set_extent(pos, shifted.clamp(self.min_region.min(target), target));
            }
            target
        }
    }

    fn assert_live(&self, divider: DividerPos) {
        assert!(
            self.joins_enabled_regions(divider),
            "divider {:?} does not join two enabled regions",
            divider
        );
    }
}

/// Axis along which a side's strip is split between its two slots
#[inline]
fn split_axis(side: Side) -> Axis {
    if side.is_vertical() {
        Axis::Vertical
    } else {
        Axis::Horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> DivisionHelper {
        let config = LayoutConfig {
            min_center: 100.0,
            min_region: 20.0,
            divider_thickness: 4.0,
            ..LayoutConfig::default()
        };
        DivisionHelper::new(&config)
    }

    #[test]
    fn test_nothing_enabled_center_fills_content() {
        let mut h = helper();
        h.update(0.0, 0.0, 800.0, 600.0, true);
        assert_eq!(h.center, Rect::new(0.0, 0.0, 800.0, 600.0));
        assert!(h.dividers.iter().all(Option::is_none));
    }

    #[test]
    fn test_single_left_slot() {
        let mut h = helper();
        h.set_enabled(EightPos::LeftTop, true);
        h.set_extent(EightPos::LeftTop, 200.0);
        h.update(0.0, 0.0, 800.0, 600.0, true);

        assert_eq!(h.bound(EightPos::LeftTop).rect, Rect::new(0.0, 0.0, 200.0, 600.0));
        assert_eq!(h.center, Rect::new(200.0, 0.0, 600.0, 600.0));
        assert_eq!(
            h.divider(DividerPos::Left),
            Some(Rect::new(198.0, 0.0, 4.0, 600.0))
        );
        assert_eq!(h.divider(DividerPos::LeftSplit), None);
    }

    #[test]
    fn test_thickness_is_largest_enabled_extent() {
        let mut h = helper();
        h.set_enabled(EightPos::TopLeft, true);
        h.set_enabled(EightPos::TopRight, true);
        h.set_extent(EightPos::TopLeft, 80.0);
        h.set_extent(EightPos::TopRight, 120.0);
        h.update(0.0, 0.0, 800.0, 600.0, true);
        assert_eq!(h.strip(Side::Top).height, 120.0);
        assert_eq!(h.bound(EightPos::TopLeft).rect, Rect::new(0.0, 0.0, 400.0, 120.0));
        assert_eq!(h.bound(EightPos::TopRight).rect, Rect::new(400.0, 0.0, 400.0, 120.0));
        assert_eq!(
            h.divider(DividerPos::TopSplit),
            Some(Rect::new(398.0, 0.0, 4.0, 120.0))
        );
    }

    #[test]
    fn test_split_respects_min_region() {
        let mut h = helper();
        h.set_enabled(EightPos::LeftTop, true);
        h.set_enabled(EightPos::LeftBottom, true);
        h.set_split(Side::Left, 0.001);
        h.update(0.0, 0.0, 800.0, 600.0, false);
        assert_eq!(h.bound(EightPos::LeftTop).rect.height, 20.0);
        assert_eq!(h.bound(EightPos::LeftBottom).rect.height, 580.0);
    }

    #[test]
    fn test_center_wins_when_space_runs_out() {
        let mut h = helper();
        h.set_enabled(EightPos::LeftTop, true);
        h.set_enabled(EightPos::RightTop, true);
        h.set_extent(EightPos::LeftTop, 200.0);
        h.set_extent(EightPos::RightTop, 700.0);
        h.update(0.0, 0.0, 800.0, 600.0, true);

        assert_eq!(h.bound(EightPos::LeftTop).rect.width, 200.0);
        assert_eq!(h.bound(EightPos::RightTop).rect.width, 500.0);
        assert_eq!(h.center.width, 100.0);
        // Stored extent is untouched by clamping
        assert_eq!(h.extent(EightPos::RightTop), 700.0);
    }

    #[test]
    fn test_viewport_smaller_than_min_center() {
        let mut h = helper();
        h.set_enabled(EightPos::TopLeft, true);
        h.update(0.0, 0.0, 80.0, 60.0, true);
        assert_eq!(h.bound(EightPos::TopLeft).rect.height, 0.0);
        assert_eq!(h.center, Rect::new(0.0, 0.0, 80.0, 60.0));
        // The strip is empty but its divider stays so it can be dragged back out
        assert!(h.divider(DividerPos::Top).is_some());
    }

    #[test]
    fn test_snapping_keeps_whole_pixels() {
        let mut h = helper();
        h.set_enabled(EightPos::LeftTop, true);
        h.set_enabled(EightPos::LeftBottom, true);
        h.set_enabled(EightPos::BottomLeft, true);
        h.set_extent(EightPos::LeftTop, 133.4);
        h.set_extent(EightPos::BottomLeft, 77.6);
        h.set_split(Side::Left, 1.0 / 3.0);
        h.update(0.3, 0.6, 799.7, 601.2, true);

        for bound in h.bounds.iter().filter(|b| b.enabled) {
            let r = bound.rect;
            assert_eq!(r.x, r.x.round());
            assert_eq!(r.y, r.y.round());
            assert_eq!(r.right(), r.right().round());
            assert_eq!(r.bottom(), r.bottom().round());
        }
        let top = h.bound(EightPos::LeftTop).rect;
        let bottom = h.bound(EightPos::LeftBottom).rect;
        assert_eq!(top.bottom(), bottom.y);
    }

    #[test]
    fn test_edge_divider_drag_clamps() {
        let mut h = helper();
        h.set_enabled(EightPos::LeftTop, true);
        h.set_enabled(EightPos::LeftBottom, true);
        h.set_extent(EightPos::LeftTop, 200.0);
        h.set_extent(EightPos::LeftBottom, 150.0);
        h.update(0.0, 0.0, 800.0, 600.0, true);

        assert_eq!(h.divider_value(DividerPos::Left), 200.0);
        assert_eq!(h.apply_divider_value(DividerPos::Left, 5000.0), 700.0);
        assert_eq!(h.extent(EightPos::LeftTop), 700.0);
        assert_eq!(h.extent(EightPos::LeftBottom), 700.0);
        assert_eq!(h.apply_divider_value(DividerPos::Left, -50.0), 20.0);
    }

    #[test]
    fn test_split_divider_drag() {
        let mut h = helper();
        h.set_enabled(EightPos::BottomLeft, true);
        h.set_enabled(EightPos::BottomRight, true);
        h.update(0.0, 0.0, 800.0, 600.0, true);

        assert_eq!(h.divider_value(DividerPos::BottomSplit), 400.0);
        assert_eq!(h.apply_divider_value(DividerPos::BottomSplit, 600.0), 600.0);
        assert!((h.split(Side::Bottom) - 0.75).abs() < 1e-6);
        assert_eq!(h.apply_divider_value(DividerPos::BottomSplit, 795.0), 780.0);
    }

    #[test]
    #[should_panic(expected = "does not join two enabled regions")]
    fn test_dead_divider_value_panics() {
        let mut h = helper();
        h.set_enabled(EightPos::LeftTop, true);
        h.update(0.0, 0.0, 800.0, 600.0, true);
        h.divider_value(DividerPos::LeftSplit);
    }
}
