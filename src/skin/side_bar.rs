//! Side bars framing the division area
//!
//! A side bar is laid out in its own unrotated frame, a strip whose x runs
//! along the bar. Left and right bars are then turned 90° clockwise onto the
//! screen, so their length follows the height of the center.

use crate::config::TabBarMetrics;
use crate::geometry::{snap_size, Insets, Rect, Side, Size};
use crate::pane::ViewTabId;

use super::tab_bar::TabButtonBar;

// ============================================================================
// Side Bar
// ============================================================================

/// Strip holding up to two tab button bars
#[derive(Debug, Clone)]
pub struct SideBar {
    side: Side,
    /// Bar for the top/left slot of this side
    leading: Option<TabButtonBar>,
    /// Bar for the bottom/right slot of this side
    trailing: Option<TabButtonBar>,
    /// Visual rectangle on screen
    bounds: Rect,
}

impl SideBar {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            leading: None,
            trailing: None,
            bounds: Rect::ZERO,
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Rotation applied when drawing the bar, in degrees
    pub fn rotation(&self) -> f32 {
        if self.side.is_vertical() {
            90.0
        } else {
            0.0
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn bar(&self, leading: bool) -> Option<&TabButtonBar> {
        if leading {
            self.leading.as_ref()
        } else {
            self.trailing.as_ref()
        }
    }

    pub fn bar_mut(&mut self, leading: bool) -> Option<&mut TabButtonBar> {
        if leading {
            self.leading.as_mut()
        } else {
            self.trailing.as_mut()
        }
    }

    /// Install a bar in the leading or trailing place, returning the old one
    pub fn set_bar(&mut self, leading: bool, bar: Option<TabButtonBar>) -> Option<TabButtonBar> {
        let place = if leading {
            &mut self.leading
        } else {
            &mut self.trailing
        };
        std::mem::replace(place, bar)
    }

    pub fn bars(&self) -> impl Iterator<Item = &TabButtonBar> {
        self.leading.iter().chain(self.trailing.iter())
    }

    /// A bar without tab bars takes no space
    pub fn is_managed(&self) -> bool {
        self.leading.is_some() || self.trailing.is_some()
    }

    /// Preferred size in the bar's own frame: length by thickness
    pub fn pref_size(&self, metrics: &TabBarMetrics) -> Size {
        self.bars()
            .map(|b| b.pref_size(metrics))
            .fold(Size::ZERO, |acc, s| {
                Size::new(
                    acc.width + snap_size(s.width, true),
                    acc.height.max(snap_size(s.height, true)),
                )
            })
    }

    /// Thickness the bar takes across its side
    pub fn thickness(&self, metrics: &TabBarMetrics) -> f32 {
        if self.is_managed() {
            self.pref_size(metrics).height
        } else {
            0.0
        }
    }

    /// Place the bar at `bounds` on screen and lay out its tab bars
    pub fn layout(&mut self, bounds: Rect, metrics: &TabBarMetrics) {
        self.bounds = bounds;
        let (length, thickness) = if self.side.is_vertical() {
            (bounds.height, bounds.width)
        } else {
            (bounds.width, bounds.height)
        };

        let mut left = 0.0;
        let mut remaining = length;
        if let Some(bar) = self.leading.as_mut() {
            let width = bar.pref_size(metrics).width.min(remaining);
            bar.layout(Rect::new(left, 0.0, width, thickness), metrics);
            left += width;
            remaining -= width;
        }
        if let Some(bar) = self.trailing.as_mut() {
            let width = bar.pref_size(metrics).width.min(remaining);
            bar.layout(Rect::new(left + remaining - width, 0.0, width, thickness), metrics);
        }
    }

    /// Map a screen point into the bar's frame
    pub fn to_local(&self, x: f32, y: f32) -> (f32, f32) {
        let b = self.bounds;
        if self.side.is_vertical() {
            (y - b.y, b.x + b.width - x)
        } else {
            (x - b.x, y - b.y)
        }
    }

    /// Map a rectangle in the bar's frame onto the screen
    pub fn to_screen(&self, rect: Rect) -> Rect {
        let b = self.bounds;
        if self.side.is_vertical() {
            Rect::new(b.x + b.width - rect.bottom(), b.y + rect.x, rect.height, rect.width)
        } else {
            Rect::new(b.x + rect.x, b.y + rect.y, rect.width, rect.height)
        }
    }

    /// Tab button under a screen point
    pub fn button_at(&self, x: f32, y: f32) -> Option<ViewTabId> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let (lx, ly) = self.to_local(x, y);
        self.bars().find_map(|bar| bar.button_at(lx, ly))
    }
}

// ============================================================================
// Side Bar Area
// ============================================================================

/// Border layout: four optional side bars around a center rectangle
#[derive(Debug, Clone, Default)]
pub struct SideBarArea {
    top: Option<SideBar>,
    left: Option<SideBar>,
    bottom: Option<SideBar>,
    right: Option<SideBar>,
    insets: Insets,
    bounds: Rect,
    center: Rect,
}

impl SideBarArea {
    pub fn new(insets: Insets) -> Self {
        Self {
            insets,
            ..Self::default()
        }
    }

    fn place(&mut self, side: Side) -> &mut Option<SideBar> {
        match side {
            Side::Top => &mut self.top,
            Side::Left => &mut self.left,
            Side::Bottom => &mut self.bottom,
            Side::Right => &mut self.right,
        }
    }

    pub fn side_bar(&self, side: Side) -> Option<&SideBar> {
        match side {
            Side::Top => self.top.as_ref(),
            Side::Left => self.left.as_ref(),
            Side::Bottom => self.bottom.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    pub fn side_bar_mut(&mut self, side: Side) -> Option<&mut SideBar> {
        self.place(side).as_mut()
    }

    /// Side bar for `side`, created on first use
    pub fn side_bar_or_insert(&mut self, side: Side) -> &mut SideBar {
        self.place(side).get_or_insert_with(|| {
            tracing::debug!(side = side.name(), "side bar created");
            SideBar::new(side)
        })
    }

    pub fn side_bars(&self) -> impl Iterator<Item = &SideBar> {
        [&self.top, &self.left, &self.bottom, &self.right]
            .into_iter()
            .flatten()
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Rectangle handed to the division area by the last layout
    #[inline]
    pub fn center(&self) -> Rect {
        self.center
    }

    fn thickness(&self, side: Side, metrics: &TabBarMetrics) -> f32 {
        self.side_bar(side)
            .map_or(0.0, |bar| snap_size(bar.thickness(metrics), true))
    }

    fn length(&self, side: Side, metrics: &TabBarMetrics) -> f32 {
        self.side_bar(side)
            .filter(|bar| bar.is_managed())
            .map_or(0.0, |bar| snap_size(bar.pref_size(metrics).width, true))
    }

    /// Preferred size given the center's preferred size
    pub fn pref_size(&self, center: Size, metrics: &TabBarMetrics) -> Size {
        let width = self.thickness(Side::Left, metrics)
            + self
                .length(Side::Top, metrics)
                .max(self.length(Side::Bottom, metrics))
                .max(snap_size(center.width, true))
            + self.thickness(Side::Right, metrics);
        let height = self.thickness(Side::Top, metrics)
            + self
                .length(Side::Left, metrics)
                .max(self.length(Side::Right, metrics))
                .max(snap_size(center.height, true))
            + self.thickness(Side::Bottom, metrics);
        Size::new(
            self.insets.horizontal() + width,
            self.insets.vertical() + height,
        )
    }

    /// Lay out the side bars inside `bounds` and return the center rectangle.
    ///
    /// Top and bottom bars span the center's width; left and right bars
    /// span its height.
    pub fn layout(&mut self, bounds: Rect, metrics: &TabBarMetrics) -> Rect {
        self.bounds = bounds;
        let content = bounds.inset(&self.insets.snapped(true));

        let top = self.thickness(Side::Top, metrics);
        let left = self.thickness(Side::Left, metrics);
        let bottom = self.thickness(Side::Bottom, metrics);
        let right = self.thickness(Side::Right, metrics);

        let center_width = (content.width - left - right).max(0.0);
        let center_height = (content.height - top - bottom).max(0.0);
        let center = Rect::new(content.x + left, content.y + top, center_width, center_height);

        if let Some(bar) = self.top.as_mut().filter(|b| b.is_managed()) {
            bar.layout(Rect::new(center.x, content.y, center_width, top), metrics);
        }
        if let Some(bar) = self.left.as_mut().filter(|b| b.is_managed()) {
            bar.layout(Rect::new(content.x, center.y, left, center_height), metrics);
        }
        if let Some(bar) = self.right.as_mut().filter(|b| b.is_managed()) {
            bar.layout(
                Rect::new(content.right() - right, center.y, right, center_height),
                metrics,
            );
        }
        if let Some(bar) = self.bottom.as_mut().filter(|b| b.is_managed()) {
            bar.layout(
                Rect::new(center.x, content.bottom() - bottom, center_width, bottom),
                metrics,
            );
        }

        self.center = center;
        center
    }

    /// Tab button under a screen point
    pub fn button_at(&self, x: f32, y: f32) -> Option<ViewTabId> {
        self.side_bars()
            .filter(|bar| bar.is_managed())
            .find_map(|bar| bar.button_at(x, y))
    }
}
