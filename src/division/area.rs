//! The division area: content areas and dividers positioned by the engine

use crate::config::PaneConfig;
use crate::geometry::{Insets, Rect, Size};
use crate::position::{DividerPos, EightPos, Slot};

use super::content::{ContentArea, ContentNode};
use super::divider::ContentDivider;
use super::guard::LayoutHandle;
use super::helper::DivisionHelper;

/// Region split into up to eight peripheral slots around a center.
///
/// Owns one content area per slot that has ever been used, the center
/// content area, and one divider per live boundary.
#[derive(Debug)]
pub struct DivisionArea<N> {
    helper: DivisionHelper,
    views: [Option<ContentArea<N>>; 8],
    center: Option<ContentArea<N>>,
    dividers: [Option<ContentDivider>; 8],
    layout: LayoutHandle,
    bounds: Rect,
    insets: Insets,
    /// Insets given to every content area
    content_insets: Insets,
    snap_to_pixel: bool,
}

impl<N: ContentNode> DivisionArea<N> {
    pub fn new(config: &PaneConfig) -> Self {
        Self {
            helper: DivisionHelper::new(&config.layout),
            views: std::array::from_fn(|_| None),
            center: None,
            dividers: std::array::from_fn(|_| None),
            layout: LayoutHandle::new(),
            bounds: Rect::ZERO,
            insets: config.insets,
            content_insets: config.content_insets,
            snap_to_pixel: config.layout.snap_to_pixel,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn helper(&self) -> &DivisionHelper {
        &self.helper
    }

    /// Mutable engine access, for restoring stored sizes.
    ///
    /// Requests a layout pass since any stored size may change.
    pub fn helper_mut(&mut self) -> &mut DivisionHelper {
        self.layout.request_layout();
        &mut self.helper
    }

    /// Handle content nodes can keep to request re-layout
    pub fn layout_handle(&self) -> LayoutHandle {
        self.layout.clone()
    }

    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.layout.needs_layout()
    }

    pub fn request_layout(&self) -> bool {
        self.layout.request_layout()
    }

    #[inline]
    pub fn view(&self, pos: EightPos) -> Option<&ContentArea<N>> {
        self.views[pos.ordinal()].as_ref()
    }

    #[inline]
    pub fn center(&self) -> Option<&ContentArea<N>> {
        self.center.as_ref()
    }

    #[inline]
    pub fn divider(&self, pos: DividerPos) -> Option<&ContentDivider> {
        self.dividers[pos.ordinal()].as_ref()
    }

    /// Live dividers, in ordinal order
    pub fn dividers(&self) -> impl Iterator<Item = &ContentDivider> {
        self.dividers.iter().flatten()
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn set_insets(&mut self, insets: Insets) {
        if self.insets != insets {
            self.insets = insets;
            self.layout.request_layout();
        }
    }

    pub fn set_snap_to_pixel(&mut self, snap_to_pixel: bool) {
        if self.snap_to_pixel != snap_to_pixel {
            self.snap_to_pixel = snap_to_pixel;
            self.layout.request_layout();
        }
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Set the center content, returning the previous node
    pub fn set_content(&mut self, content: Option<N>) -> Option<N> {
        let insets = self.content_insets;
        let center = self
            .center
            .get_or_insert_with(|| ContentArea::new(None).with_insets(insets));
        let previous = center.set_content(content);
        self.layout.request_layout();
        previous
    }

    /// Show `content` in slot `pos`, returning the previous node.
    ///
    /// `None` disables the slot: it stops taking space and its dividers are
    /// removed right away.
    pub fn set_view(&mut self, pos: EightPos, content: Option<N>) -> Option<N> {
        let enabled = content.is_some();
        let insets = self.content_insets;
        let view = self.views[pos.ordinal()]
            .get_or_insert_with(|| ContentArea::new(Some(pos)).with_insets(insets));
        let previous = view.set_content(content);

        if self.helper.is_enabled(pos) != enabled {
            tracing::debug!(?pos, enabled, "slot toggled");
        }
        self.helper.set_enabled(pos, enabled);
        self.sync_dividers();
        self.layout.request_layout();
        previous
    }

    /// Create dividers for boundaries that became live and drop the rest
    fn sync_dividers(&mut self) {
        for pos in DividerPos::ALL {
            let live = self.helper.joins_enabled_regions(pos);
            let slot = &mut self.dividers[pos.ordinal()];
            match (live, slot.is_some()) {
                (true, false) => *slot = Some(ContentDivider::new(pos)),
                (false, true) => *slot = None,
                _ => {}
            }
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Preferred size: the center content's preferred size plus insets
    pub fn pref_size(&self) -> Size {
        let center = self.center.as_ref().map_or(Size::ZERO, ContentArea::pref_size);
        Size::new(
            self.insets.horizontal() + center.width,
            self.insets.vertical() + center.height,
        )
    }

    /// Move and resize the whole area. Lays out when the bounds changed.
    pub fn resize_relocate(&mut self, bounds: Rect) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.layout.request_layout();
        }
        self.layout_if_needed();
    }

    /// Run a layout pass if one was requested. Returns whether it ran.
    pub fn layout_if_needed(&mut self) -> bool {
        if self.layout.needs_layout() {
            self.layout_children();
            true
        } else {
            false
        }
    }

    /// Recompute every bound and push it to the children.
    ///
    /// Returns immediately when called from inside a running pass.
    pub fn layout_children(&mut self) {
        let Some(_pass) = self.layout.begin() else {
            return;
        };

        let content = self.bounds.inset(&self.insets.snapped(self.snap_to_pixel));
        self.helper.update(
            content.x,
            content.y,
            content.width,
            content.height,
            self.snap_to_pixel,
        );

        self.sync_dividers();
        for divider in self.dividers.iter_mut().flatten() {
            let rect = self.helper.divider(divider.pos()).unwrap_or_default();
            divider.resize_relocate(rect);
        }

        for (i, view) in self.views.iter_mut().enumerate() {
            if let Some(view) = view {
                if view.is_managed() {
                    view.resize_relocate(self.helper.bounds[i].rect);
                }
            }
        }

        if let Some(center) = self.center.as_mut() {
            if center.is_managed() {
                center.resize_relocate(self.helper.center);
            }
        }

        self.assert_invariants();
    }

    // =========================================================================
    // Hit Testing
    // =========================================================================

    /// Divider under a point. Split dividers win over edge dividers where
    /// they cross.
    pub fn divider_at(&self, x: f32, y: f32) -> Option<DividerPos> {
        self.dividers
            .iter()
            .rev()
            .flatten()
            .find(|d| d.bounds().contains(x, y))
            .map(ContentDivider::pos)
    }

    /// Region under a point
    pub fn region_at(&self, x: f32, y: f32) -> Option<Slot> {
        if let Some(pos) = EightPos::ALL.into_iter().find(|pos| {
            let bound = self.helper.bound(*pos);
            bound.enabled && bound.rect.contains(x, y)
        }) {
            return Some(Slot::Position(pos));
        }
        if self.helper.center.contains(x, y) {
            return Some(Slot::Center);
        }
        None
    }

    // =========================================================================
    // Divider Drags
    // =========================================================================

    /// Start dragging a divider from `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the divider does not join two enabled regions.
    pub fn begin_divider_drag(&mut self, pos: DividerPos, x: f32, y: f32) {
        let helper = &self.helper;
        match self.dividers[pos.ordinal()].as_mut() {
            Some(divider) => divider.begin_drag(x, y, helper),
            None => panic!("divider {:?} does not join two enabled regions", pos),
        }
    }

    /// Continue a drag. Returns whether a re-layout was requested.
    pub fn drag_divider(&mut self, pos: DividerPos, x: f32, y: f32) -> bool {
        let helper = &mut self.helper;
        let changed = match self.dividers[pos.ordinal()].as_mut() {
            Some(divider) => divider.drag_to(x, y, helper),
            None => false,
        };
        changed && self.layout.request_layout()
    }

    pub fn end_divider_drag(&mut self, pos: DividerPos) {
        if let Some(divider) = self.dividers[pos.ordinal()].as_mut() {
            divider.end_drag();
        }
    }

    /// Divider currently being dragged, if any
    pub fn dragging_divider(&self) -> Option<DividerPos> {
        self.dividers()
            .find(|d| d.is_dragging())
            .map(ContentDivider::pos)
    }
}

// ============================================================================
// Debug Invariant Validation
// ============================================================================

/// Slack for float rounding when checking unsnapped layouts
#[cfg(debug_assertions)]
const TOLERANCE: f32 = 1e-3;

impl<N: ContentNode> DivisionArea<N> {
    /// Validate layout invariants in debug builds.
    ///
    /// Checks that:
    /// - enabled slots and the center lie inside the content rectangle
    /// - no two of them overlap
    /// - every divider joins two enabled regions
    /// - every slot with a managed content area is enabled
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let content = self.helper.content();
        let mut regions: Vec<(Slot, Rect)> = EightPos::ALL
            .into_iter()
            .filter(|pos| self.helper.is_enabled(*pos))
            .map(|pos| (Slot::Position(pos), self.helper.bound(pos).rect))
            .collect();
        regions.push((Slot::Center, self.helper.center));

        for (slot, rect) in &regions {
            assert!(
                rect.x >= content.x - TOLERANCE
                    && rect.y >= content.y - TOLERANCE
                    && rect.right() <= content.right() + TOLERANCE
                    && rect.bottom() <= content.bottom() + TOLERANCE,
                "{:?} bound {:?} escapes content rect {:?}",
                slot,
                rect,
                content
            );
        }
        for (i, (a, ra)) in regions.iter().enumerate() {
            for (b, rb) in &regions[i + 1..] {
                let dx = ra.right().min(rb.right()) - ra.x.max(rb.x);
                let dy = ra.bottom().min(rb.bottom()) - ra.y.max(rb.y);
                assert!(
                    dx <= TOLERANCE || dy <= TOLERANCE,
                    "{:?} {:?} overlaps {:?} {:?}",
                    a,
                    ra,
                    b,
                    rb
                );
            }
        }

        for divider in self.dividers.iter().flatten() {
            assert!(
                self.helper.joins_enabled_regions(divider.pos()),
                "divider {:?} references a disabled region",
                divider.pos()
            );
        }

        for view in self.views.iter().flatten() {
            if let Some(pos) = view.pos() {
                assert_eq!(
                    view.is_managed(),
                    self.helper.is_enabled(pos),
                    "content area {:?} out of sync with its slot",
                    pos
                );
            }
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
