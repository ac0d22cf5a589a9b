//! Divider handles between regions

use crate::geometry::{Rect, Size};
use crate::position::DividerPos;

use super::helper::DivisionHelper;

/// Pointer state captured when a drag starts
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    /// Pointer coordinate along the drag axis
    start_coord: f32,
    /// Divider value when the drag started
    start_value: f32,
}

/// Thin drag handle sitting on the boundary between two regions
#[derive(Debug, Clone)]
pub struct ContentDivider {
    pos: DividerPos,
    bounds: Rect,
    drag: Option<DragSession>,
}

impl ContentDivider {
    pub fn new(pos: DividerPos) -> Self {
        Self {
            pos,
            bounds: Rect::ZERO,
            drag: None,
        }
    }

    #[inline]
    pub fn pos(&self) -> DividerPos {
        self.pos
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// A divider has no content of its own; its size comes from the engine
    pub fn pref_size(&self) -> Size {
        Size::ZERO
    }

    pub fn resize_relocate(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Start dragging from pointer position `(x, y)`
    pub fn begin_drag(&mut self, x: f32, y: f32, helper: &DivisionHelper) {
        let start_coord = self.pos.drag_axis().coord(x, y);
        let start_value = helper.divider_value(self.pos);
        tracing::debug!(divider = ?self.pos, start_coord, start_value, "divider drag started");
        self.drag = Some(DragSession {
            start_coord,
            start_value,
        });
    }

    /// Move the pointer to `(x, y)`, updating the engine's stored sizes.
    ///
    /// Returns whether the stored value changed. Does nothing when no drag
    /// is in progress or the pointer is back where the drag started.
    pub fn drag_to(&mut self, x: f32, y: f32, helper: &mut DivisionHelper) -> bool {
        let Some(session) = self.drag else {
            return false;
        };

        let delta = self.pos.drag_axis().coord(x, y) - session.start_coord;
        if delta == 0.0 {
            return false;
        }
        let requested = session.start_value + self.pos.growth_sign() * delta;
        let before = helper.divider_value(self.pos);
        let applied = helper.apply_divider_value(self.pos, requested);
        tracing::trace!(divider = ?self.pos, requested, applied, "divider dragged");
        applied != before
    }

    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!(divider = ?self.pos, "divider drag ended");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::position::EightPos;

    fn helper_with(pos: EightPos) -> DivisionHelper {
        let mut helper = DivisionHelper::new(&LayoutConfig::default());
        helper.set_enabled(pos, true);
        helper.update(0.0, 0.0, 800.0, 600.0, true);
        helper
    }

    #[test]
    fn test_drag_without_session_is_ignored() {
        let mut helper = helper_with(EightPos::BottomLeft);
        let mut divider = ContentDivider::new(DividerPos::Bottom);
        assert!(!divider.drag_to(400.0, 100.0, &mut helper));
        assert_eq!(helper.extent(EightPos::BottomLeft), 150.0);
    }

    #[test]
    fn test_dragging_bottom_edge_up_grows_strip() {
        let mut helper = helper_with(EightPos::BottomLeft);
        let mut divider = ContentDivider::new(DividerPos::Bottom);

        divider.begin_drag(400.0, 450.0, &helper);
        assert!(divider.is_dragging());
        assert!(divider.drag_to(400.0, 400.0, &mut helper));
        assert_eq!(helper.extent(EightPos::BottomLeft), 200.0);

        helper.update(0.0, 0.0, 800.0, 600.0, true);
        assert_eq!(helper.strip(crate::geometry::Side::Bottom).y, 400.0);

        divider.end_drag();
        assert!(!divider.is_dragging());
        assert!(!divider.drag_to(400.0, 300.0, &mut helper));
    }

    #[test]
    fn test_drag_clamps_to_min_center() {
        let mut helper = helper_with(EightPos::TopRight);
        let mut divider = ContentDivider::new(DividerPos::Top);

        divider.begin_drag(400.0, 150.0, &helper);
        divider.drag_to(400.0, 900.0, &mut helper);
        // 600 tall, minus the 100 the center keeps
        assert_eq!(helper.extent(EightPos::TopRight), 500.0);
    }
}
