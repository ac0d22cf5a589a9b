//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use viewpane::config::PaneConfig;
use viewpane::division::{ContentNode, DivisionArea, LayoutHandle, NodeRef};
use viewpane::geometry::{Rect, Size};
use viewpane::position::EightPos;

/// Content node that records every rectangle it is given
#[derive(Debug, Default)]
pub struct Probe {
    pub bounds: Option<Rect>,
    pub relocations: usize,
    pub pref: Size,
    /// When set, asks this handle for a new layout from inside `resize_relocate`
    pub requester: Option<LayoutHandle>,
    /// Result of each such request
    pub request_results: Vec<bool>,
}

impl ContentNode for Probe {
    fn resize_relocate(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
        self.relocations += 1;
        if let Some(handle) = &self.requester {
            self.request_results.push(handle.request_layout());
        }
    }

    fn pref_size(&self) -> Size {
        self.pref
    }
}

pub type Node = NodeRef<Probe>;

pub fn probe() -> Node {
    NodeRef::new(Probe::default())
}

/// Default config with the numbers used throughout the tests
pub fn test_config() -> PaneConfig {
    let mut config = PaneConfig::default();
    config.layout.divider_thickness = 4.0;
    config.layout.min_center = 100.0;
    config.layout.min_region = 20.0;
    config.layout.snap_to_pixel = true;
    config
}

pub fn viewport() -> Rect {
    Rect::new(0.0, 0.0, 800.0, 600.0)
}

/// Area with probes in the given slots and in the center
pub fn area_with(config: &PaneConfig, enabled: &[EightPos]) -> DivisionArea<Node> {
    let mut area = DivisionArea::new(config);
    area.set_content(Some(probe()));
    for &pos in enabled {
        area.set_view(pos, Some(probe()));
    }
    area
}

/// Positions selected by the bits of `mask`
pub fn positions(mask: u8) -> Vec<EightPos> {
    EightPos::ALL
        .into_iter()
        .filter(|pos| mask & (1 << pos.ordinal()) != 0)
        .collect()
}

/// Enabled slot rectangles plus the center
pub fn regions<N: ContentNode>(area: &DivisionArea<N>) -> Vec<Rect> {
    let helper = area.helper();
    let mut rects: Vec<Rect> = EightPos::ALL
        .into_iter()
        .filter(|pos| helper.is_enabled(*pos))
        .map(|pos| helper.bound(pos).rect)
        .collect();
    rects.push(helper.center);
    rects
}

pub fn area_of(rect: &Rect) -> f32 {
    rect.width * rect.height
}
