//! Layout dump for development diagnostics
//!
//! Lays out a division area with placeholder content and serializes every
//! computed rectangle, so a configuration can be checked without a host.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::PaneConfig;
use crate::division::{ContentNode, DivisionArea};
use crate::geometry::Rect;
use crate::position::EightPos;

/// Content that accepts any bounds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placeholder;

impl ContentNode for Placeholder {
    fn resize_relocate(&mut self, _bounds: Rect) {}
}

/// Snapshot of one layout pass
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub viewport: Rect,
    pub content: Rect,
    pub center: Rect,
    /// Enabled slots by name
    pub slots: BTreeMap<String, Rect>,
    /// Live dividers by name
    pub dividers: BTreeMap<String, Rect>,
}

impl LayoutDump {
    /// Capture the bounds of the last layout pass of `area`
    pub fn capture<N: ContentNode>(area: &DivisionArea<N>) -> Self {
        let helper = area.helper();
        let slots = EightPos::ALL
            .into_iter()
            .filter(|pos| helper.is_enabled(*pos))
            .map(|pos| (format!("{:?}", pos), helper.bound(pos).rect))
            .collect();
        let dividers = area
            .dividers()
            .map(|d| (format!("{:?}", d.pos()), d.bounds()))
            .collect();

        Self {
            viewport: area.bounds(),
            content: helper.content(),
            center: helper.center,
            slots,
            dividers,
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize layout dump")
    }
}

/// Lay out `viewport` with `enabled` slots, applying stored `extents` first
pub fn dump_layout(
    config: &PaneConfig,
    viewport: Rect,
    enabled: &[EightPos],
    extents: &[(EightPos, f32)],
) -> LayoutDump {
    let mut area = DivisionArea::new(config);
    for &(pos, extent) in extents {
        area.helper_mut().set_extent(pos, extent);
    }
    for &pos in enabled {
        area.set_view(pos, Some(Placeholder));
    }
    area.set_content(Some(Placeholder));
    area.resize_relocate(viewport);
    LayoutDump::capture(&area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_lists_enabled_slots_and_dividers() {
        let dump = dump_layout(
            &PaneConfig::default(),
            Rect::new(0.0, 0.0, 800.0, 600.0),
            &[EightPos::LeftTop],
            &[(EightPos::LeftTop, 200.0)],
        );
        assert_eq!(dump.slots.len(), 1);
        assert_eq!(dump.slots["LeftTop"], Rect::new(0.0, 0.0, 200.0, 600.0));
        assert_eq!(dump.dividers["Left"], Rect::new(198.0, 0.0, 4.0, 600.0));
        assert_eq!(dump.center, Rect::new(200.0, 0.0, 600.0, 600.0));

        let yaml = dump.to_yaml().unwrap();
        assert!(yaml.contains("LeftTop"));
    }
}
