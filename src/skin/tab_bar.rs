//! Tab buttons and the bars that hold them
//!
//! Coordinates here are in the owning side bar's unrotated frame: x runs
//! along the bar, y across it.

use crate::config::TabBarMetrics;
use crate::geometry::{snap_size, Rect, Side, Size};
use crate::pane::{ViewGroup, ViewGroupId, ViewTabId};
use crate::position::EightPos;

/// Horizontal alignment of a button's label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    Left,
    Right,
}

// ============================================================================
// Tab Button
// ============================================================================

/// Button mirroring one view tab
#[derive(Debug, Clone, PartialEq)]
pub struct TabButton {
    tab: ViewTabId,
    pos: EightPos,
    text: String,
    graphic: Option<String>,
    selected: bool,
    bounds: Rect,
}

impl TabButton {
    pub fn new(tab: ViewTabId, pos: EightPos) -> Self {
        Self {
            tab,
            pos,
            text: String::new(),
            graphic: None,
            selected: false,
            bounds: Rect::ZERO,
        }
    }

    #[inline]
    pub fn tab(&self) -> ViewTabId {
        self.tab
    }

    #[inline]
    pub fn pos(&self) -> EightPos {
        self.pos
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn graphic(&self) -> Option<&str> {
        self.graphic.as_deref()
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Rotation of the whole button in degrees.
    ///
    /// Left side bars are turned 90° like the right ones, so their buttons
    /// are flipped to read bottom to top.
    pub fn rotation(&self) -> f32 {
        if self.pos.primary() == Side::Left {
            180.0
        } else {
            0.0
        }
    }

    /// Rotation of the graphic inside the button, if there is one
    pub fn graphic_rotation(&self) -> Option<f32> {
        self.graphic.as_ref().map(|_| {
            if self.pos.primary() == Side::Left {
                90.0
            } else {
                0.0
            }
        })
    }

    pub fn text_alignment(&self) -> TextAlignment {
        if self.graphic.is_some() && self.pos.primary() == Side::Left {
            TextAlignment::Right
        } else {
            TextAlignment::Left
        }
    }

    pub fn pref_size(&self, metrics: &TabBarMetrics) -> Size {
        let mut width = 2.0 * metrics.button_padding
            + self.text.chars().count() as f32 * metrics.char_width;
        if self.graphic.is_some() {
            width += metrics.graphic_size;
        }
        Size::new(
            snap_size(width, true),
            snap_size(metrics.button_height.max(metrics.graphic_size), true),
        )
    }

    /// Copy label, graphic and selection from the tab. Returns whether
    /// anything changed.
    fn update(&mut self, text: &str, graphic: Option<&str>, selected: bool, pos: EightPos) -> bool {
        let changed = self.text != text
            || self.graphic.as_deref() != graphic
            || self.selected != selected
            || self.pos != pos;
        if changed {
            self.text = text.to_string();
            self.graphic = graphic.map(str::to_string);
            self.selected = selected;
            self.pos = pos;
        }
        changed
    }
}

// ============================================================================
// Tab Button Bar
// ============================================================================

/// Row of tab buttons for one view group
#[derive(Debug, Clone)]
pub struct TabButtonBar {
    group: ViewGroupId,
    pos: EightPos,
    buttons: Vec<TabButton>,
    bounds: Rect,
}

impl TabButtonBar {
    pub fn new(group: ViewGroupId, pos: EightPos) -> Self {
        Self {
            group,
            pos,
            buttons: Vec::new(),
            bounds: Rect::ZERO,
        }
    }

    #[inline]
    pub fn group(&self) -> ViewGroupId {
        self.group
    }

    #[inline]
    pub fn pos(&self) -> EightPos {
        self.pos
    }

    pub fn buttons(&self) -> &[TabButton] {
        &self.buttons
    }

    pub fn button(&self, tab: ViewTabId) -> Option<&TabButton> {
        self.buttons.iter().find(|b| b.tab == tab)
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Groups on the top or left half of their side fill from the start
    #[inline]
    pub fn is_leading(&self) -> bool {
        self.pos.is_leading()
    }

    /// Rebuild the buttons from the group's tabs, in tab order.
    ///
    /// Buttons for tabs that stay are kept. Returns whether anything changed.
    pub fn sync_tabs<N>(&mut self, group: &ViewGroup<N>) -> bool {
        let old_order: Vec<ViewTabId> = self.buttons.iter().map(TabButton::tab).collect();
        let mut old = std::mem::take(&mut self.buttons);
        let mut changed = false;

        for tab in &group.tabs {
            let mut button = match old.iter().position(|b| b.tab == tab.id) {
                Some(i) => old.swap_remove(i),
                None => TabButton::new(tab.id, group.pos),
            };
            changed |= button.update(
                &tab.text,
                tab.graphic.as_deref(),
                group.is_selected(tab.id),
                group.pos,
            );
            self.buttons.push(button);
        }

        changed || !self.buttons.iter().map(TabButton::tab).eq(old_order)
    }

    /// Drop every button
    pub fn dispose(&mut self) {
        self.buttons.clear();
    }

    /// Preferred size: buttons side by side
    pub fn pref_size(&self, metrics: &TabBarMetrics) -> Size {
        self.buttons
            .iter()
            .map(|b| b.pref_size(metrics))
            .fold(Size::ZERO, |acc, s| {
                Size::new(acc.width + s.width, acc.height.max(s.height))
            })
    }

    /// Position the bar and its buttons.
    ///
    /// Leading bars place buttons left to right; trailing bars place the
    /// first button at the right edge and continue leftwards.
    pub fn layout(&mut self, bounds: Rect, metrics: &TabBarMetrics) {
        self.bounds = bounds;
        let leading = self.is_leading();
        let mut left = bounds.x;
        let mut right = bounds.right();

        for button in &mut self.buttons {
            let size = button.pref_size(metrics);
            let y = bounds.y + ((bounds.height - size.height) / 2.0).round();
            if leading {
                button.bounds = Rect::new(left, y, size.width, size.height);
                left += size.width;
            } else {
                right -= size.width;
                button.bounds = Rect::new(right, y, size.width, size.height);
            }
        }
    }

    /// Button under a point in the side bar's frame
    pub fn button_at(&self, x: f32, y: f32) -> Option<ViewTabId> {
        self.buttons
            .iter()
            .find(|b| b.bounds.contains(x, y))
            .map(TabButton::tab)
    }
}
