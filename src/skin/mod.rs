//! View pane skin
//!
//! The skin turns a [`ViewPane`] model into laid-out regions:
//!
//! ```text
//! SideBarArea
//! ├── SideBar (top/left/bottom/right)
//! │   └── TabButtonBar (one per view group) ── TabButton per tab
//! └── DivisionArea (center)
//!     ├── ContentArea per slot, showing the selected tab's content
//!     ├── ContentArea for the pane's content
//!     └── ContentDivider per live boundary
//! ```
//!
//! After changing the model, call [`ViewPaneSkin::sync`] to bring the skin
//! up to date, then [`ViewPaneSkin::layout_if_needed`] before drawing.

pub mod side_bar;
pub mod tab_bar;

pub use side_bar::{SideBar, SideBarArea};
pub use tab_bar::{TabButton, TabButtonBar, TextAlignment};

use crate::config::{PaneConfig, TabBarMetrics};
use crate::division::{ContentNode, DivisionArea};
use crate::geometry::{Rect, Size};
use crate::pane::{ViewGroup, ViewGroupId, ViewPane, ViewTabId};
use crate::position::{DividerPos, EightPos, Slot};

/// One change applied by [`ViewPaneSkin::sync`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOp {
    /// A tab bar for `group` was placed in the side bar of `pos`
    Attach { group: ViewGroupId, pos: EightPos },
    /// The tab bar for `group` was removed and disposed
    Detach { group: ViewGroupId, pos: EightPos },
    /// The content of `tab` was pushed into slot `pos`
    Show { pos: EightPos, tab: ViewTabId },
    /// Slot `pos` was emptied
    Clear { pos: EightPos },
    /// The pane's center content was replaced
    Center,
}

/// Content currently pushed into a slot
#[derive(Debug, Clone, PartialEq)]
struct Shown<N> {
    tab: ViewTabId,
    content: N,
}

/// Skin of one view pane: model, side bars and division area
#[derive(Debug)]
pub struct ViewPaneSkin<N> {
    pane: ViewPane<N>,
    side_bars: SideBarArea,
    division: DivisionArea<N>,
    metrics: TabBarMetrics,
    /// What each slot shows, indexed by [`EightPos::ordinal`]
    shown: [Option<Shown<N>>; 8],
    bounds: Rect,
    /// Side bars must be laid out again
    bars_dirty: bool,
    /// Divider being dragged
    drag: Option<DividerPos>,
}

impl<N: ContentNode + Clone + PartialEq> ViewPaneSkin<N> {
    pub fn new(config: &PaneConfig) -> Self {
        Self::with_pane(ViewPane::new(), config)
    }

    /// Skin an existing model
    pub fn with_pane(pane: ViewPane<N>, config: &PaneConfig) -> Self {
        let mut skin = Self {
            pane,
            side_bars: SideBarArea::new(config.side_bar_insets),
            division: DivisionArea::new(config),
            metrics: config.tab_bar,
            shown: std::array::from_fn(|_| None),
            bounds: Rect::ZERO,
            bars_dirty: true,
            drag: None,
        };
        skin.sync();
        skin
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn pane(&self) -> &ViewPane<N> {
        &self.pane
    }

    /// Mutable model access. Call [`Self::sync`] afterwards.
    #[inline]
    pub fn pane_mut(&mut self) -> &mut ViewPane<N> {
        &mut self.pane
    }

    #[inline]
    pub fn side_bars(&self) -> &SideBarArea {
        &self.side_bars
    }

    #[inline]
    pub fn division(&self) -> &DivisionArea<N> {
        &self.division
    }

    #[inline]
    pub fn division_mut(&mut self) -> &mut DivisionArea<N> {
        &mut self.division
    }

    #[inline]
    pub fn metrics(&self) -> &TabBarMetrics {
        &self.metrics
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Tab whose content slot `pos` shows
    pub fn shown_tab(&self, pos: EightPos) -> Option<ViewTabId> {
        self.shown[pos.ordinal()].as_ref().map(|s| s.tab)
    }

    /// Tab bar serving slot `pos`
    pub fn tab_bar(&self, pos: EightPos) -> Option<&TabButtonBar> {
        self.side_bars
            .side_bar(pos.primary())
            .and_then(|s| s.bar(pos.is_leading()))
    }

    // =========================================================================
    // Reconciliation
    // =========================================================================

    /// Replace the center content in both the model and the division area
    pub fn set_content(&mut self, content: Option<N>) -> Option<N> {
        self.division.set_content(content.clone());
        self.pane.set_content(content)
    }

    /// Bring side bars and slots in line with the model.
    ///
    /// When several groups share a position the last one wins. Returns the
    /// operations applied, empty when the skin was already up to date.
    pub fn sync(&mut self) -> Vec<SlotOp> {
        let Self {
            pane,
            side_bars,
            division,
            shown,
            bars_dirty,
            ..
        } = self;
        let mut ops = Vec::new();

        if division.center().and_then(|c| c.content()) != pane.content() {
            division.set_content(pane.content().cloned());
            ops.push(SlotOp::Center);
        }

        let mut owners: [Option<&ViewGroup<N>>; 8] = [None; 8];
        for group in pane.groups() {
            owners[group.pos.ordinal()] = Some(group);
        }

        for pos in EightPos::ALL {
            let slot = SlotSync {
                pos,
                side_bars: &mut *side_bars,
                division: &mut *division,
                shown: &mut shown[pos.ordinal()],
                ops: &mut ops,
            };
            *bars_dirty |= slot.run(owners[pos.ordinal()]);
        }

        if !ops.is_empty() {
            *bars_dirty = true;
            tracing::debug!(ops = ops.len(), "view pane reconciled");
        }
        ops
    }

    /// Toggle the selection of a tab, as clicking its button does
    pub fn fire_tab_button(&mut self, tab: ViewTabId) -> bool {
        let Some(group) = self.pane.group_of_mut(tab) else {
            return false;
        };
        group.toggle(tab);
        tracing::debug!(?tab, selected = group.is_selected(tab), "tab button fired");
        true
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Preferred size of the whole pane
    pub fn pref_size(&self) -> Size {
        self.side_bars
            .pref_size(self.division.pref_size(), &self.metrics)
    }

    /// Set the pane's bounds without laying out
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.bars_dirty = true;
        }
    }

    /// Set the pane's bounds and lay out whatever changed
    pub fn resize_relocate(&mut self, bounds: Rect) {
        self.set_bounds(bounds);
        self.layout_if_needed();
    }

    pub fn needs_layout(&self) -> bool {
        self.bars_dirty || self.division.needs_layout()
    }

    /// Run a layout pass if anything asked for one. Returns whether it ran.
    pub fn layout_if_needed(&mut self) -> bool {
        if self.needs_layout() {
            self.layout_children();
            true
        } else {
            false
        }
    }

    /// Lay out side bars, then the division area inside the remaining center
    pub fn layout_children(&mut self) {
        let center = self.side_bars.layout(self.bounds, &self.metrics);
        self.bars_dirty = false;
        self.division.resize_relocate(center);
    }

    // =========================================================================
    // Pointer Input
    // =========================================================================

    pub fn tab_button_at(&self, x: f32, y: f32) -> Option<ViewTabId> {
        self.side_bars.button_at(x, y)
    }

    pub fn divider_at(&self, x: f32, y: f32) -> Option<DividerPos> {
        self.division.divider_at(x, y)
    }

    pub fn region_at(&self, x: f32, y: f32) -> Option<Slot> {
        self.division.region_at(x, y)
    }

    /// Start dragging the divider under `(x, y)`, if there is one
    pub fn begin_drag(&mut self, x: f32, y: f32) -> Option<DividerPos> {
        let pos = self.division.divider_at(x, y)?;
        self.division.begin_divider_drag(pos, x, y);
        self.drag = Some(pos);
        Some(pos)
    }

    /// Continue the active drag. Returns whether a re-layout is needed.
    pub fn drag_to(&mut self, x: f32, y: f32) -> bool {
        match self.drag {
            Some(pos) if self.division.divider(pos).is_some() => {
                self.division.drag_divider(pos, x, y)
            }
            Some(_) => {
                // Divider vanished mid-drag
                self.drag = None;
                false
            }
            None => false,
        }
    }

    /// Finish the active drag. Returns whether one was active.
    pub fn end_drag(&mut self) -> bool {
        match self.drag.take() {
            Some(pos) => {
                self.division.end_divider_drag(pos);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn dragging(&self) -> Option<DividerPos> {
        self.drag
    }
}

/// Reconciliation of one slot
struct SlotSync<'a, N> {
    pos: EightPos,
    side_bars: &'a mut SideBarArea,
    division: &'a mut DivisionArea<N>,
    shown: &'a mut Option<Shown<N>>,
    ops: &'a mut Vec<SlotOp>,
}

impl<N: ContentNode + Clone + PartialEq> SlotSync<'_, N> {
    /// Returns whether the slot's tab buttons changed
    fn run(mut self, owner: Option<&ViewGroup<N>>) -> bool {
        let pos = self.pos;
        let leading = pos.is_leading();
        let current = self
            .side_bars
            .side_bar(pos.primary())
            .and_then(|s| s.bar(leading))
            .map(TabButtonBar::group);

        if current != owner.map(|g| g.id) {
            if let Some(group) = current {
                self.show(None);
                if let Some(mut bar) = self
                    .side_bars
                    .side_bar_mut(pos.primary())
                    .and_then(|s| s.set_bar(leading, None))
                {
                    bar.dispose();
                }
                tracing::debug!(?group, ?pos, "tab bar detached");
                self.ops.push(SlotOp::Detach { group, pos });
            }
            if let Some(group) = owner {
                self.side_bars
                    .side_bar_or_insert(pos.primary())
                    .set_bar(leading, Some(TabButtonBar::new(group.id, pos)));
                tracing::debug!(group = ?group.id, ?pos, "tab bar attached");
                self.ops.push(SlotOp::Attach { group: group.id, pos });
            }
        }

        let Some(group) = owner else {
            return false;
        };

        let buttons_changed = self
            .side_bars
            .side_bar_mut(pos.primary())
            .and_then(|s| s.bar_mut(leading))
            .is_some_and(|bar| bar.sync_tabs(group));

        let wanted = group.selected_tab().and_then(|tab| {
            tab.content.clone().map(|content| Shown {
                tab: tab.id,
                content,
            })
        });
        self.show(wanted);
        buttons_changed
    }

    /// Push `wanted` into the slot unless it already shows it
    fn show(&mut self, wanted: Option<Shown<N>>) {
        if *self.shown == wanted {
            return;
        }
        match &wanted {
            Some(shown) => {
                self.division.set_view(self.pos, Some(shown.content.clone()));
                self.ops.push(SlotOp::Show {
                    pos: self.pos,
                    tab: shown.tab,
                });
            }
            None => {
                self.division.set_view(self.pos, None);
                self.ops.push(SlotOp::Clear { pos: self.pos });
            }
        }
        *self.shown = wanted;
    }
}
