//! Message types for the Elm-style architecture
//!
//! All changes to a view pane flow through these message types.

use crate::geometry::Rect;
use crate::pane::{ViewGroupId, ViewTabId};
use crate::position::EightPos;

/// Divider drag messages, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DividerMsg {
    /// Pointer pressed; starts a drag if it lands on a divider
    BeginDrag { x: f32, y: f32 },
    /// Pointer moved while pressed
    UpdateDrag { x: f32, y: f32 },
    /// Pointer released
    EndDrag,
}

/// Messages for one view pane
#[derive(Debug, Clone)]
pub enum PaneMsg<N> {
    /// New bounds for the whole pane
    Resize(Rect),
    /// Replace the center content
    SetContent(Option<N>),

    // === Groups ===
    /// Append an empty group at a position
    AddGroup(EightPos),
    RemoveGroup(ViewGroupId),
    /// Dock a group at another position
    MoveGroup { group: ViewGroupId, pos: EightPos },

    // === Tabs ===
    /// Append a tab to a group
    AddTab {
        group: ViewGroupId,
        text: String,
        graphic: Option<String>,
        content: Option<N>,
    },
    RemoveTab(ViewTabId),
    /// Select a tab, deselecting its siblings
    SelectTab(ViewTabId),
    /// Clear a group's selection
    DeselectGroup(ViewGroupId),
    SetTabText { tab: ViewTabId, text: String },
    SetTabGraphic { tab: ViewTabId, graphic: Option<String> },
    SetTabContent { tab: ViewTabId, content: Option<N> },

    // === Pointer ===
    /// Toggle a tab's selection, as clicking its button does
    FireTabButton(ViewTabId),
    /// Click at a screen point; fires the tab button under it, if any
    Click { x: f32, y: f32 },
    Divider(DividerMsg),
}
