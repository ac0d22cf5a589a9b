//! viewpane - dockable view pane layout
//!
//! A view pane surrounds a center content with up to eight docked views,
//! two on each side. This crate provides the division-layout engine that
//! computes their rectangles, the skin that maps view groups and tabs onto
//! side bars and slots, and an Elm-style message/update layer on top.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod debug_dump;
pub mod division;
pub mod geometry;
pub mod messages;
pub mod pane;
pub mod position;
pub mod skin;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PaneConfig;
pub use division::{ContentNode, DivisionArea, DivisionHelper, NodeRef};
pub use geometry::{Rect, Side};
pub use messages::{DividerMsg, PaneMsg};
pub use pane::{ViewGroup, ViewGroupId, ViewPane, ViewTab, ViewTabId};
pub use position::{DividerPos, EightPos, Slot};
pub use skin::{SlotOp, ViewPaneSkin};
pub use update::update;
