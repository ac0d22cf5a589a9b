//! Division area: eight peripheral slots around a center
//!
//! - [`helper`] computes the rectangles (the engine)
//! - [`content`] hosts one content node per region
//! - [`divider`] is the drag handle on a boundary
//! - [`area`] ties them together and runs layout passes
//! - [`guard`] suppresses re-entrant layout requests

pub mod area;
pub mod content;
pub mod divider;
pub mod guard;
pub mod helper;

pub use area::DivisionArea;
pub use content::{ContentArea, ContentNode, NodeRef};
pub use divider::ContentDivider;
pub use guard::LayoutHandle;
pub use helper::{Bound, DivisionHelper, EDGE_ORDER};
