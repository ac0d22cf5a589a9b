//! Same-thread layout request tracking
//!
//! Positioning a child can make the child ask its parent for a fresh layout.
//! While a pass is running such requests are dropped: the pass already works
//! from the latest state, and a later pass picks up anything that changes
//! afterwards.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct LayoutFlags {
    performing: Cell<bool>,
    needs_layout: Cell<bool>,
}

/// Shared handle for requesting layout of one division area.
///
/// Cloned into content nodes that need to ask for re-layout.
#[derive(Debug, Clone, Default)]
pub struct LayoutHandle(Rc<LayoutFlags>);

impl LayoutHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a layout pass. Returns `false` when the request was dropped
    /// because a pass is already running.
    pub fn request_layout(&self) -> bool {
        if self.0.performing.get() {
            tracing::trace!("layout request during layout pass suppressed");
            return false;
        }
        self.0.needs_layout.set(true);
        true
    }

    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.0.needs_layout.get()
    }

    #[inline]
    pub fn is_performing(&self) -> bool {
        self.0.performing.get()
    }

    /// Start a pass, or `None` if one is already running.
    ///
    /// The returned guard ends the pass when dropped.
    pub(crate) fn begin(&self) -> Option<LayoutPass> {
        if self.0.performing.replace(true) {
            return None;
        }
        self.0.needs_layout.set(false);
        Some(LayoutPass(Rc::clone(&self.0)))
    }
}

/// A running layout pass
#[must_use]
pub(crate) struct LayoutPass(Rc<LayoutFlags>);

impl Drop for LayoutPass {
    fn drop(&mut self) {
        self.0.performing.set(false);
    }
}
