//! Content areas: the leaves that host one content node each

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::{snap_size, Insets, Rect, Size};
use crate::position::EightPos;

/// Something that can be shown inside a content area.
///
/// Content is owned by the caller; a content area only positions it.
pub trait ContentNode {
    /// Apply the rectangle the layout assigned to this node
    fn resize_relocate(&mut self, bounds: Rect);

    /// Size the node would like to have
    fn pref_size(&self) -> Size {
        Size::ZERO
    }

    /// Unmanaged nodes are not positioned and contribute no preferred size
    fn is_managed(&self) -> bool {
        true
    }
}

/// Shared handle to a content node.
///
/// Handles compare by identity, so two handles are equal only when they
/// point at the same node.
#[derive(Debug, Default)]
pub struct NodeRef<T>(Rc<RefCell<T>>);

impl<T> NodeRef<T> {
    pub fn new(node: T) -> Self {
        Self(Rc::new(RefCell::new(node)))
    }

    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for NodeRef<T> {}

impl<T: ContentNode> ContentNode for NodeRef<T> {
    fn resize_relocate(&mut self, bounds: Rect) {
        self.0.borrow_mut().resize_relocate(bounds);
    }

    fn pref_size(&self) -> Size {
        self.0.borrow().pref_size()
    }

    fn is_managed(&self) -> bool {
        self.0.borrow().is_managed()
    }
}

/// Leaf region hosting at most one content node.
///
/// An area without content is neither managed nor visible, so the division
/// area skips it when positioning children.
#[derive(Debug)]
pub struct ContentArea<N> {
    /// Slot this area serves; `None` for the center
    pos: Option<EightPos>,
    content: Option<N>,
    managed: bool,
    visible: bool,
    bounds: Rect,
    insets: Insets,
}

impl<N: ContentNode> ContentArea<N> {
    pub fn new(pos: Option<EightPos>) -> Self {
        Self {
            pos,
            content: None,
            managed: false,
            visible: false,
            bounds: Rect::ZERO,
            insets: Insets::NONE,
        }
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    #[inline]
    pub fn pos(&self) -> Option<EightPos> {
        self.pos
    }

    #[inline]
    pub fn content(&self) -> Option<&N> {
        self.content.as_ref()
    }

    #[inline]
    pub fn content_mut(&mut self) -> Option<&mut N> {
        self.content.as_mut()
    }

    #[inline]
    pub fn is_managed(&self) -> bool {
        self.managed
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Rectangle from the last layout pass
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Replace the hosted node, returning the previous one.
    ///
    /// Passing `None` hides the area and takes it out of layout.
    pub fn set_content(&mut self, content: Option<N>) -> Option<N> {
        let previous = std::mem::replace(&mut self.content, content);
        let has_content = self.content.is_some();
        self.managed = has_content;
        self.visible = has_content;
        previous
    }

    /// Preferred size: the content's preferred size plus insets
    pub fn pref_size(&self) -> Size {
        let content = match &self.content {
            Some(node) if node.is_managed() => node.pref_size(),
            _ => Size::ZERO,
        };
        Size::new(
            self.insets.horizontal() + snap_size(content.width, true),
            self.insets.vertical() + snap_size(content.height, true),
        )
    }

    /// Apply the rectangle computed by the engine, then position the content
    pub fn resize_relocate(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.layout_children();
    }

    fn layout_children(&mut self) {
        let inner = self.bounds.inset(&self.insets);
        if let Some(node) = self.content.as_mut() {
            if node.is_managed() {
                node.resize_relocate(inner);
            }
        }
    }
}
