//! View pane control model
//!
//! A [`ViewPane`] holds the center content and an ordered list of view
//! groups. Each group sits at one of the eight positions and owns a list of
//! tabs, at most one of which is selected. The skin watches this model and
//! shows the selected tab of every group in its slot.

use crate::position::EightPos;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a view group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewGroupId(pub u64);

/// Unique identifier for a view tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewTabId(pub u64);

// ============================================================================
// Tabs and Groups
// ============================================================================

/// One selectable tab of a view group
#[derive(Debug, Clone)]
pub struct ViewTab<N> {
    pub id: ViewTabId,
    pub text: String,
    /// Name of the icon shown next to the text
    pub graphic: Option<String>,
    /// Node shown in the group's slot while the tab is selected
    pub content: Option<N>,
}

impl<N> ViewTab<N> {
    pub fn new(id: ViewTabId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            graphic: None,
            content: None,
        }
    }

    pub fn with_graphic(mut self, graphic: impl Into<String>) -> Self {
        self.graphic = Some(graphic.into());
        self
    }

    pub fn with_content(mut self, content: N) -> Self {
        self.content = Some(content);
        self
    }
}

/// Tabs docked at one position
#[derive(Debug, Clone)]
pub struct ViewGroup<N> {
    pub id: ViewGroupId,
    pub pos: EightPos,
    pub tabs: Vec<ViewTab<N>>,
    /// Selected tab; always one of `tabs`
    selected: Option<ViewTabId>,
}

impl<N> ViewGroup<N> {
    pub fn new(id: ViewGroupId, pos: EightPos) -> Self {
        Self {
            id,
            pos,
            tabs: Vec::new(),
            selected: None,
        }
    }

    pub fn tab(&self, id: ViewTabId) -> Option<&ViewTab<N>> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn tab_mut(&mut self, id: ViewTabId) -> Option<&mut ViewTab<N>> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn selected(&self) -> Option<ViewTabId> {
        self.selected
    }

    pub fn selected_tab(&self) -> Option<&ViewTab<N>> {
        self.selected.and_then(|id| self.tab(id))
    }

    pub fn is_selected(&self, id: ViewTabId) -> bool {
        self.selected == Some(id)
    }

    /// Select a tab of this group, or clear the selection with `None`.
    ///
    /// Returns `false` when the tab does not belong to the group.
    pub fn select(&mut self, id: Option<ViewTabId>) -> bool {
        match id {
            Some(id) if self.tab(id).is_none() => false,
            _ => {
                self.selected = id;
                true
            }
        }
    }

    /// Flip a tab's selection: selecting it deselects the previous tab,
    /// and selecting the selected tab clears the selection
    pub fn toggle(&mut self, id: ViewTabId) -> bool {
        if self.is_selected(id) {
            self.selected = None;
            true
        } else {
            self.select(Some(id))
        }
    }

    pub fn push_tab(&mut self, tab: ViewTab<N>) {
        self.tabs.push(tab);
    }

    /// Remove a tab, dropping the selection if it was selected
    pub fn remove_tab(&mut self, id: ViewTabId) -> Option<ViewTab<N>> {
        let index = self.tabs.iter().position(|t| t.id == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.tabs.remove(index))
    }
}

// ============================================================================
// View Pane
// ============================================================================

/// Control model: center content plus the ordered view groups
#[derive(Debug, Clone)]
pub struct ViewPane<N> {
    content: Option<N>,
    groups: Vec<ViewGroup<N>>,
    next_group_id: u64,
    next_tab_id: u64,
}

impl<N> Default for ViewPane<N> {
    fn default() -> Self {
        Self {
            content: None,
            groups: Vec::new(),
            next_group_id: 1,
            next_tab_id: 1,
        }
    }
}

impl<N> ViewPane<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> Option<&N> {
        self.content.as_ref()
    }

    /// Replace the center content, returning the previous node
    pub fn set_content(&mut self, content: Option<N>) -> Option<N> {
        std::mem::replace(&mut self.content, content)
    }

    pub fn groups(&self) -> &[ViewGroup<N>] {
        &self.groups
    }

    pub fn group(&self, id: ViewGroupId) -> Option<&ViewGroup<N>> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn group_mut(&mut self, id: ViewGroupId) -> Option<&mut ViewGroup<N>> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    /// Append an empty group at `pos`
    pub fn add_group(&mut self, pos: EightPos) -> ViewGroupId {
        let id = ViewGroupId(self.next_group_id);
        self.next_group_id += 1;
        self.groups.push(ViewGroup::new(id, pos));
        id
    }

    pub fn remove_group(&mut self, id: ViewGroupId) -> Option<ViewGroup<N>> {
        let index = self.groups.iter().position(|g| g.id == id)?;
        Some(self.groups.remove(index))
    }

    /// Append a tab to a group. Returns `None` if the group does not exist.
    pub fn add_tab(
        &mut self,
        group: ViewGroupId,
        text: impl Into<String>,
        content: Option<N>,
    ) -> Option<ViewTabId> {
        let id = ViewTabId(self.next_tab_id);
        let group = self.group_mut(group)?;
        let mut tab = ViewTab::new(id, text);
        tab.content = content;
        group.push_tab(tab);
        self.next_tab_id += 1;
        Some(id)
    }

    /// Group owning a tab
    pub fn group_of(&self, tab: ViewTabId) -> Option<&ViewGroup<N>> {
        self.groups.iter().find(|g| g.tab(tab).is_some())
    }

    pub fn group_of_mut(&mut self, tab: ViewTabId) -> Option<&mut ViewGroup<N>> {
        self.groups.iter_mut().find(|g| g.tab(tab).is_some())
    }

    pub fn tab(&self, id: ViewTabId) -> Option<&ViewTab<N>> {
        self.group_of(id).and_then(|g| g.tab(id))
    }

    pub fn tab_mut(&mut self, id: ViewTabId) -> Option<&mut ViewTab<N>> {
        self.group_of_mut(id).and_then(|g| g.tab_mut(id))
    }

    pub fn remove_tab(&mut self, id: ViewTabId) -> Option<ViewTab<N>> {
        self.group_of_mut(id).and_then(|g| g.remove_tab(id))
    }
}
