//! Update functions for the Elm-style architecture
//!
//! All state transformations of a view pane flow through these functions.

use crate::commands::Cmd;
use crate::division::ContentNode;
use crate::messages::{DividerMsg, PaneMsg};
use crate::pane::ViewTab;
use crate::skin::ViewPaneSkin;

/// Main update function - dispatches to sub-handlers
pub fn update<N>(skin: &mut ViewPaneSkin<N>, msg: PaneMsg<N>) -> Option<Cmd>
where
    N: ContentNode + Clone + PartialEq,
{
    match msg {
        PaneMsg::Resize(bounds) => {
            skin.set_bounds(bounds);
            relayout_if_needed(skin)
        }
        PaneMsg::SetContent(content) => {
            skin.set_content(content);
            relayout_if_needed(skin)
        }
        PaneMsg::Divider(m) => update_divider(skin, m),
        PaneMsg::FireTabButton(tab) => {
            let fired = skin.fire_tab_button(tab);
            reconcile(skin, fired)
        }
        PaneMsg::Click { x, y } => match skin.tab_button_at(x, y) {
            Some(tab) => {
                skin.fire_tab_button(tab);
                reconcile(skin, true)
            }
            None => None,
        },
        msg => {
            let changed = update_model(skin, msg);
            reconcile(skin, changed)
        }
    }
}

/// Apply a model message. Returns whether the model changed.
fn update_model<N>(skin: &mut ViewPaneSkin<N>, msg: PaneMsg<N>) -> bool
where
    N: ContentNode + Clone + PartialEq,
{
    let pane = skin.pane_mut();
    match msg {
        PaneMsg::AddGroup(pos) => {
            let id = pane.add_group(pos);
            tracing::debug!(group = ?id, ?pos, "view group added");
            true
        }
        PaneMsg::RemoveGroup(group) => pane.remove_group(group).is_some(),
        PaneMsg::MoveGroup { group, pos } => match pane.group_mut(group) {
            Some(g) if g.pos != pos => {
                g.pos = pos;
                true
            }
            _ => false,
        },
        PaneMsg::AddTab {
            group,
            text,
            graphic,
            content,
        } => match pane.add_tab(group, text, content) {
            Some(tab) => {
                if let Some(t) = pane.tab_mut(tab) {
                    t.graphic = graphic;
                }
                true
            }
            None => {
                tracing::debug!(?group, "tab added to unknown group ignored");
                false
            }
        },
        PaneMsg::RemoveTab(tab) => pane.remove_tab(tab).is_some(),
        PaneMsg::SelectTab(tab) => pane
            .group_of_mut(tab)
            .is_some_and(|g| !g.is_selected(tab) && g.select(Some(tab))),
        PaneMsg::DeselectGroup(group) => pane
            .group_mut(group)
            .is_some_and(|g| g.selected().is_some() && g.select(None)),
        PaneMsg::SetTabText { tab, text } => {
            update_tab(pane.tab_mut(tab), |t| t.text = text)
        }
        PaneMsg::SetTabGraphic { tab, graphic } => {
            update_tab(pane.tab_mut(tab), |t| t.graphic = graphic)
        }
        PaneMsg::SetTabContent { tab, content } => {
            update_tab(pane.tab_mut(tab), |t| t.content = content)
        }
        PaneMsg::Resize(_)
        | PaneMsg::SetContent(_)
        | PaneMsg::FireTabButton(_)
        | PaneMsg::Click { .. }
        | PaneMsg::Divider(_) => false,
    }
}

fn update_tab<N>(tab: Option<&mut ViewTab<N>>, apply: impl FnOnce(&mut ViewTab<N>)) -> bool {
    match tab {
        Some(tab) => {
            apply(tab);
            true
        }
        None => false,
    }
}

/// Handle divider drag messages
pub fn update_divider<N>(skin: &mut ViewPaneSkin<N>, msg: DividerMsg) -> Option<Cmd>
where
    N: ContentNode + Clone + PartialEq,
{
    match msg {
        DividerMsg::BeginDrag { x, y } => skin.begin_drag(x, y).map(|_| Cmd::Redraw),
        DividerMsg::UpdateDrag { x, y } => skin.drag_to(x, y).then_some(Cmd::Relayout),
        DividerMsg::EndDrag => skin.end_drag().then_some(Cmd::Redraw),
    }
}

/// Sync the skin after a model change and report what the host must do
fn reconcile<N>(skin: &mut ViewPaneSkin<N>, changed: bool) -> Option<Cmd>
where
    N: ContentNode + Clone + PartialEq,
{
    if !changed {
        return None;
    }
    skin.sync();
    relayout_if_needed(skin).or(Some(Cmd::Redraw))
}

fn relayout_if_needed<N>(skin: &ViewPaneSkin<N>) -> Option<Cmd>
where
    N: ContentNode + Clone + PartialEq,
{
    skin.needs_layout().then_some(Cmd::Relayout)
}
