//! Command types for the Elm-style architecture
//!
//! Commands tell the host what to do after an update.

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Lay out the pane again (`ViewPaneSkin::layout_if_needed`), then redraw
    Relayout,
    /// Redraw without changing any bounds
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a layout pass
    pub fn needs_layout(&self) -> bool {
        match self {
            Cmd::Relayout => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_layout),
            Cmd::None | Cmd::Redraw => false,
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Relayout | Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
        }
    }
}
