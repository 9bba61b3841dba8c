//! Click-triggered busy state for call-to-action buttons.
//!
//! The control is disabled for the whole busy window, so a second click while
//! busy is rejected here rather than queued.

#[cfg(test)]
#[path = "transient_test.rs"]
mod transient_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActionPhase {
    #[default]
    Idle,
    Busy,
}

/// What the control should render right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionDisplay<'a> {
    Content(&'a str),
    Busy,
}

/// Emitted once when a busy window ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    /// 1-based count of completed clicks on this control.
    pub sequence: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransientAction {
    content: String,
    phase: ActionPhase,
    completed: u64,
}

impl TransientAction {
    /// Snapshot the control's original content.
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into(), phase: ActionPhase::Idle, completed: 0 }
    }

    pub fn phase(&self) -> ActionPhase {
        self.phase
    }

    pub fn is_disabled(&self) -> bool {
        self.phase == ActionPhase::Busy
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn display(&self) -> ActionDisplay<'_> {
        match self.phase {
            ActionPhase::Idle => ActionDisplay::Content(&self.content),
            ActionPhase::Busy => ActionDisplay::Busy,
        }
    }

    /// Enter the busy state. Returns `false` when already busy.
    pub fn click(&mut self) -> bool {
        if self.phase == ActionPhase::Busy {
            return false;
        }
        self.phase = ActionPhase::Busy;
        true
    }

    /// End the busy window, restoring the snapshot. `None` when not busy.
    pub fn finish(&mut self) -> Option<Completion> {
        if self.phase != ActionPhase::Busy {
            return None;
        }
        self.phase = ActionPhase::Idle;
        self.completed += 1;
        Some(Completion { sequence: self.completed })
    }
}
