use crate::config::{CommitMode, Config};
use crate::counters::RootComposer;
use crate::host::{ControlId, Mount};

/// Action name sent by the "unknown action" key. Not a recognized
/// discriminant, so the reducer leaves its state alone.
pub const UNRECOGNIZED_ACTION: &str = "reset";

pub struct App {
    should_quit: bool,
    focus: usize,
    commit_mode: CommitMode,
    root: RootComposer,
}

impl App {
    pub fn new(root: RootComposer, commit_mode: CommitMode) -> Self {
        Self {
            should_quit: false,
            focus: 0,
            commit_mode,
            root,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(RootComposer::from_config(config), config.ui.commit_mode)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn commit_mode(&self) -> CommitMode {
        self.commit_mode
    }

    pub fn root(&self) -> &RootComposer {
        &self.root
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<&Mount> {
        self.root.get(self.focus)
    }

    pub fn focus_next(&mut self) {
        let len = self.root.len();
        if len > 0 {
            self.focus = (self.focus + 1) % len;
        }
    }

    pub fn focus_prev(&mut self) {
        let len = self.root.len();
        if len > 0 {
            self.focus = if self.focus == 0 { len - 1 } else { self.focus - 1 };
        }
    }

    /// Activate a control on the focused counter.
    pub fn activate(&mut self, id: ControlId) {
        let commit_mode = self.commit_mode;
        let Some(mount) = self.root.get_mut(self.focus) else {
            return;
        };
        mount.activate(id);
        if commit_mode == CommitMode::PerEvent {
            mount.flush();
        }
    }

    /// Send an unrecognized named action to the focused counter. Returns
    /// whether the counter accepts named actions.
    pub fn dispatch_unrecognized(&mut self) -> bool {
        let commit_mode = self.commit_mode;
        let Some(mount) = self.root.get_mut(self.focus) else {
            return false;
        };
        let accepted = mount.dispatch_action(UNRECOGNIZED_ACTION);
        if accepted && commit_mode == CommitMode::PerEvent {
            mount.flush();
        }
        accepted
    }

    pub fn on_tick(&mut self) {
        if self.commit_mode == CommitMode::PerTick {
            let rendered = self.root.flush_all();
            if rendered > 0 {
                tracing::debug!(rendered, "tick commit");
            }
        }
    }
}
