//! Minimal component host.
//!
//! Plays the part of the UI framework the counters are written against:
//!
//! ```text
//! activate ──→ Setter ──→ update queue ──→ commit ──→ render ──→ CounterView
//!    ↑                                                              │
//!    └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **StateCell**: private per-instance state with an ordered update queue
//! - **Component**: renders a [`CounterView`] from its committed state
//! - **Mount**: keeps the latest view, routes activations to it, and
//!   re-renders after each commit that applied updates

mod control;
mod state;
mod view;

pub use control::{Control, ControlId, Handler, UnknownControl};
pub use state::{Commit, Setter, StateCell, Update};
pub use view::{Binding, CounterView};

/// A counter component as seen by the host.
pub trait Component {
    /// Heading label shown above the component.
    fn label(&self) -> &'static str;

    /// Build a view from the latest committed state.
    fn render(&self) -> CounterView;

    /// Apply queued state updates.
    fn commit(&self) -> Commit;

    /// Updates waiting for the next commit.
    fn pending(&self) -> usize;

    /// Whether [`Component::dispatch_action`] does anything.
    fn has_named_actions(&self) -> bool {
        false
    }

    /// Dispatch a named action. Components without named actions ignore it
    /// and return `false`.
    fn dispatch_action(&self, _action: &str) -> bool {
        false
    }
}

/// A mounted component instance together with its current view.
pub struct Mount {
    component: Box<dyn Component>,
    view: CounterView,
    renders: u64,
}

impl Mount {
    pub fn new(component: Box<dyn Component>) -> Self {
        let view = component.render();
        tracing::debug!(label = component.label(), "mounted");
        Self {
            component,
            view,
            renders: 1,
        }
    }

    pub fn label(&self) -> &'static str {
        self.component.label()
    }

    pub fn view(&self) -> &CounterView {
        &self.view
    }

    /// Displayed count, as of the last render.
    pub fn count(&self) -> i64 {
        self.view.count()
    }

    pub fn pending(&self) -> usize {
        self.component.pending()
    }

    /// Number of renders since mount, the initial one included.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Fire a control on the current view without committing.
    pub fn activate(&self, id: ControlId) {
        tracing::debug!(label = self.label(), control = %id, "activate");
        self.view.activate(id);
    }

    pub fn has_named_actions(&self) -> bool {
        self.component.has_named_actions()
    }

    /// Dispatch a named action without committing.
    pub fn dispatch_action(&self, action: &str) -> bool {
        self.component.dispatch_action(action)
    }

    /// Commit queued updates and re-render when anything was applied.
    pub fn flush(&mut self) -> Commit {
        let commit = self.component.commit();
        if commit.should_render() {
            self.view = self.component.render();
            self.renders += 1;
            tracing::debug!(
                label = self.label(),
                count = self.view.count(),
                ?commit,
                "re-rendered"
            );
        }
        commit
    }

    /// Activate a control and commit immediately.
    pub fn click(&mut self, id: ControlId) -> Commit {
        self.activate(id);
        self.flush()
    }
}
