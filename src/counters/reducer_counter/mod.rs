//! Reducer counter feature module.
//!
//! Uses MVI (Model-View-Intent):
//! - `state.rs` - `{ count }`
//! - `intent.rs` - `increment`, `decrement`, and a catch-all for anything else
//! - `reducer.rs` - state transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;

use std::rc::Rc;

use crate::host::{Binding, Commit, Component, Control, CounterView, Handler, Setter, StateCell};
use crate::ui::mvi::Reducer;

/// Stable dispatch entry point. Every intent is queued as a reducer step
/// over the latest committed state.
#[derive(Clone)]
pub struct Dispatch {
    setter: Setter<CounterState>,
}

impl Dispatch {
    pub fn send(&self, intent: CounterIntent) {
        match &intent {
            CounterIntent::Unrecognized(name) => {
                tracing::debug!(action = %name, "unrecognized action, state will be unchanged")
            }
            _ => tracing::debug!(action = %intent, "dispatch"),
        }
        self.setter.update(move |state| CounterReducer::reduce(*state, intent));
    }
}

pub struct ReducerCounter {
    state: StateCell<CounterState>,
    dispatch: Dispatch,
}

impl ReducerCounter {
    pub const LABEL: &'static str = "Reducer";

    pub fn new() -> Self {
        let state = StateCell::new(CounterState::default());
        let dispatch = Dispatch {
            setter: state.setter(),
        };
        Self { state, dispatch }
    }

    pub fn dispatcher(&self) -> Dispatch {
        self.dispatch.clone()
    }

    pub fn dispatch(&self, intent: CounterIntent) {
        self.dispatch.send(intent);
    }

    pub fn dispatch_named(&self, name: &str) {
        self.dispatch(CounterIntent::from_name(name));
    }

    pub fn state(&self) -> CounterState {
        self.state.get()
    }

    fn handler(&self, intent: CounterIntent) -> Handler {
        let dispatch = self.dispatcher();
        Rc::new(move |_: &Control| dispatch.send(intent.clone()))
    }
}

impl Default for ReducerCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ReducerCounter {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn render(&self) -> CounterView {
        CounterView::new(
            Self::LABEL,
            self.state.get().count,
            Binding::new(Control::decrement(), self.handler(CounterIntent::Decrement)),
            Binding::new(Control::increment(), self.handler(CounterIntent::Increment)),
        )
    }

    fn commit(&self) -> Commit {
        self.state.commit()
    }

    fn pending(&self) -> usize {
        self.state.pending()
    }

    fn has_named_actions(&self) -> bool {
        true
    }

    fn dispatch_action(&self, action: &str) -> bool {
        self.dispatch_named(action);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_dispatch_matches_enum_dispatch() {
        let by_name = ReducerCounter::new();
        by_name.dispatch_named("increment");
        by_name.commit();

        let by_enum = ReducerCounter::new();
        by_enum.dispatch(CounterIntent::Increment);
        by_enum.commit();

        assert_eq!(by_name.state(), by_enum.state());
        assert_eq!(by_name.state().count, 1);
    }

    #[test]
    fn discriminants_are_case_sensitive() {
        let counter = ReducerCounter::new();
        counter.dispatch_named("INCREMENT");
        counter.dispatch_named("reset");
        counter.commit();
        assert_eq!(counter.state(), CounterState::default());
    }

    #[test]
    fn queued_dispatches_apply_in_order() {
        let counter = ReducerCounter::new();
        let view = counter.render();
        view.activate(crate::host::ControlId::Increment);
        view.activate(crate::host::ControlId::Increment);
        view.activate(crate::host::ControlId::Decrement);
        counter.commit();
        assert_eq!(counter.state().count, 1);
    }
}
