use std::rc::Rc;

use crate::host::{Binding, Commit, Component, Control, CounterView, Handler, StateCell};

/// Counter that replaces its state with a value captured at render time.
///
/// Both handlers close over the count of the render that created them, so
/// activations queued before the next re-render all write the same value.
pub struct BasicCounter {
    count: StateCell<i64>,
}

impl BasicCounter {
    pub const LABEL: &'static str = "Basic";

    pub fn new() -> Self {
        Self {
            count: StateCell::new(0),
        }
    }
}

impl Default for BasicCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for BasicCounter {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn render(&self) -> CounterView {
        let count = self.count.get();

        let setter = self.count.setter();
        let decrement: Handler = Rc::new(move |_: &Control| setter.set(count.saturating_sub(1)));
        let setter = self.count.setter();
        let increment: Handler = Rc::new(move |_: &Control| setter.set(count.saturating_add(1)));

        CounterView::new(
            Self::LABEL,
            count,
            Binding::new(Control::decrement(), decrement),
            Binding::new(Control::increment(), increment),
        )
    }

    fn commit(&self) -> Commit {
        self.count.commit()
    }

    fn pending(&self) -> usize {
        self.count.pending()
    }
}
