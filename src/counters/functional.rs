use std::rc::Rc;

use crate::host::{Binding, Commit, Component, Control, CounterView, Handler, StateCell};

/// Counter whose handlers enqueue a function of the latest committed state.
pub struct FunctionalCounter {
    count: StateCell<i64>,
}

impl FunctionalCounter {
    pub const LABEL: &'static str = "Functional";

    pub fn new() -> Self {
        Self {
            count: StateCell::new(0),
        }
    }
}

impl Default for FunctionalCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FunctionalCounter {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn render(&self) -> CounterView {
        // Handlers are rebuilt on every render.
        let setter = self.count.setter();
        let decrement: Handler =
            Rc::new(move |_: &Control| setter.update(|count| count.saturating_sub(1)));
        let setter = self.count.setter();
        let increment: Handler =
            Rc::new(move |_: &Control| setter.update(|count| count.saturating_add(1)));

        CounterView::new(
            Self::LABEL,
            self.count.get(),
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
