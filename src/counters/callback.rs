use std::rc::Rc;

use crate::host::{Binding, Commit, Component, Control, CounterView, Handler, StateCell};

/// Functional-update counter whose handlers are built once at mount and
/// handed out unchanged by every render.
pub struct CallbackCounter {
    count: StateCell<i64>,
    decrement: Handler,
    increment: Handler,
}

impl CallbackCounter {
    pub const LABEL: &'static str = "Callback";

    pub fn new() -> Self {
        let count = StateCell::new(0_i64);

        let setter = count.setter();
        let decrement: Handler =
            Rc::new(move |_: &Control| setter.update(|count| count.saturating_sub(1)));
        let setter = count.setter();
        let increment: Handler =
            Rc::new(move |_: &Control| setter.update(|count| count.saturating_add(1)));

        Self {
            count,
            decrement,
            increment,
        }
    }
}

impl Default for CallbackCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CallbackCounter {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn render(&self) -> CounterView {
        CounterView::new(
            Self::LABEL,
            self.count.get(),
            Binding::new(Control::decrement(), Rc::clone(&self.decrement)),
            Binding::new(Control::increment(), Rc::clone(&self.increment)),
        )
    }

    fn commit(&self) -> Commit {
        self.count.commit()
    }

    fn pending(&self) -> usize {
        self.count.pending()
    }
}
