use std::fmt;

use super::control::{Control, ControlId, Handler};

/// A control paired with the handler it invokes.
#[derive(Clone)]
pub struct Binding {
    control: Control,
    handler: Handler,
}

impl Binding {
    pub fn new(control: Control, handler: Handler) -> Self {
        Self { control, handler }
    }
}

/// Output of a single render: what the counter displays and the handlers
/// wired to its two controls at that moment.
pub struct CounterView {
    label: &'static str,
    count: i64,
    decrement: Binding,
    increment: Binding,
}

impl CounterView {
    pub fn new(label: &'static str, count: i64, decrement: Binding, increment: Binding) -> Self {
        Self {
            label,
            count,
            decrement,
            increment,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn display_text(&self) -> String {
        format!("Count: {}", self.count)
    }

    pub fn control(&self, id: ControlId) -> &Control {
        &self.binding(id).control
    }

    pub fn handler(&self, id: ControlId) -> &Handler {
        &self.binding(id).handler
    }

    /// Fire the activation handler of the given control.
    pub fn activate(&self, id: ControlId) {
        let binding = self.binding(id);
        (binding.handler)(&binding.control);
    }

    fn binding(&self, id: ControlId) -> &Binding {
        match id {
            ControlId::Decrement => &self.decrement,
            ControlId::Increment => &self.increment,
        }
    }
}

impl fmt::Debug for CounterView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterView")
            .field("label", &self.label)
            .field("count", &self.count)
            .field("decrement", &self.decrement.control)
            .field("increment", &self.increment.control)
            .finish()
    }
}
