use std::rc::Rc;

use crate::host::{Binding, Commit, Component, Control, CounterView, Handler, StateCell};

/// Attribute key holding the signed delta of a control.
pub const DELTA_ATTRIBUTE: &str = "delta";

pub const DEFAULT_DECREMENT_DELTA: &str = "-1";
pub const DEFAULT_INCREMENT_DELTA: &str = "+1";

/// Parse a delta attribute. Missing or non-integer input yields `0`.
pub fn parse_delta(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok()).unwrap_or(0)
}

/// Counter with one handler shared by both controls; the amount comes from
/// the `delta` attribute of whichever control fired.
pub struct DataAttributeCounter {
    count: StateCell<i64>,
    decrement: Control,
    increment: Control,
    handler: Handler,
}

impl DataAttributeCounter {
    pub const LABEL: &'static str = "DataAttribute";

    pub fn new() -> Self {
        Self::with_deltas(
            Some(DEFAULT_DECREMENT_DELTA.to_string()),
            Some(DEFAULT_INCREMENT_DELTA.to_string()),
        )
    }

    /// Build the counter with explicit attribute values. `None` leaves the
    /// attribute off the control entirely.
    pub fn with_deltas(decrement: Option<String>, increment: Option<String>) -> Self {
        let count = StateCell::new(0_i64);
        let setter = count.setter();
        let handler: Handler = Rc::new(move |control: &Control| {
            let raw = control.data(DELTA_ATTRIBUTE);
            let delta = parse_delta(raw);
            if delta == 0 {
                tracing::debug!(control = %control.id(), ?raw, "delta treated as zero");
            }
            setter.update(move |count| count.saturating_add(delta));
        });

        Self {
            count,
            decrement: with_delta(Control::decrement(), decrement),
            increment: with_delta(Control::increment(), increment),
            handler,
        }
    }
}

fn with_delta(control: Control, delta: Option<String>) -> Control {
    match delta {
        Some(delta) => control.with_data(DELTA_ATTRIBUTE, delta),
        None => control,
    }
}

impl Default for DataAttributeCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DataAttributeCounter {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn render(&self) -> CounterView {
        CounterView::new(
            Self::LABEL,
            self.count.get(),
            Binding::new(self.decrement.clone(), Rc::clone(&self.handler)),
            Binding::new(self.increment.clone(), Rc::clone(&self.handler)),
        )
    }

    fn commit(&self) -> Commit {
        self.count.commit()
    }

    fn pending(&self) -> usize {
        self.count.pending()
    }
}
