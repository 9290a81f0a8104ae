//! Harness for driving a single mounted counter by control identifier.

use thiserror::Error;

use crate::host::{Component, ControlId, CounterView, Mount};

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("no control with identifier '{0}'")]
    UnknownControl(String),
}

/// Mounts one component and exposes it the way an external UI test would
/// see it: controls located by identifier, display read back as text.
pub struct CounterHarness {
    mount: Mount,
}

impl CounterHarness {
    pub fn mount<C: Component + 'static>(component: C) -> Self {
        Self {
            mount: Mount::new(Box::new(component)),
        }
    }

    /// Activate the control and let the host commit and re-render.
    pub fn click(&mut self, control: &str) -> Result<(), HarnessError> {
        let id = lookup(control)?;
        self.mount.click(id);
        Ok(())
    }

    pub fn click_times(&mut self, control: &str, times: usize) -> Result<(), HarnessError> {
        for _ in 0..times {
            self.click(control)?;
        }
        Ok(())
    }

    /// Activate the control on the current view without committing,
    /// as if the event were queued ahead of the next re-render.
    pub fn queue_click(&self, control: &str) -> Result<(), HarnessError> {
        let id = lookup(control)?;
        self.mount.activate(id);
        Ok(())
    }

    /// Dispatch a named action, if the component accepts them.
    pub fn dispatch(&mut self, action: &str) -> bool {
        let accepted = self.mount.dispatch_action(action);
        self.mount.flush();
        accepted
    }

    /// Commit queued activations and re-render.
    pub fn flush(&mut self) {
        self.mount.flush();
    }

    pub fn display_text(&self) -> String {
        self.mount.view().display_text()
    }

    pub fn count(&self) -> i64 {
        self.mount.count()
    }

    pub fn view(&self) -> &CounterView {
        self.mount.view()
    }

    pub fn renders(&self) -> u64 {
        self.mount.renders()
    }

    pub fn pending(&self) -> usize {
        self.mount.pending()
    }
}

fn lookup(control: &str) -> Result<ControlId, HarnessError> {
    control
        .parse()
        .map_err(|_| HarnessError::UnknownControl(control.to_string()))
}
