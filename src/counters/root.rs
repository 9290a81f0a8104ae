use std::fmt::Write as _;

use crate::config::Config;
use crate::host::{Component, Mount};

use super::{
    BasicCounter, CallbackCounter, DataAttributeCounter, FunctionalCounter, ReducerCounter,
};

/// Mounts one instance of every counter variant, in display order.
pub struct RootComposer {
    mounts: Vec<Mount>,
}

impl RootComposer {
    pub const LABELS: [&'static str; 5] = [
        BasicCounter::LABEL,
        FunctionalCounter::LABEL,
        CallbackCounter::LABEL,
        DataAttributeCounter::LABEL,
        ReducerCounter::LABEL,
    ];

    pub fn new() -> Self {
        Self::with_data_attribute(DataAttributeCounter::new())
    }

    pub fn from_config(config: &Config) -> Self {
        let deltas = &config.data_attribute;
        Self::with_data_attribute(DataAttributeCounter::with_deltas(
            Some(deltas.decrement_delta.clone()),
            Some(deltas.increment_delta.clone()),
        ))
    }

    fn with_data_attribute(data_attribute: DataAttributeCounter) -> Self {
        let components: [Box<dyn Component>; 5] = [
            Box::new(BasicCounter::new()),
            Box::new(FunctionalCounter::new()),
            Box::new(CallbackCounter::new()),
            Box::new(data_attribute),
            Box::new(ReducerCounter::new()),
        ];
        Self {
            mounts: components.into_iter().map(Mount::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }

    pub fn mounts(&self) -> &[Mount] {
        &self.mounts
    }

    pub fn get(&self, index: usize) -> Option<&Mount> {
        self.mounts.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Mount> {
        self.mounts.get_mut(index)
    }

    pub fn find(&self, label: &str) -> Option<&Mount> {
        self.mounts.iter().find(|mount| mount.label() == label)
    }

    pub fn find_mut(&mut self, label: &str) -> Option<&mut Mount> {
        self.mounts.iter_mut().find(|mount| mount.label() == label)
    }

    /// Total queued updates across all counters.
    pub fn pending(&self) -> usize {
        self.mounts.iter().map(Mount::pending).sum()
    }

    /// Commit every counter. Returns how many re-rendered.
    pub fn flush_all(&mut self) -> usize {
        self.mounts
            .iter_mut()
            .filter(|mount| mount.pending() > 0)
            .map(|mount| mount.flush())
            .filter(|commit| commit.should_render())
            .count()
    }

    /// Plain-text rendering: each label followed by its display line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for mount in &self.mounts {
            let _ = writeln!(out, "{}", mount.label());
            let _ = writeln!(out, "  {}", mount.view().display_text());
        }
        out
    }
}

impl Default for RootComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ControlId;

    #[test]
    fn mounts_variants_in_fixed_order() {
        let root = RootComposer::new();
        let labels: Vec<_> = root.mounts().iter().map(Mount::label).collect();
        assert_eq!(labels, RootComposer::LABELS);
    }

    #[test]
    fn counters_do_not_share_state() {
        let mut root = RootComposer::new();
        if let Some(mount) = root.find_mut("Functional") {
            mount.click(ControlId::Increment);
        }
        for mount in root.mounts() {
            let expected = if mount.label() == "Functional" { 1 } else { 0 };
            assert_eq!(mount.count(), expected, "{}", mount.label());
        }
    }

    #[test]
    fn render_text_lists_every_counter() {
        let root = RootComposer::new();
        let text = root.render_text();
        assert!(text.starts_with("Basic\n  Count: 0\n"));
        assert_eq!(text.matches("Count: 0").count(), 5);
        assert!(text.ends_with("Reducer\n  Count: 0\n"));
    }

    #[test]
    fn flush_all_only_counts_changed_counters() {
        let mut root = RootComposer::new();
        if let Some(mount) = root.get(0) {
            mount.activate(ControlId::Increment);
        }
        if let Some(mount) = root.get(4) {
            mount.activate(ControlId::Decrement);
        }
        assert_eq!(root.pending(), 2);
        assert_eq!(root.flush_all(), 2);
        assert_eq!(root.pending(), 0);
    }
}
