//! Per-instance state container with an ordered update queue.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

/// A queued state update.
///
/// `Replace` carries a value computed when the handler ran, `Apply` carries a
/// function evaluated against the latest committed state at commit time.
pub enum Update<T> {
    Replace(T),
    Apply(Box<dyn FnOnce(&T) -> T>),
}

impl<T: fmt::Debug> fmt::Debug for Update<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Update::Replace(value) => f.debug_tuple("Replace").field(value).finish(),
            Update::Apply(_) => f.write_str("Apply(..)"),
        }
    }
}

/// Outcome of a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Nothing was queued; no re-render is needed.
    Idle,
    /// `updates` queued updates were applied in order.
    Applied { updates: usize, generation: u64 },
}

impl Commit {
    pub fn should_render(&self) -> bool {
        matches!(self, Commit::Applied { .. })
    }
}

struct Slot<T> {
    committed: T,
    queue: VecDeque<Update<T>>,
    generation: u64,
}

/// State container owned by a single mounted component instance.
///
/// Handlers never touch the committed value directly: they enqueue updates
/// through a [`Setter`], and the host applies them with [`StateCell::commit`].
pub struct StateCell<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T: Clone + 'static> StateCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                committed: initial,
                queue: VecDeque::new(),
                generation: 0,
            })),
        }
    }

    /// Latest committed value.
    pub fn get(&self) -> T {
        self.slot.borrow().committed.clone()
    }

    pub fn setter(&self) -> Setter<T> {
        Setter {
            slot: Rc::downgrade(&self.slot),
        }
    }

    /// Number of updates waiting for the next commit.
    pub fn pending(&self) -> usize {
        self.slot.borrow().queue.len()
    }

    /// Number of commits that applied at least one update.
    pub fn generation(&self) -> u64 {
        self.slot.borrow().generation
    }

    /// Applies every queued update in the order it was enqueued, each one
    /// seeing the result of the previous.
    pub fn commit(&self) -> Commit {
        let queue = std::mem::take(&mut self.slot.borrow_mut().queue);
        if queue.is_empty() {
            return Commit::Idle;
        }

        let updates = queue.len();
        let mut value = self.get();
        for update in queue {
            value = match update {
                Update::Replace(next) => next,
                Update::Apply(f) => f(&value),
            };
        }

        let mut slot = self.slot.borrow_mut();
        slot.committed = value;
        slot.generation += 1;
        Commit::Applied {
            updates,
            generation: slot.generation,
        }
    }
}

/// Handle captured by event handlers to enqueue updates.
///
/// Holds a weak reference: once the owning instance is unmounted the setter
/// silently drops further updates.
pub struct Setter<T> {
    slot: Weak<RefCell<Slot<T>>>,
}

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<T: 'static> Setter<T> {
    /// Whether the owning state container is still alive.
    pub fn is_mounted(&self) -> bool {
        self.slot.strong_count() > 0
    }

    /// Enqueue a replacement value.
    pub fn set(&self, value: T) {
        self.enqueue(Update::Replace(value));
    }

    /// Enqueue a function of the latest committed state.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T + 'static,
    {
        self.enqueue(Update::Apply(Box::new(f)));
    }

    fn enqueue(&self, update: Update<T>) {
        match self.slot.upgrade() {
            Some(slot) => slot.borrow_mut().queue.push_back(update),
            None => tracing::debug!("update dropped: state container is unmounted"),
        }
    }
}
