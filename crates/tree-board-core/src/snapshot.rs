//! Snapshot Cells
//!
//! A widget owns exactly one snapshot. Hosts store it however they like
//! (a reactive store in the UI, a `RefCell` here) behind `SnapshotCell`.

use std::cell::RefCell;

/// Holder of a widget's current snapshot
pub trait SnapshotCell<S> {
    /// Current snapshot (cheap clone: children are shared)
    fn current(&self) -> S;

    /// Replace the snapshot and notify any observer
    fn replace(&self, next: S);
}

/// Apply `transition` to the cell's snapshot.
/// Replaces (and notifies) only when the result differs; returns whether it did.
pub fn commit<S, C, F>(cell: &C, transition: F) -> bool
where
    S: PartialEq,
    C: SnapshotCell<S> + ?Sized,
    F: FnOnce(&S) -> S,
{
    let current = cell.current();
    let next = transition(&current);
    if next == current {
        return false;
    }
    cell.replace(next);
    true
}

type Listener<S> = Box<dyn Fn(&S)>;

/// `RefCell`-backed cell with an optional change listener
pub struct LocalCell<S> {
    value: RefCell<S>,
    on_change: Option<Listener<S>>,
}

impl<S: Clone> LocalCell<S> {
    pub fn new(initial: S) -> Self {
        Self {
            value: RefCell::new(initial),
            on_change: None,
        }
    }

    /// Invoke `listener` synchronously after every replace
    pub fn with_listener(initial: S, listener: impl Fn(&S) + 'static) -> Self {
        Self {
            value: RefCell::new(initial),
            on_change: Some(Box::new(listener)),
        }
    }
}

impl<S: Clone> SnapshotCell<S> for LocalCell<S> {
    fn current(&self) -> S {
        self.value.borrow().clone()
    }

    fn replace(&self, next: S) {
        *self.value.borrow_mut() = next;
        if let Some(listener) = &self.on_change {
            let value = self.value.borrow();
            listener(&value);
        }
    }
}
