//! Linear undo/redo history.
//!
//! [`History`] stores a list of states and a pointer to the current one.
//! Committing after an undo discards every state after the pointer, so the
//! abandoned redo branch can never be reached again.

use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// An append-only, truncatable list of states with a current pointer.
///
/// # Example
///
/// ```
/// use staff_ledger::state::History;
///
/// let mut history = History::new("empty");
/// history.commit("one");
/// history.commit("two");
///
/// assert_eq!(*history.undo().unwrap(), "one");
/// history.commit("branch");
/// assert!(history.redo().is_err());
/// assert_eq!(*history.current(), "branch");
/// ```
#[derive(Debug, Clone)]
pub struct History<S> {
    states: Vec<S>,
    pointer: usize,
    limit: Option<usize>,
}

impl<S> History<S> {
    /// Creates a history holding only `initial`.
    pub fn new(initial: S) -> Self {
        Self::with_limit(initial, None)
    }

    /// Creates a history that keeps at most `limit` states, discarding the
    /// oldest ones first. A limit below one is treated as one.
    pub fn with_limit(initial: S, limit: Option<usize>) -> Self {
        Self {
            states: vec![initial],
            pointer: 0,
            limit: limit.map(|l| l.max(1)),
        }
    }

    /// Drops the redo branch, appends `state` and makes it current.
    pub fn commit(&mut self, state: S) {
        let pruned = self.states.len() - (self.pointer + 1);
        self.states.truncate(self.pointer + 1);
        self.states.push(state);
        self.pointer += 1;

        if let Some(limit) = self.limit {
            if self.states.len() > limit {
                let excess = self.states.len() - limit;
                self.states.drain(..excess);
                self.pointer -= excess;
            }
        }

        self.check_invariant();
        debug!(
            pointer = self.pointer,
            states = self.states.len(),
            pruned,
            "Committed state"
        );
    }

    /// Moves one state back and returns it.
    pub fn undo(&mut self) -> EngineResult<&S> {
        if !self.can_undo() {
            return Err(EngineError::NoUndoableState);
        }
        self.pointer -= 1;
        debug!(pointer = self.pointer, "Undo");
        Ok(&self.states[self.pointer])
    }

    /// Moves one state forward and returns it.
    pub fn redo(&mut self) -> EngineResult<&S> {
        if !self.can_redo() {
            return Err(EngineError::NoRedoableState);
        }
        self.pointer += 1;
        debug!(pointer = self.pointer, "Redo");
        Ok(&self.states[self.pointer])
    }

    /// The current state.
    pub fn current(&self) -> &S {
        &self.states[self.pointer]
    }

    /// Returns true if there is a state before the current one.
    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    /// Returns true if there is a state after the current one.
    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.states.len()
    }

    /// Index of the current state.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of stored states. Always at least one.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false; a history holds at least its initial state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn check_invariant(&self) {
        debug_assert!(
            self.pointer < self.states.len(),
            "history pointer {} out of bounds for {} states",
            self.pointer,
            self.states.len()
        );
    }
}
