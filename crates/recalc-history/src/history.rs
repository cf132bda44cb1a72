#![forbid(unsafe_code)]

//! History stack with snapshot-based undo/redo.
//!
//! [`HistoryManager`] holds the live history plus dual snapshot stacks.
//! Each `record` pushes a snapshot of the pre-mutation state onto the undo
//! stack; `undo`/`redo` swap the live state with the top of the matching
//! stack. Snapshots are `Arc` slices, so moving one between stacks never
//! copies the entries again.
//!
//! # Invariants
//!
//! 1. `entries.len() <= max_history` (FIFO eviction of the oldest entry)
//! 2. `undo_stack.len() <= max_history` (oldest snapshots evicted)
//! 3. The redo stack is cleared whenever a new calculation is recorded
//! 4. `clear` empties the history and both stacks together
//!
//! ```text
//! record(c3)
//! ┌─────────────────────────────────────────────┐
//! │ History:    [c1, c2, c3]                    │
//! │ Undo Stack: [[], [c1], [c1, c2]]            │
//! │ Redo Stack: []                              │
//! └─────────────────────────────────────────────┘
//!
//! undo()
//! ┌─────────────────────────────────────────────┐
//! │ History:    [c1, c2]                        │
//! │ Undo Stack: [[], [c1]]                      │
//! │ Redo Stack: [[c1, c2, c3]]                  │
//! └─────────────────────────────────────────────┘
//!
//! record(c4)  <-- new branch, clears redo
//! ┌─────────────────────────────────────────────┐
//! │ History:    [c1, c2, c4]                    │
//! │ Undo Stack: [[], [c1], [c1, c2]]            │
//! │ Redo Stack: []                              │
//! └─────────────────────────────────────────────┘
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use recalc_core::Calculation;

use crate::observer::HistoryObserver;

/// Failure of an undo/redo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

type Snapshot = Arc<[Calculation]>;

/// Ordered, capacity-bounded calculation history with undo/redo.
pub struct HistoryManager {
    /// Live history, oldest first.
    entries: Vec<Calculation>,
    /// Prior states available for undo (most recent at the back).
    undo_stack: VecDeque<Snapshot>,
    /// Future states available for redo (most recent at the back).
    redo_stack: VecDeque<Snapshot>,
    /// Capacity bound for both the history and the undo stack.
    max_history: usize,
    /// Observers notified after each append, in registration order.
    observers: Vec<Box<dyn HistoryObserver>>,
}

impl fmt::Debug for HistoryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryManager")
            .field("entries", &self.entries.len())
            .field("undo_depth", &self.undo_stack.len())
            .field("redo_depth", &self.redo_stack.len())
            .field("max_history", &self.max_history)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl HistoryManager {
    /// Create an empty history bounded to `max_history` entries.
    #[must_use]
    pub fn new(max_history: usize) -> Self {
        Self {
            entries: Vec::new(),
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_history,
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers run synchronously after each
    /// `record`, in registration order.
    pub fn add_observer(&mut self, observer: Box<dyn HistoryObserver>) {
        self.observers.push(observer);
    }

    // ========================================================================
    // Core operations
    // ========================================================================

    /// Append a calculation.
    ///
    /// The pre-mutation state is pushed onto the undo stack, the redo stack
    /// is cleared, and the oldest entry is evicted if the bound is
    /// exceeded. Observers are notified last; a failing observer is logged
    /// and skipped.
    pub fn record(&mut self, calc: Calculation) {
        self.undo_stack.push_back(self.snapshot());
        while self.undo_stack.len() > self.max_history {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();

        self.entries.push(calc.clone());
        while self.entries.len() > self.max_history {
            self.entries.remove(0);
        }

        for observer in &mut self.observers {
            if let Err(error) = observer.on_calculation_added(&self.entries, &calc) {
                warn!(
                    observer = observer.name(),
                    error = %error,
                    "history observer failed"
                );
            }
        }
    }

    /// Restore the most recent prior state.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        let prior = self
            .undo_stack
            .pop_back()
            .ok_or(HistoryError::NothingToUndo)?;
        self.redo_stack.push_back(self.snapshot());
        self.entries = prior.to_vec();
        Ok(())
    }

    /// Restore the most recently undone state.
    pub fn redo(&mut self) -> Result<(), HistoryError> {
        let future = self
            .redo_stack
            .pop_back()
            .ok_or(HistoryError::NothingToRedo)?;
        self.undo_stack.push_back(self.snapshot());
        self.entries = future.to_vec();
        Ok(())
    }

    /// Empty the history and both stacks.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Replace the history wholesale (used when loading from disk).
    ///
    /// Both stacks are reset; when the loaded sequence exceeds the bound,
    /// the newest entries win.
    pub fn replace(&mut self, mut entries: Vec<Calculation>) {
        if entries.len() > self.max_history {
            let excess = entries.len() - self.max_history;
            entries.drain(..excess);
        }
        self.entries = entries;
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    // ========================================================================
    // Info
    // ========================================================================

    /// The live history, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Calculation] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    #[must_use]
    pub fn max_history(&self) -> usize {
        self.max_history
    }

    fn snapshot(&self) -> Snapshot {
        Arc::from(self.entries.as_slice())
    }
}
