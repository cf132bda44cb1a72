#![forbid(unsafe_code)]

//! Bounded calculation history with snapshot-based undo/redo.
//!
//! [`HistoryManager`] keeps an ordered, capacity-bounded sequence of
//! calculations and dual snapshot stacks for undo/redo. Observers registered
//! on the manager are notified synchronously after each successful append;
//! an observer failure is logged and never propagated to the caller.

pub mod history;
pub mod observer;

pub use history::{HistoryError, HistoryManager};
pub use observer::{HistoryObserver, ObserverError};
