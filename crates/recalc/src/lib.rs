#![forbid(unsafe_code)]

//! recalc public facade.
//!
//! Re-exports the surface a consumer needs: the [`Calculator`] facade, its
//! [`Config`], the built-in observers, and the value/error types from the
//! member crates.

pub mod calculator;
pub mod config;
pub mod observers;

pub use calculator::{CalcError, Calculator};
pub use config::{Config, ConfigError};
pub use observers::{AutoSaveObserver, LoggingObserver};

// --- Core re-exports -------------------------------------------------------

pub use recalc_core::{
    Calculation, OpKind, OperationError, UnknownOperation, ValidationError, format_number,
    validate_operand,
};

// --- History re-exports ----------------------------------------------------

pub use recalc_history::{HistoryError, HistoryManager, HistoryObserver, ObserverError};

// --- Store re-exports ------------------------------------------------------

pub use recalc_store::{EXPECTED_HEADER, StoreError, load, save};
