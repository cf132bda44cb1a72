#![forbid(unsafe_code)]

//! The calculator facade.
//!
//! [`Calculator`] orchestrates one command end to end: validate operands →
//! resolve the operation → compute → record in history. Undo, redo, clear,
//! and persistence are pass-throughs to the history manager and the store,
//! with every failure funneled into [`CalcError`] for the REPL to render.

use std::io;

use thiserror::Error;

use recalc_core::{
    Calculation, OpKind, OperationError, UnknownOperation, ValidationError, evaluate,
    validate_operand,
};
use recalc_history::{HistoryError, HistoryManager};
use recalc_store::StoreError;

use crate::config::{Config, ConfigError};
use crate::observers::{AutoSaveObserver, LoggingObserver};

/// Umbrella error for everything the facade can fail with.
///
/// All variants are recoverable at the REPL boundary.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnknownOperation(#[from] UnknownOperation),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The calculator: configuration plus observed, undoable history.
#[derive(Debug)]
pub struct Calculator {
    config: Config,
    history: HistoryManager,
}

impl Calculator {
    /// Build a calculator from a configuration.
    ///
    /// The logging observer is always registered; the auto-save observer
    /// only when `auto_save` is enabled.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut history = HistoryManager::new(config.max_history);
        history.add_observer(Box::new(LoggingObserver));
        if config.auto_save {
            history.add_observer(Box::new(AutoSaveObserver::new(config.history_file.clone())));
        }
        Self { config, history }
    }

    /// Validate, resolve, compute, and record one operation.
    pub fn evaluate(
        &mut self,
        operation: &str,
        raw_a: &str,
        raw_b: &str,
    ) -> Result<f64, CalcError> {
        let a = validate_operand(raw_a, self.config.max_input)?;
        let b = validate_operand(raw_b, self.config.max_input)?;
        let kind: OpKind = operation.parse()?;
        let result = evaluate(kind, a, b)?;
        self.history.record(Calculation::new(kind, a, b, result));
        Ok(result)
    }

    /// Undo the most recent history change.
    pub fn undo(&mut self) -> Result<(), CalcError> {
        self.history.undo()?;
        Ok(())
    }

    /// Redo the most recently undone change.
    pub fn redo(&mut self) -> Result<(), CalcError> {
        self.history.redo()?;
        Ok(())
    }

    /// Drop the history and both undo/redo stacks.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// The recorded calculations, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Calculation] {
        self.history.entries()
    }

    /// Write the history to the configured file.
    pub fn save_history(&self) -> Result<(), CalcError> {
        recalc_store::save(&self.config.history_file, self.history.entries())?;
        Ok(())
    }

    /// Load the history from the configured file.
    ///
    /// A missing file is an empty history; a malformed file is an error the
    /// caller reports while keeping whatever history it had.
    pub fn load_history(&mut self) -> Result<(), CalcError> {
        let entries = match recalc_store::load(&self.config.history_file) {
            Ok(entries) => entries,
            Err(StoreError::Io(error)) if error.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(error) => return Err(error.into()),
        };
        self.history.replace(entries);
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> Config {
        Config {
            auto_save: false,
            ..Config::default()
        }
    }

    fn results(calculator: &Calculator) -> Vec<f64> {
        calculator.history().iter().map(|c| c.result).collect()
    }

    #[test]
    fn evaluate_records_the_calculation() {
        let mut calculator = Calculator::new(quiet_config());
        let result = calculator.evaluate("add", "2", "3").unwrap();
        assert_eq!(result, 5.0);
        assert_eq!(results(&calculator), vec![5.0]);
    }

    #[test]
    fn evaluate_rejects_bad_operands_without_recording() {
        let mut calculator = Calculator::new(quiet_config());
        assert!(matches!(
            calculator.evaluate("add", "two", "3"),
            Err(CalcError::Validation(_))
        ));
        assert!(calculator.history().is_empty());
    }

    #[test]
    fn evaluate_rejects_unknown_operations() {
        let mut calculator = Calculator::new(quiet_config());
        assert!(matches!(
            calculator.evaluate("modulo", "2", "3"),
            Err(CalcError::UnknownOperation(_))
        ));
    }

    #[test]
    fn evaluate_surfaces_domain_errors() {
        let mut calculator = Calculator::new(quiet_config());
        assert!(matches!(
            calculator.evaluate("divide", "1", "0"),
            Err(CalcError::Operation(OperationError::DivisionByZero))
        ));
        assert!(calculator.history().is_empty());
    }

    #[test]
    fn undo_and_redo_pass_through() {
        let mut calculator = Calculator::new(quiet_config());
        calculator.evaluate("add", "2", "3").unwrap();
        calculator.evaluate("multiply", "5", "4").unwrap();

        calculator.undo().unwrap();
        assert_eq!(results(&calculator), vec![5.0]);
        calculator.redo().unwrap();
        assert_eq!(results(&calculator), vec![5.0, 20.0]);
    }

    #[test]
    fn undo_with_empty_history_is_an_error() {
        let mut calculator = Calculator::new(quiet_config());
        assert!(matches!(
            calculator.undo(),
            Err(CalcError::History(HistoryError::NothingToUndo))
        ));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            auto_save: false,
            history_file: dir.path().join("history.csv"),
            ..Config::default()
        };

        let mut calculator = Calculator::new(config.clone());
        calculator.evaluate("add", "2", "3").unwrap();
        calculator.evaluate("power", "2", "10").unwrap();
        calculator.save_history().unwrap();
        let saved = calculator.history().to_vec();

        let mut fresh = Calculator::new(config);
        fresh.load_history().unwrap();
        assert_eq!(fresh.history(), saved.as_slice());
    }

    #[test]
    fn load_of_missing_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            auto_save: false,
            history_file: dir.path().join("nope.csv"),
            ..Config::default()
        };

        let mut calculator = Calculator::new(config);
        calculator.load_history().unwrap();
        assert!(calculator.history().is_empty());
    }

    #[test]
    fn load_of_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        std::fs::write(&path, "garbage\n").unwrap();
        let config = Config {
            auto_save: false,
            history_file: path,
            ..Config::default()
        };

        let mut calculator = Calculator::new(config);
        assert!(matches!(
            calculator.load_history(),
            Err(CalcError::Store(_))
        ));
    }

    #[test]
    fn auto_save_keeps_the_file_current() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let config = Config {
            auto_save: true,
            history_file: path.clone(),
            ..Config::default()
        };

        let mut calculator = Calculator::new(config);
        calculator.evaluate("add", "2", "3").unwrap();
        assert_eq!(recalc_store::load(&path).unwrap().len(), 1);

        calculator.evaluate("subtract", "10", "4").unwrap();
        assert_eq!(recalc_store::load(&path).unwrap().len(), 2);
    }

    #[test]
    fn clear_history_empties_everything() {
        let mut calculator = Calculator::new(quiet_config());
        calculator.evaluate("add", "1", "1").unwrap();
        calculator.clear_history();
        assert!(calculator.history().is_empty());
        assert!(matches!(
            calculator.undo(),
            Err(CalcError::History(HistoryError::NothingToUndo))
        ));
    }
}
