#![forbid(unsafe_code)]

//! Built-in history observers.
//!
//! Two observers ship with the calculator: [`LoggingObserver`] emits a
//! structured log line per calculation, and [`AutoSaveObserver`] rewrites
//! the history file after each append. Both are registered by
//! [`Calculator::new`](crate::Calculator::new); auto-save only when the
//! configuration enables it.

use std::path::PathBuf;

use tracing::{debug, info};

use recalc_core::Calculation;
use recalc_history::{HistoryObserver, ObserverError};

/// Logs every recorded calculation.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl HistoryObserver for LoggingObserver {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn on_calculation_added(
        &mut self,
        _history: &[Calculation],
        added: &Calculation,
    ) -> Result<(), ObserverError> {
        info!(
            operation = %added.operation,
            operand_a = added.operand_a,
            operand_b = added.operand_b,
            result = added.result,
            "calculation recorded"
        );
        Ok(())
    }
}

/// Persists the full history to the configured file after each append.
#[derive(Debug)]
pub struct AutoSaveObserver {
    path: PathBuf,
}

impl AutoSaveObserver {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryObserver for AutoSaveObserver {
    fn name(&self) -> &'static str {
        "auto-save"
    }

    fn on_calculation_added(
        &mut self,
        history: &[Calculation],
        _added: &Calculation,
    ) -> Result<(), ObserverError> {
        recalc_store::save(&self.path, history)
            .map_err(|error| ObserverError::with_source("auto-save failed", error))?;
        debug!(path = %self.path.display(), entries = history.len(), "history auto-saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recalc_core::OpKind;

    #[test]
    fn logging_observer_never_fails() {
        let calc = Calculation::new(OpKind::Add, 2.0, 3.0, 5.0);
        let mut observer = LoggingObserver;
        assert!(observer.on_calculation_added(&[calc.clone()], &calc).is_ok());
    }

    #[test]
    fn auto_save_writes_the_history_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let calc = Calculation::new(OpKind::Multiply, 5.0, 4.0, 20.0);

        let mut observer = AutoSaveObserver::new(&path);
        observer
            .on_calculation_added(&[calc.clone()], &calc)
            .unwrap();

        let loaded = recalc_store::load(&path).unwrap();
        assert_eq!(loaded, vec![calc]);
    }

    #[test]
    fn auto_save_failure_surfaces_as_observer_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory path cannot be opened as a file for writing.
        let mut observer = AutoSaveObserver::new(dir.path());
        let calc = Calculation::new(OpKind::Add, 1.0, 1.0, 2.0);

        let error = observer
            .on_calculation_added(&[calc.clone()], &calc)
            .unwrap_err();
        assert!(error.to_string().contains("auto-save failed"));
    }
}
