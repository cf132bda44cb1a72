#![forbid(unsafe_code)]

//! Observer seam for history events.
//!
//! Observers are plain trait objects invoked synchronously, in registration
//! order, after each successful append. There is no dynamic discovery; the
//! calculator registers its observers at construction.

use std::error::Error;
use std::fmt;

use recalc_core::Calculation;

/// A callback notified after each calculation is appended to the history.
pub trait HistoryObserver {
    /// Short name used when an observer failure is logged.
    fn name(&self) -> &'static str;

    /// Called with the post-append history and the calculation that was
    /// just added.
    ///
    /// A returned error is caught and logged by the history manager; it
    /// never propagates to the caller of `record`.
    fn on_calculation_added(
        &mut self,
        history: &[Calculation],
        added: &Calculation,
    ) -> Result<(), ObserverError>;
}

/// Failure raised by an observer (e.g. the auto-save file is unwritable).
#[derive(Debug)]
pub struct ObserverError {
    message: String,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl ObserverError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl fmt::Display for ObserverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {source}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl Error for ObserverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}
