//! Error sinks for the collision queries.

use std::sync::Mutex;

/// A capability to report query errors.
///
/// Queries never panic and never return errors: they report them through this trait
/// and answer with a safe default. `context` names the query that failed.
pub trait ErrorReporter {
    /// Reports an error that happened in `context`.
    fn report_error(&self, context: &str, message: &str);
}

/// Reports errors through the [`log`] facade, with the `nomad3d::query` target.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report_error(&self, context: &str, message: &str) {
        log::error!(target: "nomad3d::query", "{context}: {message}");
    }
}

/// An error reported to a [`RecordingReporter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportedError {
    /// The query that reported the error.
    pub context: String,
    /// The description of the error.
    pub message: String,
}

/// Keeps every reported error in memory.
///
/// Mostly useful in tests, to check that a query did or did not complain.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    errors: Mutex<Vec<ReportedError>>,
}

impl RecordingReporter {
    /// Creates a reporter with no recorded error.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of all the errors reported so far, oldest first.
    pub fn errors(&self) -> Vec<ReportedError> {
        self.lock().clone()
    }

    /// The number of errors reported so far.
    pub fn error_count(&self) -> usize {
        self.lock().len()
    }

    /// Were any errors reported?
    pub fn has_errors(&self) -> bool {
        !self.lock().is_empty()
    }

    /// Forgets all the recorded errors.
    pub fn clear(&self) {
        self.lock().clear()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ReportedError>> {
        // A poisoned lock only means another thread panicked while pushing: the list is still valid.
        self.errors
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ErrorReporter for RecordingReporter {
    fn report_error(&self, context: &str, message: &str) {
        self.lock().push(ReportedError {
            context: context.to_string(),
            message: message.to_string(),
        });
    }
}
