//! Output collaborator for human-readable report lines.
//!
//! Every reporting operation in the domain crates emits exactly one line through
//! a [`Reporter`]. The binary wires in [`ConsoleReporter`]; tests use
//! [`RecordingReporter`] and assert on the captured lines.

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Sink for one-line, human-readable reports.
pub trait Reporter: Send + Sync {
    /// Emit a single line. Reporting never fails from the caller's point of view.
    fn report(&self, line: &str);
}

/// Reporter shared between the components of a single run.
pub type SharedReporter = Arc<dyn Reporter>;

/// Writes each line to standard output.
#[derive(Clone, Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn shared() -> SharedReporter {
        Arc::new(Self)
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, line: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{line}") {
            tracing::warn!(error = %e, "failed to write report line to stdout");
        }
    }
}

/// Keeps every reported line in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines reported so far.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The most recent line, if any.
    pub fn last(&self) -> Option<String> {
        self.lines().pop()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, line: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push(line.to_string());
    }
}
