//! Line-oriented output sink shared by every side-effecting component.

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Destination for human-readable output lines.
///
/// Implementations must be safe to share across threads; a single console is
/// typically handed (as `Arc<dyn Console>`) to every strategy in a pipeline.
pub trait Console: Send + Sync {
    fn write_line(&self, line: &str);
}

impl<C> Console for Arc<C>
where
    C: Console + ?Sized,
{
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}

/// Writes to the process' standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn shared() -> Arc<dyn Console> {
        Arc::new(Self)
    }
}

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(err) = writeln!(out, "{line}") {
            tracing::warn!("failed to write console line: {err}");
        }
    }
}

/// In-memory console for tests/dev.
///
/// Lines are kept in write order behind a mutex.
#[derive(Debug, Default)]
pub struct InMemoryConsole {
    lines: Mutex<Vec<String>>,
}

impl InMemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn clear(&self) {
        match self.lines.lock() {
            Ok(mut lines) => lines.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl Console for InMemoryConsole {
    fn write_line(&self, line: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line.to_string()),
            Err(poisoned) => poisoned.into_inner().push(line.to_string()),
        }
    }
}
