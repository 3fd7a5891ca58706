//! Trace line sinks.

use std::io::Write;
use std::sync::Mutex;

/// Destination for rendered trace lines.
///
/// Emission is a non-blocking, best-effort side channel: implementations
/// swallow write failures rather than surfacing them to the operation that
/// produced the line.
pub trait TraceSink: Send + Sync {
    /// Accepts one rendered line, without a trailing newline.
    fn emit(&self, line: &str);
}

/// Sink that streams lines into an [`io::Write`](std::io::Write) target,
/// appending one newline per line.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wraps the supplied writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> TraceSink for WriterSink<W> {
    fn emit(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
            let _ = writer.flush();
        }
    }
}

/// Sink that collects lines in memory for later inspection.
///
/// Tests drive plugins against a `MemorySink` and then assert on the drained
/// lines, the same way diagnostic events are collected and drained elsewhere
/// in the workspace.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the collected lines without clearing them.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }

    /// Removes and returns all collected lines.
    #[must_use]
    pub fn drain(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|mut lines| lines.drain(..).collect())
            .unwrap_or_default()
    }

    /// Number of lines currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    /// Whether no lines are currently held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TraceSink for MemorySink {
    fn emit(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}
