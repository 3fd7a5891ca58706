//! Verbosity-gated front end over a trace sink.

use std::io;
use std::sync::Arc;

use is_terminal::IsTerminal;

use crate::sink::{TraceSink, WriterSink};

/// Process-wide diagnostic front end.
///
/// Owns a shared [`TraceSink`] plus a verbosity level. Lines below the
/// configured verbosity never reach the sink. Host-bearing variants prefix
/// the line with the target in angle brackets, keeping output from parallel
/// targets attributable.
#[derive(Clone)]
pub struct Display {
    sink: Arc<dyn TraceSink>,
    verbosity: u8,
    color: bool,
}

impl Display {
    /// Creates a front end over the supplied sink. Color is left disabled;
    /// use [`with_color`](Self::with_color) to opt in.
    pub fn new(sink: Arc<dyn TraceSink>, verbosity: u8) -> Self {
        Self {
            sink,
            verbosity,
            color: false,
        }
    }

    /// Creates the default process front end: stderr-backed, with color
    /// enabled only when stderr is a terminal.
    #[must_use]
    pub fn for_process(verbosity: u8) -> Self {
        let color = io::stderr().is_terminal();
        Self::new(Arc::new(WriterSink::new(io::stderr())), verbosity).with_color(color)
    }

    /// Enables or disables colored identifier rendering.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Whether emitted identifiers should carry ANSI color.
    #[must_use]
    pub const fn color_enabled(&self) -> bool {
        self.color
    }

    /// Configured verbosity level.
    #[must_use]
    pub const fn verbosity(&self) -> u8 {
        self.verbosity
    }

    /// Emits `msg` at verbosity 1.
    pub fn v(&self, msg: &str) {
        self.verbose(msg, None, 1);
    }

    /// Emits `msg` at verbosity 1, annotated with the target host.
    pub fn v_host(&self, msg: &str, host: &str) {
        self.verbose(msg, Some(host), 1);
    }

    /// Emits `msg` at verbosity 3.
    pub fn vvv(&self, msg: &str) {
        self.verbose(msg, None, 3);
    }

    fn verbose(&self, msg: &str, host: Option<&str>, level: u8) {
        if self.verbosity < level {
            return;
        }
        match host {
            Some(host) => self.sink.emit(&format!("<{host}> {msg}")),
            None => self.sink.emit(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn captured(verbosity: u8) -> (Display, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (Display::new(sink.clone(), verbosity), sink)
    }

    #[test]
    fn verbosity_zero_suppresses_everything() {
        let (display, sink) = captured(0);
        display.v("hidden");
        display.vvv("also hidden");
        assert!(sink.is_empty());
    }

    #[test]
    fn verbosity_one_passes_v_but_not_vvv() {
        let (display, sink) = captured(1);
        display.v("shown");
        display.vvv("hidden");
        assert_eq!(sink.drain(), vec!["shown".to_string()]);
    }

    #[test]
    fn host_annotation_prefixes_the_line() {
        let (display, sink) = captured(1);
        display.v_host("connecting", "db-01");
        assert_eq!(sink.drain(), vec!["<db-01> connecting".to_string()]);
    }

    #[test]
    fn color_defaults_off_and_is_overridable() {
        let (display, _sink) = captured(1);
        assert!(!display.color_enabled());
        assert!(display.with_color(true).color_enabled());
    }

    #[test]
    fn clones_share_the_sink() {
        let (display, sink) = captured(1);
        let clone = display.clone();
        display.v("from original");
        clone.v("from clone");
        assert_eq!(sink.len(), 2);
    }
}
