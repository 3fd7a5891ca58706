#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `display` is the process-wide diagnostic output collaborator for transport
//! plugins. Plugins never write to a terminal or file themselves; they hand
//! formatted lines to a [`TraceSink`], and a verbosity-gated [`Display`]
//! front end decides which lines reach the sink at all.
//!
//! # Design
//!
//! - [`TraceSink`] has a single effective method, [`emit`](TraceSink::emit).
//!   Emission is best-effort: a slow or failing sink never surfaces an error
//!   to the caller.
//! - [`WriterSink`] adapts any [`io::Write`](std::io::Write) target and
//!   appends one newline per line, mirroring line-oriented diagnostics.
//! - [`MemorySink`] collects lines behind a mutex so tests can assert on
//!   exactly what a plugin traced.
//! - [`color`] derives ANSI colors from numeric identifiers via a fixed
//!   modulo palette, so interleaved output from concurrent connections stays
//!   visually attributable.
//!
//! # Examples
//!
//! Capture verbose trace lines in memory:
//!
//! ```
//! use std::sync::Arc;
//! use display::{Display, MemorySink};
//!
//! let sink = Arc::new(MemorySink::new());
//! let display = Display::new(sink.clone(), 1);
//!
//! display.v("plugin loaded");
//! display.v_host("connecting", "target-01");
//!
//! assert_eq!(sink.drain(), vec![
//!     "plugin loaded".to_string(),
//!     "<target-01> connecting".to_string(),
//! ]);
//! ```

pub mod color;
mod front;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use front::Display;
pub use sink::{MemorySink, TraceSink, WriterSink};
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use tracing_bridge::TracingSink;
