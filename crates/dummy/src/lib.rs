#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `dummy` is a diagnostic transport plugin: it satisfies the host runtime's
//! [`Connection`](connection::Connection) contract without ever reaching a
//! real target. Every call is traced with a process-wide instance token and
//! a per-connection identifier, command execution answers with canned
//! payloads (including the interpreter discovery probe, so probing never
//! errors out), and file transfers only log the paths they would have used.
//!
//! Use it to watch how the runtime drives a transport: connection reuse,
//! pipelining decisions, probe sequencing, and privilege-escalation flags
//! all show up in the trace, one line per operation.
//!
//! # Design
//!
//! - [`DummyConnection`] implements the transport contract with a plain
//!   connected flag as its only state.
//! - [`ident`](mod@ident) mints the process token and the counter-backed
//!   connection identifiers that keep interleaved traces attributable.
//! - [`paths`](mod@paths) normalizes remote-side paths lexically, honouring
//!   the target shell rather than the local build platform.
//!
//! # Examples
//!
//! Drive the plugin the way the runtime would and inspect the trace:
//!
//! ```
//! use std::sync::Arc;
//! use connection::{Connection, PlayContext, ResolvedOptions, TaskInput, REMOTE_ADDR};
//! use display::{Display, MemorySink};
//! use dummy::{DummyConnection, IdAllocator};
//!
//! let sink = Arc::new(MemorySink::new());
//! let ids = IdAllocator::new();
//! let options = ResolvedOptions::new().with(REMOTE_ADDR, "target-01");
//!
//! let mut conn = DummyConnection::new(
//!     PlayContext::default(),
//!     TaskInput::empty(),
//!     options,
//!     &ids,
//!     Display::new(sink.clone(), 1),
//! );
//!
//! conn.connect()?;
//! let output = conn.exec_command("uptime", None, false)?;
//! assert_eq!(output.stdout, b"{}");
//! conn.close()?;
//!
//! assert!(!sink.lines().is_empty());
//! # Ok::<(), connection::ConnectionError>(())
//! ```

pub mod ident;
pub mod paths;

mod plugin;

pub use crate::plugin::{
    DummyConnection, GENERIC_RESPONSE, INTERPRETER_DISCOVERY_MARKER,
    INTERPRETER_DISCOVERY_RESPONSE, TRANSPORT,
};
pub use crate::ident::{ConnectionId, IdAllocator, InstanceId, process_instance_id};
pub use crate::paths::{normalize_posix, normalize_windows, prefix_login_path};
