#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `connection` defines the transport contract the automation host runtime
//! uses to reach a target: open a session, execute commands, move files, and
//! tear the session down again. Plugins implement the [`Connection`] trait;
//! the host runtime owns plugin discovery, option resolution, and privilege
//! escalation, and hands the resolved results to the plugin at construction
//! time.
//!
//! # Design
//!
//! The public modules mirror the seams between the host runtime and a
//! transport plugin:
//!
//! - [`Connection`] is the five-operation trait every transport conforms to,
//!   plus static capability metadata such as pipelining support.
//! - [`CommandOutput`] is the `(exit code, stdout, stderr)` triple returned
//!   by command execution.
//! - [`PlayContext`] and [`TaskInput`] are the opaque per-task inputs the
//!   runtime supplies when it constructs a plugin.
//! - [`ResolvedOptions`] is the read-only view onto connection-scoped
//!   configuration produced by the runtime's option-resolution layer.
//!
//! Trait conformance replaces base-class inheritance: no behavior is shared
//! between transports beyond the contract itself.
//!
//! # Errors
//!
//! All fallible operations surface [`ConnectionError`]. Configuration
//! failures raised by [`ResolvedOptions`] accessors propagate through plugin
//! operations unchanged; the runtime decides how to report them.

mod context;
mod error;
mod options;
mod output;
mod shell;
mod transport;

pub use context::{BecomeMethod, PlayContext, TaskInput};
pub use error::ConnectionError;
pub use options::{OptionValue, ResolvedOptions, REMOTE_ADDR, REMOTE_USER};
pub use output::CommandOutput;
pub use shell::ShellConfig;
pub use transport::{Connection, DEFAULT_MODULE_PREFERENCES};
