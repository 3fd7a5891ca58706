//! The transport trait every connection plugin conforms to.

use crate::error::ConnectionError;
use crate::output::CommandOutput;

/// Default module implementation preference list for POSIX targets: plain
/// module names with no extension.
pub const DEFAULT_MODULE_PREFERENCES: &[&str] = &[""];

/// Contract between the host runtime and a transport plugin.
///
/// The runtime constructs one implementor per logical target session and
/// drives it sequentially: `connect`, any number of `exec_command` /
/// `put_file` / `fetch_file` calls, then `close`. Implementors own their
/// per-instance state exclusively; nothing in this trait is shared across
/// instances.
pub trait Connection {
    /// Stable transport name used in diagnostics and plugin selection.
    fn transport(&self) -> &'static str;

    /// Static capability declaration: whether the runtime may pipeline
    /// command input over this transport instead of staging temporary
    /// scripts on the target.
    fn has_pipelining(&self) -> bool {
        false
    }

    /// Module file extensions the runtime should prefer for this target, in
    /// order. Windows-style targets usually prefer `.ps1` and `.exe`.
    fn module_implementation_preferences(&self) -> &[&'static str] {
        DEFAULT_MODULE_PREFERENCES
    }

    /// Whether the session is currently established.
    fn connected(&self) -> bool;

    /// Establishes the session. Implementations are idempotent: connecting
    /// an established session is a no-op.
    fn connect(&mut self) -> Result<(), ConnectionError>;

    /// Executes a command on the target.
    ///
    /// `in_data` carries pipelined standard input when the runtime has any;
    /// `sudoable` marks commands eligible for privilege escalation.
    fn exec_command(
        &mut self,
        cmd: &str,
        in_data: Option<&[u8]>,
        sudoable: bool,
    ) -> Result<CommandOutput, ConnectionError>;

    /// Copies a local file to the target.
    fn put_file(&mut self, in_path: &str, out_path: &str) -> Result<(), ConnectionError>;

    /// Copies a file from the target to the local side.
    fn fetch_file(&mut self, in_path: &str, out_path: &str) -> Result<(), ConnectionError>;

    /// Tears the session down. Implementations are idempotent: closing a
    /// closed session is a no-op.
    fn close(&mut self) -> Result<(), ConnectionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullTransport {
        connected: bool,
    }

    impl Connection for NullTransport {
        fn transport(&self) -> &'static str {
            "null"
        }

        fn connected(&self) -> bool {
            self.connected
        }

        fn connect(&mut self) -> Result<(), ConnectionError> {
            self.connected = true;
            Ok(())
        }

        fn exec_command(
            &mut self,
            _cmd: &str,
            _in_data: Option<&[u8]>,
            _sudoable: bool,
        ) -> Result<CommandOutput, ConnectionError> {
            Ok(CommandOutput::success(Vec::new()))
        }

        fn put_file(&mut self, _in_path: &str, _out_path: &str) -> Result<(), ConnectionError> {
            Ok(())
        }

        fn fetch_file(&mut self, _in_path: &str, _out_path: &str) -> Result<(), ConnectionError> {
            Ok(())
        }

        fn close(&mut self) -> Result<(), ConnectionError> {
            self.connected = false;
            Ok(())
        }
    }

    #[test]
    fn defaults_declare_no_pipelining_and_plain_preferences() {
        let transport = NullTransport { connected: false };
        assert!(!transport.has_pipelining());
        assert_eq!(
            transport.module_implementation_preferences(),
            DEFAULT_MODULE_PREFERENCES
        );
    }

    #[test]
    fn trait_is_object_safe() {
        let mut transport: Box<dyn Connection> = Box::new(NullTransport { connected: false });
        transport.connect().unwrap();
        assert!(transport.connected());
        transport.close().unwrap();
        assert!(!transport.connected());
    }
}
