//! The dummy transport: trace every call, execute nothing.

use std::sync::Once;

use connection::{
    BecomeMethod, CommandOutput, Connection, ConnectionError, PlayContext, ResolvedOptions,
    TaskInput, DEFAULT_MODULE_PREFERENCES,
};
use display::Display;

use crate::ident::{process_instance_id, ConnectionId, IdAllocator};
use crate::paths::prefix_login_path;

/// Transport name this plugin registers under.
pub const TRANSPORT: &str = "dummy";

/// Substring marking the host runtime's interpreter discovery probe.
pub const INTERPRETER_DISCOVERY_MARKER: &str = "echo PLATFORM; uname; echo FOUND";

/// Canned stdout payload simulating a successful platform probe.
pub const INTERPRETER_DISCOVERY_RESPONSE: &[u8] = b"PLATFORM\nFOUND\n/foo/python\nENDFOUND";

/// Canned stdout payload for every other command.
pub const GENERIC_RESPONSE: &[u8] = b"{}";

/// Module preferences switched in when the target shell is Windows-like.
const WINDOWS_MODULE_PREFERENCES: &[&str] = &[".ps1", ".exe", ""];

static PLUGIN_LOADED: Once = Once::new();

/// Diagnostic connection that logs every transport call it receives.
///
/// Holds no real session: `connect` only flips a flag, `exec_command`
/// returns canned payloads, and the transfer operations log the paths they
/// would have used. The host runtime drives it exactly like a real
/// transport, which is the point.
pub struct DummyConnection {
    play_context: PlayContext,
    _input: TaskInput,
    options: ResolvedOptions,
    display: Display,
    id: ConnectionId,
    connected: bool,
    module_preferences: &'static [&'static str],
}

impl DummyConnection {
    /// Constructs a connection for one logical target session.
    ///
    /// The identifier allocator is shared across all connections in the
    /// process; the display is the runtime's diagnostic collaborator. The
    /// first construction in a process also announces the plugin itself.
    #[must_use]
    pub fn new(
        play_context: PlayContext,
        input: TaskInput,
        options: ResolvedOptions,
        ids: &IdAllocator,
        display: Display,
    ) -> Self {
        PLUGIN_LOADED.call_once(|| {
            display.v(&format!("[{}] Plugin loaded", process_instance_id()));
        });

        let mut conn = Self {
            play_context,
            _input: input,
            options,
            display,
            id: ids.allocate(),
            connected: false,
            module_preferences: DEFAULT_MODULE_PREFERENCES,
        };
        conn.log("Initialized");

        if conn.play_context.shell().is_windows {
            conn.log("This is a windows shell; adjusting accordingly");
            conn.module_preferences = WINDOWS_MODULE_PREFERENCES;
        }
        conn
    }

    /// This connection's local identifier.
    #[must_use]
    pub const fn id(&self) -> ConnectionId {
        self.id
    }

    fn prefixed(&self, msg: &str) -> String {
        format!(
            "[{}:{}] {msg}",
            process_instance_id(),
            self.id.render(self.display.color_enabled())
        )
    }

    fn log(&self, msg: &str) {
        self.display.v(&self.prefixed(msg));
    }

    fn log_host(&self, msg: &str, host: &str) {
        self.display.v_host(&self.prefixed(msg), host);
    }
}

impl Connection for DummyConnection {
    fn transport(&self) -> &'static str {
        TRANSPORT
    }

    fn has_pipelining(&self) -> bool {
        true
    }

    fn module_implementation_preferences(&self) -> &[&'static str] {
        self.module_preferences
    }

    fn connected(&self) -> bool {
        self.connected
    }

    fn connect(&mut self) -> Result<(), ConnectionError> {
        let host = self.options.remote_addr()?.to_string();
        self.log_host(&format!("Connect (connected = {})", self.connected), &host);
        if !self.connected {
            self.log_host(
                &format!("Connecting: user = {:?}", self.options.remote_user()),
                &host,
            );
            self.connected = true;
        }
        Ok(())
    }

    fn exec_command(
        &mut self,
        cmd: &str,
        in_data: Option<&[u8]>,
        sudoable: bool,
    ) -> Result<CommandOutput, ConnectionError> {
        let host = self.options.remote_addr()?.to_string();

        let command = [
            self.play_context.executable().to_string(),
            "-c".to_string(),
            cmd.to_string(),
        ];
        let do_become = sudoable
            && self
                .play_context
                .become_method()
                .is_some_and(BecomeMethod::expect_prompt);
        let need_stdin = in_data.is_some() || do_become;

        self.log_host(
            &format!(
                "Executing command: user = {:?}, command = {:?}, do_become = {do_become}, need_stdin = {need_stdin}",
                self.options.remote_user(),
                command,
            ),
            &host,
        );

        // Interpreter discovery is answered here so probing never errors out.
        if command
            .iter()
            .any(|part| part.contains(INTERPRETER_DISCOVERY_MARKER))
        {
            self.log_host(
                "This command is (probably) the interpreter discovery probe; returning canned response",
                &host,
            );
            return Ok(CommandOutput::success(INTERPRETER_DISCOVERY_RESPONSE));
        }

        Ok(CommandOutput::success(GENERIC_RESPONSE))
    }

    fn put_file(&mut self, in_path: &str, out_path: &str) -> Result<(), ConnectionError> {
        let host = self.options.remote_addr()?.to_string();
        let new_out_path = prefix_login_path(out_path, self.play_context.shell().is_windows);
        self.log_host(
            &format!(
                "Putting file: user = {:?}, in_path = {in_path:?}, out_path = {out_path:?}, new_out_path = {new_out_path:?}",
                self.options.remote_user(),
            ),
            &host,
        );
        Ok(())
    }

    fn fetch_file(&mut self, in_path: &str, out_path: &str) -> Result<(), ConnectionError> {
        let host = self.options.remote_addr()?.to_string();
        let new_in_path = prefix_login_path(in_path, self.play_context.shell().is_windows);
        self.log_host(
            &format!(
                "Fetching file: user = {:?}, in_path = {in_path:?}, out_path = {out_path:?}, new_in_path = {new_in_path:?}",
                self.options.remote_user(),
            ),
            &host,
        );
        Ok(())
    }

    fn close(&mut self) -> Result<(), ConnectionError> {
        let host = self.options.remote_addr()?.to_string();
        self.log_host(
            &format!("Closing connection: user = {:?}", self.options.remote_user()),
            &host,
        );
        self.connected = false;
        Ok(())
    }
}
