//! Per-task inputs the host runtime hands to a plugin at construction time.

use std::fmt;
use std::io::{self, Read};

use crate::shell::ShellConfig;

/// Privilege-escalation mechanism configured for the current task.
///
/// Only the pieces a transport needs are exposed: the mechanism name for
/// diagnostics and whether the mechanism stops for an interactive prompt,
/// which decides if standard input must be forwarded to the target.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BecomeMethod {
    name: String,
    prompt: bool,
}

impl BecomeMethod {
    /// Creates a mechanism description.
    #[must_use]
    pub fn new(name: impl Into<String>, prompt: bool) -> Self {
        Self {
            name: name.into(),
            prompt,
        }
    }

    /// Mechanism name, e.g. `sudo`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the mechanism expects an interactive password prompt.
    #[must_use]
    pub const fn expect_prompt(&self) -> bool {
        self.prompt
    }
}

/// Opaque per-task execution context.
///
/// Carries the pieces of task state a transport consults while building
/// command lines: the configured executable, the optional escalation
/// mechanism, and the target shell description.
#[derive(Clone, Debug)]
pub struct PlayContext {
    executable: String,
    become_method: Option<BecomeMethod>,
    shell: ShellConfig,
}

impl PlayContext {
    /// Creates a context around the configured executable.
    #[must_use]
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            become_method: None,
            shell: ShellConfig::default(),
        }
    }

    /// Attaches a privilege-escalation mechanism.
    #[must_use]
    pub fn with_become(mut self, method: BecomeMethod) -> Self {
        self.become_method = Some(method);
        self
    }

    /// Sets the target shell description.
    #[must_use]
    pub const fn with_shell(mut self, shell: ShellConfig) -> Self {
        self.shell = shell;
        self
    }

    /// The executable commands are wrapped in, e.g. `/bin/sh`.
    #[must_use]
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// The escalation mechanism, when one is configured.
    #[must_use]
    pub const fn become_method(&self) -> Option<&BecomeMethod> {
        self.become_method.as_ref()
    }

    /// The target shell description.
    #[must_use]
    pub const fn shell(&self) -> ShellConfig {
        self.shell
    }
}

impl Default for PlayContext {
    fn default() -> Self {
        Self::new("/bin/sh")
    }
}

/// Opaque input stream handle supplied at plugin construction.
///
/// Transports hold the handle for the lifetime of the connection and forward
/// it when pipelining; they never interpret its contents themselves.
pub struct TaskInput {
    _stream: Box<dyn Read + Send>,
}

impl TaskInput {
    /// Wraps a reader supplied by the runtime.
    #[must_use]
    pub fn new(stream: impl Read + Send + 'static) -> Self {
        Self {
            _stream: Box::new(stream),
        }
    }

    /// An empty stream, for tasks with nothing to pipe in.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(io::empty())
    }
}

impl fmt::Debug for TaskInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskInput").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_uses_posix_shell() {
        let context = PlayContext::default();
        assert_eq!(context.executable(), "/bin/sh");
        assert!(context.become_method().is_none());
        assert!(!context.shell().is_windows);
    }

    #[test]
    fn become_method_reports_prompt_expectation() {
        let sudo = BecomeMethod::new("sudo", true);
        assert_eq!(sudo.name(), "sudo");
        assert!(sudo.expect_prompt());

        let context = PlayContext::new("/bin/bash").with_become(sudo);
        assert!(context.become_method().unwrap().expect_prompt());
    }

    #[test]
    fn shell_override_is_preserved() {
        let context = PlayContext::default().with_shell(ShellConfig::windows());
        assert!(context.shell().is_windows);
    }

    #[test]
    fn task_input_debug_does_not_expose_stream() {
        let input = TaskInput::empty();
        assert_eq!(format!("{input:?}"), "TaskInput { .. }");
    }
}
