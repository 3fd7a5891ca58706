//! Target shell description shared with transport plugins.

/// Describes the shell configured for the target side of a connection.
///
/// The flag is an explicit field rather than a property probed off a shell
/// object at runtime; targets default to POSIX semantics unless the runtime
/// says otherwise.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ShellConfig {
    /// Whether the target shell follows Windows path and scripting semantics.
    pub is_windows: bool,
}

impl ShellConfig {
    /// A POSIX target shell.
    #[must_use]
    pub const fn posix() -> Self {
        Self { is_windows: false }
    }

    /// A Windows target shell.
    #[must_use]
    pub const fn windows() -> Self {
        Self { is_windows: true }
    }
}
