//! Command execution result type.

/// Result of one remote command execution: the `(exit code, stdout, stderr)`
/// triple the host runtime consumes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandOutput {
    /// Process exit code reported by the target.
    pub exit_code: i32,
    /// Raw bytes captured from the command's output channel.
    pub stdout: Vec<u8>,
    /// Raw bytes captured from the command's error channel.
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// Builds a successful result carrying the supplied stdout payload and an
    /// empty error channel.
    #[must_use]
    pub fn success(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            exit_code: 0,
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    /// Returns `true` when the exit code reports success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_zero_exit_code_and_empty_stderr() {
        let output = CommandOutput::success(&b"{}"[..]);
        assert!(output.is_success());
        assert_eq!(output.exit_code, 0);
        assert_eq!(output.stdout, b"{}");
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn nonzero_exit_code_is_not_success() {
        let output = CommandOutput {
            exit_code: 1,
            stdout: Vec::new(),
            stderr: b"boom".to_vec(),
        };
        assert!(!output.is_success());
    }
}
