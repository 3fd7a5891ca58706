//! Error taxonomy shared between the host runtime and transport plugins.

use thiserror::Error;

/// Errors a transport plugin may surface to the host runtime.
///
/// The taxonomy deliberately covers more ground than every plugin exercises:
/// diagnostic stubs keep [`FileNotFound`](Self::FileNotFound) and
/// [`ConnectionFailure`](Self::ConnectionFailure) for interface compatibility
/// without ever raising them, while [`MissingOption`](Self::MissingOption)
/// originates in the option-resolution accessors and passes through plugin
/// operations unchanged.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConnectionError {
    /// A file referenced by a transfer operation does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path the transfer operation could not resolve.
        path: String,
    },

    /// The transport could not reach or keep its session with the target.
    #[error("connection failure: {0}")]
    ConnectionFailure(String),

    /// A required connection option was never resolved by the host runtime.
    #[error("required connection option {name:?} was not resolved")]
    MissingOption {
        /// Name of the unresolved option.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_option_names_the_option() {
        let error = ConnectionError::MissingOption {
            name: "remote_addr".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "required connection option \"remote_addr\" was not resolved"
        );
    }

    #[test]
    fn file_not_found_includes_path() {
        let error = ConnectionError::FileNotFound {
            path: "/tmp/missing".to_string(),
        };
        assert!(error.to_string().contains("/tmp/missing"));
    }

    #[test]
    fn connection_failure_carries_detail() {
        let error = ConnectionError::ConnectionFailure("host unreachable".to_string());
        assert_eq!(error.to_string(), "connection failure: host unreachable");
    }
}
