//! Property tests for the lexical path normalization helpers.

use dummy::{normalize_posix, normalize_windows, prefix_login_path};
use proptest::prelude::*;

/// Path segments drawn from the characters that show up in real remote
/// paths, including dot segments the resolver must consume.
fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-zA-Z0-9_.-]{1,8}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn posix_path() -> impl Strategy<Value = String> {
    (proptest::bool::ANY, prop::collection::vec(segment(), 0..6)).prop_map(|(absolute, segments)| {
        let joined = segments.join("/");
        if absolute {
            format!("/{joined}")
        } else {
            joined
        }
    })
}

proptest! {
    #[test]
    fn login_path_is_always_absolute_on_posix(path in posix_path()) {
        let normalized = prefix_login_path(&path, false);
        prop_assert!(normalized.starts_with('/'));
    }

    #[test]
    fn posix_normalization_is_idempotent(path in posix_path()) {
        let once = normalize_posix(&path);
        prop_assert_eq!(normalize_posix(&once), once.clone());
    }

    #[test]
    fn absolute_posix_results_contain_no_dot_segments(path in posix_path()) {
        let normalized = prefix_login_path(&path, false);
        for segment in normalized.split('/').skip(1) {
            prop_assert_ne!(segment, ".");
            prop_assert_ne!(segment, "..");
            prop_assert!(!segment.is_empty() || normalized == "/");
        }
    }

    #[test]
    fn windows_results_contain_no_forward_slashes(path in posix_path()) {
        let normalized = normalize_windows(&path);
        prop_assert!(!normalized.contains('/'));
    }

    #[test]
    fn windows_normalization_is_idempotent(path in posix_path()) {
        let once = normalize_windows(&path);
        prop_assert_eq!(normalize_windows(&once), once.clone());
    }
}
