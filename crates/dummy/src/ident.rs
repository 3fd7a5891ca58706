//! Identifier generation for trace attribution.
//!
//! Two kinds of identifier keep interleaved trace output readable when the
//! runtime drives many connections from many workers: a process-wide token
//! minted once per plugin load, and a per-connection token drawn from a
//! shared counter. Neither is security-relevant; both only need to be
//! distinguishable at a glance.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use display::color;

/// Number of hex digits in a process instance token.
const INSTANCE_ID_DIGITS: usize = 8;

/// Range the connection counter wraps in before rendering.
const CONNECTION_ID_RANGE: u64 = 256;

/// Process-wide plugin instance token.
///
/// Mixes the wall clock, the OS process id, and the current thread id, so
/// forked workers that load the plugin at the same instant still render
/// distinct tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstanceId {
    digits: String,
}

impl InstanceId {
    /// Mints a fresh token.
    #[must_use]
    pub fn generate() -> Self {
        let mut hasher = DefaultHasher::new();
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .hash(&mut hasher);
        std::process::id().hash(&mut hasher);
        std::thread::current().id().hash(&mut hasher);

        let value = hasher.finish() & 0xffff_ffff;
        Self {
            digits: format!("{value:0width$x}", width = INSTANCE_ID_DIGITS),
        }
    }

    /// The token digits, always eight lowercase hex chars.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// The token for this process, minted on first use.
pub fn process_instance_id() -> &'static InstanceId {
    static INSTANCE: OnceLock<InstanceId> = OnceLock::new();
    INSTANCE.get_or_init(InstanceId::generate)
}

/// Locally-unique connection identifier drawn from an [`IdAllocator`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConnectionId {
    raw: u64,
}

impl ConnectionId {
    /// The raw counter value, unique per allocator for the process lifetime.
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.raw
    }

    /// The rendered value, wrapped into the fixed identifier range.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.raw % CONNECTION_ID_RANGE
    }

    /// Renders the identifier as three zero-padded decimal digits, wrapped
    /// in the deterministic color for its value when `colored` is set.
    #[must_use]
    pub fn render(&self, colored: bool) -> String {
        let digits = format!("{:03}", self.value());
        if colored {
            color::paint(&digits, self.value())
        } else {
            digits
        }
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// Shared counter handing out connection identifiers.
///
/// Explicitly owned and injected into every connection construction; the
/// mutex makes read-and-increment a single atomic unit, so two connections
/// constructed from different threads never share a raw value.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: Mutex<u64>,
}

impl IdAllocator {
    /// Creates an allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the next identifier.
    pub fn allocate(&self) -> ConnectionId {
        let mut next = self.next.lock().unwrap_or_else(|e| e.into_inner());
        let raw = *next;
        *next += 1;
        ConnectionId { raw }
    }
}
