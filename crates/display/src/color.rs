//! Deterministic ANSI coloring for numeric identifiers.
//!
//! Interleaved trace output from concurrent connections stays attributable
//! when each identifier keeps a stable color. Assignment is a pure function
//! of the numeric input: `palette[n mod palette_len]`, with foreground and
//! background picks offset by fixed constants so the two never collapse onto
//! the same palette slot for equal inputs. Colors are not unique per
//! identifier, only stable.

/// ANSI 256-color indices used for identifier coloring. Chosen from the
/// 6x6x6 cube, skipping the darkest shades that vanish on black terminals.
const PALETTE: [u8; 12] = [39, 45, 75, 81, 118, 154, 178, 184, 208, 203, 171, 135];

/// Offset applied to the palette index for foreground picks.
const FG_OFFSET: u64 = 0;

/// Offset applied to the palette index for background picks.
const BG_OFFSET: u64 = 5;

/// Foreground color index for a numeric identifier.
#[must_use]
pub fn fg(n: u64) -> u8 {
    PALETTE[pick(n, FG_OFFSET)]
}

/// Background color index for a numeric identifier.
#[must_use]
pub fn bg(n: u64) -> u8 {
    PALETTE[pick(n, BG_OFFSET)]
}

fn pick(n: u64, offset: u64) -> usize {
    let len = PALETTE.len() as u64;
    usize::try_from((n % len + offset) % len).unwrap_or(0)
}

/// Wraps `text` in the foreground color derived from `n`, with a reset.
#[must_use]
pub fn paint(text: &str, n: u64) -> String {
    format!("\x1b[38;5;{}m{text}\x1b[0m", fg(n))
}
