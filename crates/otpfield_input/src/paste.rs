//! Clipboard paste normalization
//!
//! All-or-nothing: a paste either applies as one bulk replacement (one
//! change emission, not one per character) or is rejected without touching
//! the code. Partial application would leave an ambiguous mixed state.

use otpfield_core::Alphabet;

/// Normalize pasted text: strip all whitespace, truncate to `length`, then
/// check every remaining character against the alphabet. Returns the
/// cleaned string and the cell to focus afterwards
/// (`min(pasted_len, length - 1)`), or `None` when the paste is rejected.
pub(crate) fn distribute(raw: &str, length: usize, alphabet: Alphabet) -> Option<(String, usize)> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(length)
        .collect();
    if cleaned.is_empty() {
        tracing::debug!("paste rejected: empty after whitespace strip");
        return None;
    }
    if !alphabet.allows_str(&cleaned) {
        tracing::debug!("paste rejected: character outside alphabet");
        return None;
    }
    let focus = cleaned.chars().count().min(length - 1);
    Some((cleaned, focus))
}
