//! Key interpretation
//!
//! Maps key events onto focus moves, cell edits and submission. Tab is
//! never intercepted so the host's default focus traversal keeps working.

/// Key events the navigator understands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Backspace,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Tab,
    Char(char),
}

/// Whether the engine consumed a key (the host should prevent its default
/// handling) or the key passes through untouched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    PassThrough,
}

/// ArrowUp semantics on a cell: empty seeds '1', '9' wraps to '0', any
/// other digit increments. Non-digit cells are not stepped.
pub(crate) fn step_digit_up(cell: Option<char>) -> Option<char> {
    match cell {
        None => Some('1'),
        Some('9') => Some('0'),
        Some(c) if c.is_ascii_digit() => Some((c as u8 + 1) as char),
        Some(_) => None,
    }
}

/// ArrowDown semantics on a cell: empty seeds '9', '0' wraps to '9', any
/// other digit decrements. Non-digit cells are not stepped.
pub(crate) fn step_digit_down(cell: Option<char>) -> Option<char> {
    match cell {
        None => Some('9'),
        Some('0') => Some('9'),
        Some(c) if c.is_ascii_digit() => Some((c as u8 - 1) as char),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_up_seeds_increments_and_wraps() {
        assert_eq!(step_digit_up(None), Some('1'));
        assert_eq!(step_digit_up(Some('0')), Some('1'));
        assert_eq!(step_digit_up(Some('8')), Some('9'));
        assert_eq!(step_digit_up(Some('9')), Some('0'));
        assert_eq!(step_digit_up(Some('a')), None);
    }

    #[test]
    fn arrow_down_seeds_decrements_and_wraps() {
        assert_eq!(step_digit_down(None), Some('9'));
        assert_eq!(step_digit_down(Some('9')), Some('8'));
        assert_eq!(step_digit_down(Some('1')), Some('0'));
        assert_eq!(step_digit_down(Some('0')), Some('9'));
        assert_eq!(step_digit_down(Some('z')), None);
    }
}
