//! Character classes for code cells

/// Character class a code's cells draw from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// ASCII digits 0-9 (default)
    #[default]
    Numeric,
    /// ASCII digits plus upper/lowercase ASCII letters
    Alphanumeric,
}

impl Alphabet {
    /// Check if a character is allowed for this alphabet
    pub fn allows_char(&self, c: char) -> bool {
        match self {
            Alphabet::Numeric => c.is_ascii_digit(),
            Alphabet::Alphanumeric => c.is_ascii_alphanumeric(),
        }
    }

    /// Check a whole string; the empty string always passes
    pub fn allows_str(&self, s: &str) -> bool {
        s.chars().all(|c| self.allows_char(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_allows_digits_only() {
        let a = Alphabet::Numeric;
        assert!(a.allows_char('0'));
        assert!(a.allows_char('9'));
        assert!(!a.allows_char('a'));
        assert!(!a.allows_char(' '));
        assert!(!a.allows_char('٣')); // non-ASCII digit
    }

    #[test]
    fn alphanumeric_allows_both_cases() {
        let a = Alphabet::Alphanumeric;
        assert!(a.allows_char('7'));
        assert!(a.allows_char('a'));
        assert!(a.allows_char('Z'));
        assert!(!a.allows_char('-'));
    }

    #[test]
    fn string_check_is_all_or_nothing() {
        assert!(Alphabet::Numeric.allows_str(""));
        assert!(Alphabet::Numeric.allows_str("123456"));
        assert!(!Alphabet::Numeric.allows_str("12a456"));
    }
}
