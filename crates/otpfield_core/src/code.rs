//! Fixed-length segmented code model
//!
//! `OtpCode` always holds exactly `length` cells. An empty cell is `None`
//! and renders as nothing in the canonical string form, so a partially
//! entered code reads as its filled prefix (plus any filled cells after a
//! gap, concatenated left to right).

use std::fmt;

use smallvec::SmallVec;

use crate::alphabet::Alphabet;

/// The segmented code: exactly `length` cells, each empty or one character
/// from the configured alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpCode {
    cells: SmallVec<[Option<char>; 8]>,
}

impl OtpCode {
    /// Create an empty code of `length` cells
    pub fn new(length: usize) -> Self {
        let mut cells = SmallVec::new();
        cells.resize(length, None);
        Self { cells }
    }

    /// Create from a string, filtering out characters the alphabet rejects,
    /// truncating to `length` and padding with empty cells on the right.
    pub fn from_str(s: &str, length: usize, alphabet: Alphabet) -> Self {
        let mut code = Self::new(length);
        let mut i = 0;
        for c in s.chars().filter(|c| alphabet.allows_char(*c)) {
            if i >= length {
                break;
            }
            code.cells[i] = Some(c);
            i += 1;
        }
        code
    }

    /// Number of cells (always the configured length)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell is filled
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// True when every cell is filled
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Number of filled cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// The cell at `index`, or `None` when empty or out of range
    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Set one cell. A character outside the alphabet (or an out-of-range
    /// index) is silently rejected and the code is left unchanged; returns
    /// whether the write was applied.
    pub fn set_cell(&mut self, index: usize, cell: Option<char>, alphabet: Alphabet) -> bool {
        if index >= self.cells.len() {
            tracing::debug!("set_cell rejected: index {} out of range", index);
            return false;
        }
        if let Some(c) = cell {
            if !alphabet.allows_char(c) {
                tracing::debug!("set_cell rejected: {:?} outside alphabet", c);
                return false;
            }
        }
        self.cells[index] = cell;
        true
    }

    /// Replace the whole code from a string: truncate to the configured
    /// length, pad with empty cells on the right. The characters are not
    /// alphabet-checked here; bulk callers validate before applying.
    pub fn replace_all(&mut self, s: &str) {
        let length = self.cells.len();
        self.cells.clear();
        self.cells.extend(s.chars().take(length).map(Some));
        self.cells.resize(length, None);
    }

    /// Index of the first empty cell, if any
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(|c| c.is_none())
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.cells.iter().flatten() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
