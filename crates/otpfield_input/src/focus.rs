//! Focus coordination across cells
//!
//! The engine only decides where focus should go; the render layer owns
//! real focus and is instructed through the focus callback. Every method
//! that accepts a move returns the new index so the caller can emit that
//! instruction.

/// Tracks which cell is focused, clamped to `[0, length)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusTracker {
    index: Option<usize>,
    length: usize,
}

impl FocusTracker {
    pub fn new(length: usize) -> Self {
        Self {
            index: None,
            length,
        }
    }

    /// Currently focused cell, if any
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Focus a specific cell; out-of-range indices are rejected
    pub fn move_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.length {
            return None;
        }
        self.index = Some(index);
        Some(index)
    }

    /// Focus the next cell, stopping at the last one
    pub fn next(&mut self) -> Option<usize> {
        match self.index {
            Some(i) if i + 1 < self.length => self.move_to(i + 1),
            _ => None,
        }
    }

    /// Focus the previous cell, stopping at the first one
    pub fn prev(&mut self) -> Option<usize> {
        match self.index {
            Some(i) if i > 0 => self.move_to(i - 1),
            _ => None,
        }
    }

    /// Drop focus entirely
    pub fn blur(&mut self) {
        self.index = None;
    }
}
