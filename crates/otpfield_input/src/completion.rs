//! Completion edge detection
//!
//! A two-phase machine watching the code's fullness across mutations. Only
//! the Incomplete -> Complete edge fires the completion callback; editing a
//! cell of an already-full code (Complete -> Complete) must stay silent,
//! and emptying a cell (Complete -> Incomplete) resets silently.

/// Fill phase of the code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionPhase {
    Incomplete,
    Complete,
}

impl CompletionPhase {
    /// Initial phase for a freshly constructed code. A pre-filled
    /// construction starts Complete without a callback - completion is an
    /// edge, and no edge occurred.
    pub fn from_full(full: bool) -> Self {
        if full {
            CompletionPhase::Complete
        } else {
            CompletionPhase::Incomplete
        }
    }

    /// Feed the fullness after a mutation; returns true only on the
    /// Incomplete -> Complete edge.
    pub fn observe(&mut self, full: bool) -> bool {
        let fired = *self == CompletionPhase::Incomplete && full;
        *self = Self::from_full(full);
        fired
    }
}
