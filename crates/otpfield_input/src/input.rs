//! Single-cell edit decisions
//!
//! The pure half of the input controller: given the current code and a cell
//! index, decide what a backspace should do. The engine applies the
//! decision and emits the callbacks.

use otpfield_core::OtpCode;

/// What a backspace at a given cell does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BackspaceAction {
    /// The cell holds a character: clear it in place, focus stays put
    ClearInPlace,
    /// The cell is empty: move focus left and clear that cell, as one
    /// combined operation
    ClearPrevious(usize),
    /// Index 0 and already empty
    Noop,
}

pub(crate) fn backspace_action(code: &OtpCode, index: usize) -> BackspaceAction {
    if code.cell(index).is_some() {
        BackspaceAction::ClearInPlace
    } else if index > 0 {
        BackspaceAction::ClearPrevious(index - 1)
    } else {
        BackspaceAction::Noop
    }
}
