//! Mutex-guarded engine state
//!
//! One lock owns everything a mutation touches, so each event is a single
//! state transition (a keystroke can never interleave mid-paste). Callback
//! emissions are computed under the lock and fired after it is released.

use otpfield_core::ValueSource;
use tokio::task::JoinHandle;

use crate::completion::CompletionPhase;
use crate::focus::FocusTracker;
use crate::validation::ValidationState;

pub(crate) struct OtpState {
    /// Ownership strategy, selected once at construction
    pub value: Box<dyn ValueSource + Send>,
    pub focus: FocusTracker,
    pub completion: CompletionPhase,
    pub validation: ValidationState,
    /// Monotonically increasing validation attempt counter; an attempt
    /// whose generation no longer matches is stale
    pub generation: u64,
    /// The scheduled debounce/validation task, replaced (never stacked) on
    /// every new trigger
    pub debounce: Option<JoinHandle<()>>,
    pub disabled: bool,
}
