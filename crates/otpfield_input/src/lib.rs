//! Segmented one-time-passcode input engine
//!
//! Keeps an N-cell code synchronized across controlled/uncontrolled
//! ownership, keyboard navigation, clipboard paste, completion detection
//! and debounced (possibly asynchronous) validation with stale-result
//! rejection. Rendering is not this crate's job: the host forwards raw
//! character/key/paste events in and receives value, completion, clear and
//! focus instructions back through callbacks.
//!
//! # Example
//!
//! ```rust
//! use otpfield_input::prelude::*;
//!
//! let otp = OtpInput::new(OtpConfig::default())
//!     .on_change(|code| println!("code: {code}"))
//!     .on_complete(|code| println!("complete: {code}"));
//!
//! for (i, c) in "123456".chars().enumerate() {
//!     otp.handle_change(i, Some(c));
//! }
//! assert_eq!(otp.value(), "123456");
//! assert!(otp.is_complete());
//! ```

pub mod completion;
pub mod config;
pub mod engine;
pub mod focus;
mod input;
pub mod keyboard;
mod paste;
mod state;
pub mod validation;

pub use completion::CompletionPhase;
pub use config::OtpConfig;
pub use engine::OtpInput;
pub use focus::FocusTracker;
pub use keyboard::{Key, KeyOutcome};
pub use validation::{ValidationState, Validator};

// Re-export the primitives a host typically needs alongside the engine
pub use otpfield_core::{Alphabet, MonitorEvent, OtpCode, ValidationError};

/// Commonly used types in one import
pub mod prelude {
    pub use crate::{
        Alphabet, Key, KeyOutcome, MonitorEvent, OtpCode, OtpConfig, OtpInput, ValidationError,
        ValidationState, Validator,
    };
}
