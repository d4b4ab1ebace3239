//! otpfield core primitives
//!
//! This crate provides the foundational pieces of the otpfield OTP input
//! engine:
//!
//! - **Alphabet**: character classes a code's cells may draw from
//! - **OtpCode**: the fixed-length segmented code model
//! - **ValueSource**: controlled/uncontrolled ownership of the code value
//! - **Events**: callback types and the structured monitoring sink
//!
//! Nothing in here renders, focuses, or validates - that behavior lives in
//! `otpfield_input`, which drives these primitives.
//!
//! # Example
//!
//! ```rust
//! use otpfield_core::{Alphabet, OtpCode};
//!
//! let mut code = OtpCode::new(6);
//! code.set_cell(0, Some('1'), Alphabet::Numeric);
//! code.set_cell(1, Some('x'), Alphabet::Numeric); // silently rejected
//! assert_eq!(code.to_string(), "1");
//! assert_eq!(code.len(), 6);
//! ```

pub mod alphabet;
pub mod code;
pub mod error;
pub mod events;
pub mod value;

pub use alphabet::Alphabet;
pub use code::OtpCode;
pub use error::ValidationError;
pub use events::{
    emit_monitor, ChangeCallback, ClearCallback, CompleteCallback, FocusCallback, MonitorEvent,
    MonitorSink,
};
pub use value::{Controlled, Uncontrolled, ValueSource};
