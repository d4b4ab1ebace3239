//! Controlled/uncontrolled ownership of the code value
//!
//! The strategy is chosen once at construction (by whether an external
//! value was supplied) and never changes mid-lifetime. Mutation methods in
//! the engine call [`ValueSource::write`]; only the uncontrolled source
//! commits it. The change notification itself is emitted by the engine in
//! both modes, so a controlled owner is informed of every attempted change
//! and can feed the value back through [`ValueSource::sync`].

use crate::code::OtpCode;

/// Ownership strategy for the authoritative code value
pub trait ValueSource: Send {
    /// The code as the engine should currently display it
    fn read(&self) -> &OtpCode;

    /// Attempt to persist a mutation; returns whether it was committed.
    /// The controlled source never commits here - its owner is authoritative
    /// and reflects accepted changes back via [`ValueSource::sync`].
    fn write(&mut self, code: OtpCode) -> bool;

    /// Owner feedback (controlled) or programmatic set (uncontrolled);
    /// always commits.
    fn sync(&mut self, code: OtpCode);
}

/// Engine-owned value: the engine persists the string internally
pub struct Uncontrolled {
    code: OtpCode,
}

impl Uncontrolled {
    pub fn new(code: OtpCode) -> Self {
        Self { code }
    }
}

impl ValueSource for Uncontrolled {
    fn read(&self) -> &OtpCode {
        &self.code
    }

    fn write(&mut self, code: OtpCode) -> bool {
        self.code = code;
        true
    }

    fn sync(&mut self, code: OtpCode) {
        self.code = code;
    }
}

/// Externally-owned value: the engine keeps only a render mirror of what
/// the owner last supplied
pub struct Controlled {
    mirror: OtpCode,
}

impl Controlled {
    pub fn new(mirror: OtpCode) -> Self {
        Self { mirror }
    }
}

impl ValueSource for Controlled {
    fn read(&self) -> &OtpCode {
        &self.mirror
    }

    fn write(&mut self, _code: OtpCode) -> bool {
        // Owner is authoritative; it learns of the attempt through the
        // engine's change notification and feeds the value back.
        false
    }

    fn sync(&mut self, code: OtpCode) {
        self.mirror = code;
    }
}
