//! Engine configuration

use otpfield_core::Alphabet;

/// Construction-time configuration for [`crate::OtpInput`]
#[derive(Clone, Debug)]
pub struct OtpConfig {
    /// Number of cells
    pub length: usize,
    /// Initial value, used only in uncontrolled mode
    pub initial_value: String,
    /// Externally-owned value; presence selects controlled mode
    pub controlled_value: Option<String>,
    /// Character class cells draw from
    pub alphabet: Alphabet,
    /// Schedule validation automatically when the code becomes complete
    pub auto_validate: bool,
    /// Reset the code after a successful validation
    pub auto_clear: bool,
    /// Quiet period before the validator runs
    pub validation_debounce_ms: u64,
    /// A disabled engine ignores every input event
    pub disabled: bool,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            length: 6,
            initial_value: String::new(),
            controlled_value: None,
            alphabet: Alphabet::Numeric,
            auto_validate: false,
            auto_clear: false,
            validation_debounce_ms: 300,
            disabled: false,
        }
    }
}

impl OtpConfig {
    /// Default configuration with a specific cell count
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let config = OtpConfig::default();
        assert_eq!(config.length, 6);
        assert_eq!(config.alphabet, Alphabet::Numeric);
        assert!(!config.auto_validate);
        assert!(!config.auto_clear);
        assert_eq!(config.validation_debounce_ms, 300);
        assert!(config.controlled_value.is_none());
    }
}
