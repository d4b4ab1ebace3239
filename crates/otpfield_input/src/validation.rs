//! User-supplied validators and validation outcome tracking
//!
//! The scheduling itself (debounce timer, generation guard, auto-clear)
//! lives in the engine; this module defines what a validator is and how an
//! attempt's outcome is tagged so stale results can be recognized.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use otpfield_core::ValidationError;

/// Boxed future returned by async validators
pub type ValidatorFuture = Pin<Box<dyn Future<Output = Result<bool, ValidationError>> + Send>>;

/// A user-supplied code validator, synchronous or asynchronous
#[derive(Clone)]
pub enum Validator {
    Sync(Arc<dyn Fn(&str) -> Result<bool, ValidationError> + Send + Sync>),
    Async(Arc<dyn Fn(String) -> ValidatorFuture + Send + Sync>),
}

impl Validator {
    /// Infallible synchronous validator
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Validator::Sync(Arc::new(move |code| Ok(f(code))))
    }

    /// Fallible synchronous validator
    pub fn try_sync<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<bool, ValidationError> + Send + Sync + 'static,
    {
        Validator::Sync(Arc::new(f))
    }

    /// Asynchronous validator
    pub fn async_fn<F, Fut>(f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool, ValidationError>> + Send + 'static,
    {
        Validator::Async(Arc::new(move |code| Box::pin(f(code))))
    }

    pub(crate) async fn run(&self, code: String) -> Result<bool, ValidationError> {
        match self {
            Validator::Sync(f) => f(&code),
            Validator::Async(f) => f(code).await,
        }
    }
}

/// Outcome of the current validation attempt.
///
/// Pending/Resolved states are tagged with the code and generation they
/// were computed for; a state whose tag no longer matches the current code
/// is stale, and the engine resets it to [`ValidationState::Idle`] on the
/// next edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationState {
    /// No attempt in flight or recorded for the current code
    Idle,
    /// The validator is running for `code`
    Pending { code: String, generation: u64 },
    /// The validator resolved for `code`
    Resolved {
        code: String,
        generation: u64,
        is_valid: bool,
        message: Option<String>,
    },
}

impl ValidationState {
    /// Whether this state still describes `current_code`
    pub fn is_current_for(&self, current_code: &str) -> bool {
        match self {
            ValidationState::Idle => true,
            ValidationState::Pending { code, .. } | ValidationState::Resolved { code, .. } => {
                code == current_code
            }
        }
    }
}
