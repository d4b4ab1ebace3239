//! The OTP input engine handle
//!
//! `OtpInput` is a cheap-to-clone handle over shared engine state, in the
//! same shape as a shared widget state handle: one mutex owns the code,
//! focus, completion phase and validation bookkeeping; configuration is
//! immutable after construction; callbacks are registered through consuming
//! builder methods.
//!
//! Every mutation computes its emissions while holding the state lock and
//! fires the callbacks only after releasing it, so a callback that calls
//! back into the engine cannot deadlock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use otpfield_core::events::{
    emit_monitor, ChangeCallback, ClearCallback, CompleteCallback, FocusCallback, MonitorEvent,
    MonitorSink,
};
use otpfield_core::{Controlled, OtpCode, Uncontrolled, ValueSource};
use tokio::runtime::Handle;

use crate::completion::CompletionPhase;
use crate::config::OtpConfig;
use crate::focus::FocusTracker;
use crate::input::{backspace_action, BackspaceAction};
use crate::keyboard::{step_digit_down, step_digit_up, Key, KeyOutcome};
use crate::paste;
use crate::state::OtpState;
use crate::validation::{ValidationState, Validator};

/// A callback emission computed under the state lock, fired after it
pub(crate) enum Emission {
    Change(String),
    Complete(String),
    Clear,
    Focus(Option<usize>),
    Monitor(MonitorEvent),
}

#[derive(Default, Clone)]
pub(crate) struct Callbacks {
    pub on_change: Option<ChangeCallback>,
    pub on_complete: Option<CompleteCallback>,
    pub on_clear: Option<ClearCallback>,
    pub on_focus: Option<FocusCallback>,
    pub monitor: Option<MonitorSink>,
    pub validator: Option<Validator>,
}

pub(crate) struct EngineInner {
    config: OtpConfig,
    state: Mutex<OtpState>,
    callbacks: Mutex<Callbacks>,
    /// Captured at construction; validation is skipped (with a warning)
    /// when the engine was built outside a tokio runtime
    runtime: Option<Handle>,
}

/// The segmented OTP input engine
#[derive(Clone)]
pub struct OtpInput {
    inner: Arc<EngineInner>,
}

impl OtpInput {
    pub fn new(mut config: OtpConfig) -> Self {
        config.length = config.length.max(1);

        // Ownership strategy is decided once, by whether an external value
        // was supplied.
        let value: Box<dyn ValueSource + Send> = match &config.controlled_value {
            Some(v) => Box::new(Controlled::new(OtpCode::from_str(
                v,
                config.length,
                config.alphabet,
            ))),
            None => Box::new(Uncontrolled::new(OtpCode::from_str(
                &config.initial_value,
                config.length,
                config.alphabet,
            ))),
        };

        let state = OtpState {
            completion: CompletionPhase::from_full(value.read().is_full()),
            focus: FocusTracker::new(config.length),
            validation: ValidationState::Idle,
            generation: 0,
            debounce: None,
            disabled: config.disabled,
            value,
        };

        Self {
            inner: Arc::new(EngineInner {
                config,
                state: Mutex::new(state),
                callbacks: Mutex::new(Callbacks::default()),
                runtime: Handle::try_current().ok(),
            }),
        }
    }

    // =========================================================================
    // Builder methods (callback registration)
    // =========================================================================

    /// Fired on every accepted mutation with the canonical code string
    pub fn on_change<F>(self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        if let Ok(mut cbs) = self.inner.callbacks.lock() {
            cbs.on_change = Some(Arc::new(f));
        }
        self
    }

    /// Fired once per Incomplete -> Complete transition, or per submit
    pub fn on_complete<F>(self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        if let Ok(mut cbs) = self.inner.callbacks.lock() {
            cbs.on_complete = Some(Arc::new(f));
        }
        self
    }

    /// Fired when the code is explicitly reset
    pub fn on_clear<F>(self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        if let Ok(mut cbs) = self.inner.callbacks.lock() {
            cbs.on_clear = Some(Arc::new(f));
        }
        self
    }

    /// Focus instruction for the render layer
    pub fn on_focus_request<F>(self, f: F) -> Self
    where
        F: Fn(Option<usize>) + Send + Sync + 'static,
    {
        if let Ok(mut cbs) = self.inner.callbacks.lock() {
            cbs.on_focus = Some(Arc::new(f));
        }
        self
    }

    /// Structured monitoring sink; panics inside it are contained
    pub fn monitor<F>(self, f: F) -> Self
    where
        F: Fn(&MonitorEvent) + Send + Sync + 'static,
    {
        if let Ok(mut cbs) = self.inner.callbacks.lock() {
            cbs.monitor = Some(Arc::new(f));
        }
        self
    }

    /// The code validator driven by the validation pipeline
    pub fn validator(self, validator: Validator) -> Self {
        if let Ok(mut cbs) = self.inner.callbacks.lock() {
            cbs.validator = Some(validator);
        }
        self
    }

    // =========================================================================
    // Event entry points
    // =========================================================================

    /// Apply a single-character edit to one cell. `None` clears the cell.
    /// A character outside the alphabet is silently rejected: no state
    /// change, no callback.
    pub fn handle_change(&self, index: usize, raw: Option<char>) {
        let emissions = {
            let Ok(mut s) = self.inner.state.lock() else {
                return;
            };
            if s.disabled || index >= self.inner.config.length {
                return;
            }
            if let Some(c) = raw {
                if !self.inner.config.alphabet.allows_char(c) {
                    tracing::debug!("change rejected: {:?} outside alphabet", c);
                    return;
                }
            }
            let mut candidate = s.value.read().clone();
            candidate.set_cell(index, raw, self.inner.config.alphabet);
            // Auto-advance after entering a character, except on the last cell
            let focus_to = match raw {
                Some(_) if index + 1 < self.inner.config.length => Some(index + 1),
                _ => None,
            };
            self.apply_edit(&mut s, candidate, focus_to)
        };
        self.fire(emissions);
    }

    /// Backspace semantics: clear a filled cell in place; on an empty cell
    /// move focus left and clear there, as one combined operation; a no-op
    /// on an empty first cell.
    pub fn handle_backspace(&self, index: usize) {
        let emissions = {
            let Ok(mut s) = self.inner.state.lock() else {
                return;
            };
            if s.disabled || index >= self.inner.config.length {
                return;
            }
            let target = match backspace_action(s.value.read(), index) {
                BackspaceAction::ClearInPlace => (index, None),
                BackspaceAction::ClearPrevious(prev) => (prev, Some(prev)),
                BackspaceAction::Noop => return,
            };
            let (clear_at, focus_to) = target;
            let mut candidate = s.value.read().clone();
            candidate.set_cell(clear_at, None, self.inner.config.alphabet);
            self.apply_edit(&mut s, candidate, focus_to)
        };
        self.fire(emissions);
    }

    /// Apply clipboard text as one atomic replacement. All-or-nothing: a
    /// single disallowed character (after whitespace stripping and
    /// truncation to the code length) rejects the entire paste.
    pub fn handle_paste(&self, raw: &str) {
        let emissions = {
            let Ok(mut s) = self.inner.state.lock() else {
                return;
            };
            if s.disabled {
                return;
            }
            let Some((cleaned, focus)) =
                paste::distribute(raw, self.inner.config.length, self.inner.config.alphabet)
            else {
                return;
            };
            let mut candidate = s.value.read().clone();
            candidate.replace_all(&cleaned);
            self.apply_edit(&mut s, candidate, Some(focus))
        };
        self.fire(emissions);
    }

    /// Interpret a key event on the focused cell
    pub fn handle_key(&self, index: usize, key: Key) -> KeyOutcome {
        if self.is_disabled() {
            return KeyOutcome::PassThrough;
        }
        match key {
            // Default focus traversal is never intercepted
            Key::Tab => KeyOutcome::PassThrough,
            Key::Backspace => {
                self.handle_backspace(index);
                KeyOutcome::Consumed
            }
            Key::ArrowLeft => {
                if index > 0 {
                    self.focus(index - 1);
                }
                KeyOutcome::Consumed
            }
            Key::ArrowRight => {
                if index + 1 < self.inner.config.length {
                    self.focus(index + 1);
                }
                KeyOutcome::Consumed
            }
            Key::ArrowUp | Key::ArrowDown => {
                let cell = self.cell(index);
                let stepped = if key == Key::ArrowUp {
                    step_digit_up(cell)
                } else {
                    step_digit_down(cell)
                };
                if let Some(c) = stepped {
                    self.handle_change(index, Some(c));
                }
                KeyOutcome::Consumed
            }
            Key::Enter => {
                self.submit();
                KeyOutcome::Consumed
            }
            Key::Char(c) => {
                if self.inner.config.alphabet.allows_char(c) {
                    self.handle_change(index, Some(c));
                    KeyOutcome::Consumed
                } else {
                    KeyOutcome::PassThrough
                }
            }
        }
    }

    /// Manual completion attempt (Enter). Fires the completion callback
    /// when the code is full and, in manual mode (auto-validate off),
    /// schedules validation.
    pub fn submit(&self) {
        let emissions = {
            let Ok(mut s) = self.inner.state.lock() else {
                return;
            };
            if s.disabled || !s.value.read().is_full() {
                return;
            }
            let code = s.value.read().to_string();
            if !self.inner.config.auto_validate {
                self.schedule_validation(&mut s);
            }
            vec![
                Emission::Complete(code.clone()),
                Emission::Monitor(MonitorEvent::Complete { code }),
            ]
        };
        self.fire(emissions);
    }

    /// Programmatic set, and the owner's feedback path in controlled mode.
    /// Does not re-emit the change callback (the owner already knows the
    /// value); completion is edge-detected, so reflecting a value the
    /// engine already announced stays silent.
    pub fn set_value(&self, value: &str) {
        let emissions = {
            let Ok(mut s) = self.inner.state.lock() else {
                return;
            };
            let code =
                OtpCode::from_str(value, self.inner.config.length, self.inner.config.alphabet);
            let full = code.is_full();
            let code_str = code.to_string();
            s.value.sync(code);
            if !s.validation.is_current_for(&code_str) {
                s.validation = ValidationState::Idle;
            }
            let mut emissions = Vec::new();
            if s.completion.observe(full) {
                emissions.push(Emission::Complete(code_str.clone()));
                emissions.push(Emission::Monitor(MonitorEvent::Complete { code: code_str }));
                if self.inner.config.auto_validate {
                    self.schedule_validation(&mut s);
                }
            }
            emissions
        };
        self.fire(emissions);
    }

    /// Explicit reset: empty code, change + clear callbacks, completion
    /// phase reset, any pending validation superseded, focus back to the
    /// first cell.
    pub fn clear(&self) {
        let emissions = {
            let Ok(mut s) = self.inner.state.lock() else {
                return;
            };
            reset_locked(&mut s)
        };
        self.fire(emissions);
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Instruct the render layer to focus a cell
    pub fn focus(&self, index: usize) {
        let emissions = {
            let Ok(mut s) = self.inner.state.lock() else {
                return;
            };
            if s.disabled {
                return;
            }
            match s.focus.move_to(index) {
                Some(i) => vec![Emission::Focus(Some(i))],
                None => return,
            }
        };
        self.fire(emissions);
    }

    /// Drop focus
    pub fn blur(&self) {
        let emissions = {
            let Ok(mut s) = self.inner.state.lock() else {
                return;
            };
            s.focus.blur();
            vec![Emission::Focus(None)]
        };
        self.fire(emissions);
    }

    /// Container-tap behavior: focus the first empty cell, or the last
    /// cell when the code is full
    pub fn focus_first_empty(&self) {
        let target = {
            let Ok(s) = self.inner.state.lock() else {
                return;
            };
            if s.disabled {
                return;
            }
            s.value
                .read()
                .first_empty()
                .unwrap_or(self.inner.config.length - 1)
        };
        self.focus(target);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn length(&self) -> usize {
        self.inner.config.length
    }

    /// Canonical code string (filled cells, left to right)
    pub fn value(&self) -> String {
        match self.inner.state.lock() {
            Ok(s) => s.value.read().to_string(),
            Err(_) => String::new(),
        }
    }

    /// The cell at `index`, or `None` when empty or out of range
    pub fn cell(&self, index: usize) -> Option<char> {
        match self.inner.state.lock() {
            Ok(s) => s.value.read().cell(index),
            Err(_) => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        match self.inner.state.lock() {
            Ok(s) => s.value.read().is_full(),
            Err(_) => false,
        }
    }

    pub fn focused_index(&self) -> Option<usize> {
        match self.inner.state.lock() {
            Ok(s) => s.focus.index(),
            Err(_) => None,
        }
    }

    /// Outcome of the current validation attempt. Always describes the
    /// current code: an edit resets a state tagged with the previous code
    /// back to [`ValidationState::Idle`].
    pub fn validation_state(&self) -> ValidationState {
        match self.inner.state.lock() {
            Ok(s) => s.validation.clone(),
            Err(_) => ValidationState::Idle,
        }
    }

    pub fn is_disabled(&self) -> bool {
        match self.inner.state.lock() {
            Ok(s) => s.disabled,
            Err(_) => true,
        }
    }

    /// A disabled engine ignores every input event
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut s) = self.inner.state.lock() {
            s.disabled = disabled;
        }
    }

    /// Wait for the currently scheduled validation attempt (debounce wait
    /// included) to finish. Resolves immediately when none is scheduled.
    pub async fn settle(&self) {
        let handle = match self.inner.state.lock() {
            Ok(mut s) => s.debounce.take(),
            Err(_) => None,
        };
        if let Some(handle) = handle {
            // An aborted attempt reports a cancellation error; either way
            // there is nothing left in flight.
            let _ = handle.await;
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Commit a candidate code and compute the resulting emissions:
    /// unconditional change notification, optional focus move, and the
    /// completion edge with its validation trigger.
    fn apply_edit(
        &self,
        s: &mut OtpState,
        candidate: OtpCode,
        focus_to: Option<usize>,
    ) -> Vec<Emission> {
        let code_str = candidate.to_string();
        let full = candidate.is_full();
        // Commits only in uncontrolled mode; the change callback below
        // informs a controlled owner either way.
        s.value.write(candidate);
        tracing::debug!("code changed: {:?}", code_str);

        // A state tagged with the previous code is superseded by the edit.
        if !s.validation.is_current_for(&code_str) {
            s.validation = ValidationState::Idle;
        }

        let mut emissions = vec![
            Emission::Change(code_str.clone()),
            Emission::Monitor(MonitorEvent::Change {
                code: code_str.clone(),
            }),
        ];
        if let Some(target) = focus_to {
            if let Some(i) = s.focus.move_to(target) {
                emissions.push(Emission::Focus(Some(i)));
            }
        }
        if s.completion.observe(full) {
            emissions.push(Emission::Complete(code_str.clone()));
            emissions.push(Emission::Monitor(MonitorEvent::Complete { code: code_str }));
            if self.inner.config.auto_validate {
                self.schedule_validation(s);
            }
        }
        emissions
    }

    /// Start a new debounced validation attempt, superseding any previous
    /// one: the old timer task is aborted (never stacked) and the
    /// generation counter is bumped so an already-running validator call
    /// resolves as stale.
    fn schedule_validation(&self, s: &mut OtpState) {
        let validator = match self.inner.callbacks.lock() {
            Ok(cbs) => match cbs.validator.clone() {
                Some(v) => v,
                None => return,
            },
            Err(_) => return,
        };

        s.generation += 1;
        let generation = s.generation;
        if let Some(previous) = s.debounce.take() {
            previous.abort();
        }

        let Some(runtime) = self.inner.runtime.clone() else {
            tracing::warn!("validation skipped: engine was built outside a tokio runtime");
            return;
        };

        let inner = Arc::clone(&self.inner);
        let debounce = Duration::from_millis(self.inner.config.validation_debounce_ms);
        let handle = runtime.spawn(async move {
            tokio::time::sleep(debounce).await;

            // Capture the code current at the end of the quiet period, not
            // whatever triggered the debounce.
            let code = {
                let Ok(mut s) = inner.state.lock() else {
                    return;
                };
                if s.generation != generation {
                    return;
                }
                let code = s.value.read().to_string();
                s.validation = ValidationState::Pending {
                    code: code.clone(),
                    generation,
                };
                code
            };

            let result = validator.run(code.clone()).await;

            let emissions = {
                let Ok(mut s) = inner.state.lock() else {
                    return;
                };
                // Stale-guard: a newer attempt or a code edit superseded
                // this one; its effect is suppressed, never its execution.
                if s.generation != generation || s.value.read().to_string() != code {
                    tracing::debug!("validation result for {:?} discarded as stale", code);
                    return;
                }
                match result {
                    Ok(is_valid) => {
                        if is_valid && inner.config.auto_clear {
                            reset_locked(&mut s)
                        } else {
                            s.validation = ValidationState::Resolved {
                                code,
                                generation,
                                is_valid,
                                message: None,
                            };
                            Vec::new()
                        }
                    }
                    Err(err) => {
                        s.validation = ValidationState::Resolved {
                            code,
                            generation,
                            is_valid: false,
                            message: Some("validation failed".to_string()),
                        };
                        vec![Emission::Monitor(MonitorEvent::Error {
                            message: err.to_string(),
                        })]
                    }
                }
            };
            fire_on(&inner, emissions);
        });
        s.debounce = Some(handle);
    }

    fn fire(&self, emissions: Vec<Emission>) {
        fire_on(&self.inner, emissions);
    }
}

/// Empty the code and produce the reset emissions. Shared by the public
/// `clear()` and the auto-clear path after a valid resolution.
fn reset_locked(s: &mut OtpState) -> Vec<Emission> {
    let mut cleared = s.value.read().clone();
    cleared.replace_all("");
    s.value.write(cleared);
    s.completion = CompletionPhase::Incomplete;
    s.validation = ValidationState::Idle;
    s.generation += 1;
    if let Some(previous) = s.debounce.take() {
        previous.abort();
    }
    tracing::debug!("code reset");

    let mut emissions = vec![
        Emission::Change(String::new()),
        Emission::Monitor(MonitorEvent::Change {
            code: String::new(),
        }),
        Emission::Clear,
        Emission::Monitor(MonitorEvent::Clear),
    ];
    if let Some(i) = s.focus.move_to(0) {
        emissions.push(Emission::Focus(Some(i)));
    }
    emissions
}

/// Deliver emissions with the state lock released
fn fire_on(inner: &EngineInner, emissions: Vec<Emission>) {
    if emissions.is_empty() {
        return;
    }
    let cbs = match inner.callbacks.lock() {
        Ok(guard) => Callbacks::clone(&guard),
        Err(_) => {
            tracing::warn!("callback registry poisoned; emissions dropped");
            return;
        }
    };
    for emission in emissions {
        match emission {
            Emission::Change(code) => {
                if let Some(f) = &cbs.on_change {
                    f(&code);
                }
            }
            Emission::Complete(code) => {
                if let Some(f) = &cbs.on_complete {
                    f(&code);
                }
            }
            Emission::Clear => {
                if let Some(f) = &cbs.on_clear {
                    f();
                }
            }
            Emission::Focus(index) => {
                if let Some(f) = &cbs.on_focus {
                    f(index);
                }
            }
            Emission::Monitor(event) => emit_monitor(cbs.monitor.as_ref(), &event),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use otpfield_core::Alphabet;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder {
        changes: Arc<StdMutex<Vec<String>>>,
        completes: Arc<StdMutex<Vec<String>>>,
        focuses: Arc<StdMutex<Vec<Option<usize>>>>,
        clears: Arc<StdMutex<usize>>,
    }

    impl Recorder {
        fn wire(&self, otp: OtpInput) -> OtpInput {
            let changes = Arc::clone(&self.changes);
            let completes = Arc::clone(&self.completes);
            let focuses = Arc::clone(&self.focuses);
            let clears = Arc::clone(&self.clears);
            otp.on_change(move |code| changes.lock().unwrap().push(code.to_string()))
                .on_complete(move |code| completes.lock().unwrap().push(code.to_string()))
                .on_focus_request(move |i| focuses.lock().unwrap().push(i))
                .on_clear(move || *clears.lock().unwrap() += 1)
        }

        fn changes(&self) -> Vec<String> {
            self.changes.lock().unwrap().clone()
        }

        fn completes(&self) -> Vec<String> {
            self.completes.lock().unwrap().clone()
        }

        fn focuses(&self) -> Vec<Option<usize>> {
            self.focuses.lock().unwrap().clone()
        }
    }

    #[test]
    fn typing_emits_growing_prefixes_and_one_completion() {
        let rec = Recorder::default();
        let otp = rec.wire(OtpInput::new(OtpConfig::default()));

        for (i, c) in "123456".chars().enumerate() {
            otp.handle_change(i, Some(c));
        }

        assert_eq!(
            rec.changes(),
            vec!["1", "12", "123", "1234", "12345", "123456"]
        );
        assert_eq!(rec.completes(), vec!["123456"]);
        assert!(otp.is_complete());
    }

    #[test]
    fn rejected_characters_change_nothing() {
        let rec = Recorder::default();
        let otp = rec.wire(OtpInput::new(OtpConfig::default()));

        otp.handle_change(0, Some('a'));
        otp.handle_change(9, Some('1'));

        assert!(rec.changes().is_empty());
        assert_eq!(otp.value(), "");
    }

    #[test]
    fn auto_advance_skips_the_last_cell() {
        let rec = Recorder::default();
        let otp = rec.wire(OtpInput::new(OtpConfig::with_length(3)));

        otp.handle_change(0, Some('1'));
        otp.handle_change(1, Some('2'));
        otp.handle_change(2, Some('3'));

        assert_eq!(rec.focuses(), vec![Some(1), Some(2)]);
        assert_eq!(otp.focused_index(), Some(2));
    }

    #[test]
    fn backspace_clears_in_place_then_walks_left() {
        let rec = Recorder::default();
        let otp = rec.wire(OtpInput::new(OtpConfig::default()));
        otp.handle_paste("123");

        // Cell 2 is filled: clear in place, focus stays
        otp.handle_backspace(2);
        assert_eq!(otp.value(), "12");
        assert_eq!(rec.focuses(), vec![Some(3)]); // only the paste's move

        // Cell 2 now empty: clear cell 1 and move focus there
        otp.handle_backspace(2);
        assert_eq!(otp.value(), "1");
        assert_eq!(rec.focuses(), vec![Some(3), Some(1)]);

        otp.handle_backspace(1);
        otp.handle_backspace(0); // empty cell 0: no-op
        assert_eq!(otp.value(), "");
        assert_eq!(rec.changes().last().unwrap(), "");
        assert_eq!(rec.changes().len(), 4);
    }

    #[test]
    fn editing_a_full_code_does_not_refire_completion() {
        let rec = Recorder::default();
        let otp = rec.wire(OtpInput::new(OtpConfig::default()));
        otp.handle_paste("123456");
        assert_eq!(rec.completes(), vec!["123456"]);

        otp.handle_change(0, Some('9'));
        assert_eq!(rec.completes(), vec!["123456"]);

        // Clearing and refilling fires it again, exactly once
        otp.handle_backspace(0);
        otp.handle_change(0, Some('1'));
        assert_eq!(rec.completes(), vec!["123456", "123456"]);
    }

    #[test]
    fn paste_is_all_or_nothing() {
        let rec = Recorder::default();
        let otp = rec.wire(OtpInput::new(OtpConfig::with_length(3)));

        otp.handle_paste("12x");
        assert!(rec.changes().is_empty());
        assert_eq!(otp.value(), "");

        otp.handle_paste("123456789");
        assert_eq!(rec.changes(), vec!["123"]);
        assert_eq!(otp.focused_index(), Some(2));
    }

    #[test]
    fn key_table_matches_the_contract() {
        let otp = OtpInput::new(OtpConfig::default());
        otp.focus(0);

        assert_eq!(otp.handle_key(0, Key::Tab), KeyOutcome::PassThrough);
        assert_eq!(otp.handle_key(0, Key::Char('x')), KeyOutcome::PassThrough);
        assert_eq!(otp.handle_key(0, Key::Char('5')), KeyOutcome::Consumed);
        assert_eq!(otp.value(), "5");

        // ArrowLeft at 0 is consumed but moves nothing
        assert_eq!(otp.handle_key(0, Key::ArrowLeft), KeyOutcome::Consumed);
        assert_eq!(otp.focused_index(), Some(1)); // from the auto-advance

        assert_eq!(otp.handle_key(1, Key::ArrowUp), KeyOutcome::Consumed);
        assert_eq!(otp.cell(1), Some('1')); // empty seeds '1'
        otp.handle_key(1, Key::ArrowDown);
        otp.handle_key(1, Key::ArrowDown);
        assert_eq!(otp.cell(1), Some('9')); // 1 -> 0 -> wraps to 9
    }

    #[test]
    fn arrow_stepping_a_full_code_stays_silent() {
        let rec = Recorder::default();
        let otp = rec.wire(OtpInput::new(OtpConfig::default()));
        otp.handle_paste("123456");

        otp.handle_key(0, Key::ArrowUp);
        assert_eq!(otp.value(), "223456");
        assert_eq!(rec.completes(), vec!["123456"]);
    }

    #[test]
    fn controlled_mode_notifies_but_never_commits() {
        let rec = Recorder::default();
        let otp = rec.wire(OtpInput::new(OtpConfig {
            controlled_value: Some("12".to_string()),
            ..Default::default()
        }));

        otp.handle_change(2, Some('3'));
        // The owner was informed of the attempted change...
        assert_eq!(rec.changes(), vec!["123"]);
        // ...but the engine still displays the owner-supplied value
        assert_eq!(otp.value(), "12");

        // Owner reflects the value back; no change re-emission
        otp.set_value("123");
        assert_eq!(otp.value(), "123");
        assert_eq!(rec.changes(), vec!["123"]);
    }

    #[test]
    fn controlled_completion_fires_on_the_edge_only_once() {
        let rec = Recorder::default();
        let otp = rec.wire(OtpInput::new(OtpConfig {
            length: 3,
            controlled_value: Some("12".to_string()),
            ..Default::default()
        }));

        otp.handle_change(2, Some('3'));
        assert_eq!(rec.completes(), vec!["123"]);

        // The owner reflecting the completed value is not a second edge
        otp.set_value("123");
        assert_eq!(rec.completes(), vec!["123"]);
    }

    #[test]
    fn prefilled_initial_value_does_not_fire_completion() {
        let rec = Recorder::default();
        let otp = rec.wire(OtpInput::new(OtpConfig {
            length: 3,
            initial_value: "123".to_string(),
            ..Default::default()
        }));

        assert!(otp.is_complete());
        assert!(rec.completes().is_empty());

        // Enter still performs a manual completion
        otp.submit();
        assert_eq!(rec.completes(), vec!["123"]);
    }

    #[test]
    fn clear_resets_everything_and_refocuses_the_first_cell() {
        let rec = Recorder::default();
        let otp = rec.wire(OtpInput::new(OtpConfig::default()));
        otp.handle_paste("123456");

        otp.clear();
        assert_eq!(otp.value(), "");
        assert_eq!(*rec.clears.lock().unwrap(), 1);
        assert_eq!(rec.changes().last().unwrap(), "");
        assert_eq!(rec.focuses().last().unwrap(), &Some(0));
        assert_eq!(otp.validation_state(), ValidationState::Idle);

        // Refilling after a clear completes again
        otp.handle_paste("654321");
        assert_eq!(rec.completes(), vec!["123456", "654321"]);
    }

    #[test]
    fn disabled_engine_is_inert() {
        let rec = Recorder::default();
        let otp = rec.wire(OtpInput::new(OtpConfig::default()));
        otp.set_disabled(true);

        otp.handle_change(0, Some('1'));
        otp.handle_paste("123456");
        assert_eq!(otp.handle_key(0, Key::Char('1')), KeyOutcome::PassThrough);
        otp.submit();

        assert!(rec.changes().is_empty());
        assert!(rec.completes().is_empty());

        otp.set_disabled(false);
        otp.handle_change(0, Some('1'));
        assert_eq!(rec.changes(), vec!["1"]);
    }

    #[test]
    fn focus_first_empty_targets_the_gap_or_the_last_cell() {
        let otp = OtpInput::new(OtpConfig::default());
        otp.handle_paste("123");
        otp.focus_first_empty();
        assert_eq!(otp.focused_index(), Some(3));

        otp.handle_paste("123456");
        otp.focus_first_empty();
        assert_eq!(otp.focused_index(), Some(5));
    }

    #[test]
    fn alphanumeric_alphabet_accepts_letters() {
        let rec = Recorder::default();
        let otp = rec.wire(OtpInput::new(OtpConfig {
            alphabet: Alphabet::Alphanumeric,
            ..Default::default()
        }));

        otp.handle_change(0, Some('A'));
        otp.handle_change(1, Some('b'));
        otp.handle_change(2, Some('3'));
        assert_eq!(otp.value(), "Ab3");

        // Arrow stepping ignores non-digit cells
        otp.handle_key(0, Key::ArrowUp);
        assert_eq!(otp.cell(0), Some('A'));
    }

    #[test]
    fn blur_emits_a_none_focus_instruction() {
        let rec = Recorder::default();
        let otp = rec.wire(OtpInput::new(OtpConfig::default()));
        otp.focus(2);
        otp.blur();
        assert_eq!(rec.focuses(), vec![Some(2), None]);
        assert_eq!(otp.focused_index(), None);
    }
}
