//! Callback contracts and the structured monitoring sink
//!
//! All callbacks are fire-and-forget: the engine never observes a return
//! value. The monitoring sink additionally gets panic containment - a
//! misbehaving sink must never take the engine down with it.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use serde::Serialize;

/// Fired on every accepted mutation with the canonical code string
pub type ChangeCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Fired once per Incomplete -> Complete transition, or per manual submit
pub type CompleteCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Fired when the code is explicitly reset
pub type ClearCallback = Arc<dyn Fn() + Send + Sync>;

/// Focus instruction for the render layer: `Some(index)` to focus a cell,
/// `None` to blur
pub type FocusCallback = Arc<dyn Fn(Option<usize>) + Send + Sync>;

/// Optional structured monitoring sink
pub type MonitorSink = Arc<dyn Fn(&MonitorEvent) + Send + Sync>;

/// Structured events delivered to the monitoring sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MonitorEvent {
    /// An accepted mutation
    Change { code: String },
    /// A completion (edge-detected or manual)
    Complete { code: String },
    /// An explicit reset
    Clear,
    /// A contained failure (validator error, ...)
    Error { message: String },
}

/// Deliver an event to the sink, containing any panic it raises
pub fn emit_monitor(sink: Option<&MonitorSink>, event: &MonitorEvent) {
    if let Some(sink) = sink {
        if catch_unwind(AssertUnwindSafe(|| sink(event))).is_err() {
            tracing::warn!("monitor sink panicked on {:?}", event);
        }
    }
}
