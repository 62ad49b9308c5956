//! Progress notification port
//!
//! Defines the interface for reporting progress during a run.

use multidoc_domain::{CallResult, ModelSpec, ResultsTable};
use std::time::Duration;

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer. Call completions arrive
/// in completion order, which differs from dispatch order.
pub trait ProgressNotifier: Send + Sync {
    /// Called once before any call is dispatched
    fn on_dispatch_start(&self, total_calls: usize);

    /// Called as each fan-out call finishes, successfully or not
    fn on_call_complete(&self, result: &CallResult);

    /// Called after every fan-out call has finished
    fn on_dispatch_complete(&self, _table: &ResultsTable) {}

    /// Called before the summary call
    fn on_synthesis_start(&self, _model: &ModelSpec) {}

    /// Called after the summary call returns
    fn on_synthesis_complete(&self, _elapsed: Duration, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_dispatch_start(&self, _total_calls: usize) {}
    fn on_call_complete(&self, _result: &CallResult) {}
}
