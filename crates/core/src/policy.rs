// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Configurable lifecycle rules.

/// Whether a completed appointment may still be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletedCancellation {
    /// Cancelling completed work is permitted and reported to the caller.
    #[default]
    Allow,
    /// Completed appointments are terminal.
    Reject,
}

/// Lifecycle rules that vary per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecyclePolicy {
    /// Treatment of `Cancel` on a completed appointment.
    pub completed_cancellation: CompletedCancellation,
    /// When true, `Complete` must carry a final cost. When false, a missing
    /// final cost is recorded as the estimated cost.
    pub require_final_cost_on_completion: bool,
}

impl LifecyclePolicy {
    /// Returns true if completed appointments may be cancelled.
    #[must_use]
    pub const fn allows_cancelling_completed(&self) -> bool {
        matches!(self.completed_cancellation, CompletedCancellation::Allow)
    }
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self {
            completed_cancellation: CompletedCancellation::Allow,
            require_final_cost_on_completion: true,
        }
    }
}
