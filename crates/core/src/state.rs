// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gearsync_domain::{Appointment, AppointmentStatus};

/// The result of a successful lifecycle transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. The input appointment is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The appointment after the transition.
    pub appointment: Appointment,
    /// Status before the transition.
    pub previous_status: AppointmentStatus,
    /// True when the transition changed `scheduled_at`. The caller must then
    /// re-check the customer's other appointments for a time collision.
    pub schedule_changed: bool,
}

impl TransitionResult {
    /// Returns true if the transition changed the status.
    #[must_use]
    pub fn status_changed(&self) -> bool {
        self.previous_status != self.appointment.status
    }
}
