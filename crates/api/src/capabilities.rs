// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities expose what a principal may do with an appointment without
//! leaking domain internals. They are advisory only and do not replace the
//! checks each handler performs.

use gearsync::LifecyclePolicy;
use gearsync_domain::{
    Appointment, AppointmentStatus, Principal, can_mutate, can_service, can_view,
};

use crate::request_response::{AppointmentCapabilities, Capability};

/// Computes what `principal` may do with `appointment` right now.
///
/// Combines the ownership and role checks with the status rules, so a
/// capability is `Allowed` only if the matching handler would accept the
/// request (input validation aside).
#[must_use]
pub fn compute_appointment_capabilities(
    principal: &Principal,
    appointment: &Appointment,
    policy: &LifecyclePolicy,
) -> AppointmentCapabilities {
    let owner: bool = can_mutate(principal, appointment);
    let status: AppointmentStatus = appointment.status;

    AppointmentCapabilities {
        can_view: Capability::from_bool(can_view(principal, appointment)),
        can_update: Capability::from_bool(owner && status.is_editable()),
        can_cancel: Capability::from_bool(
            owner
                && status
                    .validate_cancellation(policy.allows_cancelling_completed())
                    .is_ok(),
        ),
        can_delete: Capability::from_bool(owner && status.is_deletable()),
        can_reschedule: Capability::from_bool(
            owner && status.can_transition_to(AppointmentStatus::Rescheduled),
        ),
        can_service: Capability::from_bool(can_service(principal) && !status.is_terminal()),
    }
}
