// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability checks.
//!
//! Every authorization decision about an appointment or vehicle is made by
//! one of these functions. They are pure and depend only on the principal's
//! role and identity.

use crate::types::{Appointment, Principal, Role, Vehicle};

/// Returns true if `principal` may read `appointment`.
///
/// Customers see only their own appointments. Employees see all of them.
#[must_use]
pub const fn can_view(principal: &Principal, appointment: &Appointment) -> bool {
    match principal.role {
        Role::Employee => true,
        Role::Customer => appointment.is_owned_by(principal),
    }
}

/// Returns true if `principal` may edit, reschedule, cancel, or delete
/// `appointment`.
///
/// Only the customer who booked the appointment may do so.
#[must_use]
pub const fn can_mutate(principal: &Principal, appointment: &Appointment) -> bool {
    appointment.is_owned_by(principal)
}

/// Returns true if `principal` may perform shop-side work (confirm, start,
/// record progress, complete).
#[must_use]
pub const fn can_service(principal: &Principal) -> bool {
    principal.is_employee()
}

/// Returns true if `principal` may book work on `vehicle`.
#[must_use]
pub const fn can_book_for(principal: &Principal, vehicle: &Vehicle) -> bool {
    vehicle.owner_id.value() == principal.id.value()
}
