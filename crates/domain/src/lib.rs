// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod access;
mod appointment_status;
mod cost;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use access::{can_book_for, can_mutate, can_service, can_view};
pub use appointment_status::{AppointmentStatus, DELETABLE_STATUSES};
pub use cost::{MAX_AMOUNT, estimated_cost, sum_amounts};
pub use error::DomainError;
pub use types::{
    Appointment, AppointmentId, NewAppointment, Principal, PrincipalId, Role, ServiceCatalogItem,
    ServiceCategory, ServiceId, Vehicle, VehicleId,
};
pub use validation::{
    validate_final_cost, validate_progress, validate_schedule_in_future,
    validate_service_item, validate_service_selection, validate_services_available,
};
