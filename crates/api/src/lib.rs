// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation surface of the GearSync booking engine.
//!
//! Handlers are generic over any [`gearsync::ShopStore`] and take the
//! current time from a [`gearsync::Clock`], so a transport layer can bind
//! them to any store and tests can freeze time.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod capabilities;
mod dashboard;
mod error;
mod handlers;
mod request_response;
mod snapshot;

#[cfg(test)]
mod tests;

use gearsync::LifecyclePolicy;

pub use capabilities::compute_appointment_capabilities;
pub use dashboard::{dashboard_counts, employee_dashboard_counts, upcoming_appointments};
pub use error::{
    ApiError, DUPLICATE_SLOT_MESSAGE, ErrorKind, translate_core_error, translate_domain_error,
    translate_store_error,
};
pub use handlers::{
    book_appointment, cancel_appointment, complete_appointment, confirm_appointment,
    delete_appointment, get_appointment_by_id, get_appointment_capabilities, get_my_appointments,
    record_progress, reschedule_appointment, start_appointment, update_appointment,
};
pub use request_response::{
    AppointmentCapabilities, AppointmentSummary, BookAppointmentRequest, Capability,
    CompleteAppointmentRequest, DashboardCounts, EmployeeDashboardCounts, RecordProgressRequest,
    RescheduleAppointmentRequest, ServiceSummary, UpdateAppointmentRequest, parse_shop_datetime,
};
pub use snapshot::{summarize_appointment, summarize_service};

/// Deployment settings handed to every lifecycle handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceConfig {
    /// Lifecycle rules left open by the status taxonomy.
    pub policy: LifecyclePolicy,
}

impl ServiceConfig {
    #[must_use]
    pub const fn new(policy: LifecyclePolicy) -> Self {
        Self { policy }
    }
}
