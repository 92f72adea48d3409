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

mod apply;
mod command;
mod error;
mod policy;
mod ports;
mod state;

#[cfg(test)]
mod tests;

use gearsync_domain::DomainError;
use time::{Date, PrimitiveDateTime, Time};

// Re-export public types and functions
pub use apply::{apply_lifecycle, assemble_booking};
pub use command::LifecycleCommand;
pub use error::{CoreError, StoreError};
pub use policy::{CompletedCancellation, LifecyclePolicy};
pub use ports::{
    AppointmentStore, Clock, FixedClock, PrincipalDirectory, ServiceCatalog, ShopStore,
    SystemClock, VehicleDirectory,
};
pub use state::TransitionResult;

/// Returns the first instant of the calendar day after `now`.
///
/// Upcoming-appointment projections start here, which excludes anything
/// scheduled for the rest of today.
///
/// # Errors
///
/// Returns an error only if `now` falls on the last representable date.
pub fn start_of_next_day(now: PrimitiveDateTime) -> Result<PrimitiveDateTime, CoreError> {
    let tomorrow: Date = now.date().next_day().ok_or_else(|| {
        CoreError::DomainViolation(DomainError::DateArithmeticOverflow {
            operation: format!("computing the day after {}", now.date()),
        })
    })?;
    Ok(PrimitiveDateTime::new(tomorrow, Time::MIDNIGHT))
}
