// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only dashboard aggregates scoped to the caller.
//!
//! Each operation resolves the caller before touching the appointment store.

use gearsync::{Clock, PrincipalDirectory, ShopStore, start_of_next_day};
use gearsync_domain::{Appointment, AppointmentStatus, Principal};
use time::PrimitiveDateTime;
use tracing::debug;

use crate::error::{ApiError, translate_core_error, translate_store_error};
use crate::request_response::{AppointmentSummary, DashboardCounts, EmployeeDashboardCounts};
use crate::snapshot::summarize_appointment;

fn resolve_dashboard_owner<S: PrincipalDirectory>(
    store: &mut S,
    email: &str,
    resource_type: &str,
) -> Result<Principal, ApiError> {
    store
        .find_principal_by_email(email)
        .map_err(translate_store_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: resource_type.to_string(),
            message: format!("{resource_type} not found with email: {email}"),
        })
}

/// Computes the customer dashboard totals.
///
/// `total_spent` is `None` when the customer has no completed appointment.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the customer does not resolve.
pub fn dashboard_counts<S: ShopStore>(
    store: &mut S,
    caller_email: &str,
) -> Result<DashboardCounts, ApiError> {
    let customer: Principal = resolve_dashboard_owner(store, caller_email, "Customer")?;

    let total: u64 = store
        .count_customer_appointments(customer.id, None)
        .map_err(translate_store_error)?;
    let active: u64 = store
        .count_customer_appointments(customer.id, Some(AppointmentStatus::InProgress))
        .map_err(translate_store_error)?;
    let completed: u64 = store
        .count_customer_appointments(customer.id, Some(AppointmentStatus::Completed))
        .map_err(translate_store_error)?;
    let vehicles: u64 = store
        .count_vehicles_by_owner(customer.id)
        .map_err(translate_store_error)?;
    let total_spent = store
        .sum_completed_final_cost(customer.id)
        .map_err(translate_store_error)?;

    debug!(
        customer_id = customer.id.value(),
        total, active, completed, vehicles, "Dashboard counts computed"
    );

    Ok(DashboardCounts {
        total,
        active,
        completed,
        vehicles,
        total_spent,
    })
}

/// Lists the customer's appointments from the start of tomorrow onward,
/// earliest first. Anything scheduled for today is excluded.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the customer does not resolve.
pub fn upcoming_appointments<S: ShopStore>(
    store: &mut S,
    clock: &impl Clock,
    caller_email: &str,
) -> Result<Vec<AppointmentSummary>, ApiError> {
    let customer: Principal = resolve_dashboard_owner(store, caller_email, "Customer")?;

    let from: PrimitiveDateTime = start_of_next_day(clock.now()).map_err(translate_core_error)?;
    let appointments: Vec<Appointment> = store
        .list_customer_appointments_from(customer.id, from)
        .map_err(translate_store_error)?;

    appointments.iter().map(summarize_appointment).collect()
}

/// Computes totals over the appointments assigned to an employee.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the employee does not resolve.
pub fn employee_dashboard_counts<S: ShopStore>(
    store: &mut S,
    caller_email: &str,
) -> Result<EmployeeDashboardCounts, ApiError> {
    let employee: Principal = resolve_dashboard_owner(store, caller_email, "Employee")?;

    let assigned: u64 = store
        .count_employee_appointments(employee.id, None)
        .map_err(translate_store_error)?;
    let in_progress: u64 = store
        .count_employee_appointments(employee.id, Some(AppointmentStatus::InProgress))
        .map_err(translate_store_error)?;
    let completed: u64 = store
        .count_employee_appointments(employee.id, Some(AppointmentStatus::Completed))
        .map_err(translate_store_error)?;

    Ok(EmployeeDashboardCounts {
        assigned,
        in_progress,
        completed,
    })
}
