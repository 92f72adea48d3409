// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-facing projections of appointments and their services.

use gearsync_domain::{Appointment, ServiceCatalogItem};
use rust_decimal::Decimal;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{AppointmentSummary, ServiceSummary};

/// Flattens a catalog item into its summary.
#[must_use]
pub fn summarize_service(item: &ServiceCatalogItem) -> ServiceSummary {
    ServiceSummary {
        id: item.id,
        name: item.name.clone(),
        category: item.category,
        base_price: item.base_price,
        estimated_duration_minutes: item.estimated_duration_minutes,
    }
}

/// Projects an appointment for a response.
///
/// `estimated_cost` is recomputed from the current service set on every call.
/// `final_cost` is passed through as stored.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the estimated cost cannot be summed.
pub fn summarize_appointment(appointment: &Appointment) -> Result<AppointmentSummary, ApiError> {
    let estimated_cost: Decimal = appointment
        .estimated_cost()
        .map_err(translate_domain_error)?;

    Ok(AppointmentSummary {
        id: appointment.id,
        customer_email: appointment.customer.email.clone(),
        vehicle_id: appointment.vehicle.id,
        vehicle_registration: appointment.vehicle.registration_number.clone(),
        assigned_employee_email: appointment
            .assigned_employee
            .as_ref()
            .map(|employee| employee.email.clone()),
        scheduled_date_time: appointment.scheduled_at,
        status: appointment.status,
        customer_notes: appointment.customer_notes.clone(),
        employee_notes: appointment.employee_notes.clone(),
        progress_percentage: appointment.progress_percentage,
        final_cost: appointment.final_cost,
        estimated_cost,
        services: appointment.services.iter().map(summarize_service).collect(),
        created_at: appointment.created_at,
        updated_at: appointment.updated_at,
    })
}
