// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Date-times cross the boundary as shop-local ISO-8601 without an offset,
//! e.g. `2026-03-02T09:00:00`. Seconds are optional on input. Money crosses
//! as a decimal string.

use gearsync_domain::{AppointmentId, AppointmentStatus, ServiceCategory, ServiceId, VehicleId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::ApiError;

const SHOP_DATETIME: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second]]]");

time::serde::format_description!(
    shop_datetime,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute][optional [:[second]]]"
);

/// Parses a shop-local date-time such as `2026-03-02T09:00`.
///
/// # Errors
///
/// Returns `ApiError::InvalidArgument` naming `field` if `value` is malformed.
pub fn parse_shop_datetime(field: &str, value: &str) -> Result<PrimitiveDateTime, ApiError> {
    PrimitiveDateTime::parse(value, SHOP_DATETIME).map_err(|e| ApiError::InvalidArgument {
        field: field.to_string(),
        message: format!("'{value}' is not a date-time of the form YYYY-MM-DDTHH:MM[:SS]: {e}"),
    })
}

/// Request to book a new appointment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    /// The vehicle to service. Must belong to the caller.
    pub vehicle_id: VehicleId,
    /// Requested shop-local time. Must be in the future.
    #[serde(with = "shop_datetime")]
    pub scheduled_date_time: PrimitiveDateTime,
    /// Requested services. Must be non-empty and all active.
    pub service_ids: Vec<ServiceId>,
    /// Free-form notes for the shop.
    #[serde(default)]
    pub customer_notes: Option<String>,
}

/// Request to edit an appointment. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    #[serde(default)]
    pub customer_notes: Option<String>,
    #[serde(default, with = "shop_datetime::option")]
    pub scheduled_date_time: Option<PrimitiveDateTime>,
}

/// Request to move a scheduled appointment to a new time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleAppointmentRequest {
    #[serde(with = "shop_datetime")]
    pub scheduled_date_time: PrimitiveDateTime,
}

/// Request to record work progress.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordProgressRequest {
    /// Must be within `0..=100`.
    pub progress_percentage: i32,
    #[serde(default)]
    pub employee_notes: Option<String>,
}

/// Request to complete an appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteAppointmentRequest {
    /// Amount charged. Required unless the deployment records the estimate.
    #[serde(default)]
    pub final_cost: Option<Decimal>,
    #[serde(default)]
    pub employee_notes: Option<String>,
}

/// Read-only view of a catalog item attached to an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    pub id: ServiceId,
    pub name: String,
    pub category: ServiceCategory,
    pub base_price: Decimal,
    pub estimated_duration_minutes: u32,
}

/// Read-facing projection of an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSummary {
    pub id: AppointmentId,
    pub customer_email: String,
    pub vehicle_id: VehicleId,
    pub vehicle_registration: String,
    pub assigned_employee_email: Option<String>,
    #[serde(with = "shop_datetime")]
    pub scheduled_date_time: PrimitiveDateTime,
    pub status: AppointmentStatus,
    pub customer_notes: Option<String>,
    pub employee_notes: Option<String>,
    pub progress_percentage: u8,
    /// Amount charged, once completed.
    pub final_cost: Option<Decimal>,
    /// Sum of the base prices of `services`.
    pub estimated_cost: Decimal,
    /// Ordered by service id.
    pub services: Vec<ServiceSummary>,
    #[serde(with = "shop_datetime")]
    pub created_at: PrimitiveDateTime,
    #[serde(with = "shop_datetime")]
    pub updated_at: PrimitiveDateTime,
}

/// Customer dashboard totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    /// All appointments, any status.
    pub total: u64,
    /// Appointments currently `IN_PROGRESS`.
    pub active: u64,
    pub completed: u64,
    /// Vehicles owned.
    pub vehicles: u64,
    /// Sum of final costs over completed appointments. Absent, not zero,
    /// when nothing has been completed.
    pub total_spent: Option<Decimal>,
}

/// Employee dashboard totals over appointments assigned to the employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDashboardCounts {
    pub assigned: u64,
    pub in_progress: u64,
    pub completed: u64,
}

/// A capability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Capability {
    Allowed,
    Denied,
}

impl Capability {
    #[must_use]
    pub const fn from_bool(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Denied }
    }

    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// What a principal may do with one appointment.
///
/// Advisory only. Every handler re-checks authorization itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCapabilities {
    pub can_view: Capability,
    pub can_update: Capability,
    pub can_cancel: Capability,
    pub can_delete: Capability,
    pub can_reschedule: Capability,
    pub can_service: Capability,
}
