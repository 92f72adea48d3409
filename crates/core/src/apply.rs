// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::LifecycleCommand;
use crate::error::CoreError;
use crate::policy::LifecyclePolicy;
use crate::state::TransitionResult;
use gearsync_domain::{
    Appointment, AppointmentStatus, DomainError, NewAppointment, Principal, ServiceCatalogItem,
    Vehicle, validate_final_cost, validate_progress, validate_schedule_in_future,
};
use rust_decimal::Decimal;
use time::PrimitiveDateTime;

/// Builds the appointment a successful booking persists.
///
/// The caller has already resolved and validated every input; this only fixes
/// the initial lifecycle values.
///
/// # Arguments
///
/// * `customer` - The booking principal, who owns `vehicle`
/// * `vehicle` - The vehicle to be serviced
/// * `scheduled_at` - The validated future time
/// * `services` - The validated, active, id-ordered service set
/// * `customer_notes` - Free-form notes from the customer
/// * `now` - The booking instant
#[must_use]
pub const fn assemble_booking(
    customer: Principal,
    vehicle: Vehicle,
    scheduled_at: PrimitiveDateTime,
    services: Vec<ServiceCatalogItem>,
    customer_notes: Option<String>,
    now: PrimitiveDateTime,
) -> NewAppointment {
    NewAppointment {
        customer,
        vehicle,
        scheduled_at,
        status: AppointmentStatus::Scheduled,
        customer_notes,
        progress_percentage: 0,
        services,
        created_at: now,
    }
}

/// Applies a lifecycle command to an appointment, producing the updated
/// appointment.
///
/// Status legality is decided by the transition table on
/// `AppointmentStatus`; this function never re-derives it.
///
/// # Arguments
///
/// * `appointment` - The current appointment (immutable)
/// * `command` - The command to apply
/// * `policy` - Deployment lifecycle rules
/// * `now` - The current shop-local time
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the updated appointment
/// * `Err(CoreError)` if the command is not legal in the current state
///
/// # Errors
///
/// Returns an error if:
/// - The status does not permit the command
/// - A new schedule is not in the future
/// - A progress percentage or final cost is out of range
/// - A final cost is required by `policy` but missing
pub fn apply_lifecycle(
    appointment: &Appointment,
    command: LifecycleCommand,
    policy: &LifecyclePolicy,
    now: PrimitiveDateTime,
) -> Result<TransitionResult, CoreError> {
    let previous_status: AppointmentStatus = appointment.status;
    let mut next: Appointment = appointment.clone();
    let mut schedule_changed: bool = false;

    match command {
        LifecycleCommand::Update {
            customer_notes,
            scheduled_at,
        } => {
            appointment.status.validate_editable()?;

            if let Some(scheduled_at) = scheduled_at {
                if scheduled_at != appointment.scheduled_at {
                    validate_schedule_in_future(scheduled_at, now)?;
                    next.scheduled_at = scheduled_at;
                    schedule_changed = true;
                }
            }

            if let Some(notes) = customer_notes {
                next.customer_notes = Some(notes);
            }
        }
        LifecycleCommand::Reschedule { scheduled_at } => {
            appointment
                .status
                .validate_transition(AppointmentStatus::Rescheduled)?;
            validate_schedule_in_future(scheduled_at, now)?;

            next.status = AppointmentStatus::Rescheduled;
            schedule_changed = scheduled_at != appointment.scheduled_at;
            next.scheduled_at = scheduled_at;
        }
        LifecycleCommand::Cancel => {
            appointment
                .status
                .validate_cancellation(policy.allows_cancelling_completed())?;
            next.status = AppointmentStatus::Cancelled;
        }
        LifecycleCommand::Confirm => {
            appointment
                .status
                .validate_transition(AppointmentStatus::Confirmed)?;
            next.status = AppointmentStatus::Confirmed;
        }
        LifecycleCommand::Start { employee } => {
            appointment
                .status
                .validate_transition(AppointmentStatus::InProgress)?;
            next.status = AppointmentStatus::InProgress;
            if next.assigned_employee.is_none() {
                next.assigned_employee = Some(employee);
            }
        }
        LifecycleCommand::RecordProgress {
            progress_percentage,
            employee_notes,
        } => {
            if appointment.status != AppointmentStatus::InProgress {
                return Err(CoreError::DomainViolation(DomainError::NotInProgress {
                    status: appointment.status,
                }));
            }
            next.progress_percentage = validate_progress(progress_percentage)?;
            if let Some(notes) = employee_notes {
                next.employee_notes = Some(notes);
            }
        }
        LifecycleCommand::Complete {
            final_cost,
            employee_notes,
        } => {
            appointment
                .status
                .validate_transition(AppointmentStatus::Completed)?;

            let final_cost: Decimal = match final_cost {
                Some(amount) => {
                    validate_final_cost(amount)?;
                    amount
                }
                None if policy.require_final_cost_on_completion => {
                    return Err(CoreError::DomainViolation(DomainError::FinalCostRequired));
                }
                None => appointment.estimated_cost()?,
            };

            next.status = AppointmentStatus::Completed;
            next.final_cost = Some(final_cost);
            next.progress_percentage = 100;
            if let Some(notes) = employee_notes {
                next.employee_notes = Some(notes);
            }
        }
    }

    next.updated_at = now;

    Ok(TransitionResult {
        appointment: next,
        previous_status,
        schedule_changed,
    })
}
