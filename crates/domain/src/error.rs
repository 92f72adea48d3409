// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::appointment_status::AppointmentStatus;
use crate::cost::MAX_AMOUNT;
use crate::types::ServiceId;
use rust_decimal::Decimal;
use time::PrimitiveDateTime;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested appointment time is not after the booking instant.
    ScheduleInPast {
        /// The rejected time.
        scheduled_at: PrimitiveDateTime,
    },
    /// A booking named no services.
    NoServicesSelected,
    /// A selected service does not exist or is inactive.
    ServiceUnavailable {
        /// The offending service.
        service_id: ServiceId,
    },
    /// A catalog item violates its own invariants.
    InvalidServiceItem(String),
    /// Status string could not be parsed.
    InvalidStatus(String),
    /// Role string could not be parsed.
    InvalidRole(String),
    /// Service category string could not be parsed.
    InvalidServiceCategory(String),
    /// The transition table does not permit this change.
    InvalidStatusTransition {
        /// Current status.
        from: AppointmentStatus,
        /// Requested status.
        to: AppointmentStatus,
    },
    /// Cancellation was requested twice.
    AlreadyCancelled,
    /// Edits are frozen while work is under way.
    AppointmentInProgress,
    /// Deletion is only permitted before work starts.
    NotDeletable {
        /// Current status.
        status: AppointmentStatus,
    },
    /// Progress may only be recorded while work is under way.
    NotInProgress {
        /// Current status.
        status: AppointmentStatus,
    },
    /// Progress percentage outside `0..=100`.
    InvalidProgress {
        /// The rejected value.
        value: i32,
    },
    /// Completion requires a final cost under the active policy.
    FinalCostRequired,
    /// Final cost may not be negative.
    NegativeFinalCost {
        /// The rejected amount.
        amount: Decimal,
    },
    /// Final cost above the accepted maximum.
    FinalCostTooLarge {
        /// The rejected amount.
        amount: Decimal,
    },
    /// A money total left the representable range.
    AmountOverflow {
        /// Description of the sum that failed.
        operation: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScheduleInPast { scheduled_at } => {
                write!(
                    f,
                    "Cannot schedule appointment in the past (requested {scheduled_at})"
                )
            }
            Self::NoServicesSelected => write!(f, "At least one service must be selected"),
            Self::ServiceUnavailable { service_id } => {
                write!(f, "Service {service_id} is not available")
            }
            Self::InvalidServiceItem(msg) => write!(f, "Invalid service: {msg}"),
            Self::InvalidStatus(s) => write!(f, "Invalid appointment status: {s}"),
            Self::InvalidRole(s) => write!(f, "Invalid role: {s}"),
            Self::InvalidServiceCategory(s) => write!(f, "Invalid service category: {s}"),
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Cannot move appointment from {from} to {to}")
            }
            Self::AlreadyCancelled => write!(f, "Appointment is already cancelled"),
            Self::AppointmentInProgress => {
                write!(
                    f,
                    "Cannot update appointment: appointment is currently in progress"
                )
            }
            Self::NotDeletable { status } => {
                write!(
                    f,
                    "Appointment can only be deleted when status is SCHEDULED, CONFIRMED, \
                     or RESCHEDULED (current status: {status})"
                )
            }
            Self::NotInProgress { status } => {
                write!(
                    f,
                    "Progress can only be recorded while the appointment is IN_PROGRESS \
                     (current status: {status})"
                )
            }
            Self::InvalidProgress { value } => {
                write!(
                    f,
                    "Invalid progress percentage: {value}. Must be between 0 and 100"
                )
            }
            Self::FinalCostRequired => {
                write!(f, "A final cost must be provided to complete an appointment")
            }
            Self::NegativeFinalCost { amount } => {
                write!(f, "Final cost cannot be negative: {amount}")
            }
            Self::FinalCostTooLarge { amount } => {
                write!(f, "Final cost cannot exceed {MAX_AMOUNT}: {amount}")
            }
            Self::AmountOverflow { operation } => {
                write!(f, "Amount overflow while {operation}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
