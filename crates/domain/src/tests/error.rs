// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AppointmentStatus, DomainError, ServiceId};
use time::macros::datetime;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::ScheduleInPast {
        scheduled_at: datetime!(2026-01-01 09:00),
    };
    assert!(format!("{err}").starts_with("Cannot schedule appointment in the past"));

    let err: DomainError = DomainError::NoServicesSelected;
    assert_eq!(format!("{err}"), "At least one service must be selected");

    let err: DomainError = DomainError::ServiceUnavailable {
        service_id: ServiceId::new(7),
    };
    assert_eq!(format!("{err}"), "Service 7 is not available");

    let err: DomainError = DomainError::AlreadyCancelled;
    assert_eq!(format!("{err}"), "Appointment is already cancelled");

    let err: DomainError = DomainError::AppointmentInProgress;
    assert!(format!("{err}").contains("currently in progress"));

    let err: DomainError = DomainError::InvalidStatusTransition {
        from: AppointmentStatus::Completed,
        to: AppointmentStatus::InProgress,
    };
    assert_eq!(
        format!("{err}"),
        "Cannot move appointment from COMPLETED to IN_PROGRESS"
    );
}

#[test]
fn test_not_deletable_lists_allowed_statuses() {
    let err: DomainError = DomainError::NotDeletable {
        status: AppointmentStatus::Completed,
    };
    let message: String = format!("{err}");

    assert!(message.contains("SCHEDULED, CONFIRMED, or RESCHEDULED"));
    assert!(message.contains("COMPLETED"));
}
