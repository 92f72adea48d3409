// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gearsync::{CoreError, StoreError};
use gearsync_domain::{AppointmentStatus, DomainError, ServiceId};
use time::macros::datetime;

use crate::{
    ApiError, DUPLICATE_SLOT_MESSAGE, ErrorKind, translate_core_error, translate_domain_error,
    translate_store_error,
};

#[test]
fn test_schedule_in_past_names_the_field() {
    let err = translate_domain_error(DomainError::ScheduleInPast {
        scheduled_at: datetime!(2026-01-01 09:00),
    });

    match err {
        ApiError::InvalidArgument { field, message } => {
            assert_eq!(field, "scheduledDateTime");
            assert!(message.contains("in the past"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_service_errors_name_service_ids() {
    for domain_err in [
        DomainError::NoServicesSelected,
        DomainError::ServiceUnavailable {
            service_id: ServiceId::new(7),
        },
    ] {
        let err = translate_domain_error(domain_err);
        assert!(matches!(
            err,
            ApiError::InvalidArgument { ref field, .. } if field == "serviceIds"
        ));
    }
}

#[test]
fn test_status_errors_are_illegal_state() {
    let cases = [
        DomainError::InvalidStatusTransition {
            from: AppointmentStatus::Completed,
            to: AppointmentStatus::InProgress,
        },
        DomainError::AlreadyCancelled,
        DomainError::AppointmentInProgress,
        DomainError::NotDeletable {
            status: AppointmentStatus::Completed,
        },
        DomainError::NotInProgress {
            status: AppointmentStatus::Scheduled,
        },
    ];

    for domain_err in cases {
        assert_eq!(
            translate_domain_error(domain_err).kind(),
            ErrorKind::IllegalState
        );
    }
}

#[test]
fn test_core_error_unwraps_domain_violation() {
    let err = translate_core_error(CoreError::DomainViolation(DomainError::FinalCostRequired));
    assert!(matches!(
        err,
        ApiError::InvalidArgument { ref field, .. } if field == "finalCost"
    ));
}

#[test]
fn test_store_conflict_is_duplicate_slot() {
    let err = translate_store_error(StoreError::Conflict(String::from(
        "UNIQUE constraint failed: appointments.customer_id, appointments.scheduled_at",
    )));

    assert_eq!(
        err,
        ApiError::DuplicateResource {
            message: String::from(DUPLICATE_SLOT_MESSAGE),
        }
    );
}

#[test]
fn test_store_unavailable_is_internal() {
    let err = translate_store_error(StoreError::Unavailable(String::from("disk I/O error")));

    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(err.to_string().contains("disk I/O error"));
}

#[test]
fn test_display_formats() {
    let err = ApiError::InvalidArgument {
        field: String::from("progressPercentage"),
        message: String::from("out of range"),
    };
    assert_eq!(
        err.to_string(),
        "Invalid input for field 'progressPercentage': out of range"
    );

    let err = ApiError::UserNotFound {
        message: String::from("Customer not found with email: a@b.c"),
    };
    assert_eq!(err.to_string(), "Customer not found with email: a@b.c");
}
