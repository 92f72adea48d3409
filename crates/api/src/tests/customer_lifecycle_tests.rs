// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Retrieve, update, reschedule, cancel, and delete as the owning customer.

use gearsync::{CompletedCancellation, LifecyclePolicy};
use gearsync_domain::{AppointmentId, AppointmentStatus};
use time::macros::datetime;

use super::helpers::{
    CUSTOMER_EMAIL, EMPLOYEE_EMAIL, NOW, OTHER_CUSTOMER_EMAIL, TOMORROW_9AM, UNKNOWN_EMAIL,
    book_default, create_test_shop, force_status, load,
};
use crate::{
    ErrorKind, RescheduleAppointmentRequest, ServiceConfig, UpdateAppointmentRequest,
    cancel_appointment, delete_appointment, get_appointment_by_id, get_my_appointments,
    reschedule_appointment, update_appointment,
};

// ============================================================================
// Retrieval
// ============================================================================

#[test]
fn test_owner_can_view_appointment() {
    let mut shop = create_test_shop();
    let booked = book_default(&mut shop, TOMORROW_9AM);

    let summary = get_appointment_by_id(&mut shop.persistence, CUSTOMER_EMAIL, booked.id).unwrap();
    assert_eq!(summary, booked);
}

#[test]
fn test_other_customer_cannot_view_appointment() {
    let mut shop = create_test_shop();
    let booked = book_default(&mut shop, TOMORROW_9AM);

    let err =
        get_appointment_by_id(&mut shop.persistence, OTHER_CUSTOMER_EMAIL, booked.id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert!(err.to_string().contains("only view your own appointments"));
}

#[test]
fn test_employee_can_view_any_appointment() {
    let mut shop = create_test_shop();
    let booked = book_default(&mut shop, TOMORROW_9AM);

    let summary = get_appointment_by_id(&mut shop.persistence, EMPLOYEE_EMAIL, booked.id).unwrap();
    assert_eq!(summary.id, booked.id);
}

#[test]
fn test_unknown_caller_and_unknown_appointment() {
    let mut shop = create_test_shop();
    let booked = book_default(&mut shop, TOMORROW_9AM);

    let err = get_appointment_by_id(&mut shop.persistence, UNKNOWN_EMAIL, booked.id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UserNotFound);

    let err = get_appointment_by_id(&mut shop.persistence, CUSTOMER_EMAIL, AppointmentId::new(999))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
}

#[test]
fn test_get_my_appointments_lists_only_own() {
    let mut shop = create_test_shop();
    let first = book_default(&mut shop, TOMORROW_9AM);
    let second = book_default(&mut shop, datetime!(2026-03-05 10:00));

    let mine = get_my_appointments(&mut shop.persistence, CUSTOMER_EMAIL).unwrap();
    let ids: Vec<AppointmentId> = mine.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    assert!(
        get_my_appointments(&mut shop.persistence, OTHER_CUSTOMER_EMAIL)
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        get_my_appointments(&mut shop.persistence, UNKNOWN_EMAIL)
            .unwrap_err()
            .kind(),
        ErrorKind::UserNotFound
    );
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn test_update_fails_only_while_in_progress() {
    for status in AppointmentStatus::ALL {
        let mut shop = create_test_shop();
        let booked = book_default(&mut shop, TOMORROW_9AM);
        force_status(&mut shop, booked.id, status);

        let result = update_appointment(
            &mut shop.persistence,
            &shop.clock,
            &shop.config,
            CUSTOMER_EMAIL,
            booked.id,
            UpdateAppointmentRequest {
                customer_notes: Some(String::from("Updated notes")),
                scheduled_date_time: None,
            },
        );

        if status == AppointmentStatus::InProgress {
            let err = result.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::IllegalState);
            assert!(err.to_string().contains("currently in progress"));
            let stored = load(&mut shop, booked.id).unwrap();
            assert_eq!(stored.customer_notes.as_deref(), Some("Test notes"));
        } else {
            let summary = result.unwrap();
            assert_eq!(summary.status, status);
            let stored = load(&mut shop, booked.id).unwrap();
            assert_eq!(stored.customer_notes.as_deref(), Some("Updated notes"));
            assert_eq!(stored.updated_at, NOW);
        }
    }
}

#[test]
fn test_update_schedule_persists_and_checks_collisions() {
    let mut shop = create_test_shop();
    let first = book_default(&mut shop, TOMORROW_9AM);
    let second = book_default(&mut shop, datetime!(2026-03-03 09:00));

    let moved = update_appointment(
        &mut shop.persistence,
        &shop.clock,
        &shop.config,
        CUSTOMER_EMAIL,
        second.id,
        UpdateAppointmentRequest {
            customer_notes: None,
            scheduled_date_time: Some(datetime!(2026-03-04 14:00)),
        },
    )
    .unwrap();
    assert_eq!(moved.scheduled_date_time, datetime!(2026-03-04 14:00));
    assert_eq!(moved.status, AppointmentStatus::Scheduled);

    let err = update_appointment(
        &mut shop.persistence,
        &shop.clock,
        &shop.config,
        CUSTOMER_EMAIL,
        second.id,
        UpdateAppointmentRequest {
            customer_notes: None,
            scheduled_date_time: Some(first.scheduled_date_time),
        },
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateResource);

    let err = update_appointment(
        &mut shop.persistence,
        &shop.clock,
        &shop.config,
        CUSTOMER_EMAIL,
        second.id,
        UpdateAppointmentRequest {
            customer_notes: None,
            scheduled_date_time: Some(datetime!(2026-02-01 09:00)),
        },
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_update_by_non_owner_is_unauthorized() {
    let mut shop = create_test_shop();
    let booked = book_default(&mut shop, TOMORROW_9AM);

    for email in [OTHER_CUSTOMER_EMAIL, EMPLOYEE_EMAIL] {
        let err = update_appointment(
            &mut shop.persistence,
            &shop.clock,
            &shop.config,
            email,
            booked.id,
            UpdateAppointmentRequest::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }
}

// ============================================================================
// Reschedule
// ============================================================================

#[test]
fn test_reschedule_moves_and_marks_rescheduled() {
    let mut shop = create_test_shop();
    let booked = book_default(&mut shop, TOMORROW_9AM);

    let summary = reschedule_appointment(
        &mut shop.persistence,
        &shop.clock,
        &shop.config,
        CUSTOMER_EMAIL,
        booked.id,
        RescheduleAppointmentRequest {
            scheduled_date_time: datetime!(2026-03-06 08:00),
        },
    )
    .unwrap();

    assert_eq!(summary.status, AppointmentStatus::Rescheduled);
    assert_eq!(summary.scheduled_date_time, datetime!(2026-03-06 08:00));
}

#[test]
fn test_reschedule_requires_scheduled_status() {
    let mut shop = create_test_shop();
    let booked = book_default(&mut shop, TOMORROW_9AM);
    force_status(&mut shop, booked.id, AppointmentStatus::Confirmed);

    let err = reschedule_appointment(
        &mut shop.persistence,
        &shop.clock,
        &shop.config,
        CUSTOMER_EMAIL,
        booked.id,
        RescheduleAppointmentRequest {
            scheduled_date_time: datetime!(2026-03-06 08:00),
        },
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::IllegalState);
}

// ============================================================================
// Cancel
// ============================================================================

#[test]
fn test_cancel_fails_only_when_already_cancelled() {
    for status in AppointmentStatus::ALL {
        let mut shop = create_test_shop();
        let booked = book_default(&mut shop, TOMORROW_9AM);
        force_status(&mut shop, booked.id, status);

        let result = cancel_appointment(
            &mut shop.persistence,
            &shop.clock,
            &shop.config,
            CUSTOMER_EMAIL,
            booked.id,
        );

        if status == AppointmentStatus::Cancelled {
            let err = result.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::IllegalState);
            assert!(err.to_string().contains("already cancelled"));
        } else {
            assert_eq!(result.unwrap().status, AppointmentStatus::Cancelled);
            assert_eq!(
                load(&mut shop, booked.id).unwrap().status,
                AppointmentStatus::Cancelled
            );
        }
    }
}

#[test]
fn test_cancel_completed_rejected_when_configured() {
    let mut shop = create_test_shop();
    shop.config = ServiceConfig::new(LifecyclePolicy {
        completed_cancellation: CompletedCancellation::Reject,
        ..LifecyclePolicy::default()
    });
    let booked = book_default(&mut shop, TOMORROW_9AM);
    force_status(&mut shop, booked.id, AppointmentStatus::Completed);

    let err = cancel_appointment(
        &mut shop.persistence,
        &shop.clock,
        &shop.config,
        CUSTOMER_EMAIL,
        booked.id,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::IllegalState);
    assert_eq!(
        load(&mut shop, booked.id).unwrap().status,
        AppointmentStatus::Completed
    );
}

#[test]
fn test_cancel_by_non_owner_is_unauthorized() {
    let mut shop = create_test_shop();
    let booked = book_default(&mut shop, TOMORROW_9AM);

    let err = cancel_appointment(
        &mut shop.persistence,
        &shop.clock,
        &shop.config,
        OTHER_CUSTOMER_EMAIL,
        booked.id,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn test_delete_allowed_only_before_work_starts() {
    for status in AppointmentStatus::ALL {
        let mut shop = create_test_shop();
        let booked = book_default(&mut shop, TOMORROW_9AM);
        force_status(&mut shop, booked.id, status);

        let result = delete_appointment(&mut shop.persistence, CUSTOMER_EMAIL, booked.id);

        match status {
            AppointmentStatus::Scheduled
            | AppointmentStatus::Confirmed
            | AppointmentStatus::Rescheduled => {
                assert!(result.is_ok());
                let lookup =
                    get_appointment_by_id(&mut shop.persistence, CUSTOMER_EMAIL, booked.id);
                assert_eq!(lookup.unwrap_err().kind(), ErrorKind::ResourceNotFound);
            }
            AppointmentStatus::InProgress
            | AppointmentStatus::Completed
            | AppointmentStatus::Cancelled => {
                let err = result.unwrap_err();
                assert_eq!(err.kind(), ErrorKind::IllegalState);
                assert!(err.to_string().contains("SCHEDULED, CONFIRMED, or RESCHEDULED"));
                assert!(load(&mut shop, booked.id).is_some());
            }
        }
    }
}

#[test]
fn test_delete_frees_the_time_slot() {
    let mut shop = create_test_shop();
    let booked = book_default(&mut shop, TOMORROW_9AM);

    delete_appointment(&mut shop.persistence, CUSTOMER_EMAIL, booked.id).unwrap();

    let rebooked = book_default(&mut shop, TOMORROW_9AM);
    assert_ne!(rebooked.id, booked.id);
}

#[test]
fn test_delete_by_non_owner_is_unauthorized() {
    let mut shop = create_test_shop();
    let booked = book_default(&mut shop, TOMORROW_9AM);

    let err = delete_appointment(&mut shop.persistence, EMPLOYEE_EMAIL, booked.id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert!(load(&mut shop, booked.id).is_some());
}
