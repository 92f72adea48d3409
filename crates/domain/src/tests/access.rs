// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::fixtures::{appointment_for, customer, employee, vehicle_owned_by};
use crate::{AppointmentStatus, can_book_for, can_mutate, can_service, can_view};

#[test]
fn test_owner_can_view_and_mutate() {
    let owner = customer(1);
    let appointment = appointment_for(&owner, AppointmentStatus::Scheduled);

    assert!(can_view(&owner, &appointment));
    assert!(can_mutate(&owner, &appointment));
}

#[test]
fn test_other_customer_cannot_view_or_mutate() {
    let owner = customer(1);
    let other = customer(2);
    let appointment = appointment_for(&owner, AppointmentStatus::Scheduled);

    assert!(!can_view(&other, &appointment));
    assert!(!can_mutate(&other, &appointment));
}

#[test]
fn test_employee_can_view_any_appointment_but_not_mutate_it() {
    let owner = customer(1);
    let staff = employee(9);
    let appointment = appointment_for(&owner, AppointmentStatus::InProgress);

    assert!(can_view(&staff, &appointment));
    assert!(!can_mutate(&staff, &appointment));
}

#[test]
fn test_only_employees_can_service() {
    assert!(can_service(&employee(9)));
    assert!(!can_service(&customer(1)));
}

#[test]
fn test_booking_requires_vehicle_ownership() {
    let owner = customer(1);
    let other = customer(2);
    let vehicle = vehicle_owned_by(&owner);

    assert!(can_book_for(&owner, &vehicle));
    assert!(!can_book_for(&other, &vehicle));
}
