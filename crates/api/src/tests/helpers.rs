// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gearsync::{AppointmentStore, FixedClock};
use gearsync_domain::{
    Appointment, AppointmentId, AppointmentStatus, Principal, Role, ServiceCategory, ServiceId,
    Vehicle,
};
use gearsync_persistence::Persistence;
use rust_decimal::Decimal;
use std::str::FromStr;
use time::PrimitiveDateTime;
use time::macros::datetime;

use crate::{
    AppointmentSummary, BookAppointmentRequest, ServiceConfig, book_appointment,
};

pub const CUSTOMER_EMAIL: &str = "customer@test.com";
pub const OTHER_CUSTOMER_EMAIL: &str = "other@test.com";
pub const EMPLOYEE_EMAIL: &str = "employee@test.com";
pub const UNKNOWN_EMAIL: &str = "nobody@test.com";

/// The frozen "now" of every test: midday on 2026-03-01.
pub const NOW: PrimitiveDateTime = datetime!(2026-03-01 12:00);

/// Tomorrow morning, the default booking slot.
pub const TOMORROW_9AM: PrimitiveDateTime = datetime!(2026-03-02 09:00);

/// A seeded in-memory shop.
pub struct TestShop {
    pub persistence: Persistence,
    pub clock: FixedClock,
    pub config: ServiceConfig,
    pub customer: Principal,
    pub other_customer: Principal,
    pub employee: Principal,
    pub vehicle: Vehicle,
    pub other_vehicle: Vehicle,
    /// Oil change at 49.99.
    pub oil_change: ServiceId,
    /// Tire rotation at 29.99.
    pub tire_rotation: ServiceId,
    /// Retired from the catalog.
    pub inactive_service: ServiceId,
}

pub fn create_test_shop() -> TestShop {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let customer = persistence
        .create_principal(CUSTOMER_EMAIL, Role::Customer)
        .unwrap();
    let other_customer = persistence
        .create_principal(OTHER_CUSTOMER_EMAIL, Role::Customer)
        .unwrap();
    let employee = persistence
        .create_principal(EMPLOYEE_EMAIL, Role::Employee)
        .unwrap();

    let vehicle = persistence
        .create_vehicle(customer.id, "ABC123", "Toyota", "Camry", 2020)
        .unwrap();
    let other_vehicle = persistence
        .create_vehicle(other_customer.id, "XYZ789", "Honda", "Civic", 2019)
        .unwrap();

    let oil_change = persistence
        .create_service(
            "Oil Change",
            ServiceCategory::Maintenance,
            Decimal::from_str("49.99").unwrap(),
            30,
        )
        .unwrap()
        .id;
    let tire_rotation = persistence
        .create_service(
            "Tire Rotation",
            ServiceCategory::TireService,
            Decimal::from_str("29.99").unwrap(),
            20,
        )
        .unwrap()
        .id;
    let inactive_service = persistence
        .create_service(
            "Carburetor Tuning",
            ServiceCategory::Repair,
            Decimal::from_str("89.00").unwrap(),
            60,
        )
        .unwrap()
        .id;
    persistence
        .set_service_active(inactive_service, false)
        .unwrap();

    TestShop {
        persistence,
        clock: FixedClock::new(NOW),
        config: ServiceConfig::default(),
        customer,
        other_customer,
        employee,
        vehicle,
        other_vehicle,
        oil_change,
        tire_rotation,
        inactive_service,
    }
}

pub fn booking_request(shop: &TestShop, scheduled_at: PrimitiveDateTime) -> BookAppointmentRequest {
    BookAppointmentRequest {
        vehicle_id: shop.vehicle.id,
        scheduled_date_time: scheduled_at,
        service_ids: vec![shop.oil_change, shop.tire_rotation],
        customer_notes: Some(String::from("Test notes")),
    }
}

/// Books a standard appointment for the seeded customer.
pub fn book_default(shop: &mut TestShop, scheduled_at: PrimitiveDateTime) -> AppointmentSummary {
    let request = booking_request(shop, scheduled_at);
    book_appointment(&mut shop.persistence, &shop.clock, CUSTOMER_EMAIL, request).unwrap()
}

/// Forces a stored appointment into `status`, bypassing the lifecycle.
pub fn force_status(shop: &mut TestShop, appointment_id: AppointmentId, status: AppointmentStatus) {
    let mut appointment: Appointment = shop
        .persistence
        .find_appointment(appointment_id)
        .unwrap()
        .unwrap();
    appointment.status = status;
    shop.persistence.update_appointment(&appointment).unwrap();
}

/// Forces a completed state with a final cost and assigned employee.
pub fn force_completed(shop: &mut TestShop, appointment_id: AppointmentId, final_cost: &str) {
    let mut appointment: Appointment = shop
        .persistence
        .find_appointment(appointment_id)
        .unwrap()
        .unwrap();
    appointment.status = AppointmentStatus::Completed;
    appointment.assigned_employee = Some(shop.employee.clone());
    appointment.progress_percentage = 100;
    appointment.final_cost = Some(Decimal::from_str(final_cost).unwrap());
    shop.persistence.update_appointment(&appointment).unwrap();
}

pub fn load(shop: &mut TestShop, appointment_id: AppointmentId) -> Option<Appointment> {
    shop.persistence.find_appointment(appointment_id).unwrap()
}
