// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gearsync_domain::{
    Appointment, AppointmentId, AppointmentStatus, Principal, PrincipalId, Role,
    ServiceCatalogItem, ServiceCategory, ServiceId, Vehicle, VehicleId,
};
use rust_decimal::Decimal;
use std::str::FromStr;
use time::PrimitiveDateTime;
use time::macros::datetime;

pub const NOW: PrimitiveDateTime = datetime!(2026-03-01 12:00);

pub fn create_test_customer() -> Principal {
    Principal::new(
        PrincipalId::new(1),
        String::from("customer@test.com"),
        Role::Customer,
    )
}

pub fn create_test_employee() -> Principal {
    Principal::new(
        PrincipalId::new(2),
        String::from("employee@test.com"),
        Role::Employee,
    )
}

pub fn create_test_vehicle() -> Vehicle {
    Vehicle {
        id: VehicleId::new(1),
        owner_id: PrincipalId::new(1),
        registration_number: String::from("ABC123"),
        make: String::from("Toyota"),
        model: String::from("Camry"),
        year: 2020,
    }
}

pub fn create_test_services() -> Vec<ServiceCatalogItem> {
    vec![
        ServiceCatalogItem {
            id: ServiceId::new(1),
            name: String::from("Oil Change"),
            category: ServiceCategory::Maintenance,
            base_price: Decimal::from_str("49.99").unwrap(),
            estimated_duration_minutes: 30,
            is_active: true,
        },
        ServiceCatalogItem {
            id: ServiceId::new(2),
            name: String::from("Tire Rotation"),
            category: ServiceCategory::TireService,
            base_price: Decimal::from_str("29.99").unwrap(),
            estimated_duration_minutes: 20,
            is_active: true,
        },
    ]
}

pub fn create_test_appointment(status: AppointmentStatus) -> Appointment {
    Appointment {
        id: AppointmentId::new(1),
        customer: create_test_customer(),
        vehicle: create_test_vehicle(),
        assigned_employee: None,
        scheduled_at: datetime!(2026-03-02 09:00),
        status,
        customer_notes: Some(String::from("Please check brakes too")),
        employee_notes: None,
        progress_percentage: 0,
        final_cost: None,
        services: create_test_services(),
        created_at: datetime!(2026-02-28 08:00),
        updated_at: datetime!(2026-02-28 08:00),
    }
}
