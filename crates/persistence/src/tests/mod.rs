// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use gearsync::assemble_booking;
use gearsync_domain::{
    NewAppointment, Principal, Role, ServiceCatalogItem, ServiceCategory, Vehicle,
};
use rust_decimal::Decimal;
use std::str::FromStr;
use time::PrimitiveDateTime;
use time::macros::datetime;

use crate::Persistence;

pub const NOW: PrimitiveDateTime = datetime!(2026-03-01 12:00);

/// A customer, their vehicle, and two active services.
pub struct Seeded {
    pub customer: Principal,
    pub employee: Principal,
    pub vehicle: Vehicle,
    pub services: Vec<ServiceCatalogItem>,
}

pub fn seed(persistence: &mut Persistence) -> Seeded {
    let customer = persistence
        .create_principal("customer@test.com", Role::Customer)
        .unwrap();
    let employee = persistence
        .create_principal("employee@test.com", Role::Employee)
        .unwrap();
    let vehicle = persistence
        .create_vehicle(customer.id, "ABC123", "Toyota", "Camry", 2020)
        .unwrap();
    let oil = persistence
        .create_service(
            "Oil Change",
            ServiceCategory::Maintenance,
            Decimal::from_str("49.99").unwrap(),
            30,
        )
        .unwrap();
    let tires = persistence
        .create_service(
            "Tire Rotation",
            ServiceCategory::TireService,
            Decimal::from_str("29.99").unwrap(),
            20,
        )
        .unwrap();

    Seeded {
        customer,
        employee,
        vehicle,
        services: vec![oil, tires],
    }
}

pub fn booking_at(seeded: &Seeded, scheduled_at: PrimitiveDateTime) -> NewAppointment {
    assemble_booking(
        seeded.customer.clone(),
        seeded.vehicle.clone(),
        scheduled_at,
        seeded.services.clone(),
        Some(String::from("Test notes")),
        NOW,
    )
}
