// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Data-access ports consumed by the booking and lifecycle operations.
//!
//! The engine never talks to a database directly. Adapters implement these
//! traits; the persistence crate provides the `SQLite` one.
//!
//! All methods take `&mut self` so that connection-backed adapters can
//! implement them without interior mutability.

use crate::error::StoreError;
use gearsync_domain::{
    Appointment, AppointmentId, AppointmentStatus, NewAppointment, Principal, PrincipalId,
    ServiceCatalogItem, ServiceId, Vehicle, VehicleId,
};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Resolves authenticated identities.
pub trait PrincipalDirectory {
    /// Looks up a principal by its unique email.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails. A missing principal is
    /// `Ok(None)`.
    fn find_principal_by_email(&mut self, email: &str) -> Result<Option<Principal>, StoreError>;
}

/// Resolves vehicles and their ownership.
pub trait VehicleDirectory {
    /// Looks up a vehicle by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails.
    fn find_vehicle(&mut self, vehicle_id: VehicleId) -> Result<Option<Vehicle>, StoreError>;

    /// Counts vehicles owned by a principal.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn count_vehicles_by_owner(&mut self, owner_id: PrincipalId) -> Result<u64, StoreError>;
}

/// Resolves service catalog items.
pub trait ServiceCatalog {
    /// Returns the catalog items matching `service_ids`, active or not.
    /// Unknown ids are omitted from the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn find_services(
        &mut self,
        service_ids: &BTreeSet<ServiceId>,
    ) -> Result<Vec<ServiceCatalogItem>, StoreError>;
}

/// Durable appointment storage.
pub trait AppointmentStore {
    /// Persists a new appointment together with its services.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the customer already has an
    /// appointment at the same time.
    fn insert_appointment(&mut self, appointment: &NewAppointment)
    -> Result<Appointment, StoreError>;

    /// Loads an appointment by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn find_appointment(
        &mut self,
        appointment_id: AppointmentId,
    ) -> Result<Option<Appointment>, StoreError>;

    /// Writes every mutable field of an existing appointment.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if a schedule change collides with
    /// another appointment of the same customer.
    fn update_appointment(&mut self, appointment: &Appointment) -> Result<(), StoreError>;

    /// Deletes an appointment and its service links.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn delete_appointment(&mut self, appointment_id: AppointmentId) -> Result<(), StoreError>;

    /// Makes every preceding write visible to subsequent reads.
    ///
    /// # Errors
    ///
    /// Returns an error if pending writes cannot be flushed.
    fn flush(&mut self) -> Result<(), StoreError>;

    /// Returns true if the customer has an appointment at exactly
    /// `scheduled_at`, ignoring `excluding` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn customer_has_appointment_at(
        &mut self,
        customer_id: PrincipalId,
        scheduled_at: PrimitiveDateTime,
        excluding: Option<AppointmentId>,
    ) -> Result<bool, StoreError>;

    /// Lists all of a customer's appointments, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_customer_appointments(
        &mut self,
        customer_id: PrincipalId,
    ) -> Result<Vec<Appointment>, StoreError>;

    /// Lists a customer's appointments at or after `from`, ascending by time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_customer_appointments_from(
        &mut self,
        customer_id: PrincipalId,
        from: PrimitiveDateTime,
    ) -> Result<Vec<Appointment>, StoreError>;

    /// Counts a customer's appointments, optionally restricted to one status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn count_customer_appointments(
        &mut self,
        customer_id: PrincipalId,
        status: Option<AppointmentStatus>,
    ) -> Result<u64, StoreError>;

    /// Sums `final_cost` over the customer's completed appointments.
    ///
    /// Returns `None` when the customer has no completed appointment.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn sum_completed_final_cost(
        &mut self,
        customer_id: PrincipalId,
    ) -> Result<Option<Decimal>, StoreError>;

    /// Counts appointments assigned to an employee, optionally restricted to
    /// one status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn count_employee_appointments(
        &mut self,
        employee_id: PrincipalId,
        status: Option<AppointmentStatus>,
    ) -> Result<u64, StoreError>;
}

/// Everything the operation layer needs from storage.
pub trait ShopStore: PrincipalDirectory + VehicleDirectory + ServiceCatalog + AppointmentStore {}

impl<T> ShopStore for T where
    T: PrincipalDirectory + VehicleDirectory + ServiceCatalog + AppointmentStore
{
}

/// Source of the current shop-local time.
pub trait Clock {
    /// The current shop-local date and time.
    fn now(&self) -> PrimitiveDateTime;
}

/// Wall clock shifted to the shop's UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    #[must_use]
    pub const fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    #[must_use]
    pub const fn utc() -> Self {
        Self::new(UtcOffset::UTC)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> PrimitiveDateTime {
        let now: OffsetDateTime = OffsetDateTime::now_utc().to_offset(self.offset);
        PrimitiveDateTime::new(now.date(), now.time())
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: PrimitiveDateTime,
}

impl FixedClock {
    #[must_use]
    pub const fn new(now: PrimitiveDateTime) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> PrimitiveDateTime {
        self.now
    }
}
