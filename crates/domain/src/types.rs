// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::appointment_status::AppointmentStatus;
use crate::cost::estimated_cost;
use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::PrimitiveDateTime;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a database-assigned identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a customer or employee.
    PrincipalId
);
entity_id!(
    /// Identifier of a vehicle.
    VehicleId
);
entity_id!(
    /// Identifier of a service catalog item.
    ServiceId
);
entity_id!(
    /// Identifier of an appointment.
    AppointmentId
);

/// The role an authenticated principal acts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Vehicle owner booking work.
    Customer,
    /// Shop staff performing work.
    Employee,
}

impl Role {
    /// Returns the persisted string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Employee => "EMPLOYEE",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CUSTOMER" => Ok(Self::Customer),
            "EMPLOYEE" => Ok(Self::Employee),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated actor resolved from the identity directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    /// Unique across all principals.
    pub email: String,
    pub role: Role,
}

impl Principal {
    #[must_use]
    pub const fn new(id: PrincipalId, email: String, role: Role) -> Self {
        Self { id, email, role }
    }

    #[must_use]
    pub const fn is_employee(&self) -> bool {
        matches!(self.role, Role::Employee)
    }
}

/// A customer's vehicle.
///
/// Every vehicle has exactly one owner. Ownership is read at booking time
/// only; later ownership changes do not affect existing appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub owner_id: PrincipalId,
    /// Unique across all vehicles.
    pub registration_number: String,
    pub make: String,
    pub model: String,
    pub year: u16,
}

/// Grouping of catalog items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceCategory {
    Maintenance,
    Repair,
    Inspection,
    TireService,
    Bodywork,
    Electrical,
    Other,
}

impl ServiceCategory {
    /// Returns the persisted string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "MAINTENANCE",
            Self::Repair => "REPAIR",
            Self::Inspection => "INSPECTION",
            Self::TireService => "TIRE_SERVICE",
            Self::Bodywork => "BODYWORK",
            Self::Electrical => "ELECTRICAL",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for ServiceCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MAINTENANCE" => Ok(Self::Maintenance),
            "REPAIR" => Ok(Self::Repair),
            "INSPECTION" => Ok(Self::Inspection),
            "TIRE_SERVICE" => Ok(Self::TireService),
            "BODYWORK" => Ok(Self::Bodywork),
            "ELECTRICAL" => Ok(Self::Electrical),
            "OTHER" => Ok(Self::Other),
            _ => Err(DomainError::InvalidServiceCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A billable unit of work offered by the shop.
///
/// Only active items are bookable. Inactive items stay referenced by
/// historical appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalogItem {
    pub id: ServiceId,
    /// Unique across the catalog.
    pub name: String,
    pub category: ServiceCategory,
    /// Non-negative.
    pub base_price: Decimal,
    /// Positive.
    pub estimated_duration_minutes: u32,
    pub is_active: bool,
}

/// A scheduled service visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub customer: Principal,
    pub vehicle: Vehicle,
    pub assigned_employee: Option<Principal>,
    pub scheduled_at: PrimitiveDateTime,
    pub status: AppointmentStatus,
    pub customer_notes: Option<String>,
    pub employee_notes: Option<String>,
    /// Always within `0..=100`.
    pub progress_percentage: u8,
    /// Set by the completion workflow.
    pub final_cost: Option<Decimal>,
    /// Ordered by service id, no duplicates.
    pub services: Vec<ServiceCatalogItem>,
    pub created_at: PrimitiveDateTime,
    pub updated_at: PrimitiveDateTime,
}

impl Appointment {
    /// Sum of base prices over the currently associated services.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AmountOverflow` if the prices cannot be summed.
    pub fn estimated_cost(&self) -> Result<Decimal, DomainError> {
        estimated_cost(&self.services)
    }

    /// Returns true if `principal` booked this appointment.
    #[must_use]
    pub const fn is_owned_by(&self, principal: &Principal) -> bool {
        self.customer.id.value() == principal.id.value()
    }
}

/// An appointment that passed booking validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub customer: Principal,
    pub vehicle: Vehicle,
    pub scheduled_at: PrimitiveDateTime,
    pub status: AppointmentStatus,
    pub customer_notes: Option<String>,
    pub progress_percentage: u8,
    pub services: Vec<ServiceCatalogItem>,
    pub created_at: PrimitiveDateTime,
}

impl NewAppointment {
    /// Sum of base prices over the selected services.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AmountOverflow` if the prices cannot be summed.
    pub fn estimated_cost(&self) -> Result<Decimal, DomainError> {
        estimated_cost(&self.services)
    }
}
