// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and the column encodings shared by queries and mutations.

use diesel::prelude::*;
use gearsync_domain::{
    AppointmentStatus, Principal, PrincipalId, Role, ServiceCatalogItem, ServiceCategory,
    ServiceId, Vehicle, VehicleId,
};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::diesel_schema::{appointments, principals, services, vehicles};
use crate::error::PersistenceError;

/// Fixed-width timestamp encoding. Lexical order equals time order.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:9]");

#[derive(Queryable, Selectable)]
#[diesel(table_name = principals)]
pub struct PrincipalRow {
    pub principal_id: i64,
    pub email: String,
    pub role: String,
}

impl PrincipalRow {
    pub fn into_domain(self) -> Result<Principal, PersistenceError> {
        let role: Role = Role::from_str(&self.role).map_err(|_| PersistenceError::CorruptValue {
            column: "principals.role",
            value: self.role.clone(),
        })?;
        Ok(Principal::new(
            PrincipalId::new(self.principal_id),
            self.email,
            role,
        ))
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = vehicles)]
pub struct VehicleRow {
    pub vehicle_id: i64,
    pub owner_id: i64,
    pub registration_number: String,
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl VehicleRow {
    pub fn into_domain(self) -> Result<Vehicle, PersistenceError> {
        let year: u16 = self.year.to_u16().ok_or(PersistenceError::CorruptValue {
            column: "vehicles.year",
            value: self.year.to_string(),
        })?;
        Ok(Vehicle {
            id: VehicleId::new(self.vehicle_id),
            owner_id: PrincipalId::new(self.owner_id),
            registration_number: self.registration_number,
            make: self.make,
            model: self.model,
            year,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = services)]
pub struct ServiceRow {
    pub service_id: i64,
    pub name: String,
    pub category: String,
    pub base_price: String,
    pub estimated_duration_minutes: i32,
    pub is_active: i32,
}

impl ServiceRow {
    pub fn into_domain(self) -> Result<ServiceCatalogItem, PersistenceError> {
        let category: ServiceCategory =
            ServiceCategory::from_str(&self.category).map_err(|_| {
                PersistenceError::CorruptValue {
                    column: "services.category",
                    value: self.category.clone(),
                }
            })?;
        let estimated_duration_minutes: u32 = self
            .estimated_duration_minutes
            .to_u32()
            .ok_or(PersistenceError::CorruptValue {
                column: "services.estimated_duration_minutes",
                value: self.estimated_duration_minutes.to_string(),
            })?;
        Ok(ServiceCatalogItem {
            id: ServiceId::new(self.service_id),
            name: self.name,
            category,
            base_price: decode_money("services.base_price", &self.base_price)?,
            estimated_duration_minutes,
            is_active: self.is_active != 0,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = appointments)]
pub struct AppointmentRow {
    pub appointment_id: i64,
    pub customer_id: i64,
    pub vehicle_id: i64,
    pub assigned_employee_id: Option<i64>,
    pub scheduled_at: String,
    pub status: String,
    pub customer_notes: Option<String>,
    pub employee_notes: Option<String>,
    pub progress_percentage: i32,
    pub final_cost: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

pub fn encode_timestamp(value: PrimitiveDateTime) -> Result<String, PersistenceError> {
    value
        .format(TIMESTAMP_FORMAT)
        .map_err(|e| PersistenceError::InvalidInput(format!("Unencodable timestamp: {e}")))
}

pub fn decode_timestamp(
    column: &'static str,
    value: &str,
) -> Result<PrimitiveDateTime, PersistenceError> {
    PrimitiveDateTime::parse(value, TIMESTAMP_FORMAT).map_err(|_| PersistenceError::CorruptValue {
        column,
        value: value.to_string(),
    })
}

pub fn encode_money(value: Decimal) -> String {
    value.to_string()
}

pub fn decode_money(column: &'static str, value: &str) -> Result<Decimal, PersistenceError> {
    Decimal::from_str(value).map_err(|_| PersistenceError::CorruptValue {
        column,
        value: value.to_string(),
    })
}

pub fn decode_status(value: &str) -> Result<AppointmentStatus, PersistenceError> {
    AppointmentStatus::from_str(value).map_err(|_| PersistenceError::CorruptValue {
        column: "appointments.status",
        value: value.to_string(),
    })
}

pub fn decode_count(value: i64) -> Result<u64, PersistenceError> {
    value
        .to_u64()
        .ok_or_else(|| PersistenceError::DatabaseError("Count conversion failed".to_string()))
}
