// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Port implementations over the `SQLite` connection.

use gearsync::{AppointmentStore, PrincipalDirectory, ServiceCatalog, StoreError, VehicleDirectory};
use gearsync_domain::{
    Appointment, AppointmentId, AppointmentStatus, NewAppointment, Principal, PrincipalId,
    ServiceCatalogItem, ServiceId, Vehicle, VehicleId,
};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use time::PrimitiveDateTime;

use crate::{Persistence, mutations, queries};

impl PrincipalDirectory for Persistence {
    fn find_principal_by_email(&mut self, email: &str) -> Result<Option<Principal>, StoreError> {
        Ok(queries::directory::find_principal_by_email(
            &mut self.conn,
            email,
        )?)
    }
}

impl VehicleDirectory for Persistence {
    fn find_vehicle(&mut self, vehicle_id: VehicleId) -> Result<Option<Vehicle>, StoreError> {
        Ok(queries::directory::find_vehicle(&mut self.conn, vehicle_id)?)
    }

    fn count_vehicles_by_owner(&mut self, owner_id: PrincipalId) -> Result<u64, StoreError> {
        Ok(queries::directory::count_vehicles_by_owner(
            &mut self.conn,
            owner_id,
        )?)
    }
}

impl ServiceCatalog for Persistence {
    fn find_services(
        &mut self,
        service_ids: &BTreeSet<ServiceId>,
    ) -> Result<Vec<ServiceCatalogItem>, StoreError> {
        Ok(queries::directory::find_services(
            &mut self.conn,
            service_ids,
        )?)
    }
}

impl AppointmentStore for Persistence {
    fn insert_appointment(
        &mut self,
        appointment: &NewAppointment,
    ) -> Result<Appointment, StoreError> {
        Ok(mutations::appointments::insert_appointment(
            &mut self.conn,
            appointment,
        )?)
    }

    fn find_appointment(
        &mut self,
        appointment_id: AppointmentId,
    ) -> Result<Option<Appointment>, StoreError> {
        Ok(queries::appointments::find_appointment(
            &mut self.conn,
            appointment_id,
        )?)
    }

    fn update_appointment(&mut self, appointment: &Appointment) -> Result<(), StoreError> {
        Ok(mutations::appointments::update_appointment(
            &mut self.conn,
            appointment,
        )?)
    }

    fn delete_appointment(&mut self, appointment_id: AppointmentId) -> Result<(), StoreError> {
        Ok(mutations::appointments::delete_appointment(
            &mut self.conn,
            appointment_id,
        )?)
    }

    /// Every statement runs in autocommit mode or inside a transaction that
    /// has already committed, so there is nothing left to flush.
    fn flush(&mut self) -> Result<(), StoreError> {
        Ok(())
    }

    fn customer_has_appointment_at(
        &mut self,
        customer_id: PrincipalId,
        scheduled_at: PrimitiveDateTime,
        excluding: Option<AppointmentId>,
    ) -> Result<bool, StoreError> {
        Ok(queries::appointments::customer_has_appointment_at(
            &mut self.conn,
            customer_id,
            scheduled_at,
            excluding,
        )?)
    }

    fn list_customer_appointments(
        &mut self,
        customer_id: PrincipalId,
    ) -> Result<Vec<Appointment>, StoreError> {
        Ok(queries::appointments::list_customer_appointments(
            &mut self.conn,
            customer_id,
        )?)
    }

    fn list_customer_appointments_from(
        &mut self,
        customer_id: PrincipalId,
        from: PrimitiveDateTime,
    ) -> Result<Vec<Appointment>, StoreError> {
        Ok(queries::appointments::list_customer_appointments_from(
            &mut self.conn,
            customer_id,
            from,
        )?)
    }

    fn count_customer_appointments(
        &mut self,
        customer_id: PrincipalId,
        status: Option<AppointmentStatus>,
    ) -> Result<u64, StoreError> {
        Ok(queries::appointments::count_customer_appointments(
            &mut self.conn,
            customer_id,
            status,
        )?)
    }

    fn sum_completed_final_cost(
        &mut self,
        customer_id: PrincipalId,
    ) -> Result<Option<Decimal>, StoreError> {
        Ok(queries::appointments::sum_completed_final_cost(
            &mut self.conn,
            customer_id,
        )?)
    }

    fn count_employee_appointments(
        &mut self,
        employee_id: PrincipalId,
        status: Option<AppointmentStatus>,
    ) -> Result<u64, StoreError> {
        Ok(queries::appointments::count_employee_appointments(
            &mut self.conn,
            employee_id,
            status,
        )?)
    }
}
