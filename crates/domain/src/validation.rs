// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cost::MAX_AMOUNT;
use crate::error::DomainError;
use crate::types::{ServiceCatalogItem, ServiceId};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use time::PrimitiveDateTime;

/// Validates that a requested appointment time lies strictly after `now`.
///
/// This is evaluated when a time is chosen (booking, reschedule, schedule
/// edit). Appointments whose time later passes are not invalidated.
///
/// # Arguments
///
/// * `scheduled_at` - The requested time
/// * `now` - The current shop-local time
///
/// # Errors
///
/// Returns `DomainError::ScheduleInPast` if `scheduled_at <= now`.
pub fn validate_schedule_in_future(
    scheduled_at: PrimitiveDateTime,
    now: PrimitiveDateTime,
) -> Result<(), DomainError> {
    if scheduled_at <= now {
        return Err(DomainError::ScheduleInPast { scheduled_at });
    }
    Ok(())
}

/// Normalizes a requested service list into a non-empty, ordered set.
///
/// Duplicate ids collapse to one entry.
///
/// # Errors
///
/// Returns `DomainError::NoServicesSelected` if `service_ids` is empty.
pub fn validate_service_selection(
    service_ids: &[ServiceId],
) -> Result<BTreeSet<ServiceId>, DomainError> {
    if service_ids.is_empty() {
        return Err(DomainError::NoServicesSelected);
    }
    Ok(service_ids.iter().copied().collect())
}

/// Validates that every requested service resolved and is bookable.
///
/// Returns the resolved items ordered by id.
///
/// # Arguments
///
/// * `requested` - The normalized selection
/// * `resolved` - Whatever the catalog returned for that selection
///
/// # Errors
///
/// Returns `DomainError::ServiceUnavailable` naming the lowest requested id
/// that is missing from `resolved` or inactive.
pub fn validate_services_available(
    requested: &BTreeSet<ServiceId>,
    resolved: Vec<ServiceCatalogItem>,
) -> Result<Vec<ServiceCatalogItem>, DomainError> {
    let mut selected: Vec<ServiceCatalogItem> = resolved
        .into_iter()
        .filter(|item| requested.contains(&item.id))
        .collect();
    selected.sort_by_key(|item| item.id);
    selected.dedup_by_key(|item| item.id);

    for service_id in requested {
        let available: bool = selected
            .iter()
            .any(|item| item.id == *service_id && item.is_active);
        if !available {
            return Err(DomainError::ServiceUnavailable {
                service_id: *service_id,
            });
        }
    }

    Ok(selected)
}

/// Validates a progress percentage and narrows it to its stored width.
///
/// # Errors
///
/// Returns `DomainError::InvalidProgress` outside `0..=100`.
pub fn validate_progress(value: i32) -> Result<u8, DomainError> {
    match u8::try_from(value) {
        Ok(percentage) if percentage <= 100 => Ok(percentage),
        _ => Err(DomainError::InvalidProgress { value }),
    }
}

/// Validates a final cost supplied at completion.
///
/// # Errors
///
/// Returns `DomainError::NegativeFinalCost` for amounts below zero and
/// `DomainError::FinalCostTooLarge` above [`MAX_AMOUNT`].
pub fn validate_final_cost(amount: Decimal) -> Result<(), DomainError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(DomainError::NegativeFinalCost { amount });
    }
    if amount > MAX_AMOUNT {
        return Err(DomainError::FinalCostTooLarge { amount });
    }
    Ok(())
}

/// Validates a catalog item before it is stored.
///
/// # Errors
///
/// Returns `DomainError::InvalidServiceItem` if the name is empty, the base
/// price is negative or above [`MAX_AMOUNT`], or the duration is zero.
pub fn validate_service_item(item: &ServiceCatalogItem) -> Result<(), DomainError> {
    if item.name.trim().is_empty() {
        return Err(DomainError::InvalidServiceItem(String::from(
            "Service name cannot be empty",
        )));
    }

    if item.base_price.is_sign_negative() && !item.base_price.is_zero() {
        return Err(DomainError::InvalidServiceItem(format!(
            "Base price cannot be negative: {}",
            item.base_price
        )));
    }

    if item.base_price > MAX_AMOUNT {
        return Err(DomainError::InvalidServiceItem(format!(
            "Base price cannot exceed {MAX_AMOUNT}: {}",
            item.base_price
        )));
    }

    if item.estimated_duration_minutes == 0 {
        return Err(DomainError::InvalidServiceItem(String::from(
            "Estimated duration must be at least one minute",
        )));
    }

    Ok(())
}
