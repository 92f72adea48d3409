// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::str::FromStr;
use time::macros::datetime;

use super::fixtures::service;
use crate::{
    DomainError, MAX_AMOUNT, ServiceId, validate_final_cost, validate_progress,
    validate_schedule_in_future, validate_service_item, validate_service_selection,
    validate_services_available,
};

fn ids(values: &[i64]) -> Vec<ServiceId> {
    values.iter().copied().map(ServiceId::new).collect()
}

#[test]
fn test_schedule_must_be_strictly_in_the_future() {
    let now = datetime!(2026-03-01 12:00);

    assert!(validate_schedule_in_future(datetime!(2026-03-01 12:01), now).is_ok());
    assert_eq!(
        validate_schedule_in_future(now, now),
        Err(DomainError::ScheduleInPast { scheduled_at: now })
    );
    assert!(validate_schedule_in_future(datetime!(2026-02-28 12:00), now).is_err());
}

#[test]
fn test_empty_service_selection_is_rejected() {
    assert_eq!(
        validate_service_selection(&[]),
        Err(DomainError::NoServicesSelected)
    );
}

#[test]
fn test_service_selection_collapses_duplicates() {
    let selection: BTreeSet<ServiceId> = validate_service_selection(&ids(&[2, 1, 2])).unwrap();
    assert_eq!(selection.into_iter().collect::<Vec<_>>(), ids(&[1, 2]));
}

#[test]
fn test_all_active_services_are_available() {
    let requested: BTreeSet<ServiceId> = ids(&[1, 2]).into_iter().collect();
    let resolved = vec![service(2, "29.99", true), service(1, "49.99", true)];

    let selected = validate_services_available(&requested, resolved).unwrap();
    assert_eq!(
        selected.iter().map(|s| s.id).collect::<Vec<_>>(),
        ids(&[1, 2])
    );
}

#[test]
fn test_inactive_service_is_unavailable() {
    let requested: BTreeSet<ServiceId> = ids(&[1, 2]).into_iter().collect();
    let resolved = vec![service(1, "49.99", true), service(2, "29.99", false)];

    assert_eq!(
        validate_services_available(&requested, resolved),
        Err(DomainError::ServiceUnavailable {
            service_id: ServiceId::new(2)
        })
    );
}

#[test]
fn test_missing_service_is_unavailable() {
    let requested: BTreeSet<ServiceId> = ids(&[1, 3]).into_iter().collect();
    let resolved = vec![service(1, "49.99", true)];

    assert_eq!(
        validate_services_available(&requested, resolved),
        Err(DomainError::ServiceUnavailable {
            service_id: ServiceId::new(3)
        })
    );
}

#[test]
fn test_all_inactive_selection_is_unavailable() {
    let requested: BTreeSet<ServiceId> = ids(&[1, 2]).into_iter().collect();
    let resolved = vec![service(1, "49.99", false), service(2, "29.99", false)];

    assert!(matches!(
        validate_services_available(&requested, resolved),
        Err(DomainError::ServiceUnavailable { .. })
    ));
}

#[test]
fn test_progress_bounds() {
    assert_eq!(validate_progress(0), Ok(0));
    assert_eq!(validate_progress(100), Ok(100));
    assert_eq!(
        validate_progress(101),
        Err(DomainError::InvalidProgress { value: 101 })
    );
    assert_eq!(
        validate_progress(-1),
        Err(DomainError::InvalidProgress { value: -1 })
    );
}

#[test]
fn test_final_cost_must_not_be_negative() {
    assert!(validate_final_cost(Decimal::ZERO).is_ok());
    assert!(validate_final_cost(Decimal::from_str("79.98").unwrap()).is_ok());
    assert!(matches!(
        validate_final_cost(Decimal::from_str("-0.01").unwrap()),
        Err(DomainError::NegativeFinalCost { .. })
    ));
}

#[test]
fn test_final_cost_is_capped() {
    assert!(validate_final_cost(MAX_AMOUNT).is_ok());
    assert!(matches!(
        validate_final_cost(MAX_AMOUNT + Decimal::from_str("0.01").unwrap()),
        Err(DomainError::FinalCostTooLarge { .. })
    ));
    assert!(matches!(
        validate_final_cost(Decimal::MAX),
        Err(DomainError::FinalCostTooLarge { .. })
    ));
}

#[test]
fn test_service_item_invariants() {
    assert!(validate_service_item(&service(1, "0", true)).is_ok());

    let mut negative = service(1, "-5", true);
    negative.base_price = Decimal::from_str("-5").unwrap();
    assert!(matches!(
        validate_service_item(&negative),
        Err(DomainError::InvalidServiceItem(_))
    ));

    let mut overpriced = service(1, "5", true);
    overpriced.base_price = Decimal::MAX;
    assert!(matches!(
        validate_service_item(&overpriced),
        Err(DomainError::InvalidServiceItem(_))
    ));

    let mut zero_duration = service(1, "5", true);
    zero_duration.estimated_duration_minutes = 0;
    assert!(validate_service_item(&zero_duration).is_err());

    let mut unnamed = service(1, "5", true);
    unnamed.name = String::from("  ");
    assert!(validate_service_item(&unnamed).is_err());
}
