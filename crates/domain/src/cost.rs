// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived cost of an appointment.

use crate::error::DomainError;
use crate::types::ServiceCatalogItem;
use rust_decimal::Decimal;

/// Largest amount accepted for a base price or a final cost (one trillion).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Adds `amounts` exactly, refusing to wrap or panic past the decimal range.
///
/// # Errors
///
/// Returns `DomainError::AmountOverflow` naming `operation` if the running
/// total leaves the representable range.
pub fn sum_amounts<I>(amounts: I, operation: &str) -> Result<Decimal, DomainError>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |total, amount| {
        total
            .checked_add(amount)
            .ok_or_else(|| DomainError::AmountOverflow {
                operation: operation.to_string(),
            })
    })
}

/// Sums the base price of every service.
///
/// Summation is exact; the result keeps the largest scale among the inputs
/// and is never rounded. An empty slice yields zero.
///
/// # Errors
///
/// Returns `DomainError::AmountOverflow` if the prices cannot be summed.
pub fn estimated_cost(services: &[ServiceCatalogItem]) -> Result<Decimal, DomainError> {
    sum_amounts(
        services.iter().map(|service| service.base_price),
        "summing service base prices",
    )
}
