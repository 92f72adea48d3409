// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Appointment status tracking and transition logic.
//!
//! This module is the single authority for which status changes are legal.
//! Every lifecycle operation consults the transition table defined here
//! instead of re-deriving its own guard.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle states of an appointment.
///
/// `Scheduled` is the initial state. `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    /// Booked by the customer, not yet acknowledged by the shop
    Scheduled,
    /// Acknowledged by an employee
    Confirmed,
    /// Moved to a new time by the customer before confirmation
    Rescheduled,
    /// Work on the vehicle has started
    InProgress,
    /// Work finished
    Completed,
    /// Withdrawn before or during work
    Cancelled,
}

/// The statuses from which an appointment may be deleted outright.
pub const DELETABLE_STATUSES: [AppointmentStatus; 3] = [
    AppointmentStatus::Scheduled,
    AppointmentStatus::Confirmed,
    AppointmentStatus::Rescheduled,
];

impl AppointmentStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::Scheduled,
        Self::Confirmed,
        Self::Rescheduled,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Confirmed => "CONFIRMED",
            Self::Rescheduled => "RESCHEDULED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "SCHEDULED" => Ok(Self::Scheduled),
            "CONFIRMED" => Ok(Self::Confirmed),
            "RESCHEDULED" => Ok(Self::Rescheduled),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }

    /// Returns true if this status is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns true if the customer may still edit notes and schedule.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Returns true if this status is listed in [`DELETABLE_STATUSES`].
    #[must_use]
    pub const fn is_deletable(&self) -> bool {
        let mut i: usize = 0;
        while i < DELETABLE_STATUSES.len() {
            if DELETABLE_STATUSES[i] as u8 == *self as u8 {
                return true;
            }
            i += 1;
        }
        false
    }

    /// The transition table.
    ///
    /// - `Scheduled` → `Confirmed`, `Rescheduled`, `Cancelled`
    /// - `Confirmed`, `Rescheduled` → `InProgress`, `Cancelled`
    /// - `InProgress` → `Completed`, `Cancelled`
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (
                Self::Scheduled,
                Self::Confirmed | Self::Rescheduled | Self::Cancelled
            ) | (
                Self::Confirmed | Self::Rescheduled,
                Self::InProgress | Self::Cancelled
            ) | (Self::InProgress, Self::Completed | Self::Cancelled)
        )
    }

    /// Validates a transition from this status to `target`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the table does not
    /// permit the transition.
    pub const fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        if self.can_transition_to(target) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: *self,
                to: target,
            })
        }
    }

    /// Validates a cancellation request.
    ///
    /// An already cancelled appointment is always rejected. A completed
    /// appointment is terminal in the table; `allow_completed` lets the
    /// caller's policy override that one edge.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AlreadyCancelled` or
    /// `DomainError::InvalidStatusTransition`.
    pub const fn validate_cancellation(&self, allow_completed: bool) -> Result<(), DomainError> {
        match self {
            Self::Cancelled => Err(DomainError::AlreadyCancelled),
            Self::Completed if allow_completed => Ok(()),
            _ => self.validate_transition(Self::Cancelled),
        }
    }

    /// Validates that notes and schedule may be edited.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AppointmentInProgress` while work is under way.
    pub const fn validate_editable(&self) -> Result<(), DomainError> {
        if self.is_editable() {
            Ok(())
        } else {
            Err(DomainError::AppointmentInProgress)
        }
    }

    /// Validates that the appointment may be deleted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotDeletable` outside `DELETABLE_STATUSES`.
    pub const fn validate_deletable(&self) -> Result<(), DomainError> {
        if self.is_deletable() {
            Ok(())
        } else {
            Err(DomainError::NotDeletable { status: *self })
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        for status in AppointmentStatus::ALL {
            let s = status.as_str();
            match AppointmentStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_deletable_matches_the_deletable_list() {
        for status in AppointmentStatus::ALL {
            assert_eq!(
                status.is_deletable(),
                DELETABLE_STATUSES.contains(&status),
                "{status:?}"
            );
        }
        assert!(!AppointmentStatus::InProgress.is_deletable());
        assert!(!AppointmentStatus::Completed.is_deletable());
        assert!(!AppointmentStatus::Cancelled.is_deletable());
    }

    #[test]
    fn test_invalid_status_string() {
        assert!(AppointmentStatus::parse_str("scheduled").is_err());
        assert!(AppointmentStatus::parse_str("DONE").is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!AppointmentStatus::Scheduled.is_terminal());
        assert!(!AppointmentStatus::Confirmed.is_terminal());
        assert!(!AppointmentStatus::Rescheduled.is_terminal());
        assert!(!AppointmentStatus::InProgress.is_terminal());
        assert!(AppointmentStatus::Completed.is_terminal());
        assert!(AppointmentStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_valid_transitions_from_scheduled() {
        let current = AppointmentStatus::Scheduled;

        assert!(
            current
                .validate_transition(AppointmentStatus::Confirmed)
                .is_ok()
        );
        assert!(
            current
                .validate_transition(AppointmentStatus::Rescheduled)
                .is_ok()
        );
        assert!(
            current
                .validate_transition(AppointmentStatus::Cancelled)
                .is_ok()
        );
        assert!(
            current
                .validate_transition(AppointmentStatus::InProgress)
                .is_err()
        );
        assert!(
            current
                .validate_transition(AppointmentStatus::Completed)
                .is_err()
        );
    }

    #[test]
    fn test_confirmed_and_rescheduled_share_exits() {
        for current in [AppointmentStatus::Confirmed, AppointmentStatus::Rescheduled] {
            assert!(
                current
                    .validate_transition(AppointmentStatus::InProgress)
                    .is_ok()
            );
            assert!(
                current
                    .validate_transition(AppointmentStatus::Cancelled)
                    .is_ok()
            );
            assert!(
                current
                    .validate_transition(AppointmentStatus::Completed)
                    .is_err()
            );
            assert!(
                current
                    .validate_transition(AppointmentStatus::Scheduled)
                    .is_err()
            );
        }
    }

    #[test]
    fn test_in_progress_exits() {
        let current = AppointmentStatus::InProgress;

        assert!(
            current
                .validate_transition(AppointmentStatus::Completed)
                .is_ok()
        );
        assert!(
            current
                .validate_transition(AppointmentStatus::Cancelled)
                .is_ok()
        );
        assert!(
            current
                .validate_transition(AppointmentStatus::Confirmed)
                .is_err()
        );
    }

    #[test]
    fn test_no_transitions_from_terminal_states() {
        for terminal in [AppointmentStatus::Completed, AppointmentStatus::Cancelled] {
            for target in AppointmentStatus::ALL {
                assert!(
                    terminal.validate_transition(target).is_err(),
                    "{terminal} -> {target} should be rejected"
                );
            }
        }
    }

    #[test]
    fn test_cancellation_rules() {
        assert_eq!(
            AppointmentStatus::Cancelled.validate_cancellation(true),
            Err(DomainError::AlreadyCancelled)
        );
        assert!(
            AppointmentStatus::Completed
                .validate_cancellation(true)
                .is_ok()
        );
        assert!(matches!(
            AppointmentStatus::Completed.validate_cancellation(false),
            Err(DomainError::InvalidStatusTransition { .. })
        ));
        assert!(
            AppointmentStatus::InProgress
                .validate_cancellation(false)
                .is_ok()
        );
    }

    #[test]
    fn test_only_in_progress_blocks_edits() {
        for status in AppointmentStatus::ALL {
            assert_eq!(
                status.validate_editable().is_err(),
                status == AppointmentStatus::InProgress
            );
        }
    }

    #[test]
    fn test_deletable_statuses() {
        for status in AppointmentStatus::ALL {
            assert_eq!(
                status.is_deletable(),
                DELETABLE_STATUSES.contains(&status)
            );
        }
        assert_eq!(
            AppointmentStatus::Completed.validate_deletable(),
            Err(DomainError::NotDeletable {
                status: AppointmentStatus::Completed
            })
        );
    }
}
