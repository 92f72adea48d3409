// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gearsync_domain::Principal;
use rust_decimal::Decimal;
use time::PrimitiveDateTime;

/// A lifecycle command represents caller intent as data only.
///
/// Authorization is decided before a command is applied. Applying a command
/// checks only status and field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleCommand {
    /// Edit notes and/or schedule without changing status.
    Update {
        /// Replacement customer notes.
        customer_notes: Option<String>,
        /// Replacement appointment time.
        scheduled_at: Option<PrimitiveDateTime>,
    },
    /// Move a scheduled appointment to a new time.
    Reschedule {
        /// The new appointment time.
        scheduled_at: PrimitiveDateTime,
    },
    /// Withdraw the appointment.
    Cancel,
    /// Shop acknowledges the booking.
    Confirm,
    /// Work begins.
    Start {
        /// The employee starting the work. Assigned if nobody is yet.
        employee: Principal,
    },
    /// Employee reports progress.
    RecordProgress {
        /// Requested percentage, validated to `0..=100`.
        progress_percentage: i32,
        /// Replacement employee notes.
        employee_notes: Option<String>,
    },
    /// Work finishes.
    Complete {
        /// Amount charged.
        final_cost: Option<Decimal>,
        /// Replacement employee notes.
        employee_notes: Option<String>,
    },
}

impl LifecycleCommand {
    /// Name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Update { .. } => "Update",
            Self::Reschedule { .. } => "Reschedule",
            Self::Cancel => "Cancel",
            Self::Confirm => "Confirm",
            Self::Start { .. } => "Start",
            Self::RecordProgress { .. } => "RecordProgress",
            Self::Complete { .. } => "Complete",
        }
    }
}
