// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Runtime configuration derived from command-line flags.

use gearsync::{CompletedCancellation, LifecyclePolicy};
use gearsync_api::ServiceConfig;
use gearsync_persistence::{Persistence, PersistenceError};
use std::path::Path;
use thiserror::Error;
use time::UtcOffset;
use tracing::{info, warn};

/// Widest shop offset accepted, in hours either side of UTC.
pub const MAX_OFFSET_HOURS: i8 = 23;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The shop offset is outside the supported range.
    #[error(
        "UTC offset must be between -{max} and +{max} hours (got {hours})",
        max = MAX_OFFSET_HOURS
    )]
    InvalidUtcOffset { hours: i8 },

    /// The database path was given but empty.
    #[error("Database path must not be empty")]
    EmptyDatabasePath,
}

/// Error raised while opening the store.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to open database: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Builds the lifecycle rules from the two policy flags.
#[must_use]
pub const fn service_config(
    reject_completed_cancellation: bool,
    allow_completion_without_final_cost: bool,
) -> ServiceConfig {
    let completed_cancellation: CompletedCancellation = if reject_completed_cancellation {
        CompletedCancellation::Reject
    } else {
        CompletedCancellation::Allow
    };

    ServiceConfig::new(LifecyclePolicy {
        completed_cancellation,
        require_final_cost_on_completion: !allow_completion_without_final_cost,
    })
}

/// Converts the configured hour offset into the shop's local offset.
///
/// # Errors
///
/// Returns `ConfigError::InvalidUtcOffset` outside `-23..=23`.
pub fn shop_offset(hours: i8) -> Result<UtcOffset, ConfigError> {
    if !(-MAX_OFFSET_HOURS..=MAX_OFFSET_HOURS).contains(&hours) {
        return Err(ConfigError::InvalidUtcOffset { hours });
    }
    UtcOffset::from_hms(hours, 0, 0).map_err(|_| ConfigError::InvalidUtcOffset { hours })
}

/// Opens the file-backed store at `database`, or a fresh in-memory store.
///
/// # Errors
///
/// Returns an error if the path is empty or the database cannot be
/// initialized.
pub fn open_store(database: Option<&Path>) -> Result<Persistence, StartupError> {
    match database {
        Some(path) if path.as_os_str().is_empty() => Err(ConfigError::EmptyDatabasePath.into()),
        Some(path) => {
            info!("Using file-based database at: {}", path.display());
            Ok(Persistence::new_with_file(path)?)
        }
        None => {
            warn!(
                "No --database or GEARSYNC_DATABASE given; using an in-memory database \
                 that is discarded on exit"
            );
            Ok(Persistence::new_in_memory()?)
        }
    }
}
