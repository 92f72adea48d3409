// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use gearsync::{CoreError, StoreError};
use gearsync_domain::DomainError;
use serde::Serialize;

/// User-facing message for a customer time-slot collision.
pub const DUPLICATE_SLOT_MESSAGE: &str = "You already have an appointment scheduled at that time";

/// Coarse classification of an [`ApiError`].
///
/// A transport layer maps each kind to its own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    UserNotFound,
    VehicleNotFound,
    ResourceNotFound,
    Unauthorized,
    InvalidArgument,
    DuplicateResource,
    IllegalState,
    Internal,
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Every variant carries a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The caller's email does not resolve to a principal.
    UserNotFound {
        /// A human-readable description of who was not found.
        message: String,
    },
    /// The referenced vehicle does not exist.
    VehicleNotFound {
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The caller is authenticated but not entitled to the target.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// A human-readable description of the refusal.
        message: String,
    },
    /// Invalid input was provided.
    InvalidArgument {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The request would duplicate an existing resource.
    DuplicateResource {
        /// A human-readable description of the collision.
        message: String,
    },
    /// The operation is not legal in the appointment's current status.
    IllegalState {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound { .. } => ErrorKind::UserNotFound,
            Self::VehicleNotFound { .. } => ErrorKind::VehicleNotFound,
            Self::ResourceNotFound { .. } => ErrorKind::ResourceNotFound,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::DuplicateResource { .. } => ErrorKind::DuplicateResource,
            Self::IllegalState { .. } => ErrorKind::IllegalState,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserNotFound { message } | Self::VehicleNotFound { message } => {
                write!(f, "{message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Unauthorized { action, message } => {
                write!(f, "Unauthorized ({action}): {message}")
            }
            Self::InvalidArgument { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DuplicateResource { message } => write!(f, "Duplicate: {message}"),
            Self::IllegalState { rule, message } => {
                write!(f, "Illegal state ({rule}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::ScheduleInPast { .. } => ApiError::InvalidArgument {
            field: String::from("scheduledDateTime"),
            message,
        },
        DomainError::NoServicesSelected | DomainError::ServiceUnavailable { .. } => {
            ApiError::InvalidArgument {
                field: String::from("serviceIds"),
                message,
            }
        }
        DomainError::InvalidServiceItem(_) | DomainError::InvalidServiceCategory(_) => {
            ApiError::InvalidArgument {
                field: String::from("service"),
                message,
            }
        }
        DomainError::InvalidStatus(_) => ApiError::InvalidArgument {
            field: String::from("status"),
            message,
        },
        DomainError::InvalidRole(_) => ApiError::InvalidArgument {
            field: String::from("role"),
            message,
        },
        DomainError::InvalidProgress { .. } => ApiError::InvalidArgument {
            field: String::from("progressPercentage"),
            message,
        },
        DomainError::FinalCostRequired
        | DomainError::NegativeFinalCost { .. }
        | DomainError::FinalCostTooLarge { .. } => ApiError::InvalidArgument {
            field: String::from("finalCost"),
            message,
        },
        DomainError::InvalidStatusTransition { .. } => ApiError::IllegalState {
            rule: String::from("status_transition"),
            message,
        },
        DomainError::AlreadyCancelled => ApiError::IllegalState {
            rule: String::from("already_cancelled"),
            message,
        },
        DomainError::AppointmentInProgress => ApiError::IllegalState {
            rule: String::from("in_progress_frozen"),
            message,
        },
        DomainError::NotDeletable { .. } => ApiError::IllegalState {
            rule: String::from("deletable_status"),
            message,
        },
        DomainError::NotInProgress { .. } => ApiError::IllegalState {
            rule: String::from("progress_requires_in_progress"),
            message,
        },
        DomainError::AmountOverflow { .. } | DomainError::DateArithmeticOverflow { .. } => {
            ApiError::Internal { message }
        }
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a data-access failure into an API error.
///
/// A uniqueness conflict can only come from the per-customer time-slot
/// constraint, so it surfaces as the same duplicate the booking check raises.
#[must_use]
pub fn translate_store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::Conflict(_) => ApiError::DuplicateResource {
            message: String::from(DUPLICATE_SLOT_MESSAGE),
        },
        StoreError::Unavailable(msg) => ApiError::Internal {
            message: format!("Store operation failed: {msg}"),
        },
    }
}
