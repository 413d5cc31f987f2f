// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use catalog::CoreError;
use catalog_domain::DomainError;
use catalog_persistence::PersistenceError;
use thiserror::Error;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No usable caller identity was supplied.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The caller's role does not permit the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core/persistence errors and represent the
/// API contract. The server maps each variant to one HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No usable caller identity was supplied.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    /// The caller's role does not permit the action.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        action: String,
        required_role: String,
    },

    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        resource_type: String,
        message: String,
    },

    /// The store failed; the operation was rolled back.
    #[error("Operation '{operation}' failed: {message}")]
    Persistence { operation: String, message: String },

    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// Only reference kind tokens come from callers. Every other domain error
/// means a canonical dataset is broken, which is internal.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidReferenceKind(kind) => ApiError::InvalidInput {
            field: String::from("kind"),
            message: format!(
                "Unknown reference kind '{kind}'. Expected categories, target-groups, settings or footer-links"
            ),
        },
        DomainError::InvalidCostTier(tier) => ApiError::InvalidInput {
            field: String::from("cost"),
            message: format!("Unknown cost tier '{tier}'"),
        },
        other => ApiError::Internal {
            message: format!("Reference dataset rejected: {other}"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error raised by `operation` into an API error.
#[must_use]
pub fn translate_persistence_error(operation: &str, err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        PersistenceError::InvalidData(message) => ApiError::Internal {
            message: format!("{operation}: {message}"),
        },
        other => ApiError::Persistence {
            operation: operation.to_string(),
            message: other.to_string(),
        },
    }
}
