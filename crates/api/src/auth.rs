// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity and authorization.
//!
//! Authentication itself happens upstream; this crate receives an actor id
//! and role and only decides whether that role may run an operation.

use catalog_audit::Actor;

use crate::error::AuthError;

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// May run every catalog lifecycle operation.
    Admin,
    /// Any other authenticated caller. Read-only.
    Member,
}

impl Role {
    /// Parses a role token. Anything other than `admin` is a member.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("admin") {
            Self::Admin
        } else {
            Self::Member
        }
    }
}

/// An authenticated caller with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Builds an actor from the raw identity supplied by the auth layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is missing or blank, or if it is the
    /// reserved system actor reference.
    pub fn from_identity(id: Option<&str>, role: Option<&str>) -> Result<Self, AuthError> {
        let id: &str = id.map(str::trim).filter(|id| !id.is_empty()).ok_or_else(|| {
            AuthError::AuthenticationFailed {
                reason: String::from("missing actor id"),
            }
        })?;
        if id.eq_ignore_ascii_case(Actor::SYSTEM_SENTINEL) {
            return Err(AuthError::AuthenticationFailed {
                reason: format!("actor id '{id}' is reserved"),
            });
        }
        Ok(Self::new(
            id.to_string(),
            role.map_or(Role::Member, Role::from_token),
        ))
    }

    /// The audit actor that mutations by this caller are attributed to.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::user(&self.id)
    }
}

/// Authorization service for the catalog lifecycle operations.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that an actor may run the admin-only `action`.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Member => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin"),
            }),
        }
    }
}
