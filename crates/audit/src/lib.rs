// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit types for the software catalog.
//!
//! Every bulk or destructive catalog mutation appends exactly one audit
//! entry. Entries are immutable once written: this crate exposes no way to
//! modify an [`AuditRecord`] and the persistence layer exposes no update or
//! delete path for them.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// Model name recorded for operations on software entries.
pub const MODEL_SOFTWARE: &str = "Software";

/// Model name recorded for operations spanning the whole catalog.
pub const MODEL_CATALOG: &str = "Catalog";

/// Errors raised when decoding stored audit values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// The stored action token is not a known action.
    UnknownAction(String),
}

impl std::fmt::Display for AuditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAction(action) => write!(f, "Unknown audit action: '{action}'"),
        }
    }
}

impl std::error::Error for AuditError {}

/// The kind of mutation an audit entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    /// Bulk creation: reference seeding or the demo load.
    Import,
    /// Deletion of an explicit set of entries.
    DeleteSelected,
    /// Deletion of every row in scope.
    DeleteAll,
}

impl AuditAction {
    /// The stored token for this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Import => "IMPORT",
            Self::DeleteSelected => "DELETE_SELECTED",
            Self::DeleteAll => "DELETE_ALL",
        }
    }
}

impl FromStr for AuditAction {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATE" => Ok(Self::Create),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            "IMPORT" => Ok(Self::Import),
            "DELETE_SELECTED" => Ok(Self::DeleteSelected),
            "DELETE_ALL" => Ok(Self::DeleteAll),
            _ => Err(AuditError::UnknownAction(s.to_string())),
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The entity that initiated a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Actor {
    /// An authenticated user, identified by the id the auth layer assigned.
    User(String),
    /// The application itself (startup seeding, maintenance).
    System,
}

impl Actor {
    /// Sentinel stored in place of a user id for system actions.
    pub const SYSTEM_SENTINEL: &'static str = "SYSTEM";

    /// Creates a user actor.
    #[must_use]
    pub fn user(id: &str) -> Self {
        Self::User(id.to_string())
    }

    /// The stored actor reference: the user id, or `SYSTEM`.
    #[must_use]
    pub fn reference(&self) -> &str {
        match self {
            Self::User(id) => id,
            Self::System => Self::SYSTEM_SENTINEL,
        }
    }

    /// Rebuilds an actor from its stored reference.
    #[must_use]
    pub fn from_reference(reference: &str) -> Self {
        if reference == Self::SYSTEM_SENTINEL {
            Self::System
        } else {
            Self::User(reference.to_string())
        }
    }
}

/// What an audit entry is about: a single row, or a reserved scope sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordScope {
    /// A single row, by id.
    Entity(String),
    /// Every row of the model.
    All,
    /// A system-wide operation.
    System,
    /// The catalog-resetting demo load.
    DemoLoad,
    /// Idempotent reference-data seeding.
    Seed,
}

impl RecordScope {
    /// Creates a scope for a single row id.
    #[must_use]
    pub fn entity(id: i64) -> Self {
        Self::Entity(id.to_string())
    }

    /// The stored record id: the row id or a sentinel.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Entity(id) => id,
            Self::All => "ALL",
            Self::System => "SYSTEM",
            Self::DemoLoad => "DEMO_LOAD",
            Self::Seed => "SEED",
        }
    }

    /// Rebuilds a scope from its stored record id.
    #[must_use]
    pub fn from_stored(record_id: &str) -> Self {
        match record_id {
            "ALL" => Self::All,
            "SYSTEM" => Self::System,
            "DEMO_LOAD" => Self::DemoLoad,
            "SEED" => Self::Seed,
            other => Self::Entity(other.to_string()),
        }
    }
}

impl std::fmt::Display for RecordScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An audit entry that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub action: AuditAction,
    /// The model (entity kind) affected, e.g. `Software`.
    pub model: String,
    pub record: RecordScope,
    /// Free-form change payload: counts, ids, messages.
    pub changes: Value,
    pub actor: Actor,
}

impl AuditEntry {
    /// Creates a new `AuditEntry`.
    ///
    /// # Arguments
    ///
    /// * `action` - The kind of mutation
    /// * `model` - The affected model name
    /// * `record` - The affected row or scope sentinel
    /// * `changes` - The change payload
    /// * `actor` - Who initiated the mutation
    #[must_use]
    pub fn new(
        action: AuditAction,
        model: &str,
        record: RecordScope,
        changes: Value,
        actor: Actor,
    ) -> Self {
        Self {
            action,
            model: model.to_string(),
            record,
            changes,
            actor,
        }
    }

    /// Whether this entry marks a demo dataset load.
    #[must_use]
    pub fn is_demo_load(&self) -> bool {
        self.action == AuditAction::Import
            && self.model == MODEL_SOFTWARE
            && self.record == RecordScope::DemoLoad
    }
}

/// An audit entry as stored, with its assigned id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub id: i64,
    pub entry: AuditEntry,
    /// Store timestamp (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub created_at: String,
}

impl AuditRecord {
    #[must_use]
    pub const fn new(id: i64, entry: AuditEntry, created_at: String) -> Self {
        Self {
            id,
            entry,
            created_at,
        }
    }
}
