// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use catalog_audit::AuditRecord;
use catalog_domain::ReferenceKind;
use serde::Serialize;

use crate::command::{RemovalScope, Selection};
use crate::deletion::RemovalSummary;

/// Result of seeding one reference kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub kind: ReferenceKind,
    /// Rows written.
    pub inserted: usize,
    /// Candidates whose natural key already existed.
    pub skipped: usize,
}

impl SeedSummary {
    #[must_use]
    pub const fn new(kind: ReferenceKind) -> Self {
        Self {
            kind,
            inserted: 0,
            skipped: 0,
        }
    }
}

/// Result of the catalog-resetting demo load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoLoadSummary {
    /// Rows cleared before loading.
    pub removed: RemovalSummary,
    pub categories_inserted: usize,
    pub target_groups_inserted: usize,
    pub software_inserted: usize,
    pub links_inserted: usize,
}

/// Result of a batch software delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionSummary {
    pub selection: Selection,
    /// Software rows actually removed; may be lower than the number of
    /// requested ids.
    pub deleted: usize,
    /// Join rows removed alongside.
    pub links_removed: usize,
}

/// The outcome of an executed [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Seeded {
        summary: SeedSummary,
        /// Absent when nothing was inserted.
        audit: Option<AuditRecord>,
    },
    DemoLoaded {
        summary: DemoLoadSummary,
        audit: AuditRecord,
    },
    CatalogRemoved {
        scope: RemovalScope,
        summary: RemovalSummary,
        audit: AuditRecord,
    },
    SoftwareDeleted {
        summary: DeletionSummary,
        audit: AuditRecord,
    },
}

impl Outcome {
    /// The audit record written by the operation, if any.
    #[must_use]
    pub const fn audit(&self) -> Option<&AuditRecord> {
        match self {
            Self::Seeded { audit, .. } => audit.as_ref(),
            Self::DemoLoaded { audit, .. }
            | Self::CatalogRemoved { audit, .. }
            | Self::SoftwareDeleted { audit, .. } => Some(audit),
        }
    }
}
