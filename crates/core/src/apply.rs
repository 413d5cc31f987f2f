// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit entries for bulk operations.
//!
//! Each function maps the summary of one executed operation to the single
//! audit entry that must be written in the same unit of work.

use catalog_audit::{Actor, AuditAction, AuditEntry, MODEL_CATALOG, MODEL_SOFTWARE, RecordScope};
use catalog_domain::SoftwareEntry;
use serde_json::json;

use crate::command::{RemovalScope, Selection};
use crate::deletion::RemovalSummary;
use crate::state::{DeletionSummary, DemoLoadSummary, SeedSummary};

/// Audit entry for a reference seed, or `None` if nothing was inserted.
#[must_use]
pub fn seed_audit_entry(summary: &SeedSummary, actor: Actor) -> Option<AuditEntry> {
    if summary.inserted == 0 {
        return None;
    }

    Some(AuditEntry::new(
        AuditAction::Import,
        summary.kind.model_name(),
        RecordScope::Seed,
        json!({
            "kind": summary.kind.as_str(),
            "inserted": summary.inserted,
            "skipped": summary.skipped,
        }),
        actor,
    ))
}

/// Audit entry for a single admin-created software entry.
#[must_use]
pub fn creation_audit_entry(id: i64, entry: &SoftwareEntry, actor: Actor) -> AuditEntry {
    AuditEntry::new(
        AuditAction::Create,
        MODEL_SOFTWARE,
        RecordScope::entity(id),
        json!({
            "name": entry.name,
            "cost": entry.cost.as_str(),
            "categories": entry.categories,
            "targetGroups": entry.target_groups,
        }),
        actor,
    )
}

/// Audit entry for the demo load: `IMPORT / Software / DEMO_LOAD`.
///
/// This is the record the demo-state check looks for.
#[must_use]
pub fn demo_load_audit_entry(summary: &DemoLoadSummary, actor: Actor) -> AuditEntry {
    AuditEntry::new(
        AuditAction::Import,
        MODEL_SOFTWARE,
        RecordScope::DemoLoad,
        json!({
            "message": "Demo dataset loaded",
            "count": summary.software_inserted,
            "categories": summary.categories_inserted,
            "targetGroups": summary.target_groups_inserted,
            "links": summary.links_inserted,
            "removed": summary.removed,
        }),
        actor,
    )
}

/// Audit entry for a catalog removal: `DELETE_ALL / Catalog / ALL`.
#[must_use]
pub fn removal_audit_entry(
    summary: &RemovalSummary,
    scope: RemovalScope,
    actor: Actor,
) -> AuditEntry {
    AuditEntry::new(
        AuditAction::DeleteAll,
        MODEL_CATALOG,
        RecordScope::All,
        json!({
            "message": "Catalog data removed",
            "scope": scope.as_str(),
            "count": summary.total(),
            "removed": summary,
        }),
        actor,
    )
}

/// Audit entry for a batch software delete.
///
/// Selective deletes record `DELETE_SELECTED` with the requested id list;
/// full deletes record `DELETE_ALL` with a message.
#[must_use]
pub fn deletion_audit_entry(summary: &DeletionSummary, actor: Actor) -> AuditEntry {
    match &summary.selection {
        Selection::Ids(ids) => AuditEntry::new(
            AuditAction::DeleteSelected,
            MODEL_SOFTWARE,
            RecordScope::System,
            json!({
                "ids": ids,
                "count": summary.deleted,
            }),
            actor,
        ),
        Selection::All => AuditEntry::new(
            AuditAction::DeleteAll,
            MODEL_SOFTWARE,
            RecordScope::All,
            json!({
                "message": "All software entries deleted",
                "count": summary.deleted,
            }),
            actor,
        ),
    }
}
