// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the catalog lifecycle operations.
//!
//! Each mutating handler authorizes the caller, builds a core [`Command`],
//! runs it through [`Persistence::execute`] and shapes the outcome into a
//! response. Read handlers need no caller.

use catalog::{Command, DemoState, Outcome, RemovalScope, Selection};
use catalog_audit::{Actor, AuditRecord};
use catalog_domain::ReferenceKind;
use catalog_persistence::Persistence;
use tracing::{info, warn};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::export::{ExportFormat, ExportPayload, ExportRow, render_csv};
use crate::request_response::{
    AuditRecordInfo, BatchDeleteRequest, BatchDeleteResponse, DemoCheckResponse, ListAuditResponse,
    LoadDemoResponse, RemovalCountsInfo, RemoveDemoRequest, RemoveDemoResponse, SeedAllResponse,
    SeedResponse,
};

/// Audit records returned when no limit is given.
pub const DEFAULT_AUDIT_LIMIT: usize = 50;

/// Largest accepted audit limit; larger values are clamped.
pub const MAX_AUDIT_LIMIT: usize = 500;

/// Authorizes `actor` for an admin-only `action`, logging rejections.
fn require_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), ApiError> {
    AuthorizationService::authorize_admin(actor, action).map_err(|err| {
        warn!(actor = %actor.id, action, "Rejected non-admin caller");
        ApiError::from(err)
    })
}

/// Runs a command, translating store failures.
fn run(
    persistence: &mut Persistence,
    command: &Command,
    actor: &Actor,
) -> Result<Outcome, ApiError> {
    persistence
        .execute(command, actor)
        .map_err(|err| translate_persistence_error(command.name(), err))
}

fn unexpected_outcome(command: &Command) -> ApiError {
    ApiError::Internal {
        message: format!("Unexpected outcome for '{}'", command.name()),
    }
}

/// Reports whether a demo dataset is loaded, with the catalog counts.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn check_demo(persistence: &mut Persistence) -> Result<DemoCheckResponse, ApiError> {
    let state: DemoState = persistence
        .demo_state()
        .map_err(|err| translate_persistence_error("check_demo", err))?;

    Ok(DemoCheckResponse {
        has_demo_data: state.has_demo_data,
        counts: state.counts.into(),
    })
}

/// Resets the catalog and loads the demo dataset.
///
/// Only Admin actors may load the demo.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the load fails.
pub fn load_demo(
    persistence: &mut Persistence,
    authenticated_actor: &AuthenticatedActor,
) -> Result<LoadDemoResponse, ApiError> {
    require_admin(authenticated_actor, "load_demo")?;

    let command: Command = Command::LoadDemo;
    let outcome: Outcome = run(
        persistence,
        &command,
        &authenticated_actor.to_audit_actor(),
    )?;
    let Outcome::DemoLoaded { summary, .. } = outcome else {
        return Err(unexpected_outcome(&command));
    };

    Ok(LoadDemoResponse {
        message: format!(
            "Loaded {} demo software entries",
            summary.software_inserted
        ),
        success: true,
        inserted: summary.software_inserted,
        categories: summary.categories_inserted,
        target_groups: summary.target_groups_inserted,
        links: summary.links_inserted,
        removed: summary.removed.into(),
    })
}

/// Removes all catalog data in one unit of work.
///
/// Only Admin actors may remove catalog data.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the removal fails.
pub fn remove_demo(
    persistence: &mut Persistence,
    authenticated_actor: &AuthenticatedActor,
    request: &RemoveDemoRequest,
) -> Result<RemoveDemoResponse, ApiError> {
    require_admin(authenticated_actor, "remove_demo")?;

    let scope: RemovalScope = if request.include_footer_links.unwrap_or(false) {
        RemovalScope::CatalogAndFooter
    } else {
        RemovalScope::Catalog
    };
    let command: Command = Command::RemoveDemo { scope };
    let outcome: Outcome = run(
        persistence,
        &command,
        &authenticated_actor.to_audit_actor(),
    )?;
    let Outcome::CatalogRemoved { summary, .. } = outcome else {
        return Err(unexpected_outcome(&command));
    };

    let removed: RemovalCountsInfo = summary.into();
    Ok(RemoveDemoResponse {
        message: format!("Removed {} catalog rows", removed.total),
        success: true,
        removed,
    })
}

/// Seeds one reference kind, named by its path token.
///
/// Only Admin actors may seed.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the kind is unknown, or
/// the seed fails.
pub fn seed_reference(
    persistence: &mut Persistence,
    authenticated_actor: &AuthenticatedActor,
    kind: &str,
) -> Result<SeedResponse, ApiError> {
    require_admin(authenticated_actor, "seed_reference")?;

    let kind: ReferenceKind = kind.parse().map_err(translate_domain_error)?;
    let command: Command = Command::SeedReference { kind };
    let outcome: Outcome = run(
        persistence,
        &command,
        &authenticated_actor.to_audit_actor(),
    )?;
    let Outcome::Seeded { summary, .. } = outcome else {
        return Err(unexpected_outcome(&command));
    };

    Ok(summary.into())
}

/// Seeds every reference kind, each in its own unit of work.
///
/// Only Admin actors may seed.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or any kind fails.
pub fn seed_all(
    persistence: &mut Persistence,
    authenticated_actor: &AuthenticatedActor,
) -> Result<SeedAllResponse, ApiError> {
    require_admin(authenticated_actor, "seed_all")?;

    let actor: Actor = authenticated_actor.to_audit_actor();
    let mut results: Vec<SeedResponse> = Vec::with_capacity(ReferenceKind::ALL.len());
    for kind in ReferenceKind::ALL {
        let command: Command = Command::SeedReference { kind };
        let Outcome::Seeded { summary, .. } = run(persistence, &command, &actor)? else {
            return Err(unexpected_outcome(&command));
        };
        results.push(summary.into());
    }

    let inserted: usize = results.iter().map(|r| r.inserted).sum();
    Ok(SeedAllResponse {
        message: format!("Seeded {inserted} reference rows"),
        success: true,
        results,
    })
}

/// Parses a batch-delete body into a selection.
///
/// An empty body, a JSON `null`, or an object without `ids` selects every
/// entry. An `ids` array selects exactly those ids, even when empty.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON of the expected shape.
pub fn parse_batch_delete_body(body: &[u8]) -> Result<Selection, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Selection::All);
    }

    let request: Option<BatchDeleteRequest> =
        serde_json::from_slice(body).map_err(|err| ApiError::InvalidInput {
            field: String::from("ids"),
            message: format!("Malformed request body: {err}"),
        })?;

    Ok(Selection::from_ids(request.and_then(|request| request.ids)))
}

/// Deletes selected (or all) software entries.
///
/// Only Admin actors may delete.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the body is malformed,
/// or the delete fails.
pub fn batch_delete_software(
    persistence: &mut Persistence,
    authenticated_actor: &AuthenticatedActor,
    body: &[u8],
) -> Result<BatchDeleteResponse, ApiError> {
    require_admin(authenticated_actor, "batch_delete_software")?;

    let selection: Selection = parse_batch_delete_body(body)?;
    let command: Command = Command::DeleteSoftware { selection };
    let outcome: Outcome = run(
        persistence,
        &command,
        &authenticated_actor.to_audit_actor(),
    )?;
    let Outcome::SoftwareDeleted { summary, .. } = outcome else {
        return Err(unexpected_outcome(&command));
    };

    Ok(BatchDeleteResponse {
        success: true,
        deleted: summary.deleted,
    })
}

/// Exports the catalog as JSON rows or CSV text.
///
/// # Errors
///
/// Returns an error if the format is unknown or the store cannot be read.
pub fn export_catalog(
    persistence: &mut Persistence,
    format: Option<&str>,
) -> Result<ExportPayload, ApiError> {
    let format: ExportFormat = format.map_or(Ok(ExportFormat::default()), str::parse)?;

    let rows: Vec<ExportRow> = persistence
        .export_software()
        .map_err(|err| translate_persistence_error("export_catalog", err))?
        .into_iter()
        .map(ExportRow::from)
        .collect();

    info!(rows = rows.len(), ?format, "Exported catalog");

    match format {
        ExportFormat::Json => Ok(ExportPayload::Json(rows)),
        ExportFormat::Csv => render_csv(&rows).map(ExportPayload::Csv),
    }
}

/// Lists recent audit records, newest first.
///
/// # Errors
///
/// Returns an error if the limit is zero or the store cannot be read.
pub fn list_audit(
    persistence: &mut Persistence,
    limit: Option<usize>,
) -> Result<ListAuditResponse, ApiError> {
    let limit: usize = match limit {
        None => DEFAULT_AUDIT_LIMIT,
        Some(0) => {
            return Err(ApiError::InvalidInput {
                field: String::from("limit"),
                message: String::from("limit must be at least 1"),
            });
        }
        Some(limit) => limit.min(MAX_AUDIT_LIMIT),
    };

    let records: Vec<AuditRecord> = persistence
        .list_audit_records(limit)
        .map_err(|err| translate_persistence_error("list_audit", err))?;

    Ok(ListAuditResponse {
        records: records.into_iter().map(AuditRecordInfo::from).collect(),
    })
}
