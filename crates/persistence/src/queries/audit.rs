// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit trail queries.

use catalog_audit::{AuditAction, AuditRecord, MODEL_SOFTWARE, RecordScope};
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::SqliteConnection;
use num_traits::ToPrimitive;
use tracing::debug;

use crate::data_models::AuditLogRow;
use crate::diesel_schema::audit_logs;
use crate::error::PersistenceError;

/// Whether a demo-load record (`IMPORT / Software / DEMO_LOAD`) exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn demo_load_recorded(conn: &mut SqliteConnection) -> Result<bool, PersistenceError> {
    Ok(diesel::select(exists(
        audit_logs::table
            .filter(audit_logs::action.eq(AuditAction::Import.as_str()))
            .filter(audit_logs::model.eq(MODEL_SOFTWARE))
            .filter(audit_logs::record_id.eq(RecordScope::DemoLoad.as_str())),
    ))
    .get_result(conn)?)
}

/// Lists the most recent audit records, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be parsed.
pub fn list_audit_records(
    conn: &mut SqliteConnection,
    limit: usize,
) -> Result<Vec<AuditRecord>, PersistenceError> {
    let limit: i64 = limit.to_i64().unwrap_or(i64::MAX);
    debug!(limit, "Listing audit records");

    let rows: Vec<AuditLogRow> = audit_logs::table
        .select(AuditLogRow::as_select())
        .order(audit_logs::id.desc())
        .limit(limit)
        .load(conn)?;

    rows.into_iter().map(AuditLogRow::into_record).collect()
}

/// Lists every audit record with the given action, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be parsed.
pub fn list_audit_records_by_action(
    conn: &mut SqliteConnection,
    action: AuditAction,
) -> Result<Vec<AuditRecord>, PersistenceError> {
    let rows: Vec<AuditLogRow> = audit_logs::table
        .filter(audit_logs::action.eq(action.as_str()))
        .select(AuditLogRow::as_select())
        .order(audit_logs::id.asc())
        .load(conn)?;

    rows.into_iter().map(AuditLogRow::into_record).collect()
}

/// Counts all audit records.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_audit_records(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(audit_logs::table.count().get_result(conn)?)
}
