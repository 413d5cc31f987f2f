// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit recorder.
//!
//! Appends one row to `audit_logs` per call. It never reads existing rows,
//! and the table itself rejects updates and deletes. Callers run it inside
//! the same transaction as the mutation it describes, so a failed write
//! rolls that mutation back.

use catalog_audit::{AuditEntry, AuditRecord};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::audit_logs;
use crate::error::PersistenceError;

/// Persists an audit entry.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `entry` - The entry to append
///
/// # Returns
///
/// The stored record, with its assigned id and store timestamp.
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
pub fn record_audit_entry(
    conn: &mut SqliteConnection,
    entry: &AuditEntry,
) -> Result<AuditRecord, PersistenceError> {
    let changes_json: String = serde_json::to_string(&entry.changes)?;

    let (id, created_at): (i64, String) = diesel::insert_into(audit_logs::table)
        .values((
            audit_logs::action.eq(entry.action.as_str()),
            audit_logs::model.eq(&entry.model),
            audit_logs::record_id.eq(entry.record.as_str()),
            audit_logs::changes_json.eq(&changes_json),
            audit_logs::user_id.eq(entry.actor.reference()),
        ))
        .returning((audit_logs::id, audit_logs::created_at))
        .get_result(conn)?;

    debug!(
        audit_id = id,
        action = %entry.action,
        model = %entry.model,
        record = %entry.record,
        "Recorded audit entry"
    );

    Ok(AuditRecord::new(id, entry.clone(), created_at))
}
