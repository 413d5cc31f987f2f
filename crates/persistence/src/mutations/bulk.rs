// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk mutation engine.
//!
//! Every public operation here runs as one immediate transaction that
//! covers all of its ordered writes and its audit record. Deletes follow
//! [`catalog::deletion_order`], children before parents.

use std::collections::HashMap;

use catalog::{
    CatalogTable, DeletionSummary, DemoDataset, DemoLoadSummary, RemovalScope, RemovalSummary,
    SeedSummary, Selection, creation_audit_entry, deletion_audit_entry, demo_dataset,
    demo_load_audit_entry, deletion_order, removal_audit_entry,
};
use catalog_audit::{Actor, AuditRecord};
use catalog_domain::{SoftwareEntry, validate_software_entry};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::NewSoftware;
use crate::diesel_schema::{
    categories, footer_links, software, software_categories, software_target_groups,
    target_groups,
};
use crate::error::PersistenceError;
use crate::mutations::audit::record_audit_entry;
use crate::mutations::seed::{insert_categories, insert_target_groups};
use crate::queries::catalog::{category_ids_by_name, target_group_ids_by_name};

/// Tables touched when software rows are deleted.
const SOFTWARE_TABLES: [CatalogTable; 3] = [
    CatalogTable::Software,
    CatalogTable::SoftwareCategories,
    CatalogTable::SoftwareTargetGroups,
];

/// Deletes every row of `table`.
fn clear_table(conn: &mut SqliteConnection, table: CatalogTable) -> Result<usize, PersistenceError> {
    let removed: usize = match table {
        CatalogTable::SoftwareCategories => {
            diesel::delete(software_categories::table).execute(conn)?
        }
        CatalogTable::SoftwareTargetGroups => {
            diesel::delete(software_target_groups::table).execute(conn)?
        }
        CatalogTable::Software => diesel::delete(software::table).execute(conn)?,
        CatalogTable::TargetGroups => diesel::delete(target_groups::table).execute(conn)?,
        CatalogTable::Categories => diesel::delete(categories::table).execute(conn)?,
        CatalogTable::FooterLinks => diesel::delete(footer_links::table).execute(conn)?,
    };
    Ok(removed)
}

/// Deletes the rows of `table` that belong to the selected software.
fn delete_selected_rows(
    conn: &mut SqliteConnection,
    table: CatalogTable,
    selection: &Selection,
) -> Result<usize, PersistenceError> {
    let Selection::Ids(ids) = selection else {
        return clear_table(conn, table);
    };

    let removed: usize = match table {
        CatalogTable::SoftwareCategories => diesel::delete(
            software_categories::table.filter(software_categories::software_id.eq_any(ids)),
        )
        .execute(conn)?,
        CatalogTable::SoftwareTargetGroups => diesel::delete(
            software_target_groups::table.filter(software_target_groups::software_id.eq_any(ids)),
        )
        .execute(conn)?,
        CatalogTable::Software => {
            diesel::delete(software::table.filter(software::id.eq_any(ids))).execute(conn)?
        }
        other => {
            return Err(PersistenceError::InvalidData(format!(
                "Table '{}' is not keyed by software id",
                other.table_name()
            )));
        }
    };
    Ok(removed)
}

/// Clears every table in `scope`, children first.
///
/// Must run inside a transaction; a failure part-way leaves earlier
/// deletes for the caller to roll back.
///
/// # Errors
///
/// Returns an error if any delete fails.
pub fn clear_scope(
    conn: &mut SqliteConnection,
    scope: RemovalScope,
) -> Result<RemovalSummary, PersistenceError> {
    let mut summary: RemovalSummary = RemovalSummary::default();

    for table in deletion_order(scope.tables()) {
        let removed: usize = clear_table(conn, table)?;
        debug!(table = table.table_name(), removed, "Cleared catalog table");
        summary.add(table, removed);
    }

    Ok(summary)
}

/// Inserts one software entry and its join rows.
///
/// Link names are resolved through the supplied name-to-id maps. Repeated
/// names produce a single join row.
///
/// # Returns
///
/// The new software id and the number of join rows written.
///
/// # Errors
///
/// Returns an error if the entry is invalid, a link name is unknown, or an
/// insert fails.
pub fn insert_software_entry(
    conn: &mut SqliteConnection,
    entry: &SoftwareEntry,
    actor: &Actor,
    category_ids: &HashMap<String, i64>,
    target_group_ids: &HashMap<String, i64>,
) -> Result<(i64, usize), PersistenceError> {
    validate_software_entry(entry)?;

    let mut linked_categories: Vec<i64> = resolve_names("Category", &entry.categories, category_ids)?;
    linked_categories.sort_unstable();
    linked_categories.dedup();
    let mut linked_groups: Vec<i64> =
        resolve_names("Target group", &entry.target_groups, target_group_ids)?;
    linked_groups.sort_unstable();
    linked_groups.dedup();

    diesel::insert_into(software::table)
        .values(NewSoftware::from_entry(entry, actor)?)
        .execute(conn)?;
    let software_id: i64 = conn.get_last_insert_rowid()?;

    for category_id in &linked_categories {
        diesel::insert_into(software_categories::table)
            .values((
                software_categories::software_id.eq(software_id),
                software_categories::category_id.eq(category_id),
            ))
            .execute(conn)?;
    }
    for target_group_id in &linked_groups {
        diesel::insert_into(software_target_groups::table)
            .values((
                software_target_groups::software_id.eq(software_id),
                software_target_groups::target_group_id.eq(target_group_id),
            ))
            .execute(conn)?;
    }

    Ok((software_id, linked_categories.len() + linked_groups.len()))
}

fn resolve_names(
    entity: &str,
    names: &[String],
    ids: &HashMap<String, i64>,
) -> Result<Vec<i64>, PersistenceError> {
    names
        .iter()
        .map(|name| {
            ids.get(name)
                .copied()
                .ok_or_else(|| PersistenceError::NotFound(format!("{entity} '{name}'")))
        })
        .collect()
}

/// Creates a single software entry with a `CREATE` audit record.
///
/// # Errors
///
/// Returns an error if the entry is invalid, references an unknown
/// category or target group, or a write fails.
pub fn create_software(
    conn: &mut SqliteConnection,
    entry: &SoftwareEntry,
    actor: &Actor,
) -> Result<(i64, AuditRecord), PersistenceError> {
    let (software_id, audit): (i64, AuditRecord) = conn
        .immediate_transaction::<_, PersistenceError, _>(|conn| {
            let category_ids: HashMap<String, i64> = category_ids_by_name(conn)?;
            let target_group_ids: HashMap<String, i64> = target_group_ids_by_name(conn)?;
            let (software_id, _links): (i64, usize) =
                insert_software_entry(conn, entry, actor, &category_ids, &target_group_ids)?;
            let audit: AuditRecord = record_audit_entry(
                conn,
                &creation_audit_entry(software_id, entry, actor.clone()),
            )?;
            Ok((software_id, audit))
        })?;

    info!(software_id, name = %entry.name, "Created software entry");
    Ok((software_id, audit))
}

/// Removes every catalog row in `scope` and records `DELETE_ALL`.
///
/// # Errors
///
/// Returns an error if any delete or the audit write fails; nothing is
/// committed in that case.
pub fn remove_catalog(
    conn: &mut SqliteConnection,
    scope: RemovalScope,
    actor: &Actor,
) -> Result<(RemovalSummary, AuditRecord), PersistenceError> {
    let (summary, audit): (RemovalSummary, AuditRecord) = conn
        .immediate_transaction::<_, PersistenceError, _>(|conn| {
            let summary: RemovalSummary = clear_scope(conn, scope)?;
            let audit: AuditRecord =
                record_audit_entry(conn, &removal_audit_entry(&summary, scope, actor.clone()))?;
            Ok((summary, audit))
        })?;

    info!(
        scope = scope.as_str(),
        removed = summary.total(),
        audit_id = audit.id,
        "Removed catalog data"
    );
    Ok((summary, audit))
}

/// Deletes the selected software entries, join rows first.
///
/// Ids that do not exist are ignored. Exactly one audit record is written,
/// even when nothing matched.
///
/// # Errors
///
/// Returns an error if a delete or the audit write fails; nothing is
/// committed in that case.
pub fn delete_software(
    conn: &mut SqliteConnection,
    selection: &Selection,
    actor: &Actor,
) -> Result<(DeletionSummary, AuditRecord), PersistenceError> {
    let (summary, audit): (DeletionSummary, AuditRecord) = conn
        .immediate_transaction::<_, PersistenceError, _>(|conn| {
            let mut deleted: usize = 0;
            let mut links_removed: usize = 0;

            for table in deletion_order(&SOFTWARE_TABLES) {
                let removed: usize = delete_selected_rows(conn, table, selection)?;
                if table == CatalogTable::Software {
                    deleted += removed;
                } else {
                    links_removed += removed;
                }
            }

            let summary: DeletionSummary = DeletionSummary {
                selection: selection.clone(),
                deleted,
                links_removed,
            };
            let audit: AuditRecord =
                record_audit_entry(conn, &deletion_audit_entry(&summary, actor.clone()))?;
            Ok((summary, audit))
        })?;

    info!(
        all = selection.is_all(),
        deleted = summary.deleted,
        links_removed = summary.links_removed,
        audit_id = audit.id,
        "Deleted software entries"
    );
    Ok((summary, audit))
}

/// Resets the catalog and loads the demo dataset.
///
/// Clears the catalog scope, seeds categories and target groups, inserts
/// the demo software with its links and records `IMPORT / Software /
/// DEMO_LOAD`, all in one transaction.
///
/// # Errors
///
/// Returns an error if the dataset is invalid or any write fails; nothing
/// is committed in that case.
pub fn load_demo(
    conn: &mut SqliteConnection,
    actor: &Actor,
) -> Result<(DemoLoadSummary, AuditRecord), PersistenceError> {
    let dataset: DemoDataset = demo_dataset()?;

    let (summary, audit): (DemoLoadSummary, AuditRecord) = conn
        .immediate_transaction::<_, PersistenceError, _>(|conn| {
            let removed: RemovalSummary = clear_scope(conn, RemovalScope::Catalog)?;
            let categories: SeedSummary = insert_categories(conn, &dataset.categories)?;
            let target_groups: SeedSummary = insert_target_groups(conn, &dataset.target_groups)?;

            let category_ids: HashMap<String, i64> = category_ids_by_name(conn)?;
            let target_group_ids: HashMap<String, i64> = target_group_ids_by_name(conn)?;

            let mut summary: DemoLoadSummary = DemoLoadSummary {
                removed,
                categories_inserted: categories.inserted,
                target_groups_inserted: target_groups.inserted,
                ..DemoLoadSummary::default()
            };

            for entry in &dataset.software {
                let (_software_id, links): (i64, usize) =
                    insert_software_entry(conn, entry, actor, &category_ids, &target_group_ids)?;
                summary.software_inserted += 1;
                summary.links_inserted += links;
            }

            let audit: AuditRecord =
                record_audit_entry(conn, &demo_load_audit_entry(&summary, actor.clone()))?;
            Ok((summary, audit))
        })?;

    info!(
        software = summary.software_inserted,
        links = summary.links_inserted,
        removed = summary.removed.total(),
        audit_id = audit.id,
        "Loaded demo dataset"
    );
    Ok((summary, audit))
}
