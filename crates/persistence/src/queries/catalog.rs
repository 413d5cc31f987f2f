// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog table queries.

use std::collections::HashMap;

use catalog::{CatalogCounts, CatalogTable};
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::diesel_schema::{
    categories, footer_links, settings, software, software_categories, software_target_groups,
    target_groups,
};
use crate::error::PersistenceError;

/// Counts software, categories and target groups.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_catalog(conn: &mut SqliteConnection) -> Result<CatalogCounts, PersistenceError> {
    Ok(CatalogCounts {
        software: software::table.count().get_result(conn)?,
        categories: categories::table.count().get_result(conn)?,
        target_groups: target_groups::table.count().get_result(conn)?,
    })
}

/// Counts the rows currently in `table`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_rows(conn: &mut SqliteConnection, table: CatalogTable) -> Result<i64, PersistenceError> {
    let count: i64 = match table {
        CatalogTable::SoftwareCategories => software_categories::table.count().get_result(conn)?,
        CatalogTable::SoftwareTargetGroups => {
            software_target_groups::table.count().get_result(conn)?
        }
        CatalogTable::Software => software::table.count().get_result(conn)?,
        CatalogTable::TargetGroups => target_groups::table.count().get_result(conn)?,
        CatalogTable::Categories => categories::table.count().get_result(conn)?,
        CatalogTable::FooterLinks => footer_links::table.count().get_result(conn)?,
    };
    Ok(count)
}

/// Counts the settings rows. Settings are outside every removal scope.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_settings(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(settings::table.count().get_result(conn)?)
}

/// Counts join rows whose software, category or target group is missing.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_orphaned_links(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    let without_software: i64 = software_categories::table
        .left_join(software::table)
        .filter(software::id.nullable().is_null())
        .count()
        .get_result(conn)?;
    let without_category: i64 = software_categories::table
        .left_join(categories::table)
        .filter(categories::id.nullable().is_null())
        .count()
        .get_result(conn)?;
    let group_without_software: i64 = software_target_groups::table
        .left_join(software::table)
        .filter(software::id.nullable().is_null())
        .count()
        .get_result(conn)?;
    let without_target_group: i64 = software_target_groups::table
        .left_join(target_groups::table)
        .filter(target_groups::id.nullable().is_null())
        .count()
        .get_result(conn)?;

    Ok(without_software + without_category + group_without_software + without_target_group)
}

/// Whether a category with this name exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn category_exists(conn: &mut SqliteConnection, name: &str) -> Result<bool, PersistenceError> {
    Ok(diesel::select(exists(categories::table.filter(categories::name.eq(name)))).get_result(conn)?)
}

/// Whether a target group with this name exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn target_group_exists(conn: &mut SqliteConnection, name: &str) -> Result<bool, PersistenceError> {
    Ok(
        diesel::select(exists(target_groups::table.filter(target_groups::name.eq(name))))
            .get_result(conn)?,
    )
}

/// Whether a setting with this key exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn setting_exists(conn: &mut SqliteConnection, key: &str) -> Result<bool, PersistenceError> {
    Ok(diesel::select(exists(settings::table.filter(settings::key.eq(key)))).get_result(conn)?)
}

/// Whether a footer link with this text exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn footer_link_exists(conn: &mut SqliteConnection, text: &str) -> Result<bool, PersistenceError> {
    Ok(
        diesel::select(exists(footer_links::table.filter(footer_links::text.eq(text))))
            .get_result(conn)?,
    )
}

/// Maps category names to ids.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn category_ids_by_name(
    conn: &mut SqliteConnection,
) -> Result<HashMap<String, i64>, PersistenceError> {
    let rows: Vec<(String, i64)> = categories::table
        .select((categories::name, categories::id))
        .load(conn)?;
    Ok(rows.into_iter().collect())
}

/// Maps target group names to ids.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn target_group_ids_by_name(
    conn: &mut SqliteConnection,
) -> Result<HashMap<String, i64>, PersistenceError> {
    let rows: Vec<(String, i64)> = target_groups::table
        .select((target_groups::name, target_groups::id))
        .load(conn)?;
    Ok(rows.into_iter().collect())
}

/// Lists the ids of all software entries, ascending.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_software_ids(conn: &mut SqliteConnection) -> Result<Vec<i64>, PersistenceError> {
    Ok(software::table
        .select(software::id)
        .order(software::id.asc())
        .load(conn)?)
}
