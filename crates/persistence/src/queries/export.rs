// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flat software export.

use std::collections::HashMap;

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::{SoftwareExport, SoftwareRow};
use crate::diesel_schema::{
    categories, software, software_categories, software_target_groups, target_groups,
};
use crate::error::PersistenceError;

/// Groups `(software_id, name)` pairs by software id, keeping row order.
fn group_names(pairs: Vec<(i64, String)>) -> HashMap<i64, Vec<String>> {
    let mut grouped: HashMap<i64, Vec<String>> = HashMap::new();
    for (software_id, name) in pairs {
        grouped.entry(software_id).or_default().push(name);
    }
    grouped
}

/// Loads every software entry with its category and target group names,
/// ordered by id. Link names are sorted alphabetically.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be parsed.
pub fn export_software(conn: &mut SqliteConnection) -> Result<Vec<SoftwareExport>, PersistenceError> {
    let rows: Vec<SoftwareRow> = software::table
        .select(SoftwareRow::as_select())
        .order(software::id.asc())
        .load(conn)?;

    let category_pairs: Vec<(i64, String)> = software_categories::table
        .inner_join(categories::table)
        .select((software_categories::software_id, categories::name))
        .order((software_categories::software_id.asc(), categories::name.asc()))
        .load(conn)?;

    let target_group_pairs: Vec<(i64, String)> = software_target_groups::table
        .inner_join(target_groups::table)
        .select((software_target_groups::software_id, target_groups::name))
        .order((
            software_target_groups::software_id.asc(),
            target_groups::name.asc(),
        ))
        .load(conn)?;

    let mut category_names: HashMap<i64, Vec<String>> = group_names(category_pairs);
    let mut target_group_names: HashMap<i64, Vec<String>> = group_names(target_group_pairs);

    rows.into_iter()
        .map(|row| {
            let categories: Vec<String> = category_names.remove(&row.id).unwrap_or_default();
            let target_groups: Vec<String> =
                target_group_names.remove(&row.id).unwrap_or_default();
            SoftwareExport::from_row(row, categories, target_groups)
        })
        .collect()
}
