// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Idempotent reference-data seeding.
//!
//! Each candidate is inserted only if its natural key is not yet present:
//! categories and target groups by name, settings by key, footer links by
//! text. Existing rows are never updated.

use catalog::{SeedSummary, seed_audit_entry};
use catalog_audit::{Actor, AuditRecord};
use catalog_domain::{
    Category, FooterLink, ReferenceKind, Setting, TargetGroup, reference_categories,
    reference_footer_links, reference_settings, reference_target_groups, validate_category,
    validate_footer_link, validate_setting, validate_target_group, validate_unique_keys,
};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::data_models::{NewCategory, NewFooterLink, NewSetting, NewTargetGroup};
use crate::diesel_schema::{categories, footer_links, settings, target_groups};
use crate::error::PersistenceError;
use crate::mutations::audit::record_audit_entry;
use crate::queries::catalog::{
    category_exists, footer_link_exists, setting_exists, target_group_exists,
};

/// Inserts the categories whose names are not yet present.
///
/// # Errors
///
/// Returns an error if the dataset is invalid or an insert fails.
pub fn insert_categories(
    conn: &mut SqliteConnection,
    candidates: &[Category],
) -> Result<SeedSummary, PersistenceError> {
    validate_unique_keys("category", candidates.iter().map(|c| c.name.as_str()))?;
    let mut summary: SeedSummary = SeedSummary::new(ReferenceKind::Categories);

    for category in candidates {
        validate_category(category)?;
        if category_exists(conn, &category.name)? {
            debug!(name = %category.name, "Category exists, skipping");
            summary.skipped += 1;
            continue;
        }
        diesel::insert_into(categories::table)
            .values(NewCategory::from(category))
            .execute(conn)?;
        summary.inserted += 1;
    }

    Ok(summary)
}

/// Inserts the target groups whose names are not yet present.
///
/// # Errors
///
/// Returns an error if the dataset is invalid or an insert fails.
pub fn insert_target_groups(
    conn: &mut SqliteConnection,
    candidates: &[TargetGroup],
) -> Result<SeedSummary, PersistenceError> {
    validate_unique_keys("target group", candidates.iter().map(|t| t.name.as_str()))?;
    let mut summary: SeedSummary = SeedSummary::new(ReferenceKind::TargetGroups);

    for group in candidates {
        validate_target_group(group)?;
        if target_group_exists(conn, &group.name)? {
            debug!(name = %group.name, "Target group exists, skipping");
            summary.skipped += 1;
            continue;
        }
        diesel::insert_into(target_groups::table)
            .values(NewTargetGroup::from(group))
            .execute(conn)?;
        summary.inserted += 1;
    }

    Ok(summary)
}

/// Inserts the settings whose keys are not yet present.
///
/// # Errors
///
/// Returns an error if the dataset is invalid or an insert fails.
pub fn insert_settings(
    conn: &mut SqliteConnection,
    candidates: &[Setting],
) -> Result<SeedSummary, PersistenceError> {
    validate_unique_keys("setting", candidates.iter().map(|s| s.key.as_str()))?;
    let mut summary: SeedSummary = SeedSummary::new(ReferenceKind::Settings);

    for setting in candidates {
        validate_setting(setting)?;
        if setting_exists(conn, &setting.key)? {
            debug!(key = %setting.key, "Setting exists, skipping");
            summary.skipped += 1;
            continue;
        }
        diesel::insert_into(settings::table)
            .values(NewSetting::from(setting))
            .execute(conn)?;
        summary.inserted += 1;
    }

    Ok(summary)
}

/// Inserts the footer links whose texts are not yet present.
///
/// # Errors
///
/// Returns an error if the dataset is invalid or an insert fails.
pub fn insert_footer_links(
    conn: &mut SqliteConnection,
    candidates: &[FooterLink],
) -> Result<SeedSummary, PersistenceError> {
    validate_unique_keys("footer link", candidates.iter().map(|l| l.text.as_str()))?;
    let mut summary: SeedSummary = SeedSummary::new(ReferenceKind::FooterLinks);

    for link in candidates {
        validate_footer_link(link)?;
        if footer_link_exists(conn, &link.text)? {
            debug!(text = %link.text, "Footer link exists, skipping");
            summary.skipped += 1;
            continue;
        }
        diesel::insert_into(footer_links::table)
            .values(NewFooterLink::from(link))
            .execute(conn)?;
        summary.inserted += 1;
    }

    Ok(summary)
}

/// Inserts the canonical reference dataset of `kind`, skipping existing rows.
///
/// # Errors
///
/// Returns an error if the dataset is invalid or an insert fails.
pub fn insert_reference(
    conn: &mut SqliteConnection,
    kind: ReferenceKind,
) -> Result<SeedSummary, PersistenceError> {
    match kind {
        ReferenceKind::Categories => insert_categories(conn, &reference_categories()),
        ReferenceKind::TargetGroups => insert_target_groups(conn, &reference_target_groups()),
        ReferenceKind::Settings => insert_settings(conn, &reference_settings()),
        ReferenceKind::FooterLinks => insert_footer_links(conn, &reference_footer_links()),
    }
}

/// Seeds one reference kind in its own transaction.
///
/// Writes an `IMPORT` audit record when at least one row was inserted.
///
/// # Errors
///
/// Returns an error if any insert or the audit write fails; nothing is
/// committed in that case.
pub fn seed_reference(
    conn: &mut SqliteConnection,
    kind: ReferenceKind,
    actor: &Actor,
) -> Result<(SeedSummary, Option<AuditRecord>), PersistenceError> {
    let (summary, audit): (SeedSummary, Option<AuditRecord>) = conn
        .immediate_transaction::<_, PersistenceError, _>(|conn| {
            let summary: SeedSummary = insert_reference(conn, kind)?;
            let audit: Option<AuditRecord> = seed_audit_entry(&summary, actor.clone())
                .map(|entry| record_audit_entry(conn, &entry))
                .transpose()?;
            Ok((summary, audit))
        })?;

    info!(
        kind = %kind,
        inserted = summary.inserted,
        skipped = summary.skipped,
        "Seeded reference data"
    );

    Ok((summary, audit))
}
