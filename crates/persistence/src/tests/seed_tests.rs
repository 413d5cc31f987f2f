// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use catalog::{CatalogTable, SeedSummary};
use catalog_audit::{Actor, AuditAction, RecordScope};
use catalog_domain::ReferenceKind;

use super::{break_audit_writes, create_test_admin};
use crate::Persistence;

#[test]
fn test_seed_inserts_all_categories_on_empty_store() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let (summary, audit) = persistence
        .seed_reference(ReferenceKind::Categories, &create_test_admin())
        .unwrap();

    assert_eq!(summary.inserted, 6);
    assert_eq!(summary.skipped, 0);
    assert_eq!(persistence.count_rows(CatalogTable::Categories).unwrap(), 6);

    let audit = audit.unwrap();
    assert_eq!(audit.entry.action, AuditAction::Import);
    assert_eq!(audit.entry.model, "Category");
    assert_eq!(audit.entry.record, RecordScope::Seed);
    assert_eq!(audit.entry.actor, create_test_admin());
}

#[test]
fn test_seed_twice_is_idempotent() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence
        .seed_reference(ReferenceKind::TargetGroups, &Actor::System)
        .unwrap();
    let (second, audit) = persistence
        .seed_reference(ReferenceKind::TargetGroups, &Actor::System)
        .unwrap();

    assert_eq!(second.inserted, 0);
    assert_eq!(second.skipped, 4);
    assert!(audit.is_none(), "A seed that inserts nothing writes no audit");
    assert_eq!(persistence.count_rows(CatalogTable::TargetGroups).unwrap(), 4);
    assert_eq!(persistence.count_audit_records().unwrap(), 1);
}

#[test]
fn test_seed_skips_existing_natural_keys_only() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .seed_reference(ReferenceKind::Settings, &Actor::System)
        .unwrap();
    diesel::RunQueryDsl::execute(
        diesel::sql_query("DELETE FROM settings WHERE key = 'site_title'"),
        &mut persistence.conn,
    )
    .unwrap();

    let (summary, _) = persistence
        .seed_reference(ReferenceKind::Settings, &Actor::System)
        .unwrap();

    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.skipped, 3);
    assert_eq!(persistence.count_settings().unwrap(), 4);
}

#[test]
fn test_seed_all_reports_each_kind() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let summaries: Vec<SeedSummary> = persistence
        .seed_all_reference_data(&Actor::System)
        .unwrap();

    let kinds: Vec<ReferenceKind> = summaries.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, ReferenceKind::ALL.to_vec());
    assert!(summaries.iter().all(|s| s.inserted > 0 && s.skipped == 0));
    assert_eq!(persistence.count_rows(CatalogTable::FooterLinks).unwrap(), 4);
    assert_eq!(persistence.count_audit_records().unwrap(), 4);
}

#[test]
fn test_seed_rolls_back_when_audit_write_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    break_audit_writes(&mut persistence);

    let result = persistence.seed_reference(ReferenceKind::Categories, &Actor::System);

    assert!(result.is_err());
    assert_eq!(persistence.count_rows(CatalogTable::Categories).unwrap(), 0);
}
