// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use catalog::CatalogTable;
use catalog_persistence::Persistence;

use super::helpers::{create_persistence_with_software, create_test_admin};
use crate::{
    ApiError, DEFAULT_AUDIT_LIMIT, RemoveDemoRequest, check_demo, list_audit, load_demo,
    remove_demo, seed_all, seed_reference,
};

#[test]
fn test_check_demo_on_empty_store() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let response = check_demo(&mut persistence).unwrap();

    assert!(!response.has_demo_data);
    assert_eq!(response.counts.software, 0);
}

#[test]
fn test_check_demo_ignores_admin_entries_without_demo_load() {
    let (mut persistence, _) = create_persistence_with_software();

    let response = check_demo(&mut persistence).unwrap();

    assert!(!response.has_demo_data);
    assert_eq!(response.counts.software, 3);
    assert_eq!(response.counts.categories, 6);
    assert_eq!(response.counts.target_groups, 4);
}

#[test]
fn test_load_then_remove_round_trip() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();

    let loaded = load_demo(&mut persistence, &admin).unwrap();
    assert!(loaded.success);
    assert_eq!(loaded.inserted, 7);
    assert!(check_demo(&mut persistence).unwrap().has_demo_data);

    let removed = remove_demo(&mut persistence, &admin, &RemoveDemoRequest::default()).unwrap();
    assert!(removed.success);
    assert_eq!(removed.removed.software, 7);
    assert_eq!(removed.removed.footer_links, 0);

    let state = check_demo(&mut persistence).unwrap();
    assert!(!state.has_demo_data);
    assert_eq!(state.counts.categories, 0);
}

#[test]
fn test_remove_with_footer_links_clears_them() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();
    seed_all(&mut persistence, &admin).unwrap();

    let request = RemoveDemoRequest {
        include_footer_links: Some(true),
    };
    let removed = remove_demo(&mut persistence, &admin, &request).unwrap();

    assert_eq!(removed.removed.footer_links, 4);
    assert_eq!(persistence.count_rows(CatalogTable::FooterLinks).unwrap(), 0);
    assert_eq!(persistence.count_settings().unwrap(), 4);
}

#[test]
fn test_seed_reference_by_path_token() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin();

    let first = seed_reference(&mut persistence, &admin, "target-groups").unwrap();
    let second = seed_reference(&mut persistence, &admin, "target-groups").unwrap();

    assert_eq!(first.kind, "target-groups");
    assert_eq!(first.inserted, 4);
    assert_eq!(second.inserted, 0);
    assert_eq!(second.skipped, 4);
}

#[test]
fn test_seed_reference_rejects_unknown_kind() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = seed_reference(&mut persistence, &create_test_admin(), "planets");

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "kind"
    ));
}

#[test]
fn test_seed_all_reports_every_kind() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let response = seed_all(&mut persistence, &create_test_admin()).unwrap();

    let kinds: Vec<&str> = response.results.iter().map(|r| r.kind.as_str()).collect();
    assert_eq!(
        kinds,
        vec!["categories", "target-groups", "settings", "footer-links"]
    );
    assert_eq!(response.message, "Seeded 18 reference rows");
}

#[test]
fn test_list_audit_defaults_and_clamps() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    load_demo(&mut persistence, &create_test_admin()).unwrap();

    let default = list_audit(&mut persistence, None).unwrap();
    let clamped = list_audit(&mut persistence, Some(10_000)).unwrap();

    assert_eq!(default.records.len(), 1);
    assert!(default.records.len() <= DEFAULT_AUDIT_LIMIT);
    assert_eq!(clamped.records, default.records);
    assert_eq!(default.records[0].action, "IMPORT");
    assert_eq!(default.records[0].record_id, "DEMO_LOAD");
    assert_eq!(default.records[0].user_id, "admin-123");
}

#[test]
fn test_list_audit_rejects_zero_limit() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = list_audit(&mut persistence, Some(0));

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}
