// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use catalog::Selection;
use catalog_audit::{AuditAction, RecordScope};
use serde_json::json;

use super::helpers::{create_persistence_with_software, create_test_admin};
use crate::{ApiError, batch_delete_software, parse_batch_delete_body};

#[test]
fn test_empty_body_selects_all() {
    assert_eq!(parse_batch_delete_body(b"").unwrap(), Selection::All);
    assert_eq!(parse_batch_delete_body(b"  \n").unwrap(), Selection::All);
    assert_eq!(parse_batch_delete_body(b"null").unwrap(), Selection::All);
}

#[test]
fn test_body_without_ids_selects_all() {
    assert_eq!(parse_batch_delete_body(b"{}").unwrap(), Selection::All);
    assert_eq!(
        parse_batch_delete_body(br#"{"ids": null}"#).unwrap(),
        Selection::All
    );
}

#[test]
fn test_empty_ids_select_nothing() {
    assert_eq!(
        parse_batch_delete_body(br#"{"ids": []}"#).unwrap(),
        Selection::Ids(Vec::new())
    );
}

#[test]
fn test_ids_are_deduplicated_in_order() {
    assert_eq!(
        parse_batch_delete_body(br#"{"ids": [3, 1, 3]}"#).unwrap(),
        Selection::Ids(vec![3, 1])
    );
}

#[test]
fn test_malformed_body_is_invalid_input() {
    let bodies: [&[u8]; 4] = [b"{", br#"{"ids": "all"}"#, br#"{"ids": [1.5]}"#, b"[1, 2]"];
    for body in bodies {
        assert!(
            matches!(
                parse_batch_delete_body(body),
                Err(ApiError::InvalidInput { .. })
            ),
            "body {:?} should be rejected",
            String::from_utf8_lossy(body)
        );
    }
}

#[test]
fn test_selective_delete_leaves_unselected_entries() {
    let (mut persistence, ids) = create_persistence_with_software();
    let body = json!({ "ids": [ids[0], ids[2]] }).to_string();

    let response =
        batch_delete_software(&mut persistence, &create_test_admin(), body.as_bytes()).unwrap();

    assert!(response.success);
    assert_eq!(response.deleted, 2);
    assert_eq!(persistence.list_software_ids().unwrap(), vec![ids[1]]);

    let deletes = persistence
        .list_audit_records_by_action(AuditAction::DeleteSelected)
        .unwrap();
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].entry.record, RecordScope::System);
    assert_eq!(deletes[0].entry.changes["ids"], json!([ids[0], ids[2]]));
}

#[test]
fn test_empty_ids_delete_nothing_and_record_once() {
    let (mut persistence, ids) = create_persistence_with_software();

    let response =
        batch_delete_software(&mut persistence, &create_test_admin(), br#"{"ids": []}"#).unwrap();

    assert_eq!(response.deleted, 0);
    assert_eq!(persistence.list_software_ids().unwrap(), ids);
    let deletes = persistence
        .list_audit_records_by_action(AuditAction::DeleteSelected)
        .unwrap();
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].entry.changes["count"], 0);
}

#[test]
fn test_absent_body_deletes_everything_with_one_record() {
    let (mut persistence, _) = create_persistence_with_software();

    let response =
        batch_delete_software(&mut persistence, &create_test_admin(), b"").unwrap();

    assert_eq!(response.deleted, 3);
    assert!(persistence.list_software_ids().unwrap().is_empty());
    let deletes = persistence
        .list_audit_records_by_action(AuditAction::DeleteAll)
        .unwrap();
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].entry.model, "Software");
    assert_eq!(deletes[0].entry.record, RecordScope::All);
}

#[test]
fn test_malformed_body_deletes_nothing() {
    let (mut persistence, ids) = create_persistence_with_software();
    let audits_before = persistence.count_audit_records().unwrap();

    let result = batch_delete_software(&mut persistence, &create_test_admin(), b"{not json");

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
    assert_eq!(persistence.list_software_ids().unwrap(), ids);
    assert_eq!(persistence.count_audit_records().unwrap(), audits_before);
}
