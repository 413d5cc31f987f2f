// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use catalog_audit::{Actor, AuditAction, AuditEntry, AuditRecord, RecordScope};
use serde_json::json;

use super::{break_audit_writes, create_test_admin};
use crate::{Persistence, PersistenceError};

fn create_entry(action: AuditAction, record: RecordScope) -> AuditEntry {
    AuditEntry::new(
        action,
        "Software",
        record,
        json!({ "count": 3, "ids": [1, 2, 3] }),
        create_test_admin(),
    )
}

#[test]
fn test_record_returns_stored_entry_with_id_and_timestamp() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let entry = create_entry(AuditAction::DeleteSelected, RecordScope::System);

    let record: AuditRecord = persistence.record_audit(&entry).unwrap();

    assert!(record.id > 0);
    assert_eq!(record.entry, entry);
    assert!(!record.created_at.is_empty());
}

#[test]
fn test_stored_record_round_trips_through_the_store() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let entry = AuditEntry::new(
        AuditAction::Create,
        "Software",
        RecordScope::entity(17),
        json!({ "name": "Moodle" }),
        Actor::System,
    );

    let written = persistence.record_audit(&entry).unwrap();
    let listed = persistence.list_audit_records(10).unwrap();

    assert_eq!(listed, vec![written]);
    assert_eq!(listed[0].entry.actor, Actor::System);
    assert_eq!(listed[0].entry.record, RecordScope::Entity(String::from("17")));
}

#[test]
fn test_list_is_newest_first_and_limited() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    for action in [
        AuditAction::Create,
        AuditAction::Update,
        AuditAction::Delete,
    ] {
        persistence
            .record_audit(&create_entry(action, RecordScope::entity(1)))
            .unwrap();
    }

    let listed = persistence.list_audit_records(2).unwrap();

    let actions: Vec<AuditAction> = listed.iter().map(|r| r.entry.action).collect();
    assert_eq!(actions, vec![AuditAction::Delete, AuditAction::Update]);
}

#[test]
fn test_list_by_action_filters() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .record_audit(&create_entry(AuditAction::DeleteAll, RecordScope::All))
        .unwrap();
    persistence
        .record_audit(&create_entry(AuditAction::DeleteSelected, RecordScope::System))
        .unwrap();

    let listed = persistence
        .list_audit_records_by_action(AuditAction::DeleteAll)
        .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].entry.record, RecordScope::All);
}

#[test]
fn test_failed_audit_write_is_an_error() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    break_audit_writes(&mut persistence);

    let result = persistence.record_audit(&create_entry(AuditAction::Create, RecordScope::All));

    assert!(matches!(result, Err(PersistenceError::DatabaseError(_))));
    assert_eq!(persistence.count_audit_records().unwrap(), 0);
}
