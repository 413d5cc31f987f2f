// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use catalog::CatalogTable;
use diesel::RunQueryDsl;

use super::{create_linked_software, create_seeded_persistence, create_test_admin};
use crate::{Persistence, PersistenceError};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_active() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = create_seeded_persistence();
    let mut db2 = Persistence::new_in_memory().unwrap();

    create_linked_software(&mut db1, "Zotero");

    assert_eq!(db1.count_rows(CatalogTable::Software).unwrap(), 1);
    assert_eq!(db2.count_rows(CatalogTable::Software).unwrap(), 0);
}

#[test]
fn test_connect_accepts_memory_url() {
    let mut persistence = Persistence::connect(":memory:").unwrap();
    assert_eq!(persistence.count_audit_records().unwrap(), 0);
}

#[test]
fn test_connect_rejects_empty_url() {
    let result = Persistence::connect("   ");
    assert!(matches!(
        result,
        Err(PersistenceError::InitializationError(_))
    ));
}

#[test]
fn test_connect_with_sqlite_scheme_opens_file_database() {
    let path = std::env::temp_dir().join(format!(
        "catalog_connect_test_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let url = format!("sqlite://{}", path.display());
        let mut persistence = Persistence::connect(&url).unwrap();
        persistence
            .seed_all_reference_data(&create_test_admin())
            .unwrap();
    }

    // Reopening must not re-run migrations and must see the committed rows.
    let mut reopened = Persistence::new_with_file(&path).unwrap();
    assert_eq!(reopened.count_rows(CatalogTable::Categories).unwrap(), 6);

    drop(reopened);
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}

#[test]
fn test_store_rejects_parent_delete_while_links_exist() {
    let mut persistence = create_seeded_persistence();
    create_linked_software(&mut persistence, "Zotero");

    let result = diesel::sql_query("DELETE FROM categories").execute(&mut persistence.conn);

    assert!(result.is_err());
    assert_eq!(persistence.count_rows(CatalogTable::Categories).unwrap(), 6);
}

#[test]
fn test_audit_log_rejects_updates_and_deletes() {
    let mut persistence = create_seeded_persistence();
    assert!(persistence.count_audit_records().unwrap() > 0);

    let update = diesel::sql_query("UPDATE audit_logs SET user_id = 'someone'")
        .execute(&mut persistence.conn);
    let delete = diesel::sql_query("DELETE FROM audit_logs").execute(&mut persistence.conn);

    assert!(update.is_err());
    assert!(delete.is_err());
}

#[test]
fn test_footer_link_text_is_unique_in_the_store() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let first = diesel::sql_query(
        "INSERT INTO footer_links (text, url) VALUES ('Imprint', 'https://example.org/imprint')",
    )
    .execute(&mut persistence.conn);
    let duplicate = diesel::sql_query(
        "INSERT INTO footer_links (text, url) VALUES ('Imprint', 'https://example.org/other')",
    )
    .execute(&mut persistence.conn);

    assert!(first.is_ok());
    assert!(duplicate.is_err());
    assert_eq!(persistence.count_rows(CatalogTable::FooterLinks).unwrap(), 1);
}
