// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod audit_tests;
mod demo_state_tests;
mod export_tests;
mod initialization_tests;
mod seed_tests;

use catalog_audit::Actor;
use catalog_domain::{CostTier, SoftwareEntry};
use diesel::RunQueryDsl;

use crate::Persistence;

pub fn create_test_admin() -> Actor {
    Actor::user("admin-1")
}

/// A store with all reference kinds seeded.
pub fn create_seeded_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .seed_all_reference_data(&Actor::System)
        .unwrap();
    persistence
}

/// Adds a software entry linked to one category and one target group.
pub fn create_linked_software(persistence: &mut Persistence, name: &str) -> i64 {
    let entry: SoftwareEntry = SoftwareEntry::new(name, "Test entry", CostTier::Free)
        .with_categories(&["Collaboration"])
        .with_target_groups(&["Students"]);
    persistence
        .create_software(&entry, &create_test_admin())
        .unwrap()
}

/// Makes every insert into `audit_logs` fail.
pub fn break_audit_writes(persistence: &mut Persistence) {
    diesel::sql_query(
        "CREATE TRIGGER audit_logs_fail_insert BEFORE INSERT ON audit_logs \
         BEGIN SELECT RAISE(ABORT, 'audit store unavailable'); END",
    )
    .execute(&mut persistence.conn)
    .unwrap();
}

/// Makes every delete from `table` fail.
pub fn break_deletes_on(persistence: &mut Persistence, table: &str) {
    diesel::sql_query(format!(
        "CREATE TRIGGER {table}_fail_delete BEFORE DELETE ON {table} \
         BEGIN SELECT RAISE(ABORT, '{table} store unavailable'); END"
    ))
    .execute(&mut persistence.conn)
    .unwrap();
}
