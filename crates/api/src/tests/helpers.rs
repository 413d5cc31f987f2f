// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use catalog_domain::{CostTier, SoftwareEntry};
use catalog_persistence::Persistence;

use crate::{AuthenticatedActor, Role};

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin-123"), Role::Admin)
}

pub fn create_test_member() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("member-456"), Role::Member)
}

/// A store with reference data and three linked entries, returning their ids.
pub fn create_persistence_with_software() -> (Persistence, Vec<i64>) {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let admin = create_test_admin().to_audit_actor();
    persistence.seed_all_reference_data(&admin).unwrap();

    let ids: Vec<i64> = ["Alpha", "Beta", "Gamma"]
        .iter()
        .map(|name| {
            let entry = SoftwareEntry::new(name, "Fixture", CostTier::Paid)
                .with_categories(&["Office & Productivity"])
                .with_target_groups(&["Administration"]);
            persistence.create_software(&entry, &admin).unwrap()
        })
        .collect();

    (persistence, ids)
}
