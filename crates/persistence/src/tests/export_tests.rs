// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use catalog_domain::{CostTier, SoftwareEntry};

use super::{create_seeded_persistence, create_test_admin};
use crate::{Persistence, PersistenceError, SoftwareExport};

#[test]
fn test_export_of_empty_store_is_empty() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.export_software().unwrap().is_empty());
}

#[test]
fn test_export_resolves_link_names_sorted() {
    let mut persistence = create_seeded_persistence();
    let entry = SoftwareEntry::new("Moodle", "Learning platform", CostTier::Freemium)
        .with_url("https://moodle.org")
        .with_types(&["web", "mobile"])
        .with_categories(&["Learning Management", "Assessment"])
        .with_target_groups(&["Teachers", "Students"])
        .unavailable();
    let id = persistence
        .create_software(&entry, &create_test_admin())
        .unwrap();

    let rows: Vec<SoftwareExport> = persistence.export_software().unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.id, id);
    assert_eq!(row.url.as_deref(), Some("https://moodle.org"));
    assert_eq!(row.types, vec!["web", "mobile"]);
    assert_eq!(row.cost, CostTier::Freemium);
    assert!(!row.available);
    assert_eq!(row.categories, vec!["Assessment", "Learning Management"]);
    assert_eq!(row.target_groups, vec!["Students", "Teachers"]);
    assert!(!row.created_at.is_empty());
}

#[test]
fn test_export_is_ordered_by_id() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence.load_demo(&create_test_admin()).unwrap();

    let ids: Vec<i64> = persistence
        .export_software()
        .unwrap()
        .iter()
        .map(|row| row.id)
        .collect();

    assert_eq!(ids.len(), 7);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_create_software_rejects_unknown_category() {
    let mut persistence = create_seeded_persistence();
    let entry = SoftwareEntry::new("Orphan", "No such category", CostTier::Paid)
        .with_categories(&["Astrology"]);

    let result = persistence.create_software(&entry, &create_test_admin());

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
    assert!(persistence.export_software().unwrap().is_empty());
}
