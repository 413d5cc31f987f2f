// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use catalog::{CatalogCounts, RemovalScope, Selection};

use super::{create_linked_software, create_seeded_persistence, create_test_admin};
use crate::Persistence;

#[test]
fn test_empty_store_has_no_demo_data() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let state = persistence.demo_state().unwrap();

    assert!(!state.has_demo_data);
    assert_eq!(state.counts, CatalogCounts::default());
}

#[test]
fn test_admin_entries_without_demo_load_are_not_demo_data() {
    let mut persistence = create_seeded_persistence();
    create_linked_software(&mut persistence, "Real entry");

    let state = persistence.demo_state().unwrap();

    assert!(!state.has_demo_data);
    assert_eq!(state.counts.software, 1);
    assert_eq!(state.counts.categories, 6);
}

#[test]
fn test_demo_load_sets_demo_data() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence.load_demo(&create_test_admin()).unwrap();

    let state = persistence.demo_state().unwrap();

    assert!(state.has_demo_data);
    assert_eq!(state.counts.software, 7);
    assert_eq!(state.counts.target_groups, 4);
}

#[test]
fn test_demo_removal_clears_demo_data_despite_recorded_load() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence.load_demo(&create_test_admin()).unwrap();

    persistence
        .remove_catalog(RemovalScope::Catalog, &create_test_admin())
        .unwrap();

    assert!(!persistence.has_demo_data().unwrap());
}

#[test]
fn test_entries_added_after_a_removed_demo_count_as_demo_data() {
    // The audit trail keeps the earlier load, so any software satisfies
    // the conjunction again.
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence.load_demo(&create_test_admin()).unwrap();
    persistence
        .delete_software(&Selection::All, &create_test_admin())
        .unwrap();
    assert!(!persistence.has_demo_data().unwrap());

    create_linked_software(&mut persistence, "Later entry");

    assert!(persistence.has_demo_data().unwrap());
}
