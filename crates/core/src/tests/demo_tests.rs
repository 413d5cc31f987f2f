// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CatalogCounts, DemoState, demo_dataset, has_demo_data};

fn counts(software: i64) -> CatalogCounts {
    CatalogCounts {
        software,
        categories: 6,
        target_groups: 4,
    }
}

#[test]
fn test_software_without_demo_record_is_not_demo_data() {
    assert!(!has_demo_data(&counts(5), false));
}

#[test]
fn test_software_with_demo_record_is_demo_data() {
    assert!(has_demo_data(&counts(5), true));
}

#[test]
fn test_empty_catalog_with_stray_demo_record_is_not_demo_data() {
    assert!(!has_demo_data(&counts(0), true));
}

#[test]
fn test_demo_state_keeps_counts() {
    let state: DemoState = DemoState::evaluate(counts(2), true);

    assert!(state.has_demo_data);
    assert_eq!(state.counts.software, 2);
    assert_eq!(state.counts.target_groups, 4);
}

#[test]
fn test_demo_state_serializes_camel_case() {
    let state: DemoState = DemoState::evaluate(counts(0), false);
    let value = serde_json::to_value(state).unwrap();

    assert_eq!(value["hasDemoData"], false);
    assert_eq!(value["counts"]["targetGroups"], 4);
}

#[test]
fn test_canonical_demo_dataset_is_valid() {
    let dataset = demo_dataset().unwrap();

    assert!(!dataset.software.is_empty());
    assert!(!dataset.categories.is_empty());
    assert!(!dataset.target_groups.is_empty());
}
