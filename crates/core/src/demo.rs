// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use catalog_domain::{
    Category, SoftwareEntry, TargetGroup, demo_software, reference_categories,
    reference_target_groups, validate_demo_dataset,
};
use serde::Serialize;

use crate::error::CoreError;

/// Current row counts of the catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCounts {
    pub software: i64,
    pub categories: i64,
    pub target_groups: i64,
}

/// The demo-state answer together with the counts it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoState {
    pub has_demo_data: bool,
    pub counts: CatalogCounts,
}

impl DemoState {
    #[must_use]
    pub const fn evaluate(counts: CatalogCounts, demo_load_recorded: bool) -> Self {
        Self {
            has_demo_data: has_demo_data(&counts, demo_load_recorded),
            counts,
        }
    }
}

/// Decides whether a demo dataset is currently loaded.
///
/// True only when the catalog holds software **and** the audit trail holds a
/// demo-load record. Neither signal alone is enough: admins may add real
/// entries without a demo load, and a demo load may since have been removed.
#[must_use]
pub const fn has_demo_data(counts: &CatalogCounts, demo_load_recorded: bool) -> bool {
    counts.software > 0 && demo_load_recorded
}

/// The validated dataset written by the demo load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoDataset {
    pub categories: Vec<Category>,
    pub target_groups: Vec<TargetGroup>,
    pub software: Vec<SoftwareEntry>,
}

/// Builds the canonical demo dataset and validates its links.
///
/// # Errors
///
/// Returns an error if the dataset is internally inconsistent.
pub fn demo_dataset() -> Result<DemoDataset, CoreError> {
    let dataset: DemoDataset = DemoDataset {
        categories: reference_categories(),
        target_groups: reference_target_groups(),
        software: demo_software(),
    };

    validate_demo_dataset(
        &dataset.categories,
        &dataset.target_groups,
        &dataset.software,
    )?;

    Ok(dataset)
}
