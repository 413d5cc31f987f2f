// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dependency-ordered deletion over the catalog tables.
//!
//! The foreign-key graph is declared once in [`DEPENDENCIES`]. Every bulk
//! delete derives its statement order from it, so a table is only cleared
//! after every table referencing it has been cleared.

use serde::Serialize;

/// A table touched by bulk deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CatalogTable {
    SoftwareCategories,
    SoftwareTargetGroups,
    Software,
    TargetGroups,
    Categories,
    FooterLinks,
}

impl CatalogTable {
    /// The SQL table name.
    #[must_use]
    pub const fn table_name(&self) -> &'static str {
        match self {
            Self::SoftwareCategories => "software_categories",
            Self::SoftwareTargetGroups => "software_target_groups",
            Self::Software => "software",
            Self::TargetGroups => "target_groups",
            Self::Categories => "categories",
            Self::FooterLinks => "footer_links",
        }
    }
}

/// `(child, parent)` pairs: rows of `child` reference rows of `parent`.
pub const DEPENDENCIES: &[(CatalogTable, CatalogTable)] = &[
    (CatalogTable::SoftwareCategories, CatalogTable::Software),
    (CatalogTable::SoftwareCategories, CatalogTable::Categories),
    (CatalogTable::SoftwareTargetGroups, CatalogTable::Software),
    (CatalogTable::SoftwareTargetGroups, CatalogTable::TargetGroups),
];

/// Returns `tables` ordered children-before-parents.
///
/// Among tables that are ready at the same time, the input order is kept,
/// so the result is deterministic. Tables outside `tables` are ignored even
/// if they reference a table being cleared; the store will reject such a
/// delete.
#[must_use]
pub fn deletion_order(tables: &[CatalogTable]) -> Vec<CatalogTable> {
    let mut remaining: Vec<CatalogTable> = Vec::with_capacity(tables.len());
    for table in tables {
        if !remaining.contains(table) {
            remaining.push(*table);
        }
    }
    let mut ordered: Vec<CatalogTable> = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let ready: Option<usize> = remaining.iter().position(|candidate| {
            !DEPENDENCIES
                .iter()
                .any(|(child, parent)| parent == candidate && remaining.contains(child))
        });

        // The graph is acyclic, so there is always a ready table.
        let Some(index) = ready else {
            ordered.append(&mut remaining);
            break;
        };
        ordered.push(remaining.remove(index));
    }

    ordered
}

/// Rows removed per table by a bulk delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalSummary {
    pub category_links: usize,
    pub target_group_links: usize,
    pub software: usize,
    pub target_groups: usize,
    pub categories: usize,
    pub footer_links: usize,
}

impl RemovalSummary {
    /// Records the row count removed from `table`.
    pub const fn add(&mut self, table: CatalogTable, removed: usize) {
        match table {
            CatalogTable::SoftwareCategories => self.category_links += removed,
            CatalogTable::SoftwareTargetGroups => self.target_group_links += removed,
            CatalogTable::Software => self.software += removed,
            CatalogTable::TargetGroups => self.target_groups += removed,
            CatalogTable::Categories => self.categories += removed,
            CatalogTable::FooterLinks => self.footer_links += removed,
        }
    }

    /// Total rows removed across all tables.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.category_links
            + self.target_group_links
            + self.software
            + self.target_groups
            + self.categories
            + self.footer_links
    }
}
