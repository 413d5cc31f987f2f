// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use catalog_domain::ReferenceKind;
use std::collections::HashSet;

use crate::deletion::CatalogTable;

/// Which software entries a batch delete targets.
///
/// `Ids(vec![])` is a selective delete that matches nothing. It is never
/// widened to `All`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Only these ids. Ids that do not exist are ignored.
    Ids(Vec<i64>),
    /// Every software entry.
    All,
}

impl Selection {
    /// Builds a selection from an optional id list.
    ///
    /// An absent list means `All`; a present list (even an empty one) is
    /// selective. Duplicate ids are dropped, first occurrence kept.
    #[must_use]
    pub fn from_ids(ids: Option<Vec<i64>>) -> Self {
        ids.map_or(Self::All, |ids| {
            let mut seen: HashSet<i64> = HashSet::new();
            Self::Ids(ids.into_iter().filter(|id| seen.insert(*id)).collect())
        })
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Which tables a demo removal clears.
///
/// Settings are never cleared by a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalScope {
    /// Join tables, software, target groups and categories.
    #[default]
    Catalog,
    /// Everything in `Catalog`, plus footer links.
    CatalogAndFooter,
}

impl RemovalScope {
    /// The tables cleared by this scope, in no particular order.
    #[must_use]
    pub const fn tables(&self) -> &'static [CatalogTable] {
        match self {
            Self::Catalog => &[
                CatalogTable::SoftwareCategories,
                CatalogTable::SoftwareTargetGroups,
                CatalogTable::Software,
                CatalogTable::TargetGroups,
                CatalogTable::Categories,
            ],
            Self::CatalogAndFooter => &[
                CatalogTable::SoftwareCategories,
                CatalogTable::SoftwareTargetGroups,
                CatalogTable::Software,
                CatalogTable::TargetGroups,
                CatalogTable::Categories,
                CatalogTable::FooterLinks,
            ],
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::CatalogAndFooter => "catalog_and_footer",
        }
    }
}

/// A bulk lifecycle intent, as issued by an admin action.
///
/// Commands are data only; the persistence layer executes them inside a
/// single unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Idempotently insert the canonical reference dataset of one kind.
    SeedReference {
        kind: ReferenceKind,
    },
    /// Reset the catalog and load the demo software set.
    LoadDemo,
    /// Remove every catalog row in scope.
    RemoveDemo {
        scope: RemovalScope,
    },
    /// Delete selected (or all) software entries.
    DeleteSoftware {
        selection: Selection,
    },
}

impl Command {
    /// Short operation name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SeedReference { .. } => "seed_reference",
            Self::LoadDemo => "load_demo",
            Self::RemoveDemo { .. } => "remove_demo",
            Self::DeleteSoftware { .. } => "delete_software",
        }
    }
}
