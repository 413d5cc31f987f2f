// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The pricing model of a software entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    /// No cost for any user.
    #[default]
    Free,
    /// Free base tier with paid upgrades.
    Freemium,
    /// Paid per user or per seat.
    Paid,
    /// Covered by an institutional license.
    License,
}

impl CostTier {
    /// Converts this tier to its stored token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Freemium => "freemium",
            Self::Paid => "paid",
            Self::License => "license",
        }
    }
}

impl FromStr for CostTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "freemium" => Ok(Self::Freemium),
            "paid" => Ok(Self::Paid),
            "license" => Ok(Self::License),
            _ => Err(DomainError::InvalidCostTier(s.to_string())),
        }
    }
}

impl std::fmt::Display for CostTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kinds of reference data that can be seeded idempotently.
///
/// Each kind has a natural unique key used for skip-if-exists seeding:
/// `name` for categories and target groups, `key` for settings and
/// `text` for footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceKind {
    Categories,
    TargetGroups,
    Settings,
    FooterLinks,
}

impl ReferenceKind {
    /// All reference kinds, in seeding order.
    pub const ALL: [Self; 4] = [
        Self::Categories,
        Self::TargetGroups,
        Self::Settings,
        Self::FooterLinks,
    ];

    /// The URL-friendly token for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::TargetGroups => "target-groups",
            Self::Settings => "settings",
            Self::FooterLinks => "footer-links",
        }
    }

    /// The model name recorded in audit entries for this kind.
    #[must_use]
    pub const fn model_name(&self) -> &'static str {
        match self {
            Self::Categories => "Category",
            Self::TargetGroups => "TargetGroup",
            Self::Settings => "Settings",
            Self::FooterLinks => "FooterLink",
        }
    }
}

impl FromStr for ReferenceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "categories" | "category" => Ok(Self::Categories),
            "target-groups" | "target_groups" | "targetGroups" => Ok(Self::TargetGroups),
            "settings" => Ok(Self::Settings),
            "footer-links" | "footer_links" | "footerLinks" => Ok(Self::FooterLinks),
            _ => Err(DomainError::InvalidReferenceKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A software category. `name` is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Optional translated display name.
    pub localized_name: Option<String>,
    pub description: Option<String>,
}

impl Category {
    #[must_use]
    pub fn new(name: &str, localized_name: Option<&str>, description: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            localized_name: localized_name.map(str::to_string),
            description: description.map(str::to_string),
        }
    }
}

/// An audience a software entry is aimed at. `name` is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetGroup {
    pub name: String,
    /// Optional translated display name.
    pub localized_name: Option<String>,
    pub description: Option<String>,
}

impl TargetGroup {
    #[must_use]
    pub fn new(name: &str, localized_name: Option<&str>, description: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            localized_name: localized_name.map(str::to_string),
            description: description.map(str::to_string),
        }
    }
}

/// A process-wide configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
}

impl Setting {
    #[must_use]
    pub fn new(key: &str, value: &str, description: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            description: description.map(str::to_string),
        }
    }
}

/// A link rendered in the site footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub text: String,
    pub url: String,
    /// Ascending display order.
    pub sort_order: i32,
    pub active: bool,
}

impl FooterLink {
    #[must_use]
    pub fn new(text: &str, url: &str, sort_order: i32, active: bool) -> Self {
        Self {
            text: text.to_string(),
            url: url.to_string(),
            sort_order,
            active,
        }
    }
}

/// A software entry ready to be written to the catalog.
///
/// Categories and target groups are referenced by their unique names and
/// resolved to ids when the entry is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareEntry {
    pub name: String,
    pub short_description: String,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Ordered type tags (e.g. "web", "desktop").
    pub types: Vec<String>,
    pub cost: CostTier,
    pub available: bool,
    pub categories: Vec<String>,
    pub target_groups: Vec<String>,
}

impl SoftwareEntry {
    /// Creates an available entry without links, types or long description.
    #[must_use]
    pub fn new(name: &str, short_description: &str, cost: CostTier) -> Self {
        Self {
            name: name.to_string(),
            short_description: short_description.to_string(),
            description: None,
            url: None,
            types: Vec::new(),
            cost,
            available: true,
            categories: Vec::new(),
            target_groups: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    #[must_use]
    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| (*t).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_categories(mut self, categories: &[&str]) -> Self {
        self.categories = categories.iter().map(|c| (*c).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_target_groups(mut self, target_groups: &[&str]) -> Self {
        self.target_groups = target_groups.iter().map(|t| (*t).to_string()).collect();
        self
    }

    #[must_use]
    pub const fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}
