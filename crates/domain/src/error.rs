// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A name field is empty or invalid.
    InvalidName {
        /// The kind of entity carrying the name.
        entity: &'static str,
        /// A description of the problem.
        reason: String,
    },
    /// A URL field is not an absolute http(s) or mailto URL.
    InvalidUrl(String),
    /// The cost tier token is not recognized.
    InvalidCostTier(String),
    /// The reference kind token is not recognized.
    InvalidReferenceKind(String),
    /// A settings key is empty or contains whitespace.
    InvalidSettingKey(String),
    /// A reference dataset contains the same natural key twice.
    DuplicateNaturalKey {
        /// The kind of entity.
        entity: &'static str,
        /// The duplicated key value.
        key: String,
    },
    /// A demo entry links to a category or target group that is not part
    /// of the reference dataset.
    UnknownLink {
        /// The software entry carrying the link.
        software: String,
        /// The kind of entity being linked.
        entity: &'static str,
        /// The unresolved name.
        name: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName { entity, reason } => {
                write!(f, "Invalid {entity} name: {reason}")
            }
            Self::InvalidUrl(url) => write!(f, "Invalid URL: '{url}'"),
            Self::InvalidCostTier(tier) => write!(
                f,
                "Invalid cost tier: '{tier}'. Must be one of free, freemium, paid, license"
            ),
            Self::InvalidReferenceKind(kind) => write!(
                f,
                "Invalid reference kind: '{kind}'. Must be one of categories, target-groups, settings, footer-links"
            ),
            Self::InvalidSettingKey(key) => write!(f, "Invalid setting key: '{key}'"),
            Self::DuplicateNaturalKey { entity, key } => {
                write!(f, "Duplicate {entity} '{key}' in reference dataset")
            }
            Self::UnknownLink {
                software,
                entity,
                name,
            } => write!(
                f,
                "Software '{software}' links to unknown {entity} '{name}'"
            ),
        }
    }
}

impl std::error::Error for DomainError {}
