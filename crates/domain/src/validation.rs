// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Category, FooterLink, Setting, SoftwareEntry, TargetGroup};
use std::collections::HashSet;

/// Maximum length of any name field.
const MAX_NAME_LENGTH: usize = 200;

/// Validates a display name.
///
/// # Errors
///
/// Returns an error if the name is blank or longer than 200 characters.
pub fn validate_name(entity: &'static str, name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName {
            entity,
            reason: String::from("Name cannot be empty"),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidName {
            entity,
            reason: format!("Name cannot exceed {MAX_NAME_LENGTH} characters"),
        });
    }

    Ok(())
}

/// Validates a link target.
///
/// Absolute `http`/`https`/`mailto` URLs and site-relative paths are accepted.
///
/// # Errors
///
/// Returns an error if the URL is empty or uses another scheme.
pub fn validate_url(url: &str) -> Result<(), DomainError> {
    let valid: bool = url.starts_with("https://")
        || url.starts_with("http://")
        || url.starts_with("mailto:")
        || (url.starts_with('/') && !url.starts_with("//"));

    if !valid || url.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidUrl(url.to_string()));
    }

    Ok(())
}

/// Validates a settings key: non-empty, no whitespace.
///
/// # Errors
///
/// Returns an error if the key is empty or contains whitespace.
pub fn validate_setting_key(key: &str) -> Result<(), DomainError> {
    if key.is_empty() || key.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidSettingKey(key.to_string()));
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the category name is invalid.
pub fn validate_category(category: &Category) -> Result<(), DomainError> {
    validate_name("category", &category.name)
}

/// # Errors
///
/// Returns an error if the target group name is invalid.
pub fn validate_target_group(target_group: &TargetGroup) -> Result<(), DomainError> {
    validate_name("target group", &target_group.name)
}

/// # Errors
///
/// Returns an error if the setting key is invalid.
pub fn validate_setting(setting: &Setting) -> Result<(), DomainError> {
    validate_setting_key(&setting.key)
}

/// # Errors
///
/// Returns an error if the link text or URL is invalid.
pub fn validate_footer_link(link: &FooterLink) -> Result<(), DomainError> {
    validate_name("footer link", &link.text)?;
    validate_url(&link.url)
}

/// Validates the standalone fields of a software entry.
///
/// Links to categories and target groups are checked separately by
/// [`validate_demo_dataset`], since they need the reference sets.
///
/// # Errors
///
/// Returns an error if the name or URL is invalid.
pub fn validate_software_entry(entry: &SoftwareEntry) -> Result<(), DomainError> {
    validate_name("software", &entry.name)?;
    if let Some(url) = &entry.url {
        validate_url(url)?;
    }
    Ok(())
}

/// Validates that no natural key appears twice in a dataset.
///
/// # Errors
///
/// Returns an error naming the first duplicated key.
pub fn validate_unique_keys<'a, I>(entity: &'static str, keys: I) -> Result<(), DomainError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(DomainError::DuplicateNaturalKey {
                entity,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Validates a complete demo dataset.
///
/// Every category and target group referenced by a software entry must be
/// present in the supplied reference sets, and the reference sets themselves
/// must have unique names.
///
/// # Errors
///
/// Returns an error if any entity is invalid, a name is duplicated, or a
/// link cannot be resolved.
pub fn validate_demo_dataset(
    categories: &[Category],
    target_groups: &[TargetGroup],
    software: &[SoftwareEntry],
) -> Result<(), DomainError> {
    for category in categories {
        validate_category(category)?;
    }
    for target_group in target_groups {
        validate_target_group(target_group)?;
    }
    validate_unique_keys("category", categories.iter().map(|c| c.name.as_str()))?;
    validate_unique_keys(
        "target group",
        target_groups.iter().map(|t| t.name.as_str()),
    )?;

    let category_names: HashSet<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    let target_group_names: HashSet<&str> =
        target_groups.iter().map(|t| t.name.as_str()).collect();

    for entry in software {
        validate_software_entry(entry)?;

        if let Some(missing) = entry
            .categories
            .iter()
            .find(|name| !category_names.contains(name.as_str()))
        {
            return Err(DomainError::UnknownLink {
                software: entry.name.clone(),
                entity: "category",
                name: missing.clone(),
            });
        }

        if let Some(missing) = entry
            .target_groups
            .iter()
            .find(|name| !target_group_names.contains(name.as_str()))
        {
            return Err(DomainError::UnknownLink {
                software: entry.name.clone(),
                entity: "target group",
                name: missing.clone(),
            });
        }
    }

    Ok(())
}
