// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod reference;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use reference::{
    demo_software, reference_categories, reference_footer_links, reference_settings,
    reference_target_groups,
};
pub use types::{
    Category, CostTier, FooterLink, ReferenceKind, Setting, SoftwareEntry, TargetGroup,
};
pub use validation::{
    validate_category, validate_demo_dataset, validate_footer_link, validate_name,
    validate_setting, validate_setting_key, validate_software_entry, validate_target_group,
    validate_unique_keys, validate_url,
};
