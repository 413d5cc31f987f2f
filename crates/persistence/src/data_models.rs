// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use catalog_audit::{Actor, AuditAction, AuditEntry, AuditRecord, RecordScope};
use catalog_domain::{Category, CostTier, FooterLink, Setting, SoftwareEntry, TargetGroup};
use diesel::prelude::*;
use serde::Serialize;

use crate::diesel_schema::{
    audit_logs, categories, footer_links, settings, software, target_groups,
};
use crate::error::PersistenceError;

#[derive(Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategory<'a> {
    pub name: &'a str,
    pub localized_name: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl<'a> From<&'a Category> for NewCategory<'a> {
    fn from(category: &'a Category) -> Self {
        Self {
            name: &category.name,
            localized_name: category.localized_name.as_deref(),
            description: category.description.as_deref(),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = target_groups)]
pub struct NewTargetGroup<'a> {
    pub name: &'a str,
    pub localized_name: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl<'a> From<&'a TargetGroup> for NewTargetGroup<'a> {
    fn from(group: &'a TargetGroup) -> Self {
        Self {
            name: &group.name,
            localized_name: group.localized_name.as_deref(),
            description: group.description.as_deref(),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = settings)]
pub struct NewSetting<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub description: Option<&'a str>,
}

impl<'a> From<&'a Setting> for NewSetting<'a> {
    fn from(setting: &'a Setting) -> Self {
        Self {
            key: &setting.key,
            value: &setting.value,
            description: setting.description.as_deref(),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = footer_links)]
pub struct NewFooterLink<'a> {
    pub text: &'a str,
    pub url: &'a str,
    pub sort_order: i32,
    pub active: i32,
}

impl<'a> From<&'a FooterLink> for NewFooterLink<'a> {
    fn from(link: &'a FooterLink) -> Self {
        Self {
            text: &link.text,
            url: &link.url,
            sort_order: link.sort_order,
            active: i32::from(link.active),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = software)]
pub struct NewSoftware<'a> {
    pub name: &'a str,
    pub short_description: &'a str,
    pub description: Option<&'a str>,
    pub url: Option<&'a str>,
    pub types_json: String,
    pub cost: &'static str,
    pub available: i32,
    pub user_id: Option<&'a str>,
}

impl<'a> NewSoftware<'a> {
    /// Builds the insert row for `entry`, owned by `actor`.
    ///
    /// # Errors
    ///
    /// Returns an error if the type list cannot be serialized.
    pub fn from_entry(entry: &'a SoftwareEntry, actor: &'a Actor) -> Result<Self, PersistenceError> {
        Ok(Self {
            name: &entry.name,
            short_description: &entry.short_description,
            description: entry.description.as_deref(),
            url: entry.url.as_deref(),
            types_json: serde_json::to_string(&entry.types)?,
            cost: entry.cost.as_str(),
            available: i32::from(entry.available),
            user_id: Some(actor.reference()),
        })
    }
}

/// Diesel Queryable struct for software rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = software)]
pub struct SoftwareRow {
    pub id: i64,
    pub name: String,
    pub short_description: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub types_json: String,
    pub cost: String,
    pub available: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Diesel Queryable struct for audit log rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = audit_logs)]
pub struct AuditLogRow {
    pub id: i64,
    pub action: String,
    pub model: String,
    pub record_id: String,
    pub changes_json: String,
    pub user_id: String,
    pub created_at: String,
}

impl AuditLogRow {
    /// Parses the stored row back into an audit record.
    ///
    /// # Errors
    ///
    /// Returns an error if the action token or the change payload is malformed.
    pub fn into_record(self) -> Result<AuditRecord, PersistenceError> {
        let action: AuditAction = self.action.parse()?;
        let changes: serde_json::Value = serde_json::from_str(&self.changes_json)?;
        let entry: AuditEntry = AuditEntry::new(
            action,
            &self.model,
            RecordScope::from_stored(&self.record_id),
            changes,
            Actor::from_reference(&self.user_id),
        );
        Ok(AuditRecord::new(self.id, entry, self.created_at))
    }
}

/// One software entry with its resolved link names, as exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareExport {
    pub id: i64,
    pub name: String,
    pub short_description: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub types: Vec<String>,
    pub cost: CostTier,
    pub available: bool,
    pub categories: Vec<String>,
    pub target_groups: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl SoftwareExport {
    /// Builds an export row from a stored software row and its link names.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored types or cost tier are malformed.
    pub fn from_row(
        row: SoftwareRow,
        categories: Vec<String>,
        target_groups: Vec<String>,
    ) -> Result<Self, PersistenceError> {
        let types: Vec<String> = serde_json::from_str(&row.types_json)?;
        let cost: CostTier = row.cost.parse()?;
        Ok(Self {
            id: row.id,
            name: row.name,
            short_description: row.short_description,
            description: row.description,
            url: row.url,
            types,
            cost,
            available: row.available != 0,
            categories,
            target_groups,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
