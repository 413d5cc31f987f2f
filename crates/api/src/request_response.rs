// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are camelCase on the wire.

use catalog::{CatalogCounts, RemovalSummary, SeedSummary};
use catalog_audit::AuditRecord;

/// Row counts reported alongside the demo-state answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCountsInfo {
    pub software: i64,
    pub categories: i64,
    pub target_groups: i64,
}

impl From<CatalogCounts> for CatalogCountsInfo {
    fn from(counts: CatalogCounts) -> Self {
        Self {
            software: counts.software,
            categories: counts.categories,
            target_groups: counts.target_groups,
        }
    }
}

/// API response for the demo-state check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoCheckResponse {
    pub has_demo_data: bool,
    pub counts: CatalogCountsInfo,
}

/// Rows removed per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalCountsInfo {
    pub category_links: usize,
    pub target_group_links: usize,
    pub software: usize,
    pub target_groups: usize,
    pub categories: usize,
    pub footer_links: usize,
    pub total: usize,
}

impl From<RemovalSummary> for RemovalCountsInfo {
    fn from(summary: RemovalSummary) -> Self {
        Self {
            category_links: summary.category_links,
            target_group_links: summary.target_group_links,
            software: summary.software,
            target_groups: summary.target_groups,
            categories: summary.categories,
            footer_links: summary.footer_links,
            total: summary.total(),
        }
    }
}

/// API response for the demo load.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadDemoResponse {
    pub message: String,
    pub success: bool,
    /// Software entries inserted.
    pub inserted: usize,
    pub categories: usize,
    pub target_groups: usize,
    pub links: usize,
    /// Rows cleared before loading.
    pub removed: RemovalCountsInfo,
}

/// API request for the demo removal. Every field is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveDemoRequest {
    /// Also clear footer links. Defaults to false.
    #[serde(default)]
    pub include_footer_links: Option<bool>,
}

/// API response for the demo removal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveDemoResponse {
    pub message: String,
    pub success: bool,
    pub removed: RemovalCountsInfo,
}

/// API request for a batch software delete.
///
/// `ids` absent means every entry; `ids: []` means none.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct BatchDeleteRequest {
    #[serde(default)]
    pub ids: Option<Vec<i64>>,
}

/// API response for a batch software delete.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteResponse {
    pub success: bool,
    /// Software rows actually removed.
    pub deleted: usize,
}

/// Result of seeding one reference kind.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    pub kind: String,
    pub inserted: usize,
    pub skipped: usize,
}

impl From<SeedSummary> for SeedResponse {
    fn from(summary: SeedSummary) -> Self {
        Self {
            kind: summary.kind.as_str().to_string(),
            inserted: summary.inserted,
            skipped: summary.skipped,
        }
    }
}

/// API response for seeding every reference kind.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedAllResponse {
    pub message: String,
    pub success: bool,
    pub results: Vec<SeedResponse>,
}

/// One stored audit record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecordInfo {
    pub id: i64,
    pub action: String,
    pub model: String,
    pub record_id: String,
    pub changes: serde_json::Value,
    /// A user id or `SYSTEM`.
    pub user_id: String,
    pub created_at: String,
}

impl From<AuditRecord> for AuditRecordInfo {
    fn from(record: AuditRecord) -> Self {
        Self {
            id: record.id,
            action: record.entry.action.as_str().to_string(),
            model: record.entry.model,
            record_id: record.entry.record.as_str().to_string(),
            changes: record.entry.changes,
            user_id: record.entry.actor.reference().to_string(),
            created_at: record.created_at,
        }
    }
}

/// API response listing audit records, newest first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListAuditResponse {
    pub records: Vec<AuditRecordInfo>,
}
