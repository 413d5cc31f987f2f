// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flat catalog export in JSON or CSV.

use std::str::FromStr;

use catalog_persistence::SoftwareExport;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::PrimitiveDateTime;

use crate::error::ApiError;

/// Separator for list fields in CSV cells.
pub const CSV_LIST_SEPARATOR: &str = "; ";

/// CSV header row; matches the JSON field names.
pub const CSV_COLUMNS: [&str; 12] = [
    "id",
    "name",
    "shortDescription",
    "description",
    "url",
    "types",
    "cost",
    "available",
    "categories",
    "targetGroups",
    "createdAt",
    "updatedAt",
];

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ApiError::InvalidInput {
                field: String::from("format"),
                message: format!("Unsupported export format '{other}'. Expected json or csv"),
            }),
        }
    }
}

/// One exported software row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    pub id: i64,
    pub name: String,
    pub short_description: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub types: Vec<String>,
    pub cost: String,
    pub available: bool,
    pub categories: Vec<String>,
    pub target_groups: Vec<String>,
    /// RFC 3339, UTC.
    pub created_at: String,
    /// RFC 3339, UTC.
    pub updated_at: String,
}

impl From<SoftwareExport> for ExportRow {
    fn from(row: SoftwareExport) -> Self {
        Self {
            id: row.id,
            name: row.name,
            short_description: row.short_description,
            description: row.description,
            url: row.url,
            types: row.types,
            cost: row.cost.as_str().to_string(),
            available: row.available,
            categories: row.categories,
            target_groups: row.target_groups,
            created_at: normalize_timestamp(&row.created_at),
            updated_at: normalize_timestamp(&row.updated_at),
        }
    }
}

/// The rendered export body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportPayload {
    Json(Vec<ExportRow>),
    Csv(String),
}

/// Converts a store timestamp (`YYYY-MM-DD HH:MM:SS`, UTC) to RFC 3339.
///
/// Values that do not parse are returned unchanged.
#[must_use]
pub fn normalize_timestamp(stored: &str) -> String {
    let layout = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    PrimitiveDateTime::parse(stored, layout)
        .ok()
        .and_then(|parsed| parsed.assume_utc().format(&Rfc3339).ok())
        .unwrap_or_else(|| stored.to_string())
}

/// Renders rows as CSV with a header line.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn render_csv(rows: &[ExportRow]) -> Result<String, ApiError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_COLUMNS).map_err(csv_error)?;

    for row in rows {
        let id: String = row.id.to_string();
        let types: String = row.types.join(CSV_LIST_SEPARATOR);
        let categories: String = row.categories.join(CSV_LIST_SEPARATOR);
        let target_groups: String = row.target_groups.join(CSV_LIST_SEPARATOR);
        writer
            .write_record([
                id.as_str(),
                row.name.as_str(),
                row.short_description.as_str(),
                row.description.as_deref().unwrap_or_default(),
                row.url.as_deref().unwrap_or_default(),
                types.as_str(),
                row.cost.as_str(),
                if row.available { "true" } else { "false" },
                categories.as_str(),
                target_groups.as_str(),
                row.created_at.as_str(),
                row.updated_at.as_str(),
            ])
            .map_err(csv_error)?;
    }

    let bytes: Vec<u8> = writer.into_inner().map_err(|e| ApiError::Internal {
        message: format!("Failed to finish CSV export: {e}"),
    })?;
    String::from_utf8(bytes).map_err(|e| ApiError::Internal {
        message: format!("CSV export is not valid UTF-8: {e}"),
    })
}

fn csv_error(err: csv::Error) -> ApiError {
    ApiError::Internal {
        message: format!("Failed to write CSV export: {err}"),
    }
}
