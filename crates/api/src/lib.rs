// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the software catalog lifecycle operations.
//!
//! This crate sits between the HTTP server and the persistence layer. It
//! authorizes callers, turns requests into core commands and shapes
//! outcomes and errors into transport-neutral responses. It knows nothing
//! about HTTP.

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
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod export;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use export::{
    CSV_COLUMNS, CSV_LIST_SEPARATOR, ExportFormat, ExportPayload, ExportRow, normalize_timestamp,
    render_csv,
};
pub use handlers::{
    DEFAULT_AUDIT_LIMIT, MAX_AUDIT_LIMIT, batch_delete_software, check_demo, export_catalog,
    list_audit, load_demo, parse_batch_delete_body, remove_demo, seed_all, seed_reference,
};
pub use request_response::{
    AuditRecordInfo, BatchDeleteRequest, BatchDeleteResponse, CatalogCountsInfo,
    DemoCheckResponse, ListAuditResponse, LoadDemoResponse, RemovalCountsInfo, RemoveDemoRequest,
    RemoveDemoResponse, SeedAllResponse, SeedResponse,
};
