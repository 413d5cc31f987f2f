// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk lifecycle rules for the software catalog.
//!
//! This crate holds the storage-independent half of the bulk mutation
//! engine: commands describing admin intents, the table dependency graph
//! that orders bulk deletes, the demo-state decision rule, and the audit
//! entry each operation must write. Execution lives in the persistence crate.

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

mod apply;
mod command;
mod deletion;
mod demo;
mod error;
mod state;

#[cfg(test)]
mod tests;

pub use apply::{
    creation_audit_entry, deletion_audit_entry, demo_load_audit_entry, removal_audit_entry,
    seed_audit_entry,
};
pub use command::{Command, RemovalScope, Selection};
pub use deletion::{CatalogTable, DEPENDENCIES, RemovalSummary, deletion_order};
pub use demo::{CatalogCounts, DemoDataset, DemoState, demo_dataset, has_demo_data};
pub use error::CoreError;
pub use state::{DeletionSummary, DemoLoadSummary, Outcome, SeedSummary};
