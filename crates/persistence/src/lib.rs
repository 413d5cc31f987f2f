// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the software catalog.
//!
//! This crate owns the `SQLite` store: the embedded schema migrations, the
//! audit recorder, the bulk mutation engine and the read queries behind the
//! demo-state oracle and the export.
//!
//! ## Units of work
//!
//! Every mutating operation on [`Persistence`] runs inside one immediate
//! transaction that also covers its audit write. If the audit write fails,
//! the whole operation rolls back.
//!
//! ## Backend
//!
//! `SQLite` only, with foreign key enforcement verified at startup. File
//! databases run in WAL mode with a busy timeout. In-memory databases use a
//! unique shared-cache name per instance so tests stay isolated.

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

use diesel::{Connection, SqliteConnection};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{error, info};

use catalog::{
    CatalogCounts, CatalogTable, Command, DeletionSummary, DemoLoadSummary, DemoState, Outcome,
    RemovalScope, RemovalSummary, SeedSummary, Selection,
};
use catalog_audit::{Actor, AuditAction, AuditEntry, AuditRecord};
use catalog_domain::{ReferenceKind, SoftwareEntry};

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The in-memory database URL accepted by [`Persistence::connect`].
pub const IN_MEMORY_URL: &str = ":memory:";

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::SoftwareExport;
pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Persistence adapter for the catalog store.
///
/// Holds a single long-lived connection. Callers that share it across
/// tasks wrap it in a mutex.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_catalog_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::configure_file_database(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Opens the store named by a connection string.
    ///
    /// Accepts `:memory:`, `sqlite://<path>`, `sqlite:<path>` or a plain path.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or the database cannot be
    /// opened or initialized.
    pub fn connect(database_url: &str) -> Result<Self, PersistenceError> {
        let target: &str = backend::sqlite::strip_scheme(database_url.trim());
        if target.is_empty() {
            return Err(PersistenceError::InitializationError(
                "Database URL is empty".to_string(),
            ));
        }
        if target == IN_MEMORY_URL {
            return Self::new_in_memory();
        }
        Self::new_with_file(target)
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Audit
    // ========================================================================

    /// Appends a single audit entry in its own transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn record_audit(&mut self, entry: &AuditEntry) -> Result<AuditRecord, PersistenceError> {
        self.conn
            .immediate_transaction::<_, PersistenceError, _>(|conn| {
                mutations::record_audit_entry(conn, entry)
            })
    }

    /// Lists the most recent audit records, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_audit_records(&mut self, limit: usize) -> Result<Vec<AuditRecord>, PersistenceError> {
        queries::audit::list_audit_records(&mut self.conn, limit)
    }

    /// Lists every audit record with the given action, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_audit_records_by_action(
        &mut self,
        action: AuditAction,
    ) -> Result<Vec<AuditRecord>, PersistenceError> {
        queries::audit::list_audit_records_by_action(&mut self.conn, action)
    }

    /// Counts all audit records.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_audit_records(&mut self) -> Result<i64, PersistenceError> {
        queries::audit::count_audit_records(&mut self.conn)
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Seeds one reference kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed fails; nothing is committed.
    pub fn seed_reference(
        &mut self,
        kind: ReferenceKind,
        actor: &Actor,
    ) -> Result<(SeedSummary, Option<AuditRecord>), PersistenceError> {
        mutations::seed_reference(&mut self.conn, kind, actor)
    }

    /// Seeds every reference kind, each in its own transaction.
    ///
    /// Stops at the first failing kind; kinds seeded before it stay
    /// committed.
    ///
    /// # Errors
    ///
    /// Returns an error if any kind fails to seed.
    pub fn seed_all_reference_data(
        &mut self,
        actor: &Actor,
    ) -> Result<Vec<SeedSummary>, PersistenceError> {
        ReferenceKind::ALL
            .iter()
            .map(|kind| {
                self.seed_reference(*kind, actor)
                    .map(|(summary, _audit)| summary)
            })
            .collect()
    }

    /// Resets the catalog and loads the demo dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the load fails; nothing is committed.
    pub fn load_demo(
        &mut self,
        actor: &Actor,
    ) -> Result<(DemoLoadSummary, AuditRecord), PersistenceError> {
        mutations::load_demo(&mut self.conn, actor)
    }

    /// Removes every catalog row in `scope`.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal fails; nothing is committed.
    pub fn remove_catalog(
        &mut self,
        scope: RemovalScope,
        actor: &Actor,
    ) -> Result<(RemovalSummary, AuditRecord), PersistenceError> {
        mutations::remove_catalog(&mut self.conn, scope, actor)
    }

    /// Deletes the selected software entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails; nothing is committed.
    pub fn delete_software(
        &mut self,
        selection: &Selection,
        actor: &Actor,
    ) -> Result<(DeletionSummary, AuditRecord), PersistenceError> {
        mutations::delete_software(&mut self.conn, selection, actor)
    }

    /// Creates a single software entry linked by category and target group
    /// names.
    ///
    /// # Returns
    ///
    /// The new software id.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry is invalid, a link name is unknown or
    /// a write fails.
    pub fn create_software(
        &mut self,
        entry: &SoftwareEntry,
        actor: &Actor,
    ) -> Result<i64, PersistenceError> {
        mutations::create_software(&mut self.conn, entry, actor).map(|(id, _audit)| id)
    }

    /// Executes a bulk command.
    ///
    /// Failures are logged here with the command name before they are
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails; nothing is committed.
    pub fn execute(&mut self, command: &Command, actor: &Actor) -> Result<Outcome, PersistenceError> {
        let result: Result<Outcome, PersistenceError> = match command {
            Command::SeedReference { kind } => self
                .seed_reference(*kind, actor)
                .map(|(summary, audit)| Outcome::Seeded { summary, audit }),
            Command::LoadDemo => self
                .load_demo(actor)
                .map(|(summary, audit)| Outcome::DemoLoaded { summary, audit }),
            Command::RemoveDemo { scope } => {
                self.remove_catalog(*scope, actor)
                    .map(|(summary, audit)| Outcome::CatalogRemoved {
                        scope: *scope,
                        summary,
                        audit,
                    })
            }
            Command::DeleteSoftware { selection } => self
                .delete_software(selection, actor)
                .map(|(summary, audit)| Outcome::SoftwareDeleted { summary, audit }),
        };

        match &result {
            Ok(outcome) => info!(
                operation = command.name(),
                actor = actor.reference(),
                audit_id = outcome.audit().map(|record| record.id),
                "Bulk operation committed"
            ),
            Err(err) => error!(
                operation = command.name(),
                actor = actor.reference(),
                error = %err,
                "Bulk operation failed; rolled back"
            ),
        }

        result
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Counts software, categories and target groups.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn catalog_counts(&mut self) -> Result<CatalogCounts, PersistenceError> {
        queries::catalog::count_catalog(&mut self.conn)
    }

    /// Answers whether a demo dataset is currently loaded, with the counts
    /// the answer was derived from.
    ///
    /// Both inputs are read in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn demo_state(&mut self) -> Result<DemoState, PersistenceError> {
        self.conn.transaction::<_, PersistenceError, _>(|conn| {
            let counts: CatalogCounts = queries::catalog::count_catalog(conn)?;
            let recorded: bool = queries::audit::demo_load_recorded(conn)?;
            Ok(DemoState::evaluate(counts, recorded))
        })
    }

    /// Whether a demo dataset is currently loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn has_demo_data(&mut self) -> Result<bool, PersistenceError> {
        self.demo_state().map(|state| state.has_demo_data)
    }

    /// Counts the rows currently in `table`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_rows(&mut self, table: CatalogTable) -> Result<i64, PersistenceError> {
        queries::catalog::count_rows(&mut self.conn, table)
    }

    /// Counts the settings rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_settings(&mut self) -> Result<i64, PersistenceError> {
        queries::catalog::count_settings(&mut self.conn)
    }

    /// Counts join rows whose parent row is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_orphaned_links(&mut self) -> Result<i64, PersistenceError> {
        queries::catalog::count_orphaned_links(&mut self.conn)
    }

    /// Lists the ids of all software entries, ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_software_ids(&mut self) -> Result<Vec<i64>, PersistenceError> {
        queries::catalog::list_software_ids(&mut self.conn)
    }

    /// Exports every software entry with its link names, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn export_software(&mut self) -> Result<Vec<SoftwareExport>, PersistenceError> {
        queries::export::export_software(&mut self.conn)
    }
}
