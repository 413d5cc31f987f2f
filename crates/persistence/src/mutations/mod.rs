// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `audit`: the audit recorder (append only)
//! - `seed`: idempotent reference-data inserts
//! - `bulk`: demo load, catalog removal, batch software delete
//!
//! Functions in `seed` and the row-level helpers in `bulk` expect to run
//! inside a transaction opened by their caller. The public operations in
//! `bulk` and `seed::seed_reference` open their own.

pub mod audit;
pub mod bulk;
pub mod seed;

pub use audit::record_audit_entry;
pub use bulk::{create_software, delete_software, load_demo, remove_catalog};
pub use seed::seed_reference;
