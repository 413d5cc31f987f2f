// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `catalog`: row counts, natural-key lookups, name-to-id maps
//! - `audit`: audit trail reads, including the demo-load probe
//! - `export`: flat software projection with link names

pub mod audit;
pub mod catalog;
pub mod export;
