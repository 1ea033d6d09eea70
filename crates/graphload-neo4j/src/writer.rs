// Graphload - Graph data loading adapters for Neo4j
//
// Copyright (c) 2025 Graphload contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The persistence collaborator seam.
//!
//! [`BatchWriter`] is the entire outbound contract of this layer: the
//! adapter hands over lazily translated record sequences and the
//! implementation performs the actual database work. Transactional
//! writes, admin-import CSV formatting, schema validation and driver I/O
//! all live behind this trait.

use crate::error::Result;
use crate::translate::{EdgeRecord, NodeRecord};

/// A sink for translated graph records.
///
/// Implementations receive each sequence exactly once and may consume it
/// lazily; the adapter never retains records after handing them off.
pub trait BatchWriter {
    /// Write node records transactionally into the active database.
    fn add_nodes<I>(&mut self, nodes: I) -> Result<()>
    where
        I: IntoIterator<Item = NodeRecord>;

    /// Stage node records for a bulk admin import into `db_name`.
    fn write_nodes<I>(&mut self, nodes: I, db_name: &str) -> Result<()>
    where
        I: IntoIterator<Item = NodeRecord>;

    /// Stage edge records for a bulk admin import into `db_name`.
    fn write_edges<I>(&mut self, edges: I, db_name: &str) -> Result<()>
    where
        I: IntoIterator<Item = EdgeRecord>;

    /// Finalize a bulk import, triggering the admin-import invocation for
    /// everything staged so far.
    fn write_import_call(&mut self) -> Result<()>;
}
