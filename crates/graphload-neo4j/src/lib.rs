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

//! Neo4j loading adapter for graph data.
//!
//! This crate translates graph inputs — in-memory [`Network`] objects or
//! decoded bulk JSON exports — into normalized record sequences and
//! forwards them to a [`BatchWriter`] persistence collaborator. The
//! collaborator owns everything database-shaped: driver connections,
//! transactions, and admin-import file formatting.
//!
//! # Mapping
//!
//! | Input | Record | Label rule |
//! |-------|--------|------------|
//! | Export node (3 fields) | [`NodeRecord`] with `display_name` | [`resolve_type`] rule chain |
//! | Export node (4 fields) | [`NodeRecord`] with `display_name` + `enrich_score` | [`resolve_type`] rule chain |
//! | Export edge | [`EdgeRecord`] with `Edge_Type` | fixed relation map |
//! | Network node | [`NodeRecord`] with `taxon` + `label` | entity type, verbatim |
//! | Network edge | [`EdgeRecord`] with `effect` + `directed` | type code, verbatim |
//!
//! Export node records outside the 3/4-field schema are skipped and the
//! count surfaced in [`LoadReport`]; an edge relation phrase missing from
//! the relation map aborts the load with
//! [`AdapterError::UnknownRelation`].
//!
//! # Example
//!
//! ```rust
//! use graphload_core::{Network, NetworkEdge, NetworkNode};
//! use graphload_neo4j::{BatchWriter, ConnectionConfig, Neo4jAdapter};
//!
//! fn example<W: BatchWriter>(writer: W) -> Result<(), graphload_neo4j::AdapterError> {
//!     let network = Network::new()
//!         .with_node(NetworkNode::new("P00533", "protein").with_taxon("9606"))
//!         .with_edge(NetworkEdge::new("P00533", "P01116", "post_translational"));
//!
//!     let connection = ConnectionConfig::new().with_auth("neo4j", "password");
//!     let mut adapter = Neo4jAdapter::new(writer, connection);
//!
//!     let report = adapter.write_bulk_import(&network, "import")?;
//!     assert_eq!(report.nodes, 1);
//!     assert_eq!(report.edges, 1);
//!     Ok(())
//! }
//! ```
//!
//! [`Network`]: graphload_core::Network
//! [`resolve_type`]: normalize::resolve_type
//! [`NodeRecord`]: translate::NodeRecord
//! [`EdgeRecord`]: translate::EdgeRecord

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod adapter;
pub mod config;
pub mod error;
pub mod normalize;
pub mod translate;
pub mod writer;

// Re-export main types at crate root for convenience
pub use adapter::{LoadReport, Neo4jAdapter};
pub use config::{ConnectionConfig, TranslateConfig, DEFAULT_DB_NAME, DEFAULT_DB_URI};
pub use error::{AdapterError, Result};
pub use normalize::{normalize_id, resolve_relation, resolve_type, RELATION_MAP};
pub use translate::{
    export_edges, export_nodes, network_edges, network_nodes, EdgeRecord, ExportNodes, NodeRecord,
};
pub use writer::BatchWriter;
