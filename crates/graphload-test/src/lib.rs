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

//! Shared test fixtures and utilities for the graphload crates.
//!
//! Provides a canonical sample network, a sample web-service export, and
//! [`RecordingWriter`], a [`BatchWriter`] spy that captures every record
//! and counts every collaborator call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use graphload_core::{GraphExport, Network, NetworkEdge, NetworkNode};
use graphload_neo4j::{BatchWriter, EdgeRecord, NodeRecord, Result};
use serde_json::json;

/// Canonical fixtures for adapter tests.
pub mod fixtures {
    use super::*;

    /// A small network: two proteins, one drug, two interactions.
    pub fn sample_network() -> Network {
        Network::new()
            .with_node(
                NetworkNode::new("P00533", "protein")
                    .with_taxon("9606")
                    .with_label("EGFR"),
            )
            .with_node(
                NetworkNode::new("P01116", "protein")
                    .with_taxon("9606")
                    .with_label("KRAS"),
            )
            .with_node(
                NetworkNode::new("DB00530", "drug")
                    .with_taxon("0")
                    .with_label("Erlotinib"),
            )
            .with_edge(
                NetworkEdge::new("P00533", "P01116", "post_translational")
                    .with_effect(1)
                    .directed(),
            )
            .with_edge(NetworkEdge::new("DB00530", "P00533", "drug_target").with_effect(-1))
    }

    /// The JSON text of a small web-service export covering both node
    /// shapes and every edge kind the tests need.
    pub fn sample_export_json() -> String {
        json!({
            "nodes": [
                {"data": {"id": "P00533", "Node_Type": "Protein_N",
                          "display_name": "EGFR"}},
                {"data": {"id": "DB00530", "Node_Type": "Drug_N",
                          "display_name": "Erlotinib", "enrichScore": 0.82}},
                {"data": {"id": "MESH:D001", "Node_Type": "Disease",
                          "display_name": "Asthma"}},
                {"data": {"id": "hsa05224", "Node_Type": "kegg_Disease",
                          "display_name": "Breast cancer"}},
            ],
            "edges": [
                {"data": {"source": "DB00530", "target": "P00533",
                          "label": "targets", "Edge_Type": "drug_target"}},
                {"data": {"source": "P00533", "target": "MESH:D001",
                          "label": "is associated w/", "Edge_Type": "association"}},
            ],
        })
        .to_string()
    }

    /// The decoded form of [`sample_export_json`].
    pub fn sample_export() -> GraphExport {
        GraphExport::from_str(&sample_export_json()).expect("fixture export must decode")
    }
}

/// A collaborator call captured by [`RecordingWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterCall {
    /// `add_nodes` with the number of records consumed.
    AddNodes(usize),
    /// `write_nodes` with the number of records consumed and the target
    /// database.
    WriteNodes(usize, String),
    /// `write_edges` with the number of records consumed and the target
    /// database.
    WriteEdges(usize, String),
    /// `write_import_call`.
    WriteImportCall,
}

/// A [`BatchWriter`] spy that materializes every sequence it receives and
/// records the call order.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    /// Records received through `add_nodes`.
    pub added_nodes: Vec<NodeRecord>,
    /// Records received through `write_nodes`.
    pub written_nodes: Vec<NodeRecord>,
    /// Records received through `write_edges`.
    pub written_edges: Vec<EdgeRecord>,
    /// Calls in the order they arrived.
    pub calls: Vec<WriterCall>,
}

impl RecordingWriter {
    /// Create an empty spy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of collaborator calls received.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }
}

impl BatchWriter for RecordingWriter {
    fn add_nodes<I>(&mut self, nodes: I) -> Result<()>
    where
        I: IntoIterator<Item = NodeRecord>,
    {
        let before = self.added_nodes.len();
        self.added_nodes.extend(nodes);
        self.calls
            .push(WriterCall::AddNodes(self.added_nodes.len() - before));
        Ok(())
    }

    fn write_nodes<I>(&mut self, nodes: I, db_name: &str) -> Result<()>
    where
        I: IntoIterator<Item = NodeRecord>,
    {
        let before = self.written_nodes.len();
        self.written_nodes.extend(nodes);
        self.calls.push(WriterCall::WriteNodes(
            self.written_nodes.len() - before,
            db_name.to_string(),
        ));
        Ok(())
    }

    fn write_edges<I>(&mut self, edges: I, db_name: &str) -> Result<()>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let before = self.written_edges.len();
        self.written_edges.extend(edges);
        self.calls.push(WriterCall::WriteEdges(
            self.written_edges.len() - before,
            db_name.to_string(),
        ));
        Ok(())
    }

    fn write_import_call(&mut self) -> Result<()> {
        self.calls.push(WriterCall::WriteImportCall);
        Ok(())
    }
}
