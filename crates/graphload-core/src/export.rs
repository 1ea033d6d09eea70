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

//! Bulk JSON export documents.
//!
//! A web-service export is a JSON document with top-level `nodes` and
//! `edges` arrays. Each element wraps a `data` object carrying the actual
//! record fields. Node `data` objects are kept as raw JSON maps because
//! the translator's schema filter counts their entries; edge `data`
//! objects have a fixed shape and decode into [`EdgeData`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;

/// Conventional file name of the bundled web-service example export.
pub const DEFAULT_EXPORT_FILE: &str = "CROssBAR_Web-service_Example_1.json";

/// A node element of the export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNode {
    /// The raw record fields. Well-formed records carry `id`,
    /// `Node_Type`, `display_name`, and optionally `enrichScore`.
    pub data: Map<String, Value>,
}

impl ExportNode {
    /// Number of raw fields in the record.
    pub fn field_count(&self) -> usize {
        self.data.len()
    }

    /// The raw identifier value. May be any JSON type.
    pub fn id(&self) -> Option<&Value> {
        self.data.get("id")
    }

    /// The declared type label.
    pub fn node_type(&self) -> Option<&str> {
        self.data.get("Node_Type").and_then(Value::as_str)
    }

    /// The raw display name value.
    pub fn display_name(&self) -> Option<&Value> {
        self.data.get("display_name")
    }

    /// The raw enrichment score value, present only on enriched records.
    pub fn enrich_score(&self) -> Option<&Value> {
        self.data.get("enrichScore")
    }
}

/// The `data` object of an export edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    /// Raw source identifier. May be any JSON type.
    pub source: Value,
    /// Raw target identifier. May be any JSON type.
    pub target: Value,
    /// Human-readable relation phrase, e.g. `"interacts w/"`.
    pub label: String,
    /// Machine type code, carried as an edge property.
    #[serde(rename = "Edge_Type")]
    pub edge_type: String,
}

/// An edge element of the export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportEdge {
    /// The record fields.
    pub data: EdgeData,
}

/// A decoded bulk JSON export document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    /// Node records.
    pub nodes: Vec<ExportNode>,
    /// Edge records.
    pub edges: Vec<ExportEdge>,
}

impl GraphExport {
    /// Decode an export document from a JSON string.
    pub fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode an export document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read and decode an export document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> String {
        json!({
            "nodes": [
                {"data": {"id": "P00533", "Node_Type": "Protein_N",
                          "display_name": "EGFR"}},
                {"data": {"id": "DB00530", "Node_Type": "Drug_N",
                          "display_name": "Erlotinib", "enrichScore": 0.82}},
            ],
            "edges": [
                {"data": {"source": "DB00530", "target": "P00533",
                          "label": "targets", "Edge_Type": "drug_target"}},
            ],
        })
        .to_string()
    }

    #[test]
    fn test_decode_export() {
        let export = GraphExport::from_str(&sample_json()).unwrap();
        assert_eq!(export.nodes.len(), 2);
        assert_eq!(export.edges.len(), 1);
    }

    #[test]
    fn test_node_accessors() {
        let export = GraphExport::from_str(&sample_json()).unwrap();
        let node = &export.nodes[0];
        assert_eq!(node.field_count(), 3);
        assert_eq!(node.id(), Some(&json!("P00533")));
        assert_eq!(node.node_type(), Some("Protein_N"));
        assert_eq!(node.display_name(), Some(&json!("EGFR")));
        assert!(node.enrich_score().is_none());

        let enriched = &export.nodes[1];
        assert_eq!(enriched.field_count(), 4);
        assert_eq!(enriched.enrich_score(), Some(&json!(0.82)));
    }

    #[test]
    fn test_edge_fields() {
        let export = GraphExport::from_str(&sample_json()).unwrap();
        let edge = &export.edges[0].data;
        assert_eq!(edge.source, json!("DB00530"));
        assert_eq!(edge.label, "targets");
        assert_eq!(edge.edge_type, "drug_target");
    }

    #[test]
    fn test_decode_rejects_malformed_document() {
        let result = GraphExport::from_str(r#"{"nodes": "not an array"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_string_identifiers_decode() {
        let json = json!({
            "nodes": [{"data": {"id": 42, "Node_Type": "Gene_N",
                                "display_name": "KRAS"}}],
            "edges": [],
        })
        .to_string();
        let export = GraphExport::from_str(&json).unwrap();
        assert_eq!(export.nodes[0].id(), Some(&json!(42)));
    }
}
