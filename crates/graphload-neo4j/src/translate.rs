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

//! Record translation: raw node and edge records into normalized
//! identifier/label/property records.
//!
//! All translators are lazy, single-pass iterators: each record is
//! computed on demand as the persistence collaborator pulls it, so no
//! translated set is ever materialized by this layer. The iterators are
//! not restartable; consuming one twice yields nothing on the second
//! pass.

use graphload_core::{ExportNode, GraphExport, Network};
use std::collections::BTreeMap;

use crate::config::TranslateConfig;
use crate::error::Result;
use crate::normalize::{normalize_id, normalize_str_id, resolve_relation, resolve_type, stringify};

/// A normalized node record ready for the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    /// Canonical identifier, used as the database key.
    pub id: String,
    /// Canonical node label.
    pub label: String,
    /// String-valued node properties.
    pub properties: BTreeMap<String, String>,
}

impl NodeRecord {
    /// Create a node record without properties.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Add a property to the record.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

/// A normalized edge record ready for the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    /// Canonical source identifier.
    pub source: String,
    /// Canonical target identifier.
    pub target: String,
    /// Canonical relationship type.
    pub rel_type: String,
    /// String-valued edge properties.
    pub properties: BTreeMap<String, String>,
}

impl EdgeRecord {
    /// Create an edge record without properties.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        rel_type: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            rel_type: rel_type.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Add a property to the record.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

// Schema filter for export nodes: plain records carry exactly id,
// Node_Type and display_name; enriched records additionally carry
// enrichScore. Anything else does not match the export schema.
fn translate_export_node(record: &ExportNode, config: &TranslateConfig) -> Option<NodeRecord> {
    let enriched = match record.field_count() {
        3 => false,
        4 => true,
        _ => return None,
    };

    let raw_id = record.id()?;
    let node_type = record.node_type()?;
    let display_name = record.display_name()?;

    // The type resolver sees the unsanitized identifier: the Disease
    // prefix rule splits on the very characters sanitization removes.
    let label = resolve_type(&stringify(raw_id), node_type);

    let mut node = NodeRecord::new(normalize_id(raw_id, config), label)
        .with_property("display_name", stringify(display_name));

    if enriched {
        node = node.with_property("enrich_score", stringify(record.enrich_score()?));
    }

    Some(node)
}

/// Lazy translator over the node records of a JSON export.
///
/// Records that do not match the export schema are skipped rather than
/// translated; [`skipped`](Self::skipped) reports how many, so callers
/// can surface the count instead of losing data silently.
pub struct ExportNodes<'a> {
    records: std::slice::Iter<'a, ExportNode>,
    config: &'a TranslateConfig,
    skipped: usize,
}

impl<'a> ExportNodes<'a> {
    /// Number of records skipped by the schema filter so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<'a> Iterator for ExportNodes<'a> {
    type Item = NodeRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for record in self.records.by_ref() {
            match translate_export_node(record, self.config) {
                Some(node) => return Some(node),
                None => self.skipped += 1,
            }
        }
        None
    }
}

/// Translate the node records of a JSON export document.
pub fn export_nodes<'a>(export: &'a GraphExport, config: &'a TranslateConfig) -> ExportNodes<'a> {
    ExportNodes {
        records: export.nodes.iter(),
        config,
        skipped: 0,
    }
}

/// Translate the edge records of a JSON export document.
///
/// Each item resolves the human-readable relation phrase through the
/// fixed relation map; an unmapped phrase yields an error item.
pub fn export_edges<'a>(
    export: &'a GraphExport,
    config: &'a TranslateConfig,
) -> impl Iterator<Item = Result<EdgeRecord>> + 'a {
    export.edges.iter().map(move |edge| {
        let data = &edge.data;
        let rel_type = resolve_relation(&data.label)?;
        Ok(EdgeRecord::new(
            normalize_id(&data.source, config),
            normalize_id(&data.target, config),
            rel_type,
        )
        .with_property("Edge_Type", data.edge_type.clone()))
    })
}

/// Translate the nodes of an in-memory network for the bulk-import path.
///
/// Every node is translated; the entity type is used directly as the
/// label, and `taxon` and `label` are copied verbatim into properties.
pub fn network_nodes<'a>(
    network: &'a Network,
    config: &'a TranslateConfig,
) -> impl Iterator<Item = NodeRecord> + 'a {
    network.nodes().map(move |node| {
        NodeRecord::new(
            normalize_str_id(&node.identifier, config),
            node.entity_type.clone(),
        )
        .with_property("taxon", node.taxon.clone())
        .with_property("label", node.label.clone())
    })
}

/// Translate the interaction records of an in-memory network for the
/// bulk-import path.
///
/// The machine type code is used directly as the relationship type;
/// `effect` and `directed` are copied into properties.
pub fn network_edges<'a>(
    network: &'a Network,
    config: &'a TranslateConfig,
) -> impl Iterator<Item = EdgeRecord> + 'a {
    network.edge_records().map(move |edge| {
        EdgeRecord::new(
            normalize_str_id(&edge.id_a, config),
            normalize_str_id(&edge.id_b, config),
            edge.kind.clone(),
        )
        .with_property("effect", edge.effect.to_string())
        .with_property("directed", edge.directed.to_string())
    })
}
