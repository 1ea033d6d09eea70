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

//! In-memory network objects: node maps and interaction records.

use std::collections::BTreeMap;

/// A node of an in-memory network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkNode {
    /// Primary identifier, used as the database key after normalization.
    pub identifier: String,
    /// Entity type, used directly as the node label.
    pub entity_type: String,
    /// NCBI taxonomy identifier of the organism, carried as a property.
    pub taxon: String,
    /// Human-readable label, carried as a property.
    pub label: String,
}

impl NetworkNode {
    /// Create a node with empty taxon and label.
    pub fn new(identifier: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            entity_type: entity_type.into(),
            taxon: String::new(),
            label: String::new(),
        }
    }

    /// Set the taxonomy identifier.
    pub fn with_taxon(mut self, taxon: impl Into<String>) -> Self {
        self.taxon = taxon.into();
        self
    }

    /// Set the human-readable label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// An interaction record between two network nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkEdge {
    /// Identifier of the first participant.
    pub id_a: String,
    /// Identifier of the second participant.
    pub id_b: String,
    /// Machine-readable interaction type code, used directly as the
    /// relationship type.
    pub kind: String,
    /// Sign of the interaction: `1` activation, `-1` inhibition, `0`
    /// unknown.
    pub effect: i8,
    /// Whether the interaction is directed from `id_a` to `id_b`.
    pub directed: bool,
}

impl NetworkEdge {
    /// Create an undirected interaction with unknown effect.
    pub fn new(
        id_a: impl Into<String>,
        id_b: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id_a: id_a.into(),
            id_b: id_b.into(),
            kind: kind.into(),
            effect: 0,
            directed: false,
        }
    }

    /// Set the interaction effect sign.
    pub fn with_effect(mut self, effect: i8) -> Self {
        self.effect = effect;
        self
    }

    /// Mark the interaction as directed.
    pub fn directed(mut self) -> Self {
        self.directed = true;
        self
    }
}

/// An in-memory network: a node map keyed by identifier plus a list of
/// interaction records.
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: BTreeMap<String, NetworkNode>,
    edges: Vec<NetworkEdge>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, keyed by its identifier. Replaces any existing node
    /// with the same identifier.
    pub fn insert_node(&mut self, node: NetworkNode) {
        self.nodes.insert(node.identifier.clone(), node);
    }

    /// Append an interaction record.
    pub fn insert_edge(&mut self, edge: NetworkEdge) {
        self.edges.push(edge);
    }

    /// Fluent variant of [`insert_node`](Self::insert_node).
    pub fn with_node(mut self, node: NetworkNode) -> Self {
        self.insert_node(node);
        self
    }

    /// Fluent variant of [`insert_edge`](Self::insert_edge).
    pub fn with_edge(mut self, edge: NetworkEdge) -> Self {
        self.insert_edge(edge);
        self
    }

    /// Iterate over the nodes in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &NetworkNode> {
        self.nodes.values()
    }

    /// Iterate over the interaction records in insertion order.
    pub fn edge_records(&self) -> impl Iterator<Item = &NetworkEdge> {
        self.edges.iter()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of interaction records.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Anything the adapter's generic `load` entry point can accept.
///
/// This is the typed rendering of the upstream duck-type check for objects
/// exposing both a node collection and an interaction collection: sources
/// that are (or can view themselves as) a [`Network`] return `Some`; all
/// others return `None` and the adapter reports them as unsupported
/// instead of silently ignoring them.
pub trait GraphObject {
    /// View this source as a network, if it is one.
    fn as_network(&self) -> Option<&Network>;
}

impl GraphObject for Network {
    fn as_network(&self) -> Option<&Network> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_builders() {
        let node = NetworkNode::new("P00533", "protein")
            .with_taxon("9606")
            .with_label("EGFR");
        assert_eq!(node.identifier, "P00533");
        assert_eq!(node.entity_type, "protein");
        assert_eq!(node.taxon, "9606");
        assert_eq!(node.label, "EGFR");
    }

    #[test]
    fn test_edge_builders() {
        let edge = NetworkEdge::new("P00533", "P01116", "post_translational")
            .with_effect(1)
            .directed();
        assert_eq!(edge.id_a, "P00533");
        assert_eq!(edge.id_b, "P01116");
        assert_eq!(edge.kind, "post_translational");
        assert_eq!(edge.effect, 1);
        assert!(edge.directed);
    }

    #[test]
    fn test_network_node_replacement() {
        let mut network = Network::new();
        network.insert_node(NetworkNode::new("P00533", "protein").with_label("old"));
        network.insert_node(NetworkNode::new("P00533", "protein").with_label("new"));
        assert_eq!(network.node_count(), 1);
        assert_eq!(network.nodes().next().unwrap().label, "new");
    }

    #[test]
    fn test_network_iteration_order() {
        let network = Network::new()
            .with_node(NetworkNode::new("b", "protein"))
            .with_node(NetworkNode::new("a", "protein"))
            .with_edge(NetworkEdge::new("a", "b", "interaction"));

        let ids: Vec<&str> = network.nodes().map(|n| n.identifier.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]); // identifier order
        assert_eq!(network.edge_count(), 1);
    }

    #[test]
    fn test_network_is_graph_object() {
        let network = Network::new();
        assert!(network.as_network().is_some());
    }
}
