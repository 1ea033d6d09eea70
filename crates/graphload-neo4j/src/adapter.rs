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

//! The adapter facade.
//!
//! [`Neo4jAdapter`] owns the persistence collaborator and the
//! configuration, and exposes the three entry points: [`load`] for
//! transactional loading of network objects, [`translate_export`] for
//! callers that drive persistence themselves, and [`write_bulk_import`]
//! for the admin-import path.
//!
//! Every entry point takes its input explicitly; the adapter holds no
//! bound network between calls, so there is no implicit state a caller
//! could forget to set.
//!
//! [`load`]: Neo4jAdapter::load
//! [`translate_export`]: Neo4jAdapter::translate_export
//! [`write_bulk_import`]: Neo4jAdapter::write_bulk_import

use graphload_core::{GraphExport, GraphObject, Network};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::{ConnectionConfig, TranslateConfig};
use crate::error::{AdapterError, Result};
use crate::translate::{
    export_edges, export_nodes, network_edges, network_nodes, EdgeRecord, ExportNodes,
};
use crate::writer::BatchWriter;

/// Counts reported by a completed load or bulk-import pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Node records translated and handed to the collaborator.
    pub nodes: usize,
    /// Edge records translated.
    pub edges: usize,
    /// Export node records rejected by the schema filter.
    pub skipped_nodes: usize,
}

/// Facade translating graph inputs into persistence collaborator calls.
pub struct Neo4jAdapter<W> {
    writer: W,
    connection: ConnectionConfig,
    translate: TranslateConfig,
}

impl<W: BatchWriter> Neo4jAdapter<W> {
    /// Create an adapter around a ready writer with explicit connection
    /// settings.
    pub fn new(writer: W, connection: ConnectionConfig) -> Self {
        Self {
            writer,
            connection,
            translate: TranslateConfig::default(),
        }
    }

    /// Create an adapter resolving its connection settings with the
    /// documented precedence: explicit settings, then the YAML config
    /// file, then built-in defaults.
    pub fn from_parts(
        writer: W,
        connection: Option<ConnectionConfig>,
        config_file: Option<&Path>,
    ) -> Result<Self> {
        let connection = ConnectionConfig::resolve(connection, config_file)?;
        Ok(Self::new(writer, connection))
    }

    /// Replace the translation settings.
    pub fn with_translate_config(mut self, translate: TranslateConfig) -> Self {
        self.translate = translate;
        self
    }

    /// The resolved connection settings.
    pub fn connection(&self) -> &ConnectionConfig {
        &self.connection
    }

    /// The active translation settings.
    pub fn translate_config(&self) -> &TranslateConfig {
        &self.translate
    }

    /// Borrow the persistence collaborator.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consume the adapter, returning the persistence collaborator.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Load any compatible source object into the database.
    ///
    /// Sources without a network view yield
    /// [`AdapterError::UnsupportedSource`] before any collaborator call
    /// is made.
    pub fn load(&mut self, source: &dyn GraphObject) -> Result<LoadReport> {
        let network = source.as_network().ok_or(AdapterError::UnsupportedSource)?;
        self.load_network(network)
    }

    /// Load a network object through the transactional write path.
    ///
    /// Nodes are translated lazily and forwarded via
    /// [`BatchWriter::add_nodes`]. Edge records are translated and
    /// counted; edge persistence is only available on the bulk-import
    /// path.
    pub fn load_network(&mut self, network: &Network) -> Result<LoadReport> {
        let config = self.translate;
        debug!(nodes = network.node_count(), "loading network");

        let mut nodes = 0usize;
        self.writer
            .add_nodes(network_nodes(network, &config).inspect(|_| nodes += 1))?;

        let edges = network_edges(network, &config).count();

        info!(nodes, edges, "network loaded");
        Ok(LoadReport {
            nodes,
            edges,
            skipped_nodes: 0,
        })
    }

    /// Load a decoded JSON export through the transactional write path.
    ///
    /// Translated nodes are forwarded via [`BatchWriter::add_nodes`];
    /// records rejected by the schema filter are counted in the report.
    /// Edge records are validated against the relation map, and an
    /// unmapped phrase aborts the load.
    pub fn load_export(&mut self, export: &GraphExport) -> Result<LoadReport> {
        let config = self.translate;
        debug!(nodes = export.nodes.len(), edges = export.edges.len(), "loading export");

        let mut nodes = 0usize;
        let mut node_iter = export_nodes(export, &config);
        self.writer
            .add_nodes(node_iter.by_ref().inspect(|_| nodes += 1))?;
        let skipped_nodes = node_iter.skipped();
        if skipped_nodes > 0 {
            warn!(skipped_nodes, "export node records did not match the schema filter");
        }

        let mut edges = 0usize;
        for record in export_edges(export, &config) {
            record?;
            edges += 1;
        }

        info!(nodes, edges, skipped_nodes, "export loaded");
        Ok(LoadReport {
            nodes,
            edges,
            skipped_nodes,
        })
    }

    /// Translate a JSON export without persisting anything.
    ///
    /// Returns the lazy node translator and the edge translator for
    /// callers that hand sequences to a collaborator themselves. Both
    /// sequences are single-pass.
    pub fn translate_export<'a>(
        &'a self,
        export: &'a GraphExport,
    ) -> (
        ExportNodes<'a>,
        impl Iterator<Item = Result<EdgeRecord>> + 'a,
    ) {
        (
            export_nodes(export, &self.translate),
            export_edges(export, &self.translate),
        )
    }

    /// Load a network object through the bulk admin-import path.
    ///
    /// Stages node records, then edge records, then triggers the import
    /// finalize call, in that order.
    pub fn write_bulk_import(&mut self, network: &Network, db_name: &str) -> Result<LoadReport> {
        let config = self.translate;
        debug!(db_name, nodes = network.node_count(), "staging bulk import");

        let mut nodes = 0usize;
        self.writer.write_nodes(
            network_nodes(network, &config).inspect(|_| nodes += 1),
            db_name,
        )?;

        let mut edges = 0usize;
        self.writer.write_edges(
            network_edges(network, &config).inspect(|_| edges += 1),
            db_name,
        )?;

        self.writer.write_import_call()?;

        info!(db_name, nodes, edges, "bulk import staged");
        Ok(LoadReport {
            nodes,
            edges,
            skipped_nodes: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NotANetwork;

    impl GraphObject for NotANetwork {
        fn as_network(&self) -> Option<&Network> {
            None
        }
    }

    // Minimal writer that fails every call; used to prove that
    // unsupported sources never reach the collaborator.
    struct FailingWriter;

    impl BatchWriter for FailingWriter {
        fn add_nodes<I>(&mut self, _nodes: I) -> Result<()>
        where
            I: IntoIterator<Item = crate::translate::NodeRecord>,
        {
            panic!("collaborator must not be called");
        }

        fn write_nodes<I>(&mut self, _nodes: I, _db_name: &str) -> Result<()>
        where
            I: IntoIterator<Item = crate::translate::NodeRecord>,
        {
            panic!("collaborator must not be called");
        }

        fn write_edges<I>(&mut self, _edges: I, _db_name: &str) -> Result<()>
        where
            I: IntoIterator<Item = EdgeRecord>,
        {
            panic!("collaborator must not be called");
        }

        fn write_import_call(&mut self) -> Result<()> {
            panic!("collaborator must not be called");
        }
    }

    #[test]
    fn test_load_unsupported_source_never_touches_writer() {
        let mut adapter = Neo4jAdapter::new(FailingWriter, ConnectionConfig::default());
        let result = adapter.load(&NotANetwork);
        assert!(matches!(result, Err(AdapterError::UnsupportedSource)));
    }

    #[test]
    fn test_from_parts_defaults() {
        let adapter = Neo4jAdapter::from_parts(FailingWriter, None, None).unwrap();
        assert_eq!(adapter.connection().db_name, "neo4j");
    }

    #[test]
    fn test_with_translate_config() {
        let adapter = Neo4jAdapter::new(FailingWriter, ConnectionConfig::default())
            .with_translate_config(TranslateConfig::new().with_sanitized_ids());
        assert!(adapter.translate_config().sanitize_ids);
    }
}
