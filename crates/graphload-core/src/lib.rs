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

//! Core data model for graph loading.
//!
//! This crate defines the two input shapes the loading adapters consume:
//!
//! - [`Network`]: an in-memory graph object with a node map and a list of
//!   interaction records, typically produced by an upstream network
//!   builder. This is the shape the bulk-import path operates on.
//! - [`GraphExport`]: the decoded form of a bulk JSON export document with
//!   top-level `nodes` and `edges` arrays, each element wrapping a `data`
//!   object. This is the shape web-service exports arrive in.
//!
//! Both shapes are read-only inputs: adapters iterate over them exactly
//! once per translation pass and retain nothing afterwards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod export;
pub mod network;

pub use error::{CoreError, Result};
pub use export::{EdgeData, ExportEdge, ExportNode, GraphExport, DEFAULT_EXPORT_FILE};
pub use network::{GraphObject, Network, NetworkEdge, NetworkNode};
