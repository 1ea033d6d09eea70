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

//! Configuration types for the Neo4j loading adapter.
//!
//! The connection can be described in three ways, resolved with a fixed
//! precedence by [`ConnectionConfig::resolve`]:
//!
//! 1. An explicit [`ConnectionConfig`] built in code.
//! 2. A YAML config file providing the same fields.
//! 3. Built-in defaults (`neo4j` database on `bolt://localhost:7687`).
//!
//! The fourth possibility from the upstream design, a ready driver handle,
//! is covered by constructing the adapter with an already-connected
//! [`BatchWriter`](crate::writer::BatchWriter), which subsumes any
//! connection settings held here.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Default database name.
pub const DEFAULT_DB_NAME: &str = "neo4j";

/// Default bolt URI for a local Neo4j server.
pub const DEFAULT_DB_URI: &str = "bolt://localhost:7687";

fn default_db_name() -> String {
    DEFAULT_DB_NAME.to_string()
}

fn default_db_uri() -> String {
    DEFAULT_DB_URI.to_string()
}

fn default_db_user() -> String {
    DEFAULT_DB_NAME.to_string()
}

fn default_db_password() -> String {
    String::new()
}

/// Neo4j connection settings handed to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Name of the database (Neo4j graph) to use.
    #[serde(default = "default_db_name")]
    pub db_name: String,

    /// Protocol, host and port of the Neo4j server.
    #[serde(default = "default_db_uri")]
    pub db_uri: String,

    /// User name for server authentication.
    #[serde(default = "default_db_user")]
    pub db_user: String,

    /// Password for server authentication.
    #[serde(default = "default_db_password")]
    pub db_password: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            db_name: default_db_name(),
            db_uri: default_db_uri(),
            db_user: default_db_user(),
            db_password: default_db_password(),
        }
    }
}

impl ConnectionConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the database name.
    pub fn with_db_name(mut self, name: impl Into<String>) -> Self {
        self.db_name = name.into();
        self
    }

    /// Set the server URI.
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.db_uri = uri.into();
        self
    }

    /// Set the authentication pair.
    pub fn with_auth(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.db_user = user.into();
        self.db_password = password.into();
        self
    }

    /// Read connection settings from a YAML config file.
    ///
    /// Missing fields fall back to the built-in defaults, so a partial
    /// file providing only credentials is valid.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Resolve connection settings with the documented precedence:
    /// explicit settings win over the config file, which wins over the
    /// built-in defaults.
    pub fn resolve(explicit: Option<Self>, config_file: Option<&Path>) -> Result<Self> {
        if let Some(config) = explicit {
            return Ok(config);
        }
        if let Some(path) = config_file {
            return Self::from_yaml_file(path);
        }
        Ok(Self::default())
    }
}

/// Settings for the record translation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Replace `:` and `-` in identifiers with `_` (default: false).
    ///
    /// Off by default to keep identifiers byte-identical to the source
    /// data; enable when downstream tooling cannot handle punctuated
    /// keys.
    pub sanitize_ids: bool,
}

impl TranslateConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable identifier sanitization.
    pub fn with_sanitized_ids(mut self) -> Self {
        self.sanitize_ids = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_connection_config_default() {
        let config = ConnectionConfig::default();
        assert_eq!(config.db_name, "neo4j");
        assert_eq!(config.db_uri, "bolt://localhost:7687");
        assert_eq!(config.db_user, "neo4j");
        assert_eq!(config.db_password, "");
    }

    #[test]
    fn test_connection_config_fluent() {
        let config = ConnectionConfig::new()
            .with_db_name("import")
            .with_uri("bolt://db.example.com:7687")
            .with_auth("loader", "s3cret");
        assert_eq!(config.db_name, "import");
        assert_eq!(config.db_uri, "bolt://db.example.com:7687");
        assert_eq!(config.db_user, "loader");
        assert_eq!(config.db_password, "s3cret");
    }

    #[test]
    fn test_from_yaml_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "db_user: loader\ndb_password: s3cret").unwrap();

        let config = ConnectionConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.db_user, "loader");
        assert_eq!(config.db_password, "s3cret");
        // unspecified fields take defaults
        assert_eq!(config.db_name, "neo4j");
        assert_eq!(config.db_uri, "bolt://localhost:7687");
    }

    #[test]
    fn test_from_yaml_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "db_name: [unterminated").unwrap();
        assert!(ConnectionConfig::from_yaml_file(file.path()).is_err());
    }

    #[test]
    fn test_resolve_explicit_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "db_name: from_file").unwrap();

        let explicit = ConnectionConfig::new().with_db_name("explicit");
        let resolved =
            ConnectionConfig::resolve(Some(explicit), Some(file.path())).unwrap();
        assert_eq!(resolved.db_name, "explicit");
    }

    #[test]
    fn test_resolve_file_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "db_name: from_file").unwrap();

        let resolved = ConnectionConfig::resolve(None, Some(file.path())).unwrap();
        assert_eq!(resolved.db_name, "from_file");
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = ConnectionConfig::resolve(None, None).unwrap();
        assert_eq!(resolved, ConnectionConfig::default());
    }

    #[test]
    fn test_resolve_missing_file_is_error() {
        let result = ConnectionConfig::resolve(None, Some(Path::new("/no/such/file.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_translate_config() {
        assert!(!TranslateConfig::default().sanitize_ids);
        assert!(TranslateConfig::new().with_sanitized_ids().sanitize_ids);
    }

    #[test]
    fn test_connection_config_serialization() {
        let config = ConnectionConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: ConnectionConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
