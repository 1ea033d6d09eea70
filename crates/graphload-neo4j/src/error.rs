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

//! Error types for the Neo4j loading adapter.

use thiserror::Error;

/// Error type for adapter operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// An export edge carries a relation phrase with no canonical mapping.
    #[error("unknown relation label '{label}'")]
    UnknownRelation {
        /// The unmapped human-readable phrase.
        label: String,
    },

    /// The object handed to `load` does not expose a network view.
    #[error("unsupported source object: no network view available")]
    UnsupportedSource,

    /// The connection config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The connection config file could not be parsed.
    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// An input document failed to decode.
    #[error(transparent)]
    Core(#[from] graphload_core::CoreError),

    /// The persistence collaborator reported a failure.
    #[error("writer error: {0}")]
    Writer(String),
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_relation() {
        let err = AdapterError::UnknownRelation {
            label: "binds to".to_string(),
        };
        assert!(err.to_string().contains("binds to"));
    }

    #[test]
    fn test_error_display_unsupported_source() {
        let err = AdapterError::UnsupportedSource;
        assert!(err.to_string().contains("unsupported"));
    }

    #[test]
    fn test_error_from_core_error() {
        let core_err = graphload_core::GraphExport::from_str("nope").unwrap_err();
        let err: AdapterError = core_err.into();
        assert!(matches!(err, AdapterError::Core(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(7)
        }
        assert_eq!(returns_result().unwrap(), 7);
    }
}
