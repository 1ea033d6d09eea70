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

//! Error types for the core data model.

use thiserror::Error;

/// Error type for decoding graph input documents.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The JSON export document could not be decoded.
    #[error("failed to decode graph export: {0}")]
    ExportDecode(#[from] serde_json::Error),

    /// The export file could not be read.
    #[error("failed to read export file: {0}")]
    Io(#[from] std::io::Error),

    /// A node's `data` object is missing a required field.
    #[error("export node missing field '{0}'")]
    MissingField(&'static str),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_field() {
        let err = CoreError::MissingField("display_name");
        assert!(err.to_string().contains("display_name"));
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::ExportDecode(_)));
    }
}
