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

//! Identifier and type normalization.
//!
//! Raw identifiers become plain strings usable as database keys; raw type
//! labels are rewritten into the canonical label set through a short,
//! ordered rule chain. Both operations are total: unmatched inputs pass
//! through unchanged.

use serde_json::Value;

use crate::config::TranslateConfig;
use crate::error::{AdapterError, Result};

/// Render a raw JSON value as a plain string.
///
/// Strings pass through without surrounding quotes; every other value
/// gets its canonical JSON rendering.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Normalize a raw identifier value into its database key form.
///
/// Identifiers of any JSON type are accepted and rendered via
/// [`stringify`]. When [`TranslateConfig::sanitize_ids`] is enabled, `:`
/// and `-` are replaced with `_`.
pub fn normalize_id(raw: &Value, config: &TranslateConfig) -> String {
    let id = stringify(raw);
    if config.sanitize_ids {
        id.replace([':', '-'], "_")
    } else {
        id
    }
}

/// Normalize an identifier that is already a string.
pub fn normalize_str_id(raw: &str, config: &TranslateConfig) -> String {
    if config.sanitize_ids {
        raw.replace([':', '-'], "_")
    } else {
        raw.to_string()
    }
}

/// Resolve a raw type label into its canonical form.
///
/// Rules apply in order, each re-checking the possibly rewritten label:
///
/// 1. The `kegg_Disease` source alias becomes `KEGG.DISEASE`.
/// 2. A generic `Disease` label with a prefixed identifier (for example
///    `MESH:D001`) takes the identifier prefix as its label.
/// 3. A `_N` network suffix is stripped and the remainder capitalized.
/// 4. The `Prediction` placeholder becomes `Compound`.
///
/// Unmatched labels pass through unchanged.
pub fn resolve_type(id: &str, label: &str) -> String {
    let mut label = label.to_string();

    if label == "kegg_Disease" {
        label = "KEGG.DISEASE".to_string();
    }

    if label == "Disease" {
        if let Some((prefix, _)) = id.split_once(':') {
            label = prefix.to_string();
        }
    }

    if let Some(stem) = label.strip_suffix("_N") {
        label = capitalize(stem);
    }

    if label == "Prediction" {
        label = "Compound".to_string();
    }

    label
}

// First character uppercased, the rest lowercased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// The fixed mapping from human-readable relation phrases to canonical
/// relationship type names.
pub const RELATION_MAP: &[(&str, &str)] = &[
    ("interacts w/", "Interacts_With"),
    ("is associated w/", "Is_Associated_With"),
    ("is related to", "Is_Related_To"),
    ("targets", "Targets"),
    ("is involved in", "Is_Involved_In"),
    ("indicates", "Indicates"),
    ("modulates", "Modulates"),
];

/// Resolve a human-readable relation phrase into its canonical
/// relationship type name.
///
/// Phrases outside [`RELATION_MAP`] yield
/// [`AdapterError::UnknownRelation`]; export documents are produced by a
/// fixed upstream vocabulary, so an unmapped phrase means the vocabulary
/// has drifted and the load must not proceed silently.
pub fn resolve_relation(phrase: &str) -> Result<&'static str> {
    RELATION_MAP
        .iter()
        .find(|(raw, _)| *raw == phrase)
        .map(|(_, canonical)| *canonical)
        .ok_or_else(|| AdapterError::UnknownRelation {
            label: phrase.to_string(),
        })
}
