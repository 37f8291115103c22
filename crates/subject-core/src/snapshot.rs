// Subject - Tokenized sentence fixtures for validation test suites
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

//! Serde snapshot form of a [`TestSubject`].
//!
//! A snapshot records the seed and, optionally, the tokens it splits into:
//!
//! ```json
//! { "seed": "a  b", "tokens": ["a", "", "b"] }
//! ```
//!
//! Decoding always re-derives tokens from the seed. A token list, when
//! present, is only checked against it.
//!
//! Tests in this module run with: cargo test -p subject-core --features serde

use crate::error::{Result, SubjectError};
use crate::subject::TestSubject;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Serialized representation of a [`TestSubject`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSnapshot {
    /// Seed sentence.
    pub seed: String,
    /// Tokens of `seed`. Optional when decoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,
}

impl From<&TestSubject> for SubjectSnapshot {
    fn from(subject: &TestSubject) -> Self {
        Self {
            seed: subject.seed(),
            tokens: Some(subject.string_array().to_vec()),
        }
    }
}

impl TryFrom<SubjectSnapshot> for TestSubject {
    type Error = SubjectError;

    fn try_from(snapshot: SubjectSnapshot) -> Result<Self> {
        let subject = TestSubject::from_seed(&snapshot.seed);
        if let Some(found) = snapshot.tokens {
            if found.as_slice() != subject.string_array() {
                warn!(seed = %snapshot.seed, "snapshot tokens disagree with seed");
                return Err(SubjectError::Inconsistent {
                    expected: subject.string_array().to_vec(),
                    seed: snapshot.seed,
                    found,
                });
            }
        }
        Ok(subject)
    }
}

impl Serialize for TestSubject {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        SubjectSnapshot::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TestSubject {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let snapshot = SubjectSnapshot::deserialize(deserializer)?;
        TestSubject::try_from(snapshot).map_err(serde::de::Error::custom)
    }
}

/// Serialize a fixture to compact JSON.
pub fn to_json(subject: &TestSubject) -> Result<String> {
    serde_json::to_string(subject).map_err(|e| SubjectError::snapshot(e.to_string()))
}

/// Serialize a fixture to indented JSON.
pub fn to_json_pretty(subject: &TestSubject) -> Result<String> {
    serde_json::to_string_pretty(subject).map_err(|e| SubjectError::snapshot(e.to_string()))
}

/// Decode a fixture from JSON.
///
/// # Errors
///
/// [`SubjectError::Snapshot`] for malformed JSON or a missing seed,
/// [`SubjectError::Inconsistent`] when the token list disagrees with the seed.
pub fn from_json(json: &str) -> Result<TestSubject> {
    debug!(bytes = json.len(), "decoding subject snapshot");
    let snapshot: SubjectSnapshot =
        serde_json::from_str(json).map_err(|e| SubjectError::snapshot(e.to_string()))?;
    TestSubject::try_from(snapshot)
}
