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

//! Error types for subject snapshots.
//!
//! Building a [`TestSubject`](crate::TestSubject) and reading it never
//! fails. Errors only arise when decoding a serialized snapshot.

use thiserror::Error;

/// Errors raised while decoding a fixture snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubjectError {
    /// The snapshot text could not be decoded.
    #[error("invalid snapshot: {message}")]
    Snapshot {
        /// Decoder message.
        message: String,
    },

    /// The snapshot's token list disagrees with its seed.
    #[error("snapshot tokens do not match seed {seed:?}: expected {expected:?}, found {found:?}")]
    Inconsistent {
        /// Seed carried by the snapshot.
        seed: String,
        /// Tokens derived from the seed.
        expected: Vec<String>,
        /// Tokens carried by the snapshot.
        found: Vec<String>,
    },
}

impl SubjectError {
    /// Create a snapshot decoding error.
    pub fn snapshot(message: impl Into<String>) -> Self {
        Self::Snapshot {
            message: message.into(),
        }
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, SubjectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_display() {
        let err = SubjectError::snapshot("expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "invalid snapshot: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_inconsistent_display() {
        let err = SubjectError::Inconsistent {
            seed: "a b".to_string(),
            expected: vec!["a".to_string(), "b".to_string()],
            found: vec!["a".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("\"a b\""));
        assert!(msg.contains("[\"a\", \"b\"]"));
        assert!(msg.contains("found [\"a\"]"));
    }
}
