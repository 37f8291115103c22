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

//! Immutable tokenized sentence fixture.
//!
//! `subject-core` provides [`TestSubject`], a small value object used as test
//! data by validation suites. It holds a sentence split on the space
//! character and exposes it as a slice, an iterator and a self-keyed map,
//! plus two constant optional strings (one absent, one present).
//!
//! # Quick Start
//!
//! ```rust
//! use subject_core::TestSubject;
//!
//! let subject = TestSubject::new();
//! assert_eq!(subject.string_array()[0], "logic");
//! assert_eq!(subject.string_iterable().count(), 13);
//! assert_eq!(subject.string_map().len(), 10);
//! assert_eq!(subject.null_string(), None);
//! assert_eq!(subject.not_null_string(), Some("bla"));
//!
//! let custom = TestSubject::from_seed("a  b");
//! assert_eq!(custom.string_array(), ["a", "", "b"]);
//! ```
//!
//! # Features
//!
//! - `serde`: snapshot serialization through `snapshot` (JSON via `serde_json`).
//!
//! Snapshot tests only build with the feature enabled:
//! `cargo test -p subject-core --features serde`.

/// Error types.
pub mod error;
/// Space tokenization rule.
pub mod tokenize;
/// The `TestSubject` fixture.
pub mod subject;

/// Serde snapshot form of a fixture.
#[cfg(feature = "serde")]
pub mod snapshot;

pub use error::{Result, SubjectError};
pub use subject::{TestSubject, Tokens, DEFAULT_SEED, NOT_NULL_VALUE};
pub use tokenize::{join_tokens, tokenize, SEPARATOR};

#[cfg(feature = "serde")]
pub use snapshot::{from_json, to_json, to_json_pretty, SubjectSnapshot};
