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

//! Shared sentence fixtures and utilities for `TestSubject` consumers.
//!
//! This crate provides canonical seeds, a builder, and counting helpers so
//! validation suites do not each re-invent their own test sentences.
//!
//! # Features
//!
//! - **Pre-built Fixtures**: one named constructor per tokenization edge case
//! - **Builder Pattern**: fluent API for composing seeds token by token
//! - **Scenarios**: expected tokens and key counts for every named fixture
//! - **Utilities**: counting functions for consumer assertions
//!
//! # Quick Start
//!
//! ```rust
//! use subject_test::fixtures;
//!
//! let subject = fixtures::default_sentence();
//! let subject = fixtures::double_space();
//! let subject = fixtures::by_name("duplicates").unwrap();
//!
//! use subject_test::fixtures::builders::SubjectBuilder;
//!
//! let subject = SubjectBuilder::new().word("a").empty().word("b").build();
//! assert_eq!(subject.string_array(), ["a", "", "b"]);
//!
//! use subject_test::count_tokens_longer_than;
//!
//! // "imagination" and "everywhere"
//! assert_eq!(count_tokens_longer_than(&fixtures::default_sentence(), 6), 2);
//! ```

use subject_core::TestSubject;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> TestSubject)>;

/// Returns all fixtures as (name, seed) pairs.
pub fn fixtures_as_seeds() -> Vec<(&'static str, String)> {
    fixtures::all()
        .into_iter()
        .map(|(name, fixture_fn)| (name, fixture_fn().seed()))
        .collect()
}

/// Canonical sentence fixtures.
pub mod fixtures;

/// Fixture counting utilities.
pub mod counts;

/// Error types for fixture lookup.
pub mod error;

pub use fixtures::*;

pub use counts::{
    count_distinct, count_duplicate_tokens, count_empty_tokens, count_tokens,
    count_tokens_longer_than,
};
pub use error::FixtureError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fixtures_round_trip_seed() {
        for (name, fixture_fn) in fixtures::all() {
            let subject = fixture_fn();
            assert_eq!(
                TestSubject::from_seed(subject.seed()),
                subject,
                "Fixture {} should rebuild from its seed",
                name
            );
        }
    }

    #[test]
    fn test_fixture_names_unique() {
        let mut names: Vec<&str> = fixtures::all().into_iter().map(|(n, _)| n).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_fixtures_as_seeds() {
        let seeds = fixtures_as_seeds();
        assert_eq!(seeds.len(), fixtures::all().len());
        let default = seeds.iter().find(|(n, _)| *n == "default_sentence").unwrap();
        assert_eq!(default.1, subject_core::DEFAULT_SEED);
    }

    #[test]
    fn test_default_sentence_counts() {
        let subject = fixtures::default_sentence();
        assert_eq!(count_tokens(&subject), 13);
        assert_eq!(count_distinct(&subject), 10);
        assert_eq!(count_duplicate_tokens(&subject), 3);
        assert_eq!(count_tokens_longer_than(&subject, 6), 2);
    }
}
