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

//! The `TestSubject` fixture.
//!
//! A `TestSubject` is built once from a seed sentence and never changes
//! afterwards. Every accessor is derived from the same token sequence, so
//! repeated calls always agree with each other.

use crate::tokenize::{join_tokens, tokenize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;
use tracing::trace;

/// Seed used by [`TestSubject::new`].
pub const DEFAULT_SEED: &str = "logic will get you from A to Z imagination will get you everywhere";

/// Value returned by [`TestSubject::not_null_string`].
pub const NOT_NULL_VALUE: &str = "bla";

/// Immutable sentence fixture.
///
/// # Examples
///
/// ```
/// use subject_core::TestSubject;
///
/// let subject = TestSubject::from_seed("x x x");
/// assert_eq!(subject.string_array(), ["x", "x", "x"]);
/// assert_eq!(subject.string_map().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestSubject {
    tokens: Vec<String>,
}

impl Default for TestSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSubject {
    /// Creates a fixture from [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }

    /// Creates a fixture from an arbitrary seed. Any string is accepted.
    pub fn from_seed(seed: impl AsRef<str>) -> Self {
        let tokens = tokenize(seed.as_ref());
        trace!(tokens = tokens.len(), "constructed test subject");
        Self { tokens }
    }

    /// Tokens in split order.
    pub fn string_array(&self) -> &[String] {
        &self.tokens
    }

    /// Iterator over the tokens, in the same order as [`string_array`].
    ///
    /// The iterator is `Clone`, so it can be traversed more than once.
    ///
    /// [`string_array`]: TestSubject::string_array
    pub fn string_iterable(&self) -> Tokens<'_> {
        Tokens {
            inner: self.tokens.iter(),
        }
    }

    /// Maps every distinct token to itself.
    ///
    /// When a token occurs more than once the first occurrence is kept.
    pub fn string_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for token in &self.tokens {
            map.entry(token.clone()).or_insert_with(|| token.clone());
        }
        map
    }

    /// Always absent.
    pub fn null_string(&self) -> Option<&'static str> {
        None
    }

    /// Always present, with the value [`NOT_NULL_VALUE`].
    pub fn not_null_string(&self) -> Option<&'static str> {
        Some(NOT_NULL_VALUE)
    }

    /// Reconstructs the seed this fixture was built from.
    pub fn seed(&self) -> String {
        join_tokens(&self.tokens)
    }

    /// Number of tokens, duplicates and empty tokens included.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of distinct tokens.
    pub fn distinct_count(&self) -> usize {
        self.string_map().len()
    }
}

impl From<&str> for TestSubject {
    fn from(seed: &str) -> Self {
        Self::from_seed(seed)
    }
}

impl From<String> for TestSubject {
    fn from(seed: String) -> Self {
        Self::from_seed(seed)
    }
}

impl FromStr for TestSubject {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_seed(s))
    }
}

impl fmt::Display for TestSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.seed())
    }
}

impl<'a> IntoIterator for &'a TestSubject {
    type Item = &'a str;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.string_iterable()
    }
}

/// Borrowing iterator returned by [`TestSubject::string_iterable`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    inner: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Tokens<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Tokens<'_> {}

impl FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_tokens() -> Vec<&'static str> {
        vec![
            "logic",
            "will",
            "get",
            "you",
            "from",
            "A",
            "to",
            "Z",
            "imagination",
            "will",
            "get",
            "you",
            "everywhere",
        ]
    }

    // ==================== Construction tests ====================

    #[test]
    fn test_default_matches_new() {
        assert_eq!(TestSubject::default(), TestSubject::new());
    }

    #[test]
    fn test_default_tokens() {
        let subject = TestSubject::new();
        assert_eq!(subject.string_array(), default_tokens().as_slice());
    }

    #[test]
    fn test_from_conversions_agree() {
        let a = TestSubject::from("a  b");
        let b = TestSubject::from(String::from("a  b"));
        let c: TestSubject = "a  b".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    // ==================== Accessor tests ====================

    #[test]
    fn test_iterable_matches_array() {
        let subject = TestSubject::new();
        let collected: Vec<&str> = subject.string_iterable().collect();
        assert_eq!(collected, default_tokens());
    }

    #[test]
    fn test_iterable_multi_pass() {
        let subject = TestSubject::from_seed("a b c");
        let iter = subject.string_iterable();
        let first: Vec<&str> = iter.clone().collect();
        let second: Vec<&str> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iterable_exact_size_and_reverse() {
        let subject = TestSubject::from_seed("a b c");
        assert_eq!(subject.string_iterable().len(), 3);
        let reversed: Vec<&str> = subject.string_iterable().rev().collect();
        assert_eq!(reversed, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_into_iterator_for_reference() {
        let subject = TestSubject::from_seed("p q");
        let mut seen = Vec::new();
        for token in &subject {
            seen.push(token);
        }
        assert_eq!(seen, vec!["p", "q"]);
    }

    #[test]
    fn test_map_is_self_keyed() {
        let map = TestSubject::new().string_map();
        assert_eq!(map.len(), 10);
        for (key, value) in &map {
            assert_eq!(key, value);
        }
    }

    #[test]
    fn test_map_collapses_duplicates() {
        let map = TestSubject::from_seed("x x x").string_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("x").map(String::as_str), Some("x"));
    }

    #[test]
    fn test_map_keeps_empty_key() {
        let map = TestSubject::from_seed("").string_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("").map(String::as_str), Some(""));
    }

    #[test]
    fn test_optional_strings() {
        let subject = TestSubject::from_seed("");
        assert_eq!(subject.null_string(), None);
        assert_eq!(subject.not_null_string(), Some("bla"));
        assert_ne!(subject.not_null_string(), Some(""));
    }

    #[test]
    fn test_repeated_calls_are_equal() {
        let subject = TestSubject::from_seed("one two one");
        assert_eq!(subject.string_array(), subject.string_array());
        assert_eq!(subject.string_map(), subject.string_map());
        assert_eq!(
            subject.string_iterable().collect::<Vec<_>>(),
            subject.string_iterable().collect::<Vec<_>>()
        );
    }

    // ==================== Seed and counts ====================

    #[test]
    fn test_seed_round_trip() {
        for seed in ["", "  ", DEFAULT_SEED, " a  b ", "tab\tsep"] {
            assert_eq!(TestSubject::from_seed(seed).seed(), seed);
        }
    }

    #[test]
    fn test_display_prints_seed() {
        let subject = TestSubject::from_seed("a  b");
        assert_eq!(subject.to_string(), "a  b");
    }

    #[test]
    fn test_counts() {
        let subject = TestSubject::new();
        assert_eq!(subject.token_count(), 13);
        assert_eq!(subject.distinct_count(), 10);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TestSubject>();
        assert_send_sync::<Tokens<'static>>();
    }
}
