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

//! Builder pattern for creating customizable sentence fixtures.
//!
//! This module provides a fluent builder that composes a seed token by
//! token, so tests can spell out empty tokens explicitly.

use subject_core::{join_tokens, TestSubject};

/// Builder for creating customizable `TestSubject` fixtures.
///
/// # Examples
///
/// ```
/// use subject_test::fixtures::builders::SubjectBuilder;
///
/// let subject = SubjectBuilder::new()
///     .empty()
///     .word("lead")
///     .words(["x", "x"])
///     .build();
///
/// assert_eq!(subject.string_array(), ["", "lead", "x", "x"]);
/// assert_eq!(subject.string_map().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubjectBuilder {
    tokens: Vec<String>,
}

impl SubjectBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Appends one token.
    ///
    /// A word containing spaces splits into several tokens on `build`.
    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.tokens.push(word.into());
        self
    }

    /// Appends several tokens.
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokens.extend(words.into_iter().map(Into::into));
        self
    }

    /// Appends an empty token.
    pub fn empty(self) -> Self {
        self.word(String::new())
    }

    /// Appends raw text to the last token with no separator.
    pub fn raw(mut self, text: &str) -> Self {
        match self.tokens.last_mut() {
            Some(last) => last.push_str(text),
            None => self.tokens.push(text.to_string()),
        }
        self
    }

    /// Returns the seed built so far.
    pub fn seed(&self) -> String {
        join_tokens(&self.tokens)
    }

    /// Builds the `TestSubject`.
    ///
    /// With no tokens appended this is the empty seed, which has one
    /// empty token.
    pub fn build(self) -> TestSubject {
        TestSubject::from_seed(self.seed())
    }
}
